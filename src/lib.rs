//! Finite-support convolution algebras.
//!
//! The crate is built from three layers:
//!
//! * [`layers`]: sorted, consolidated vectors of `(key, value)` pairs.
//! * [`algebra`]: capability traits for coefficients, finite maps with
//!   point-wise operations, and [`ConvolutionAlgebra`]s whose product
//!   convolves keys through a monoid (the monoid algebra `R[G]`, the
//!   additive monoid algebra, and with it polynomials).  The
//!   [`lift`](algebra::convolution::lift) module provides the universal
//!   property of these algebras.
//! * [`arithmetic_function`]: the Dirichlet ring of functions `ℕ -> R`.
//!
//! ```
//! use convalg::{convolution, AddMonoidAlgebra};
//!
//! let f: AddMonoidAlgebra<u64, i64> = convolution! { 0 => 3, 1 => 2 };
//! let x = AddMonoidAlgebra::of(1);
//! assert_eq!(&f * &x, convolution! { 1 => 3, 2 => 2 });
//! ```

pub mod algebra;
pub mod arithmetic_function;
pub mod layers;

mod error;
mod test;

pub use crate::{
    algebra::{
        AddMonoidAlgebra, Algebra, ConvolutionAlgebra, FiniteMap, MonoidAlgebra, OrdFiniteMap,
    },
    arithmetic_function::ArithmeticFunction,
    error::{Error, Result},
};
