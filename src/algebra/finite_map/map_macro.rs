/// Allows easily creating [`OrdFiniteMap`](crate::algebra::OrdFiniteMap)s.
///
/// Entries may repeat keys or carry zero values; the result is
/// consolidated.
#[macro_export]
macro_rules! finite_map {
    // Create an empty map
    () => {
        <$crate::algebra::OrdFiniteMap<_, _> as ::std::default::Default>::default()
    };

    // Create a map from elements
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut builder = $crate::layers::UnorderedLeafBuilder::with_capacity(
            $crate::count_elements!($($key),+),
        );

        $( builder.push_tuple(($key, $value)); )+

        let map: $crate::algebra::OrdFiniteMap<_, _> = builder.done();
        map
    }};
}

/// Allows easily creating [`ConvolutionAlgebra`](crate::algebra::ConvolutionAlgebra)
/// elements from `key => coefficient` pairs.  The combination rule is
/// taken from the expected type.
#[macro_export]
macro_rules! convolution {
    () => {
        $crate::algebra::ConvolutionAlgebra::from_map($crate::finite_map! {})
    };

    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::algebra::ConvolutionAlgebra::from_map($crate::finite_map! { $($key => $value),+ })
    };
}

/// Support macro for counting the number of map elements
#[macro_export]
#[doc(hidden)]
macro_rules! count_elements {
    (@replace $_:expr) => {
        ()
    };

    ($($_:expr),+) => {
        <[()]>::len(&[$($crate::count_elements!(@replace $_),)+])
    };
}
