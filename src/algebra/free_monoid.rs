//! Words over an alphabet, the free monoid.

use num::One;
use std::{
    fmt::{self, Display},
    ops::Mul,
};

/// A word over the alphabet `T`.  Multiplication is concatenation and the
/// unit is the empty word, so the monoid is not commutative as soon as
/// the alphabet has two letters.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FreeMonoid<T> {
    letters: Vec<T>,
}

impl<T> FreeMonoid<T> {
    pub fn new(letters: Vec<T>) -> Self {
        Self { letters }
    }

    /// One-letter word.
    pub fn letter(letter: T) -> Self {
        Self {
            letters: vec![letter],
        }
    }

    pub fn letters(&self) -> &[T] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl<T> FromIterator<T> for FreeMonoid<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FreeMonoid<char> {
    /// Word spelled by the characters of `word`.
    pub fn word(word: &str) -> Self {
        word.chars().collect()
    }
}

impl<T> Mul for FreeMonoid<T> {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self {
        self.letters.extend(rhs.letters);
        self
    }
}

impl<T> One for FreeMonoid<T> {
    fn one() -> Self {
        Self {
            letters: Vec::new(),
        }
    }
}

impl<T> Display for FreeMonoid<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.letters.is_empty() {
            return write!(f, "ε");
        }
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::FreeMonoid;
    use num::One;

    #[test]
    fn concatenation_is_not_commutative() {
        let a = FreeMonoid::word("a");
        let b = FreeMonoid::word("b");
        assert_eq!(a.clone() * b.clone(), FreeMonoid::word("ab"));
        assert_ne!(a.clone() * b.clone(), b * a.clone());
        assert_eq!(FreeMonoid::one() * a.clone(), a);
        assert_eq!(FreeMonoid::<char>::one().to_string(), "ε");
    }
}
