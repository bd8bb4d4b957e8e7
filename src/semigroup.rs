//! Associative combination of failure payloads
//!
//! Accumulating validations need a way to merge the failures of two inputs.
//! `Semigroup` captures exactly that: an associative `combine`. The crate
//! implements it for `NonEmptyVec` (the `Invalid` payload), `Vec` and
//! `String`.
//!
//! # Laws
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use validated::Semigroup;
//!
//! let merged = vec!["name is empty"].combine(vec!["age is negative"]);
//! assert_eq!(merged, vec!["name is empty", "age is negative"]);
//! ```

/// A type with an associative binary operation.
///
/// `combine` takes both operands by value; the result is a new value and
/// neither input remains observable afterwards.
pub trait Semigroup: Sized {
    /// Merge `other` into `self`, `self` first.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}
