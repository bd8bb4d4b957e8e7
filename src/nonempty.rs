//! Non-empty vector used to hold validation messages
//!
//! `NonEmptyVec<T>` stores its first element separately from the rest, so a
//! value of this type always has at least one element. `Validated` uses
//! [`Messages`] (a `NonEmptyVec<String>`) as its failure payload, which makes
//! an `Invalid` without any message impossible to build.
//!
//! # Examples
//!
//! ```
//! use validated::NonEmptyVec;
//!
//! let messages = NonEmptyVec::new("too short", vec!["missing digit"]);
//! assert_eq!(messages.head(), &"too short");
//! assert_eq!(messages.len(), 2);
//!
//! assert!(NonEmptyVec::<&str>::from_vec(Vec::new()).is_none());
//! ```

use std::fmt;

use crate::Semigroup;

/// The failure payload of an `Invalid`: one or more human-readable messages.
pub type Messages = NonEmptyVec<String>;

/// A vector guaranteed to contain at least one element.
///
/// Elements keep their insertion order and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a vector from its first element and the remaining ones.
    ///
    /// ```
    /// use validated::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::new(1, vec![2, 3]);
    /// assert_eq!(nev.into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Create a vector holding exactly one element.
    pub fn singleton(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Convert a `Vec`, returning `None` when it is empty.
    ///
    /// ```
    /// use validated::NonEmptyVec;
    ///
    /// assert_eq!(NonEmptyVec::from_vec(vec![7]), Some(NonEmptyVec::singleton(7)));
    /// assert_eq!(NonEmptyVec::<i32>::from_vec(vec![]), None);
    /// ```
    pub fn from_vec(vec: Vec<T>) -> Option<Self> {
        let mut iter = vec.into_iter();
        let head = iter.next()?;
        Some(Self::new(head, iter.collect()))
    }

    /// First element; always present.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Every element after the first.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Last element; equal to `head()` for a singleton.
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of elements, never less than one.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`. Present to satisfy `clippy::len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Append an element at the end.
    pub fn push(&mut self, value: T) {
        self.tail.push(value);
    }

    /// Apply `f` to every element, keeping order.
    ///
    /// ```
    /// use validated::NonEmptyVec;
    ///
    /// let upper = NonEmptyVec::new("a", vec!["b"]).map(str::to_uppercase);
    /// assert_eq!(upper.into_vec(), vec!["A", "B"]);
    /// ```
    pub fn map<U, F>(self, mut f: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        let head = f(self.head);
        NonEmptyVec::new(head, self.tail.into_iter().map(f).collect())
    }

    /// Iterate over the elements by reference.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Flatten into a plain `Vec`, head first.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(nev: NonEmptyVec<T>) -> Self {
        nev.into_vec()
    }
}

// Concatenation, left operand first.
impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.tail.reserve(other.len());
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Chain<std::iter::Once<&'a T>, std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

impl<T> std::ops::Index<usize> for NonEmptyVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.head,
            n => &self.tail[n - 1],
        }
    }
}

impl<T: fmt::Display> fmt::Display for NonEmptyVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head)?;
        for item in &self.tail {
            write!(f, "; {}", item)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::NonEmptyVec;

    impl<T: Serialize> Serialize for NonEmptyVec<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for NonEmptyVec<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let items = Vec::<T>::deserialize(deserializer)?;
            NonEmptyVec::from_vec(items)
                .ok_or_else(|| serde::de::Error::custom("expected at least one element"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton() {
        let nev = NonEmptyVec::singleton("only");
        assert_eq!(nev.head(), &"only");
        assert_eq!(nev.last(), &"only");
        assert!(nev.tail().is_empty());
        assert_eq!(nev.len(), 1);
        assert!(!nev.is_empty());
    }

    #[test]
    fn test_from_vec_keeps_order() {
        let nev = NonEmptyVec::from_vec(vec!["a", "b", "a"]).unwrap();
        assert_eq!(nev.head(), &"a");
        assert_eq!(nev.tail(), &["b", "a"]);
        assert_eq!(nev.last(), &"a");
    }

    #[test]
    fn test_from_empty_vec() {
        assert!(NonEmptyVec::<String>::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn test_combine_concatenates_left_first() {
        let left = NonEmptyVec::new("E1", vec!["E2"]);
        let right = NonEmptyVec::singleton("E3");
        assert_eq!(left.combine(right).into_vec(), vec!["E1", "E2", "E3"]);
    }

    #[test]
    fn test_combine_keeps_duplicates() {
        let combined = NonEmptyVec::singleton("same").combine(NonEmptyVec::singleton("same"));
        assert_eq!(combined.len(), 2);
    }

    #[test]
    fn test_push_and_index() {
        let mut nev = NonEmptyVec::singleton(1);
        nev.push(2);
        assert_eq!(nev[0], 1);
        assert_eq!(nev[1], 2);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds() {
        let nev = NonEmptyVec::singleton(1);
        let _ = nev[1];
    }

    #[test]
    fn test_iterators_agree() {
        let nev = NonEmptyVec::new(1, vec![2, 3]);
        let borrowed: Vec<i32> = (&nev).into_iter().copied().collect();
        let owned: Vec<i32> = nev.into_iter().collect();
        assert_eq!(borrowed, owned);
    }

    #[test]
    fn test_display_joins_with_semicolons() {
        let nev = NonEmptyVec::new("first".to_string(), vec!["second".to_string()]);
        assert_eq!(nev.to_string(), "first; second");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_empty() {
        let nev: NonEmptyVec<String> = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(nev.len(), 2);
        assert_eq!(serde_json::to_string(&nev).unwrap(), r#"["a","b"]"#);

        let err = serde_json::from_str::<NonEmptyVec<String>>("[]").unwrap_err();
        assert!(err.to_string().contains("at least one element"));
    }
}
