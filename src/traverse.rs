//! Accumulating over collections of validations
//!
//! - **`sequence`** turns an iterator of `Validated<T>` into a `Validated<Vec<T>>`.
//! - **`traverse`** maps a validating function over an iterator and sequences
//!   the results.
//!
//! Both visit every element and report every failure, in iteration order.
//!
//! # Examples
//!
//! ```
//! use validated::{traverse::traverse, Validated};
//!
//! fn digit(c: char) -> Validated<u32> {
//!     Validated::from_option_with(c.to_digit(10), || format!("'{c}' is not a digit"))
//! }
//!
//! assert_eq!(traverse("123".chars(), digit), Validated::valid(vec![1, 2, 3]));
//! assert_eq!(
//!     traverse("1a2b".chars(), digit).fold(|m| m.into_vec(), |_| vec![]),
//!     vec!["'a' is not a digit", "'b' is not a digit"],
//! );
//! ```

use crate::nonempty::Messages;
use crate::{Semigroup, Validated};

/// Collect a sequence of validations into one.
///
/// An empty input yields `Valid(vec![])`.
///
/// ```
/// use validated::{traverse::sequence, Validated};
///
/// let all = sequence(vec![Validated::valid(1), Validated::valid(2)]);
/// assert_eq!(all, Validated::valid(vec![1, 2]));
/// ```
pub fn sequence<T, I>(iter: I) -> Validated<Vec<T>>
where
    I: IntoIterator<Item = Validated<T>>,
{
    let mut values = Vec::new();
    let mut failures: Option<Messages> = None;

    for validated in iter {
        match validated {
            Validated::Valid(value) => values.push(value),
            Validated::Invalid(messages) => {
                failures = Some(match failures.take() {
                    Some(previous) => previous.combine(messages),
                    None => messages,
                });
            }
        }
    }

    match failures {
        Some(messages) => Validated::Invalid(messages),
        None => Validated::Valid(values),
    }
}

/// Validate every element with `f`, collecting the results.
pub fn traverse<T, U, F, I>(iter: I, f: F) -> Validated<Vec<U>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Validated<U>,
{
    sequence(iter.into_iter().map(f))
}

impl<T> FromIterator<Validated<T>> for Validated<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Validated<T>>>(iter: I) -> Self {
        sequence(iter)
    }
}
