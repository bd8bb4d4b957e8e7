//! The accumulating validation type
//!
//! `Validated<A>` holds either a validated value or one or more failure
//! messages. Unlike `Result`, combining two independent `Validated` values
//! keeps the messages of *both* when both fail, so a caller sees every
//! problem at once instead of only the first.
//!
//! Two ways of composing exist and they are deliberately different:
//!
//! - [`Validated::apply`] and the [`accum`](crate::accum) family combine
//!   independent validations and accumulate failures.
//! - [`Validated::and_then`] chains a validation that depends on a previous
//!   value; it stops at the first failure.
//!
//! # Examples
//!
//! ```
//! use validated::{accum, Validated};
//!
//! fn age(value: i32) -> Validated<i32> {
//!     Validated::validate(value, |v| (0..150).contains(v), "The age must be in range [0,150)")
//! }
//!
//! fn username(value: Option<&str>) -> Validated<String> {
//!     Validated::from_option(value.map(str::to_string), "username is missing")
//! }
//!
//! let user = accum(username(None), age(-5), |name, age| (name, age));
//! assert_eq!(
//!     user.fold(|messages| messages.into_vec(), |_| Vec::new()),
//!     vec!["username is missing", "The age must be in range [0,150)"],
//! );
//! ```

use std::fmt;

use crate::nonempty::Messages;
use crate::{NonEmptyVec, Semigroup};

/// Either a validated value or a non-empty, ordered list of failure messages.
///
/// The `Invalid` payload is a [`Messages`], so an `Invalid` with no message
/// cannot exist. Every combinator takes its inputs by value and builds a new
/// result; message lists are moved, never shared.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validated<A> {
    /// The value passed validation.
    Valid(A),
    /// Validation failed with these messages, in the order they were produced.
    Invalid(Messages),
}

impl<A> Validated<A> {
    /// Wrap a value that is already known to be valid.
    #[inline]
    pub fn valid(value: A) -> Self {
        Validated::Valid(value)
    }

    /// A failure carrying a single message.
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// let v = Validated::<u8>::invalid("out of range");
    /// assert_eq!(v.messages().map(|m| m.len()), Some(1));
    /// ```
    #[inline]
    pub fn invalid(message: impl Into<String>) -> Self {
        Validated::Invalid(NonEmptyVec::singleton(message.into()))
    }

    /// A failure carrying an existing list of messages.
    #[inline]
    pub fn invalid_many(messages: Messages) -> Self {
        Validated::Invalid(messages)
    }

    /// `Valid` when the option holds a value, otherwise a failure with `message`.
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// assert_eq!(Validated::from_option(Some(3), "missing"), Validated::valid(3));
    /// assert_eq!(Validated::<i32>::from_option(None, "missing"), Validated::invalid("missing"));
    /// ```
    pub fn from_option(opt: Option<A>, message: impl Into<String>) -> Self {
        match opt {
            Some(value) => Validated::Valid(value),
            None => Validated::invalid(message),
        }
    }

    /// Like [`from_option`](Self::from_option), building the message only when needed.
    pub fn from_option_with<F>(opt: Option<A>, message: F) -> Self
    where
        F: FnOnce() -> String,
    {
        match opt {
            Some(value) => Validated::Valid(value),
            None => Validated::invalid(message()),
        }
    }

    /// `Valid(value)` if `predicate` holds for it, otherwise a failure with `message`.
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// let in_range = |v: &i32| (0..150).contains(v);
    /// assert_eq!(Validated::validate(35, in_range, "bad age"), Validated::valid(35));
    /// assert!(Validated::validate(-5, in_range, "bad age").is_invalid());
    /// ```
    pub fn validate<P>(value: A, predicate: P, message: impl Into<String>) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        if predicate(&value) {
            Validated::Valid(value)
        } else {
            Validated::invalid(message)
        }
    }

    /// Convert a `Result`, using the error's `Display` output as the message.
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// let parsed = Validated::from_result("4x".parse::<i32>());
    /// assert!(parsed.is_invalid());
    /// ```
    pub fn from_result<E: fmt::Display>(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Validated::Valid(value),
            Err(error) => Validated::invalid(error.to_string()),
        }
    }

    /// Observe the state. Exactly one of the two functions is called.
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// let report = Validated::<i32>::invalid("negative")
    ///     .fold(|messages| format!("{} problem(s)", messages.len()), |v| format!("ok: {v}"));
    /// assert_eq!(report, "1 problem(s)");
    /// ```
    pub fn fold<T, I, V>(self, on_invalid: I, on_valid: V) -> T
    where
        I: FnOnce(Messages) -> T,
        V: FnOnce(A) -> T,
    {
        match self {
            Validated::Valid(value) => on_valid(value),
            Validated::Invalid(messages) => on_invalid(messages),
        }
    }

    /// The contained value, or `default` if validation failed.
    pub fn or_else(self, default: A) -> A {
        self.fold(|_| default, |value| value)
    }

    /// `true` for `Valid`.
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Validated::Valid(_))
    }

    /// `true` for `Invalid`.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Validated::Invalid(_))
    }

    /// Borrow the value, cloning the messages of a failure.
    pub fn as_ref(&self) -> Validated<&A> {
        match self {
            Validated::Valid(value) => Validated::Valid(value),
            Validated::Invalid(messages) => Validated::Invalid(messages.clone()),
        }
    }

    /// The value if valid, dropping any messages.
    pub fn valid_value(self) -> Option<A> {
        self.fold(|_| None, Some)
    }

    /// The messages if invalid.
    pub fn messages(&self) -> Option<&Messages> {
        match self {
            Validated::Valid(_) => None,
            Validated::Invalid(messages) => Some(messages),
        }
    }

    /// Transform the value of a `Valid`; an `Invalid` passes through untouched.
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// assert_eq!(Validated::valid(2).map(|x| x * 10), Validated::valid(20));
    /// assert_eq!(Validated::<i32>::invalid("E").map(|x| x * 10), Validated::invalid("E"));
    /// ```
    #[inline]
    pub fn map<B, F>(self, f: F) -> Validated<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Validated::Valid(value) => Validated::Valid(f(value)),
            Validated::Invalid(messages) => Validated::Invalid(messages),
        }
    }

    /// Run a validation that depends on this value.
    ///
    /// Sequential: on `Invalid`, `f` is not called and the existing messages
    /// are returned. Use [`apply`](Self::apply) or [`accum`](crate::accum) for
    /// independent validations whose failures should be collected together.
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// let parsed = Validated::from_result("235".parse::<i32>())
    ///     .and_then(|v| Validated::validate(v, |v| *v < 150, "too old"));
    /// assert_eq!(parsed, Validated::invalid("too old"));
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> Validated<B>
    where
        F: FnOnce(A) -> Validated<B>,
    {
        match self {
            Validated::Valid(value) => f(value),
            Validated::Invalid(messages) => Validated::Invalid(messages),
        }
    }

    /// Apply a validated function to this validated value.
    ///
    /// | `vf`      | `self`    | result                              |
    /// |-----------|-----------|-------------------------------------|
    /// | Valid(f)  | Valid(a)  | `Valid(f(a))`                       |
    /// | Valid     | Invalid   | `self`'s messages                   |
    /// | Invalid   | Valid     | `vf`'s messages                     |
    /// | Invalid   | Invalid   | `vf`'s messages, then `self`'s      |
    ///
    /// Putting the function's messages first means that
    /// `vb.apply(va.map(f))` reports `va` before `vb`.
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// let vf = Validated::<fn(i32) -> i32>::invalid("E1");
    /// let result = Validated::<i32>::invalid("E2").apply(vf);
    /// assert_eq!(result.fold(|m| m.into_vec(), |_| vec![]), vec!["E1", "E2"]);
    /// ```
    pub fn apply<B, F>(self, vf: Validated<F>) -> Validated<B>
    where
        F: FnOnce(A) -> B,
    {
        match (vf, self) {
            (Validated::Valid(f), Validated::Valid(value)) => Validated::Valid(f(value)),
            (Validated::Invalid(fn_messages), Validated::Invalid(messages)) => {
                Validated::Invalid(fn_messages.combine(messages))
            }
            (Validated::Invalid(messages), Validated::Valid(_))
            | (Validated::Valid(_), Validated::Invalid(messages)) => Validated::Invalid(messages),
        }
    }

    /// Pair two independent validations, accumulating failures.
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// let both = Validated::<u8>::invalid("a").and(Validated::<u8>::invalid("b"));
    /// assert_eq!(both.messages().map(|m| m.len()), Some(2));
    /// ```
    pub fn and<B>(self, other: Validated<B>) -> Validated<(A, B)> {
        other.apply(self.map(|a| move |b: B| (a, b)))
    }

    /// Rewrite every message, e.g. to prefix it with a field name.
    ///
    /// ```
    /// use validated::Validated;
    ///
    /// let v = Validated::<i32>::invalid("must be positive").map_messages(|m| format!("age: {m}"));
    /// assert_eq!(v, Validated::invalid("age: must be positive"));
    /// ```
    pub fn map_messages<F>(self, f: F) -> Self
    where
        F: FnMut(String) -> String,
    {
        match self {
            Validated::Valid(value) => Validated::Valid(value),
            Validated::Invalid(messages) => Validated::Invalid(messages.map(f)),
        }
    }

    /// Call `f` with the messages of an `Invalid`, returning `self` unchanged.
    pub fn inspect_invalid<F>(self, f: F) -> Self
    where
        F: FnOnce(&Messages),
    {
        if let Validated::Invalid(messages) = &self {
            f(messages);
        }
        self
    }

    /// Emit the messages of an `Invalid` as tracing events, returning `self` unchanged.
    ///
    /// Each message is logged at `debug` level, followed by a `warn` summary
    /// with the message count. A `Valid` logs nothing.
    #[cfg(feature = "tracing")]
    pub fn log_invalid(self, context: &str) -> Self {
        if let Validated::Invalid(messages) = &self {
            for message in messages {
                tracing::debug!(context = %context, message = %message, "validation message");
            }
            tracing::warn!(context = %context, count = messages.len(), "validation failed");
        }
        self
    }
}

impl<A> Validated<Validated<A>> {
    /// Remove one level of nesting.
    pub fn flatten(self) -> Validated<A> {
        self.and_then(|inner| inner)
    }
}

impl<A: fmt::Display> fmt::Display for Validated<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validated::Valid(value) => write!(f, "Valid({})", value),
            Validated::Invalid(messages) => write!(f, "Invalid({})", messages),
        }
    }
}
