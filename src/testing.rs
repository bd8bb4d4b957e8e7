//! Helpers for testing code that produces `Validated` values
//!
//! The assertion macros print the unexpected side of a `Validated` when they
//! fail, which reads better in test output than `assert!(v.is_valid())`.
//! With the `proptest` feature enabled, `NonEmptyVec` and `Validated` also
//! implement `Arbitrary`.
//!
//! # Examples
//!
//! ```rust
//! use validated::{assert_invalid, assert_messages, assert_valid, Validated};
//!
//! assert_valid!(Validated::valid(35));
//! assert_invalid!(Validated::<i32>::invalid("negative"));
//! assert_messages!(Validated::<i32>::invalid("negative"), ["negative"]);
//! ```

/// Assert that a validation is `Valid`, optionally comparing its value.
///
/// ```rust
/// use validated::{assert_valid, Validated};
///
/// assert_valid!(Validated::valid(1));
/// assert_valid!(Validated::valid(1), 1);
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($validated:expr) => {
        match $validated {
            $crate::Validated::Valid(_) => {}
            $crate::Validated::Invalid(messages) => {
                panic!("Expected Valid, got Invalid: {:?}", messages);
            }
        }
    };
    ($validated:expr, $expected:expr) => {
        match $validated {
            $crate::Validated::Valid(value) => assert_eq!(value, $expected),
            $crate::Validated::Invalid(messages) => {
                panic!("Expected Valid, got Invalid: {:?}", messages);
            }
        }
    };
}

/// Assert that a validation is `Invalid`.
#[macro_export]
macro_rules! assert_invalid {
    ($validated:expr) => {
        match $validated {
            $crate::Validated::Invalid(_) => {}
            $crate::Validated::Valid(value) => {
                panic!("Expected Invalid, got Valid: {:?}", value);
            }
        }
    };
}

/// Assert that a validation is `Invalid` with exactly these messages, in order.
///
/// ```rust
/// use validated::{assert_messages, accum, Validated};
///
/// let v = accum(Validated::<u8>::invalid("E1"), Validated::<u8>::invalid("E2"), |a, b| a + b);
/// assert_messages!(v, ["E1", "E2"]);
/// ```
#[macro_export]
macro_rules! assert_messages {
    ($validated:expr, [$($expected:expr),+ $(,)?]) => {
        match $validated {
            $crate::Validated::Invalid(messages) => {
                let actual: Vec<String> = messages.into_vec();
                let expected: Vec<String> = vec![$(String::from($expected)),+];
                assert_eq!(actual, expected);
            }
            $crate::Validated::Valid(value) => {
                panic!("Expected Invalid with messages, got Valid: {:?}", value);
            }
        }
    };
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use proptest::prelude::*;

    use crate::{NonEmptyVec, Validated};

    impl<T> Arbitrary for NonEmptyVec<T>
    where
        T: Arbitrary + 'static,
    {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            (any::<T>(), prop::collection::vec(any::<T>(), 0..4))
                .prop_map(|(head, tail)| NonEmptyVec::new(head, tail))
                .boxed()
        }
    }

    impl<A> Arbitrary for Validated<A>
    where
        A: Arbitrary + 'static,
    {
        type Parameters = A::Parameters;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            prop_oneof![
                any_with::<A>(args).prop_map(Validated::valid),
                any::<NonEmptyVec<String>>().prop_map(Validated::invalid_many),
            ]
            .boxed()
        }
    }
}
