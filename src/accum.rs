//! Accumulating combinators over several independent validations
//!
//! Every input is inspected regardless of the others. The result is `Valid`
//! only when all inputs are `Valid`; otherwise it is an `Invalid` holding the
//! messages of every failing input, in argument order.
//!
//! # Examples
//!
//! ```
//! use validated::{accum3, Validated};
//!
//! let result = accum3(
//!     Validated::<&str>::invalid("email has no @"),
//!     Validated::valid("12345678"),
//!     Validated::<u8>::invalid("age is negative"),
//!     |email, phone, age| (email, phone, age),
//! );
//! assert_eq!(
//!     result.fold(|m| m.into_vec(), |_| vec![]),
//!     vec!["email has no @", "age is negative"],
//! );
//! ```

use crate::Validated;

/// Combine two validations with `f`, accumulating failures.
///
/// Defined as `vb.apply(va.map(curry(f)))`, so `va`'s messages come before
/// `vb`'s.
///
/// ```
/// use validated::{accum, Validated};
///
/// let sum = accum(Validated::valid(1), Validated::valid(2), |a, b| a + b);
/// assert_eq!(sum, Validated::valid(3));
/// ```
pub fn accum<A, B, T, F>(va: Validated<A>, vb: Validated<B>, f: F) -> Validated<T>
where
    F: FnOnce(A, B) -> T,
{
    vb.apply(va.map(move |a| move |b: B| f(a, b)))
}

/// Three-input form of [`accum`].
pub fn accum3<A, B, C, T, F>(
    va: Validated<A>,
    vb: Validated<B>,
    vc: Validated<C>,
    f: F,
) -> Validated<T>
where
    F: FnOnce(A, B, C) -> T,
{
    (va, vb, vc).accum_all().map(|(a, b, c)| f(a, b, c))
}

/// Four-input form of [`accum`].
pub fn accum4<A, B, C, D, T, F>(
    va: Validated<A>,
    vb: Validated<B>,
    vc: Validated<C>,
    vd: Validated<D>,
    f: F,
) -> Validated<T>
where
    F: FnOnce(A, B, C, D) -> T,
{
    (va, vb, vc, vd)
        .accum_all()
        .map(|(a, b, c, d)| f(a, b, c, d))
}

/// Five-input form of [`accum`].
pub fn accum5<A, B, C, D, E, T, F>(
    va: Validated<A>,
    vb: Validated<B>,
    vc: Validated<C>,
    vd: Validated<D>,
    ve: Validated<E>,
    f: F,
) -> Validated<T>
where
    F: FnOnce(A, B, C, D, E) -> T,
{
    (va, vb, vc, vd, ve)
        .accum_all()
        .map(|(a, b, c, d, e)| f(a, b, c, d, e))
}

/// Like [`accum`], for a combining function that can itself fail.
///
/// Input failures accumulate exactly as in `accum` and `f` is not called.
/// When both inputs are valid, the result of `f` is returned as-is.
///
/// ```
/// use validated::{accum_bind, Validated};
///
/// let range = accum_bind(Validated::valid(5), Validated::valid(1), |lo, hi| {
///     Validated::validate((lo, hi), |(lo, hi)| lo <= hi, "lower bound exceeds upper bound")
/// });
/// assert_eq!(range, Validated::invalid("lower bound exceeds upper bound"));
/// ```
pub fn accum_bind<A, B, T, F>(va: Validated<A>, vb: Validated<B>, f: F) -> Validated<T>
where
    F: FnOnce(A, B) -> Validated<T>,
{
    accum(va, vb, f).flatten()
}

/// Tuples of validations that can be combined into a validation of a tuple.
///
/// Implemented for tuples of two to five `Validated` values.
///
/// ```
/// use validated::{AccumulateAll, Validated};
///
/// let all = (Validated::valid(1), Validated::valid("a"), Validated::valid(true)).accum_all();
/// assert_eq!(all, Validated::valid((1, "a", true)));
/// ```
pub trait AccumulateAll {
    /// The tuple of values produced when every input is valid.
    type Output;

    /// Combine every validation, accumulating messages left to right.
    fn accum_all(self) -> Validated<Self::Output>;
}

macro_rules! impl_accumulate_all {
    ($A:ident, $B:ident) => {
        impl<$A, $B> AccumulateAll for (Validated<$A>, Validated<$B>) {
            type Output = ($A, $B);

            #[allow(non_snake_case)]
            fn accum_all(self) -> Validated<Self::Output> {
                let ($A, $B) = self;
                $A.and($B)
            }
        }
    };

    ($A:ident, $B:ident, $C:ident) => {
        impl<$A, $B, $C> AccumulateAll for (Validated<$A>, Validated<$B>, Validated<$C>) {
            type Output = ($A, $B, $C);

            #[allow(non_snake_case)]
            fn accum_all(self) -> Validated<Self::Output> {
                let ($A, $B, $C) = self;
                $A.and($B).and($C).map(|((a, b), c)| (a, b, c))
            }
        }
    };

    ($A:ident, $B:ident, $C:ident, $D:ident) => {
        impl<$A, $B, $C, $D> AccumulateAll
            for (Validated<$A>, Validated<$B>, Validated<$C>, Validated<$D>)
        {
            type Output = ($A, $B, $C, $D);

            #[allow(non_snake_case)]
            fn accum_all(self) -> Validated<Self::Output> {
                let ($A, $B, $C, $D) = self;
                $A.and($B)
                    .and($C)
                    .and($D)
                    .map(|(((a, b), c), d)| (a, b, c, d))
            }
        }
    };

    ($A:ident, $B:ident, $C:ident, $D:ident, $E:ident) => {
        impl<$A, $B, $C, $D, $E> AccumulateAll
            for (
                Validated<$A>,
                Validated<$B>,
                Validated<$C>,
                Validated<$D>,
                Validated<$E>,
            )
        {
            type Output = ($A, $B, $C, $D, $E);

            #[allow(non_snake_case)]
            fn accum_all(self) -> Validated<Self::Output> {
                let ($A, $B, $C, $D, $E) = self;
                $A.and($B)
                    .and($C)
                    .and($D)
                    .and($E)
                    .map(|((((a, b), c), d), e)| (a, b, c, d, e))
            }
        }
    };
}

impl_accumulate_all!(T1, T2);
impl_accumulate_all!(T1, T2, T3);
impl_accumulate_all!(T1, T2, T3, T4);
impl_accumulate_all!(T1, T2, T3, T4, T5);
