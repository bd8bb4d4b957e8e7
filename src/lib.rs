//! # Validated
//!
//! An accumulating validation type for Rust.
//!
//! `Validated<A>` is either `Valid(A)` or `Invalid(messages)`, where the
//! messages are a non-empty, ordered list of strings. Independent validations
//! are combined with [`accum`] and friends, which keep *every* failure instead
//! of stopping at the first one; dependent steps are chained with
//! [`Validated::and_then`], which does stop.
//!
//! ## Quick Example
//!
//! ```rust
//! use validated::{accum, Validated};
//!
//! #[derive(Debug, PartialEq)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! fn name(raw: Option<&str>) -> Validated<String> {
//!     Validated::from_option(raw.map(str::to_string), "The username is missing")
//! }
//!
//! fn age(raw: i64) -> Validated<u32> {
//!     Validated::validate(raw, |v| (0..150).contains(v), "The age must be in range [0,150)")
//!         .map(|v| v as u32)
//! }
//!
//! let user = accum(name(None), age(235), |name, age| User { name, age });
//! match user {
//!     Validated::Valid(user) => println!("created {:?}", user),
//!     Validated::Invalid(messages) => {
//!         assert_eq!(messages.len(), 2);
//!         println!("rejected: {}", messages);
//!     }
//! }
//!
//! let user = accum(name(Some("Ola")), age(35), |name, age| User { name, age });
//! assert_eq!(user, Validated::valid(User { name: "Ola".into(), age: 35 }));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod accum;
pub mod error;
pub mod nonempty;
pub mod semigroup;
pub mod testing;
pub mod traverse;
pub mod validated;

// Re-exports
pub use accum::{accum, accum3, accum4, accum5, accum_bind, AccumulateAll};
pub use error::ValidationError;
pub use nonempty::{Messages, NonEmptyVec};
pub use semigroup::Semigroup;
pub use validated::Validated;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::accum::{accum, accum3, accum4, accum5, accum_bind, AccumulateAll};
    pub use crate::error::ValidationError;
    pub use crate::nonempty::{Messages, NonEmptyVec};
    pub use crate::semigroup::Semigroup;
    pub use crate::traverse::{sequence, traverse};
    pub use crate::validated::Validated;
}
