//!
//! # optional
//!
//! An _option type_: a value that is either empty or holds exactly one value.
//!
//! ## Introduction
//!
//! [`Optional<T>`](crate::value::Optional) plays the role a nullable pointer plays elsewhere, but
//! makes the possible emptiness explicit at every use site. It is created either empty
//! ([`Optional::empty`], also the [`Default`]) or holding a value ([`Optional::of`]). After that
//! it never changes from the outside; [`transform`] and [`transform_with_error`] derive new
//! containers of other element types.
//!
//! ```
//! use optional::prelude::v1::*;
//!
//! fn port(configured: Optional<u16>) -> u16 {
//!     configured.or_else(8080)
//! }
//!
//! assert_eq!(port(Optional::empty()), 8080);
//! assert_eq!(port(Optional::of(80)), 80);
//!
//! let doubled = transform(Optional::of(21), |v| v * 2);
//! assert_eq!(doubled.get(), Ok(&42));
//! ```
//!
//! Requesting the value of an empty container yields the comparable [`ERR_EMPTY`] sentinel.
//!
//! ## Features
//!
//! - `std` (default): links against the standard library. Without it the crate is `no_std`.
//! - `serde_derive` (default): implements `Serialize` and `Deserialize`. Empty values are written
//!   as null, present values exactly like the held value. See [serialize](crate::serialize).
//! - `json` (default): adds `marshal_json` / `unmarshal_json` helpers backed by `serde_json`.

// no-std-compat
#![cfg_attr(not(feature = "std"), no_std)]
extern crate no_std_compat as std;

pub mod error;
#[doc(hidden)]
pub use error::*;

pub mod value;
#[doc(hidden)]
pub use value::Optional;

pub mod transform;
#[doc(hidden)]
pub use transform::{transform, transform_with_error};

#[cfg(feature = "serde")]
pub mod serialize;

#[doc(hidden)]
pub mod prelude {
    pub mod v1 {
        pub use crate::error::*;
        pub use crate::transform::*;
        pub use crate::value::*;
    }
    pub use v1::*;
}
