//!
//! # optional-matchers
//!
//! Test matchers for [`Optional`](::optional::Optional) values.
//!
//! The [matcher](crate::matcher) module defines the matcher capability: a predicate over an
//! observed value that either matches, does not match, or reports a [`MatchError`] because the
//! observed value has the wrong type. It also contains a few general purpose matchers and
//! [`expect`], which turns a matcher into an assertion.
//!
//! The [value](crate::value) module adapts that capability to optional values:
//!
//! - [`be_empty`] checks that an `Optional<T>` holds no value,
//! - [`have_value_equaling`] checks that it holds a value equal to a given one,
//! - [`have_value_matching`] checks that it holds a value accepted by another matcher.
//!
//! ```
//! use optional::Optional;
//! use optional_matchers::prelude::v1::*;
//!
//! expect(&Optional::<i32>::empty()).to(be_empty::<i32>());
//! expect(&Optional::of(1)).to(have_value_equaling(1));
//! expect(&Optional::of("s".to_string())).to(have_value_matching::<String, _>(have_len(1)));
//! ```

pub mod matcher;
#[doc(hidden)]
pub use matcher::*;

pub mod value;
#[doc(hidden)]
pub use value::*;

#[doc(hidden)]
pub mod prelude {
    pub mod v1 {
        pub use crate::matcher::*;
        pub use crate::value::*;
    }
    pub use v1::*;
}
