/*!
Matchers for [`Optional`] values.
*/

use std::any::{type_name, Any};
use std::fmt;
use std::marker::PhantomData;

use optional::Optional;

use crate::matcher::{
    and, equal, format_message, not, with_transform, MatchError, MatchResult, Matcher, Observed,
};

/// Checks whether an [`Optional<T>`] is empty.
pub struct EmptyMatcher<T> {
    phantom_data: PhantomData<fn() -> T>,
}

/// Asserts that the tested value is an empty [`Optional<T>`].
///
/// A tested value of any other type is reported as a
/// [`MatchError::TypeMismatch`]; the value itself is never inspected.
///
/// # Examples
///
/// ```
/// use optional::Optional;
/// use optional_matchers::prelude::v1::*;
///
/// expect(&Optional::<i32>::empty()).to(be_empty::<i32>());
/// expect(&Optional::of(1)).not_to(be_empty::<i32>());
/// ```
pub fn be_empty<T: Any>() -> EmptyMatcher<T> {
    EmptyMatcher {
        phantom_data: PhantomData,
    }
}

impl<T: Any> EmptyMatcher<T> {
    fn wrong_type_message(actual: &dyn Observed) -> String {
        format_message(
            actual,
            &format!(
                "to be an {}, got type {}",
                type_name::<Optional<T>>(),
                actual.type_name()
            ),
        )
    }
}

impl<T: Any> Matcher for EmptyMatcher<T> {
    fn matches(&self, actual: &dyn Observed) -> MatchResult {
        match actual.as_any().downcast_ref::<Optional<T>>() {
            Some(opt) => Ok(!opt.is_present()),
            None => Err(MatchError::TypeMismatch {
                context: "BeEmpty matcher",
                expected: type_name::<Optional<T>>(),
                actual: actual.type_name(),
            }),
        }
    }

    fn failure_message(&self, actual: &dyn Observed) -> String {
        if actual.as_any().is::<Optional<T>>() {
            format_message(actual, "not to hold a value")
        } else {
            Self::wrong_type_message(actual)
        }
    }

    fn negated_failure_message(&self, actual: &dyn Observed) -> String {
        if actual.as_any().is::<Optional<T>>() {
            format_message(actual, "to hold a value")
        } else {
            Self::wrong_type_message(actual)
        }
    }
}

/// Checks whether an [`Optional<T>`] holds a value that matches `matcher`.
///
/// The held value is handed to `matcher` by reference, so `T` need not be
/// `Clone`.
///
/// Be careful when negating this matcher. Negating it passes either when the
/// value is empty _or_ when the wrapped matcher fails:
///
/// ```
/// use optional::Optional;
/// use optional_matchers::prelude::v1::*;
///
/// // passes, although there is no string of any length
/// expect(&Optional::<String>::empty()).not_to(have_value_matching::<String, _>(have_len(3)));
/// ```
///
/// To check for an empty value use [`be_empty`]. To check that a value is
/// present but does not match, negate the wrapped matcher instead:
///
/// ```
/// use optional::Optional;
/// use optional_matchers::prelude::v1::*;
///
/// expect(&Optional::of("abcd".to_string()))
///     .to(have_value_matching::<String, _>(not(have_len(3))));
/// ```
pub fn have_value_matching<T, M>(matcher: M) -> impl Matcher
where
    T: Any + fmt::Debug,
    M: Matcher + 'static,
{
    let matchers: Vec<Box<dyn Matcher>> = vec![
        Box::new(not(be_empty::<T>())),
        Box::new(with_transform(Optional::<T>::get, matcher)),
    ];
    and(matchers)
}

/// Checks whether an [`Optional<T>`] holds a value equal to `expected`.
///
/// The same negation caveat as for [`have_value_matching`] applies; to assert
/// a present value different from `expected` write
/// `have_value_matching::<T, _>(not(equal(expected)))`.
///
/// # Examples
///
/// ```
/// use optional::Optional;
/// use optional_matchers::prelude::v1::*;
///
/// expect(&Optional::of(1)).to(have_value_equaling(1));
/// expect(&Optional::of(1)).to(have_value_matching::<i32, _>(not(equal(3))));
/// ```
pub fn have_value_equaling<T>(expected: T) -> impl Matcher
where
    T: Any + PartialEq + fmt::Debug,
{
    have_value_matching::<T, _>(equal(expected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(be_empty::<i32>().matches(&Optional::<i32>::empty()), Ok(true));
        assert_eq!(be_empty::<String>().matches(&Optional::<String>::empty()), Ok(true));
        assert_eq!(be_empty::<i32>().matches(&Optional::of(1)), Ok(false));
    }

    #[test]
    fn test_empty_messages() {
        let full = Optional::of(1);
        assert_eq!(
            be_empty::<i32>().failure_message(&full),
            "Expected\n    <optional::value::Optional<i32>>: Optional<i32>{1}\nnot to hold a value"
        );

        let empty = Optional::<i32>::empty();
        assert_eq!(
            not(be_empty::<i32>()).failure_message(&empty),
            "Expected\n    <optional::value::Optional<i32>>: Optional<i32>{}\nto hold a value"
        );
    }

    #[test]
    fn test_empty_wrong_type() {
        let err = be_empty::<i32>().matches(&1).unwrap_err();
        assert!(matches!(err, MatchError::TypeMismatch { actual: "i32", .. }));

        let err = be_empty::<i32>().matches(&Optional::of(1u8)).unwrap_err();
        assert!(matches!(err, MatchError::TypeMismatch { .. }));

        assert!(be_empty::<i32>()
            .failure_message(&1)
            .ends_with("to be an optional::value::Optional<i32>, got type i32"));
    }

    #[test]
    fn test_value_equaling() {
        assert_eq!(have_value_equaling(1).matches(&Optional::of(1)), Ok(true));
        assert_eq!(have_value_equaling(2).matches(&Optional::of(1)), Ok(false));
        assert_eq!(have_value_equaling(1).matches(&Optional::<i32>::empty()), Ok(false));
    }

    #[test]
    fn test_value_equaling_empty_message() {
        let empty = Optional::<i32>::empty();
        assert_eq!(
            have_value_equaling(1).failure_message(&empty),
            be_empty::<i32>().negated_failure_message(&empty)
        );
    }

    #[test]
    fn test_value_equaling_message() {
        assert_eq!(
            have_value_equaling(2).failure_message(&Optional::of(1)),
            "Expected\n    <i32>: 1\nto equal\n    <i32>: 2"
        );
    }

    #[derive(Debug, PartialEq)]
    struct Token(u32);

    #[test]
    fn test_value_equaling_without_clone() {
        assert_eq!(have_value_equaling(Token(1)).matches(&Optional::of(Token(1))), Ok(true));
        assert_eq!(have_value_equaling(Token(2)).matches(&Optional::of(Token(1))), Ok(false));
        assert_eq!(
            have_value_equaling(Token(1)).matches(&Optional::<Token>::empty()),
            Ok(false)
        );
        assert!(have_value_equaling(Token(2))
            .failure_message(&Optional::of(Token(1)))
            .ends_with("Token(1)\nto equal\n    <optional_matchers::value::tests::Token>: Token(2)"));
    }
}
