/*!
The matcher capability and the general purpose matchers built on it.

A [`Matcher`] is a predicate over an arbitrary observed value plus two
message formatters, one for a failed positive assertion and one for a failed
negated assertion. Matchers compose: [`Not`] flips one, [`And`] requires all
of a list, and [`WithTransform`] feeds a value borrowed from the observed one
to an inner matcher.
*/

use std::any::{type_name, Any};
use std::error;
use std::fmt;

use log::trace;

use optional::{Error, ErrorKind, ErrorOrigin};

/// A value a matcher can inspect: anything that can be downcast and printed.
pub trait Observed: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    fn type_name(&self) -> &'static str;
}

impl<T: Any + fmt::Debug> Observed for T {
    #[inline(always)]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline(always)]
    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

/// Error reported when a matcher cannot evaluate the observed value at all.
///
/// This is distinct from a match that simply fails: it means the assertion
/// was written against the wrong type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MatchError {
    /// The observed value does not have the type the matcher works on.
    TypeMismatch {
        context: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
    /// A transform could not produce a value from the observed one.
    Transform(Error),
}

impl MatchError {
    /// Returns the optional [`Error`] corresponding to this match error.
    pub fn as_error(&self) -> Error {
        match self {
            MatchError::TypeMismatch { .. } => Error(ErrorOrigin::Matcher, ErrorKind::TypeMismatch),
            MatchError::Transform(err) => *err,
        }
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchError::TypeMismatch {
                context,
                expected,
                actual,
            } => write!(
                f,
                "{} expects '{}' but we have '{}'",
                context, expected, actual
            ),
            MatchError::Transform(err) => write!(f, "transform failed: {}", err),
        }
    }
}

impl error::Error for MatchError {}

/// Specialized `Result` type for matchers.
pub type MatchResult = Result<bool, MatchError>;

/// An assertion predicate with failure diagnostics.
pub trait Matcher {
    fn matches(&self, actual: &dyn Observed) -> MatchResult;

    fn failure_message(&self, actual: &dyn Observed) -> String;

    fn negated_failure_message(&self, actual: &dyn Observed) -> String;
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn matches(&self, actual: &dyn Observed) -> MatchResult {
        (**self).matches(actual)
    }

    fn failure_message(&self, actual: &dyn Observed) -> String {
        (**self).failure_message(actual)
    }

    fn negated_failure_message(&self, actual: &dyn Observed) -> String {
        (**self).negated_failure_message(actual)
    }
}

const INDENT: &str = "    ";

fn describe(value: &dyn Observed) -> String {
    format!("{}<{}>: {:?}", INDENT, value.type_name(), value)
}

/// Formats a failure message as
///
/// ```text
/// Expected
///     <type>: value
/// message
/// ```
pub fn format_message(actual: &dyn Observed, message: &str) -> String {
    format!("Expected\n{}\n{}", describe(actual), message)
}

/// Like [`format_message`], with the expected value appended in the same layout.
pub fn format_message_with(actual: &dyn Observed, message: &str, expected: &dyn Observed) -> String {
    format!("{}\n{}", format_message(actual, message), describe(expected))
}

/// Checks the observed value for equality with an expected value of the same type.
pub struct Equal<T> {
    expected: T,
}

pub fn equal<T: PartialEq + fmt::Debug + 'static>(expected: T) -> Equal<T> {
    Equal { expected }
}

impl<T: PartialEq + fmt::Debug + 'static> Matcher for Equal<T> {
    fn matches(&self, actual: &dyn Observed) -> MatchResult {
        match actual.as_any().downcast_ref::<T>() {
            Some(actual) => Ok(*actual == self.expected),
            None => Err(MatchError::TypeMismatch {
                context: "Equal matcher",
                expected: type_name::<T>(),
                actual: actual.type_name(),
            }),
        }
    }

    fn failure_message(&self, actual: &dyn Observed) -> String {
        format_message_with(actual, "to equal", &self.expected)
    }

    fn negated_failure_message(&self, actual: &dyn Observed) -> String {
        format_message_with(actual, "not to equal", &self.expected)
    }
}

/// Checks the byte length of a `String` or `&'static str`.
pub struct HaveLen {
    count: usize,
}

pub fn have_len(count: usize) -> HaveLen {
    HaveLen { count }
}

impl HaveLen {
    fn length_of(actual: &dyn Observed) -> Result<usize, MatchError> {
        let any = actual.as_any();
        if let Some(s) = any.downcast_ref::<String>() {
            Ok(s.len())
        } else if let Some(s) = any.downcast_ref::<&'static str>() {
            Ok(s.len())
        } else {
            Err(MatchError::TypeMismatch {
                context: "HaveLen matcher",
                expected: "a string",
                actual: actual.type_name(),
            })
        }
    }
}

impl Matcher for HaveLen {
    fn matches(&self, actual: &dyn Observed) -> MatchResult {
        Self::length_of(actual).map(|len| len == self.count)
    }

    fn failure_message(&self, actual: &dyn Observed) -> String {
        format_message(actual, &format!("to have length {}", self.count))
    }

    fn negated_failure_message(&self, actual: &dyn Observed) -> String {
        format_message(actual, &format!("not to have length {}", self.count))
    }
}

/// Matches anything.
pub struct Ignore;

pub fn ignore() -> Ignore {
    Ignore
}

impl Matcher for Ignore {
    fn matches(&self, _actual: &dyn Observed) -> MatchResult {
        Ok(true)
    }

    fn failure_message(&self, actual: &dyn Observed) -> String {
        format_message(actual, "to be ignored")
    }

    fn negated_failure_message(&self, actual: &dyn Observed) -> String {
        format_message(actual, "not to be ignored")
    }
}

/// Inverts a matcher. Errors of the inner matcher are passed through.
pub struct Not<M> {
    matcher: M,
}

pub fn not<M: Matcher>(matcher: M) -> Not<M> {
    Not { matcher }
}

impl<M: Matcher> Matcher for Not<M> {
    fn matches(&self, actual: &dyn Observed) -> MatchResult {
        self.matcher.matches(actual).map(|success| !success)
    }

    fn failure_message(&self, actual: &dyn Observed) -> String {
        self.matcher.negated_failure_message(actual)
    }

    fn negated_failure_message(&self, actual: &dyn Observed) -> String {
        self.matcher.failure_message(actual)
    }
}

/// Succeeds if all of the given matchers succeed.
///
/// Matchers are evaluated in order and evaluation stops at the first one that
/// fails or errors, so later matchers may rely on the earlier ones.
pub struct And {
    matchers: Vec<Box<dyn Matcher>>,
}

pub fn and(matchers: Vec<Box<dyn Matcher>>) -> And {
    And { matchers }
}

impl And {
    fn first_failure(&self, actual: &dyn Observed) -> Option<&dyn Matcher> {
        self.matchers
            .iter()
            .find(|m| !matches!(m.matches(actual), Ok(true)))
            .map(|m| &**m)
    }
}

impl Matcher for And {
    fn matches(&self, actual: &dyn Observed) -> MatchResult {
        for matcher in self.matchers.iter() {
            if !matcher.matches(actual)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn failure_message(&self, actual: &dyn Observed) -> String {
        match self.first_failure(actual) {
            Some(matcher) => matcher.failure_message(actual),
            None => format_message(actual, "to fail one of the matchers"),
        }
    }

    fn negated_failure_message(&self, actual: &dyn Observed) -> String {
        format_message(actual, "not to satisfy all of the matchers")
    }
}

type TransformFn<A, B> = Box<dyn Fn(&A) -> Result<&B, Error>>;

/// Applies a transform to the observed value and matches the result.
///
/// The transform borrows from its input, so nothing is cloned on the way to
/// the inner matcher.
///
/// The observed value must have the transform's input type `A`; anything
/// else is reported as a [`MatchError::TypeMismatch`].
pub struct WithTransform<A, B, M> {
    transform: TransformFn<A, B>,
    matcher: M,
}

pub fn with_transform<A, B, F, M>(transform: F, matcher: M) -> WithTransform<A, B, M>
where
    A: Any,
    B: Any + fmt::Debug,
    F: Fn(&A) -> Result<&B, Error> + 'static,
    M: Matcher,
{
    WithTransform {
        transform: Box::new(transform),
        matcher,
    }
}

impl<A: Any, B: Any + fmt::Debug, M: Matcher> WithTransform<A, B, M> {
    fn transformed<'a>(&self, actual: &'a dyn Observed) -> Result<&'a B, MatchError> {
        let input = actual
            .as_any()
            .downcast_ref::<A>()
            .ok_or_else(|| MatchError::TypeMismatch {
                context: "Transform function",
                expected: type_name::<A>(),
                actual: actual.type_name(),
            })?;
        (self.transform)(input).map_err(MatchError::Transform)
    }
}

impl<A: Any, B: Any + fmt::Debug, M: Matcher> Matcher for WithTransform<A, B, M> {
    fn matches(&self, actual: &dyn Observed) -> MatchResult {
        let value = self.transformed(actual)?;
        self.matcher.matches(value)
    }

    fn failure_message(&self, actual: &dyn Observed) -> String {
        match self.transformed(actual) {
            Ok(value) => self.matcher.failure_message(value),
            Err(err) => format_message(actual, &err.to_string()),
        }
    }

    fn negated_failure_message(&self, actual: &dyn Observed) -> String {
        match self.transformed(actual) {
            Ok(value) => self.matcher.negated_failure_message(value),
            Err(err) => format_message(actual, &err.to_string()),
        }
    }
}

/// An assertion on one observed value.
pub struct Expectation<'a> {
    actual: &'a dyn Observed,
}

/// Starts an assertion on `actual`.
///
/// # Examples
///
/// ```
/// use optional_matchers::matcher::{equal, expect, not};
///
/// expect(&3).to(equal(3));
/// expect(&3).not_to(equal(4));
/// expect(&3).to(not(equal(4)));
/// ```
pub fn expect<T: Observed>(actual: &T) -> Expectation<'_> {
    Expectation { actual }
}

impl<'a> Expectation<'a> {
    /// Panics with the matcher's failure message unless it matches.
    pub fn to<M: Matcher>(&self, matcher: M) {
        match matcher.matches(self.actual) {
            Ok(true) => trace!("matched {:?}", self.actual),
            Ok(false) => panic!("{}", matcher.failure_message(self.actual)),
            Err(err) => panic!("{}", err),
        }
    }

    /// Panics with the matcher's negated failure message if it matches.
    pub fn not_to<M: Matcher>(&self, matcher: M) {
        match matcher.matches(self.actual) {
            Ok(false) => trace!("did not match {:?}", self.actual),
            Ok(true) => panic!("{}", matcher.negated_failure_message(self.actual)),
            Err(err) => panic!("{}", err),
        }
    }
}
