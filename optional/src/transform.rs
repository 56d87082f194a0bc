/*!
Transformations between optional values of different element types.

These are free functions rather than methods because the element type of the
result differs from the element type of the input.
*/

use crate::value::Optional;

/// Applies `f` to the held value and wraps the result.
///
/// An empty input produces an empty output of the target type without
/// calling `f`.
///
/// # Examples
///
/// ```
/// use optional::{transform, Optional};
///
/// let four = Optional::of(4);
/// assert_eq!(transform(four, |i| i.to_string()), Optional::of("4".to_string()));
/// assert_eq!(transform(Optional::<i32>::empty(), |i| i + 1), Optional::empty());
/// ```
pub fn transform<T, U, F>(opt: Optional<T>, f: F) -> Optional<U>
where
    F: FnOnce(T) -> U,
{
    match opt.into_option() {
        Some(value) => Optional::of(f(value)),
        None => Optional::empty(),
    }
}

/// Applies the fallible `f` to the held value and wraps the result.
///
/// An empty input produces `Ok` of an empty output without calling `f`.
/// An error from `f` is returned as is; no container is produced for it.
///
/// # Examples
///
/// ```
/// use optional::{transform_with_error, Optional};
///
/// let parsed = transform_with_error(Optional::of("42"), str::parse::<u8>);
/// assert_eq!(parsed, Ok(Optional::of(42)));
///
/// let parsed = transform_with_error(Optional::of("x"), str::parse::<u8>);
/// assert!(parsed.is_err());
/// ```
pub fn transform_with_error<T, U, E, F>(opt: Optional<T>, f: F) -> Result<Optional<U>, E>
where
    F: FnOnce(T) -> Result<U, E>,
{
    match opt.into_option() {
        Some(value) => f(value).map(Optional::of),
        None => Ok(Optional::empty()),
    }
}
