/*!
The optional value container.
*/

use crate::error::{Result, ERR_EMPTY};

use std::any::type_name;
use std::fmt;

/// A value that may or may not be present.
///
/// `Optional` is a box holding zero or one value of type `T`. Its interface
/// is modeled on Java's `java.util.Optional` and C++'s `std::optional`: the
/// possible emptiness is explicit in every accessor, and there is no way to
/// replace the held value from the outside. Transformations produce a new
/// container, see [`transform`](crate::transform::transform).
///
/// The default value is always empty, regardless of `T`.
///
/// # Examples
///
/// ```
/// use optional::Optional;
///
/// let port = Optional::of(8080u16);
/// assert!(port.is_present());
/// assert_eq!(port.or_else(80), 8080);
///
/// let unset = Optional::<u16>::default();
/// assert!(!unset.is_present());
/// assert_eq!(unset.or_else(80), 80);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Optional<T>(Option<T>);

impl<T> Optional<T> {
    /// Returns an `Optional` that does not hold a value.
    #[inline]
    pub const fn empty() -> Self {
        Optional(None)
    }

    /// Returns an `Optional` holding `value`.
    #[inline]
    pub const fn of(value: T) -> Self {
        Optional(Some(value))
    }

    /// Returns `true` if there is a value stored, `false` if the `Optional` is empty.
    #[inline]
    pub const fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Returns `true` if the `Optional` is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the current value, if there is one.
    ///
    /// If the `Optional` is empty, then [`ERR_EMPTY`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use optional::{Optional, ERR_EMPTY};
    ///
    /// assert_eq!(Optional::of(9).get(), Ok(&9));
    /// assert_eq!(Optional::<i32>::empty().get(), Err(ERR_EMPTY));
    /// ```
    #[inline]
    pub fn get(&self) -> Result<&T> {
        self.0.as_ref().ok_or(ERR_EMPTY)
    }

    /// Returns the current value.
    ///
    /// Call sites use this when presence is already an invariant.
    ///
    /// # Panics
    ///
    /// Panics if the `Optional` is empty. With the `std` feature the panic
    /// payload is [`ERR_EMPTY`] itself, so it can be recovered with
    /// `std::panic::catch_unwind` and compared.
    pub fn must_get(&self) -> &T {
        match &self.0 {
            Some(value) => value,
            None => empty_panic(),
        }
    }

    /// Returns the stored value, if there is one. If the `Optional` is empty,
    /// then `fallback` is returned.
    #[inline]
    pub fn or_else(self, fallback: T) -> T {
        self.0.unwrap_or(fallback)
    }

    /// Returns the stored value, if there is one. If the `Optional` is empty,
    /// then `supplier` is called once and its result is returned.
    ///
    /// `supplier` is never called when a value is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use optional::Optional;
    ///
    /// let mut calls = 0;
    /// let value = Optional::of(3.5).or_else_get(|| {
    ///     calls += 1;
    ///     2.5
    /// });
    /// assert_eq!(value, 3.5);
    /// assert_eq!(calls, 0);
    /// ```
    #[inline]
    pub fn or_else_get<F: FnOnce() -> T>(self, supplier: F) -> T {
        self.0.unwrap_or_else(supplier)
    }

    /// Calls `action` with the held value. A no-op if the `Optional` is empty.
    #[inline]
    pub fn if_present<F: FnOnce(&T)>(&self, action: F) {
        if let Some(value) = &self.0 {
            action(value)
        }
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Optional<&T> {
        Optional(self.0.as_ref())
    }

    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        self.0.as_ref()
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

#[cfg(feature = "std")]
#[cold]
fn empty_panic() -> ! {
    std::panic::panic_any(ERR_EMPTY)
}

#[cfg(not(feature = "std"))]
#[cold]
fn empty_panic() -> ! {
    panic!("{}", ERR_EMPTY)
}

impl<T> Default for Optional<T> {
    #[inline(always)]
    fn default() -> Self {
        Optional::empty()
    }
}

// From implementations
impl<T> From<Option<T>> for Optional<T> {
    #[inline(always)]
    fn from(value: Option<T>) -> Self {
        Optional(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline(always)]
    fn from(value: Optional<T>) -> Self {
        value.0
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("None"),
        }
    }
}

/// Prints the container the way it would be written in source,
/// `Optional<i32>{42}` or `Optional<String>{}`.
///
/// Module paths are dropped from the element type, so an
/// `Optional<Vec<String>>` prints as such and not as
/// `Optional<alloc::vec::Vec<alloc::string::String>>`.
impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Optional<")?;
        write_short_type_name(f, type_name::<T>())?;
        f.write_str(">{")?;
        if let Some(value) = &self.0 {
            write!(f, "{:?}", value)?;
        }
        f.write_str("}")
    }
}

/// Writes `name` with every `a::b::C` path reduced to `C`.
fn write_short_type_name(f: &mut fmt::Formatter, name: &str) -> fmt::Result {
    let mut start = 0;
    for (idx, c) in name.char_indices() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            continue;
        }
        write_last_segment(f, &name[start..idx])?;
        let end = idx + c.len_utf8();
        f.write_str(&name[idx..end])?;
        start = end;
    }
    write_last_segment(f, &name[start..])
}

fn write_last_segment(f: &mut fmt::Formatter, path: &str) -> fmt::Result {
    f.write_str(path.rsplit("::").next().unwrap_or(path))
}
