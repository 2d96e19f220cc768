//! Ordering of versions.
//!
//! [`Ord::cmp`] is the only primitive. Equality and the fallible operators
//! are expressed in terms of it, and hashing covers the same fields.

use std::{
    borrow::Cow,
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use crate::{grammar::ParseError, Version};

/// Conversion applied to the right-hand side of the fallible comparisons.
///
/// Already parsed versions are borrowed as they are, while strings go
/// through [`Version::parse`] and propagate its error.
pub trait IntoVersion<'r> {
    fn into_version(self) -> Result<Cow<'r, Version>, ParseError>;
}

impl<'r> IntoVersion<'r> for &'r Version {
    fn into_version(self) -> Result<Cow<'r, Version>, ParseError> {
        Ok(Cow::Borrowed(self))
    }
}

impl IntoVersion<'static> for Version {
    fn into_version(self) -> Result<Cow<'static, Version>, ParseError> {
        Ok(Cow::Owned(self))
    }
}

impl IntoVersion<'static> for &str {
    fn into_version(self) -> Result<Cow<'static, Version>, ParseError> {
        Version::parse(self).map(Cow::Owned)
    }
}

impl IntoVersion<'static> for &String {
    fn into_version(self) -> Result<Cow<'static, Version>, ParseError> {
        self.as_str().into_version()
    }
}

impl IntoVersion<'static> for String {
    fn into_version(self) -> Result<Cow<'static, Version>, ParseError> {
        self.as_str().into_version()
    }
}

impl Version {
    pub fn try_cmp<'r, V>(&self, other: V) -> Result<Ordering, ParseError>
    where
        V: IntoVersion<'r>,
    {
        other.into_version().map(|other| self.cmp(&other))
    }

    pub fn try_eq<'r, V>(&self, other: V) -> Result<bool, ParseError>
    where
        V: IntoVersion<'r>,
    {
        self.try_cmp_with(other, Ordering::is_eq)
    }

    pub fn try_ne<'r, V>(&self, other: V) -> Result<bool, ParseError>
    where
        V: IntoVersion<'r>,
    {
        self.try_cmp_with(other, Ordering::is_ne)
    }

    pub fn try_lt<'r, V>(&self, other: V) -> Result<bool, ParseError>
    where
        V: IntoVersion<'r>,
    {
        self.try_cmp_with(other, Ordering::is_lt)
    }

    pub fn try_le<'r, V>(&self, other: V) -> Result<bool, ParseError>
    where
        V: IntoVersion<'r>,
    {
        self.try_cmp_with(other, Ordering::is_le)
    }

    pub fn try_gt<'r, V>(&self, other: V) -> Result<bool, ParseError>
    where
        V: IntoVersion<'r>,
    {
        self.try_cmp_with(other, Ordering::is_gt)
    }

    pub fn try_ge<'r, V>(&self, other: V) -> Result<bool, ParseError>
    where
        V: IntoVersion<'r>,
    {
        self.try_cmp_with(other, Ordering::is_ge)
    }

    fn try_cmp_with<'r, V>(
        &self,
        other: V,
        predicate: fn(Ordering) -> bool,
    ) -> Result<bool, ParseError>
    where
        V: IntoVersion<'r>,
    {
        self.try_cmp(other).map(predicate)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.core()
            .cmp(&other.core())
            .then_with(|| self.prerelease.cmp(&other.prerelease))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.core().hash(state);

        self.prerelease.hash(state);
    }
}
