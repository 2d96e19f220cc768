use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    slice,
};

/// Single pre-release identifier.
///
/// Identifiers are non-empty runs of ASCII alphanumerics. Purely numeric
/// identifiers never carry a leading zero, unless they are exactly `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub struct Identifier(Box<str>);

impl Identifier {
    /// Tags that sort after any other identifier found at the same position.
    pub const HIGHEST_PRIORITY_TAGS: [&'static str; 2] = ["rc", "preview"];

    pub(crate) fn from_validated(identifier: &str) -> Self {
        Self(identifier.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.0.bytes().all(|byte| byte.is_ascii_digit())
    }

    #[must_use]
    pub fn is_highest_priority(&self) -> bool {
        Self::HIGHEST_PRIORITY_TAGS.contains(&self.as_str())
    }

    fn cmp_without_priority(&self, other: &Self) -> Ordering {
        match (self.is_numeric(), other.is_numeric()) {
            // No leading zeroes, so the longer number is the bigger one.
            (true, true) => self
                .0
                .len()
                .cmp(&other.0.len())
                .then_with(|| self.0.cmp(&other.0)),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.0.cmp(&other.0),
        }
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.is_highest_priority()
            .cmp(&other.is_highest_priority())
            .then_with(|| self.cmp_without_priority(other))
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered pre-release identifiers. Empty for release versions, which sort
/// after every pre-release sharing the same core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[must_use]
pub struct Prerelease(Vec<Identifier>);

impl Prerelease {
    pub const EMPTY: Self = Self(Vec::new());

    pub(crate) const fn new(identifiers: Vec<Identifier>) -> Self {
        Self(identifiers)
    }

    pub fn as_slice(&self) -> &[Identifier] {
        &self.0
    }

    pub fn iter(&self) -> slice::Iter<'_, Identifier> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Ord for Prerelease {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for Prerelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'r> IntoIterator for &'r Prerelease {
    type Item = &'r Identifier;

    type IntoIter = slice::Iter<'r, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Prerelease {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut identifiers = self.iter();

        if let Some(first) = identifiers.next() {
            Display::fmt(first, f)?;

            identifiers.try_for_each(|identifier| {
                f.write_fmt(format_args!(".{identifier}"))
            })?;
        }

        Ok(())
    }
}

/// Build metadata, kept verbatim. Never takes part in comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub struct BuildMetadata(Box<str>);

impl BuildMetadata {
    pub(crate) fn from_validated(build_metadata: &str) -> Self {
        Self(build_metadata.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.split('.')
    }
}

impl Display for BuildMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
