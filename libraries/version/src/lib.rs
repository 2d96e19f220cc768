use std::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

pub use self::{
    comparison::IntoVersion,
    grammar::{Field, ParseError, ParseErrorKind},
    identifier::{BuildMetadata, Identifier, Prerelease},
};

mod comparison;
mod grammar;
mod identifier;

#[cfg(test)]
mod test;

/// Parsed version of the form `major.minor.patch[-prerelease][+build]`.
///
/// Equality, hashing and ordering consider only the numeric core and the
/// pre-release identifiers. Build metadata is kept for rendering.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[must_use]
pub struct Version {
    major: VersionSegment,
    minor: VersionSegment,
    patch: VersionSegment,
    prerelease: Prerelease,
    build_metadata: Option<BuildMetadata>,
}

impl Version {
    pub const fn new(
        major: VersionSegment,
        minor: VersionSegment,
        patch: VersionSegment,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: Prerelease::EMPTY,
            build_metadata: None,
        }
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        grammar::parse(input)
    }

    #[must_use]
    pub const fn major(&self) -> VersionSegment {
        self.major
    }

    #[must_use]
    pub const fn minor(&self) -> VersionSegment {
        self.minor
    }

    #[must_use]
    pub const fn patch(&self) -> VersionSegment {
        self.patch
    }

    #[must_use]
    pub const fn core(
        &self,
    ) -> (VersionSegment, VersionSegment, VersionSegment) {
        (self.major, self.minor, self.patch)
    }

    pub const fn prerelease(&self) -> &Prerelease {
        &self.prerelease
    }

    #[must_use]
    pub const fn build_metadata(&self) -> Option<&BuildMetadata> {
        self.build_metadata.as_ref()
    }

    #[must_use]
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!(
            "{}.{}.{}",
            self.major, self.minor, self.patch
        ))?;

        if !self.prerelease.is_empty() {
            f.write_fmt(format_args!("-{}", self.prerelease))?;
        }

        if let Some(build_metadata) = &self.build_metadata {
            f.write_fmt(format_args!("+{build_metadata}"))?;
        }

        Ok(())
    }
}

impl Debug for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Version")
            .field(&format_args!("{self}"))
            .finish()
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        grammar::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        grammar::parse(&value)
    }
}

impl From<Version> for String {
    fn from(value: Version) -> Self {
        value.to_string()
    }
}

pub type VersionSegment = u64;
