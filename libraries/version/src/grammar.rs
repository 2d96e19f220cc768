use std::{
    fmt::{self, Display, Formatter},
    sync::LazyLock,
};

use regex::{Captures, Regex};
use thiserror::Error;
use tracing::debug;

use crate::{
    identifier::{BuildMetadata, Identifier, Prerelease},
    Version, VersionSegment,
};

const CORE: &str = concat!(
    r"^(?P<major>0|[1-9][0-9]*)\.",
    r"(?P<minor>0|[1-9][0-9]*)\.",
    r"(?P<patch>0|[1-9][0-9]*)",
);

const PRERELEASE: &str = concat!(
    r"(?P<prerelease>",
    r"(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)",
    r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*",
    r")",
);

const RELAXED_PRERELEASE: &str =
    r"(?P<prerelease>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*)";

const BUILD_METADATA: &str =
    r"(?P<build_metadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*)";

/// Tried in order. The pre-release separator is `-`, nothing at all, or `+`
/// when another `+` introduces build metadata after it.
static GRAMMARS: LazyLock<[Regex; 2]> =
    LazyLock::new(|| grammars(PRERELEASE));

/// Same shape, but accepts zero-prefixed numeric identifiers. Only used to
/// explain a mismatch.
static RELAXED_GRAMMARS: LazyLock<[Regex; 2]> =
    LazyLock::new(|| grammars(RELAXED_PRERELEASE));

fn grammars(prerelease_pattern: &str) -> [Regex; 2] {
    [
        format!(r"{CORE}(?:-?{prerelease_pattern})?(?:\+{BUILD_METADATA})?$"),
        format!(r"{CORE}\+{prerelease_pattern}\+{BUILD_METADATA}$"),
    ]
    .map(|pattern| {
        Regex::new(&pattern).expect("Version grammar should always compile!")
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid version {input:?}! {kind}")]
pub struct ParseError {
    input: Box<str>,
    kind: ParseErrorKind,
}

impl ParseError {
    fn new(input: &str, kind: ParseErrorKind) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("Input doesn't match the version grammar!")]
    Grammar,
    #[error("The {field} version must not start with `0`!")]
    LeadingZero { field: Field },
    #[error("The {field} version doesn't fit in 64 bits!")]
    OutOfRange { field: Field },
    #[error(
        "Numeric pre-release identifier {identifier:?} must not start with \
        `0`!"
    )]
    NumericIdentifierLeadingZero { identifier: Box<str> },
    /// The pre-release section consists of separators only, e.g. `1.0.0-`.
    /// Rejected so that every accepted version renders back into parseable
    /// text.
    #[error("Pre-release section {section:?} contains no identifiers!")]
    EmptyPrerelease { section: Box<str> },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Major,
    Minor,
    Patch,
}

impl Field {
    const ALL: [Self; 3] = [Self::Major, Self::Minor, Self::Patch];

    const fn group_name(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.group_name())
    }
}

pub(crate) fn parse(input: &str) -> Result<Version, ParseError> {
    parse_fields(input)
        .map_err(|kind| ParseError::new(input, kind))
        .inspect_err(|error| {
            debug!(
                input,
                reason = %error.kind(),
                "Rejected version string!"
            );
        })
}

fn parse_fields(input: &str) -> Result<Version, ParseErrorKind> {
    let captures = GRAMMARS
        .iter()
        .find_map(|grammar| grammar.captures(input))
        .ok_or_else(|| diagnose_mismatch(input))?;

    let [major, minor, patch] = Field::ALL;

    Ok(Version {
        major: core_segment(&captures, major)?,
        minor: core_segment(&captures, minor)?,
        patch: core_segment(&captures, patch)?,
        prerelease: captures
            .name("prerelease")
            .map_or(Ok(Prerelease::EMPTY), |section| {
                prerelease(section.as_str())
            })?,
        build_metadata: captures
            .name("build_metadata")
            .map(|build_metadata| {
                BuildMetadata::from_validated(build_metadata.as_str())
            }),
    })
}

fn core_segment(
    captures: &Captures<'_>,
    field: Field,
) -> Result<VersionSegment, ParseErrorKind> {
    let segment = captures
        .name(field.group_name())
        .ok_or(ParseErrorKind::Grammar)?
        .as_str();

    if has_leading_zero(segment) {
        return Err(ParseErrorKind::LeadingZero { field });
    }

    segment
        .parse()
        .map_err(|_| ParseErrorKind::OutOfRange { field })
}

/// Splits on `-` and `+` too, so hyphenated identifiers end up as separate
/// identifiers.
fn prerelease(section: &str) -> Result<Prerelease, ParseErrorKind> {
    let identifiers = section
        .split(['.', '-', '+'])
        .filter(|identifier| !identifier.is_empty())
        .map(|identifier| {
            if has_leading_zero(identifier) {
                Err(ParseErrorKind::NumericIdentifierLeadingZero {
                    identifier: identifier.into(),
                })
            } else {
                Ok(Identifier::from_validated(identifier))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    if identifiers.is_empty() {
        Err(ParseErrorKind::EmptyPrerelease {
            section: section.into(),
        })
    } else {
        Ok(Prerelease::new(identifiers))
    }
}

/// Reports a leading zero in the core or in a pre-release identifier when
/// that is what broke the match.
fn diagnose_mismatch(input: &str) -> ParseErrorKind {
    Field::ALL
        .into_iter()
        .zip(input.splitn(3, '.'))
        .find_map(|(field, segment)| {
            let digits = if field == Field::Patch {
                segment
                    .find(|character: char| !character.is_ascii_digit())
                    .map_or(segment, |end| segment.split_at(end).0)
            } else {
                segment
            };

            has_leading_zero(digits)
                .then_some(ParseErrorKind::LeadingZero { field })
        })
        .or_else(|| {
            RELAXED_GRAMMARS
                .iter()
                .find_map(|grammar| grammar.captures(input))
                .and_then(|captures| captures.name("prerelease"))
                .and_then(|section| prerelease(section.as_str()).err())
        })
        .unwrap_or(ParseErrorKind::Grammar)
}

fn has_leading_zero(digits: &str) -> bool {
    digits.len() > 1
        && digits.starts_with('0')
        && digits.bytes().all(|byte| byte.is_ascii_digit())
}
