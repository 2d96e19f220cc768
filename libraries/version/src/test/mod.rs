use crate::{Field, ParseErrorKind, Version};


fn parse(input: &str) -> Version {
    input
        .parse()
        .unwrap_or_else(|error| panic!("{input:?} should parse! {error}"))
}

fn prerelease(version: &Version) -> Vec<&str> {
    version
        .prerelease()
        .iter()
        .map(crate::Identifier::as_str)
        .collect()
}

fn error_kind(input: &str) -> ParseErrorKind {
    let error = input.parse::<Version>().unwrap_err();

    assert_eq!(error.input(), input);

    error.kind().clone()
}

#[test]
fn test_parsing() {
    for valid_version in [
        "0.0.0",
        "1.2.3",
        "10.20.30",
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-0.3.7",
        "1.0.0-x.7.z.92",
        "1.0.0-alpha+001",
        "1.0.0+20130313144700",
        "1.0.0-beta+exp.sha.5114f85",
        "1.0.0+21AF26D3----117B344092BD",
        "1.0.1b",
        "2.0.0a-yy",
        "18446744073709551615.0.0",
    ] {
        let version = parse(valid_version);

        assert_eq!(parse(&version.to_string()), version, "{valid_version:?}");
    }

    assert_eq!(parse("1.2.3"), Version::new(1, 2, 3));

    assert_eq!(parse("1.2.3").core(), (1, 2, 3));

    assert!(!parse("1.2.3").is_prerelease());
}

#[test]
fn test_grammar_rejections() {
    for invalid_version in [
        "",
        ".",
        "0",
        "0.",
        "0.0",
        "0.0.",
        "1.0.0.",
        ".0.0.0",
        "a.b.c",
        "v1.0.0",
        " 1.0.0",
        "1.0.0 ",
        "1.0.0+",
        "1.0.0-alpha..1",
        "1.0.0-alpha_1",
        "1.0.0-alpha+",
        "-1.0.0",
    ] {
        assert_eq!(
            error_kind(invalid_version),
            ParseErrorKind::Grammar,
            "{invalid_version:?}",
        );
    }
}

#[test]
fn test_leading_zero_rejections() {
    assert_eq!(
        error_kind("01.0.0"),
        ParseErrorKind::LeadingZero {
            field: Field::Major
        }
    );

    assert_eq!(
        error_kind("00.0.0"),
        ParseErrorKind::LeadingZero {
            field: Field::Major
        }
    );

    assert_eq!(
        error_kind("1.02.0"),
        ParseErrorKind::LeadingZero {
            field: Field::Minor
        }
    );

    assert_eq!(
        error_kind("1.0.0-01"),
        ParseErrorKind::NumericIdentifierLeadingZero {
            identifier: "01".into()
        }
    );

    assert_eq!(
        error_kind("1.0.0-alpha-007"),
        ParseErrorKind::NumericIdentifierLeadingZero {
            identifier: "007".into()
        }
    );

    assert_eq!(
        error_kind("1.0.0-rc.01"),
        ParseErrorKind::NumericIdentifierLeadingZero {
            identifier: "01".into()
        }
    );

    assert_eq!(
        error_kind("1.0.0-00.1+build"),
        ParseErrorKind::NumericIdentifierLeadingZero {
            identifier: "00".into()
        }
    );

    assert_eq!(error_kind("1.0.0-rc.01_x"), ParseErrorKind::Grammar);
}

#[test]
fn test_out_of_range_rejection() {
    assert_eq!(
        error_kind("18446744073709551616.0.0"),
        ParseErrorKind::OutOfRange {
            field: Field::Major
        }
    );

    assert_eq!(
        error_kind("0.0.99999999999999999999"),
        ParseErrorKind::OutOfRange {
            field: Field::Patch
        }
    );
}

#[test]
fn test_empty_prerelease_rejection() {
    assert_eq!(
        error_kind("1.0.0-"),
        ParseErrorKind::EmptyPrerelease {
            section: "-".into()
        }
    );

    assert_eq!(
        error_kind("1.0.0--"),
        ParseErrorKind::EmptyPrerelease {
            section: "-".into()
        }
    );

    assert_eq!(parse("1.0.0-a-").to_string(), "1.0.0-a");

    assert_eq!(parse("1.0.0--a").to_string(), "1.0.0-a");
}

#[test]
fn test_error_message() {
    assert_eq!(
        "01.0.0".parse::<Version>().unwrap_err().to_string(),
        "Invalid version \"01.0.0\"! The major version must not start with \
        `0`!",
    );
}

#[test]
fn test_prerelease_splitting() {
    assert_eq!(prerelease(&parse("1.0.0-rc.1")), ["rc", "1"]);

    assert_eq!(
        prerelease(&parse("1.0.0-alpha-beta.2")),
        ["alpha", "beta", "2"]
    );

    assert_eq!(prerelease(&parse("2.0.0a-yy")), ["a", "yy"]);

    assert_eq!(prerelease(&parse("1.0.1b")), ["b"]);

    assert_eq!(prerelease(&parse("1.0.0--a")), ["a"]);

    let version = parse("1.0.1b");

    assert_eq!(version.patch(), 1);

    assert!(version.is_prerelease());
}

#[test]
fn test_plus_separators() {
    let version = parse("1.0.0+build.5");

    assert!(!version.is_prerelease());

    assert_eq!(
        version
            .build_metadata()
            .map(|build_metadata| build_metadata.tokens().collect::<Vec<_>>()),
        Some(vec!["build", "5"]),
    );

    let version = parse("1.0.0+rc+build.5");

    assert_eq!(prerelease(&version), ["rc"]);

    assert_eq!(
        version.build_metadata().map(crate::BuildMetadata::as_str),
        Some("build.5"),
    );
}

#[test]
fn test_rendering() {
    for (input, rendered) in [
        ("0.0.0", "0.0.0"),
        ("1.0.0-rc.1", "1.0.0-rc.1"),
        ("1.0.0-alpha+001", "1.0.0-alpha+001"),
        (
            "1.0.0+21AF26D3----117B344092BD",
            "1.0.0+21AF26D3----117B344092BD",
        ),
        ("1.0.1b", "1.0.1-b"),
        ("2.0.0a-yy", "2.0.0-a.yy"),
        ("1.0.0+rc+build.5", "1.0.0-rc+build.5"),
    ] {
        let version = parse(input);

        assert_eq!(version.to_string(), rendered);

        let reparsed = parse(rendered);

        assert_eq!(reparsed, version);

        assert_eq!(reparsed.build_metadata(), version.build_metadata());
    }

    assert_eq!(
        format!("{:?}", parse("1.0.0-rc.1+b")),
        "Version(1.0.0-rc.1+b)"
    );
}

#[test]
fn test_ordering() {
    assert!(parse("1.0.0-rc.1") < parse("1.0.0"));

    assert!(parse("1.0.0-beta.2") < parse("1.0.0-beta.11"));

    assert!(parse("2.0.0-rc") > parse("2.0.0-yy"));

    assert!(parse("2.0.0-preview") > parse("2.0.0-zeta.9"));

    assert!(parse("1.0.0-RC") < parse("1.0.0-beta"));

    assert_eq!(parse("1.0.0+build1"), parse("1.0.0+build2"));

    assert!(parse("1.0.0-2") < parse("1.0.0-10"));

    assert!(parse("1.0.0-10") < parse("1.0.0-1a"));

    assert!(parse("1.0.0-2") < parse("1.0.0-1a"));

    assert!(parse("1.0.0-zzz") < parse("1.0.1-0"));
}
