//! Custom templates and placeholder substitution.

use copyfmt::{Copyright, CopyrightOptions, FixedClock, Format};

fn text(options: CopyrightOptions) -> String {
    Copyright::new(options).text_at(&FixedClock::in_year(2026))
}

#[test]
fn test_custom_template() {
    assert_eq!(
        text(CopyrightOptions::new("ACME Corp").with_template("Made by {owner} in {year}")),
        "Made by ACME Corp in 2026"
    );
}

#[test]
fn test_custom_template_overrides_format() {
    assert_eq!(
        text(
            CopyrightOptions::new("ACME Corp")
                .with_format(Format::Legal)
                .with_template("{owner} {symbol}")
        ),
        "ACME Corp ©"
    );
}

#[test]
fn test_custom_template_with_range() {
    assert_eq!(
        text(
            CopyrightOptions::new("ACME Corp")
                .with_start_year(2020)
                .with_template("({year})")
        ),
        "(2020-2026)"
    );
}

#[test]
fn test_repeated_placeholders() {
    assert_eq!(
        text(CopyrightOptions::new("ACME").with_template("{owner}/{owner} {symbol}{symbol}")),
        "ACME/ACME ©©"
    );
}

#[test]
fn test_owner_is_not_rescanned() {
    assert_eq!(
        text(CopyrightOptions::new("{year} {symbol}")),
        "© 2026 {year} {symbol}"
    );
}

#[test]
fn test_unknown_placeholders_pass_through() {
    assert_eq!(
        text(CopyrightOptions::new("ACME").with_template("{company} {{year}} {owner")),
        "{company} {2026} {owner"
    );
}

#[test]
fn test_template_without_placeholders() {
    assert_eq!(
        text(CopyrightOptions::new("ACME").with_template("All rights reserved")),
        "All rights reserved"
    );
}

#[test]
fn test_empty_template() {
    assert_eq!(text(CopyrightOptions::new("ACME").with_template("")), "");
}

#[test]
fn test_empty_owner_is_accepted() {
    assert_eq!(text(CopyrightOptions::new("")), "© 2026 ");
}

#[test]
fn test_non_ascii_literals() {
    assert_eq!(
        text(CopyrightOptions::new("Ödön GmbH").with_template("™ {owner} — {year}")),
        "™ Ödön GmbH — 2026"
    );
}
