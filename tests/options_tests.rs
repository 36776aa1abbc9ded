use copyfmt::{CopyrightOptions, Format};

#[test]
fn test_default_options() {
    let opts = CopyrightOptions::new("ACME Corp");
    assert_eq!(opts.owner, "ACME Corp");
    assert_eq!(opts.start_year, None);
    assert_eq!(opts.end_year, None);
    assert_eq!(opts.format, Format::Minimal);
    assert_eq!(opts.template, None);
}

#[test]
fn test_effective_template_prefers_custom() {
    let opts = CopyrightOptions::new("ACME Corp").with_format(Format::Full);
    assert_eq!(opts.effective_template(), Format::Full.template());

    let opts = opts.with_template("{owner}");
    assert_eq!(opts.effective_template(), "{owner}");
}

#[cfg(feature = "serde")]
mod serde_config {
    use super::*;

    #[test]
    fn test_deserialize_minimal_config() {
        let opts: CopyrightOptions = serde_json::from_str(r#"{"owner": "ACME Corp"}"#).unwrap();
        assert_eq!(opts, CopyrightOptions::new("ACME Corp"));
    }

    #[test]
    fn test_deserialize_full_config() {
        let opts: CopyrightOptions = serde_json::from_str(
            r#"{
                "owner": "ACME Corp",
                "startYear": 2020,
                "endYear": 2026,
                "format": "legal",
                "template": "{owner} {year}"
            }"#,
        )
        .unwrap();
        assert_eq!(
            opts,
            CopyrightOptions::new("ACME Corp")
                .with_start_year(2020)
                .with_end_year(2026)
                .with_format(Format::Legal)
                .with_template("{owner} {year}")
        );
    }

    #[test]
    fn test_deserialize_rejects_unknown_format() {
        let result: Result<CopyrightOptions, _> =
            serde_json::from_str(r#"{"owner": "ACME Corp", "format": "verbose"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let json =
            serde_json::to_string(&CopyrightOptions::new("ACME").with_format(Format::Standard))
                .unwrap();
        assert_eq!(json, r#"{"owner":"ACME","format":"standard"}"#);
    }
}
