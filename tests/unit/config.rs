use super::*;

#[test]
fn defaults_match_export_contract() {
    let o = ExportOpts::default();
    assert_eq!(o.pixel_ratio, 3.0);
    assert_eq!(o.frame_waits, 2);
    assert_eq!(o.settle_delay(), Duration::from_millis(150));
    assert_eq!(o.font_timeout(), Duration::from_secs(5));
    assert!(o.fonts.system_fonts);
    o.validate().unwrap();
}

#[test]
fn partial_json_keeps_other_defaults() {
    let o: ExportOpts =
        serde_json::from_str(r#"{"pixel_ratio": 1.0, "fonts": {"system_fonts": false}}"#).unwrap();
    assert_eq!(o.pixel_ratio, 1.0);
    assert_eq!(o.settle_delay_ms, 150);
    assert!(!o.fonts.system_fonts);
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(serde_json::from_str::<ExportOpts>(r#"{"pixel_ration": 2}"#).is_err());
}

#[test]
fn validate_rejects_bad_values() {
    let bad = [
        ExportOpts {
            pixel_ratio: 0.0,
            ..Default::default()
        },
        ExportOpts {
            pixel_ratio: f32::NAN,
            ..Default::default()
        },
        ExportOpts {
            pixel_ratio: 9.0,
            ..Default::default()
        },
        ExportOpts {
            font_timeout_ms: 0,
            ..Default::default()
        },
        ExportOpts {
            capture_timeout_ms: 0,
            ..Default::default()
        },
    ];
    for o in bad {
        assert!(matches!(o.validate(), Err(WhisperError::Validation(_))), "{o:?}");
    }
}

#[test]
fn from_path_reads_and_validates() {
    let dir = std::env::temp_dir().join(format!("whisper-cards-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let good = dir.join("good.json");
    std::fs::write(&good, r#"{"settle_delay_ms": 10}"#).unwrap();
    assert_eq!(ExportOpts::from_path(&good).unwrap().settle_delay_ms, 10);

    let invalid = dir.join("invalid.json");
    std::fs::write(&invalid, r#"{"pixel_ratio": -1}"#).unwrap();
    assert!(matches!(
        ExportOpts::from_path(&invalid),
        Err(WhisperError::Validation(_))
    ));

    let garbage = dir.join("garbage.json");
    std::fs::write(&garbage, "not json").unwrap();
    assert!(matches!(
        ExportOpts::from_path(&garbage),
        Err(WhisperError::Serde(_))
    ));

    assert!(matches!(
        ExportOpts::from_path(&dir.join("missing.json")),
        Err(WhisperError::Other(_))
    ));
    let _ = std::fs::remove_dir_all(&dir);
}
