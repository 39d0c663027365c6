use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WhisperError::unknown_pattern("x")
            .to_string()
            .contains("unknown pattern:")
    );
    assert!(
        WhisperError::theme_not_found("x")
            .to_string()
            .contains("theme not found:")
    );
    assert!(
        WhisperError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        WhisperError::capture("x")
            .to_string()
            .contains("capture failure:")
    );
    assert!(
        WhisperError::save("x")
            .to_string()
            .contains("save failure:")
    );
    assert!(
        WhisperError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WhisperError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn capture_detail_stays_out_of_user_message() {
    let err = WhisperError::capture("pixmap allocation failed");
    assert_eq!(err.user_message(), "Generation failed.");
    assert!(err.to_string().contains("pixmap allocation failed"));
}

#[test]
fn rejected_distribution_reads_as_generic_failure() {
    let err = WhisperError::distribution_unavailable("share sheet dismissed");
    assert_eq!(err.user_message(), "Generation failed.");
}
