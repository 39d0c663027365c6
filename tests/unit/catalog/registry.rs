use std::collections::HashSet;

use super::*;

#[test]
fn catalog_has_45_unique_themes_in_order() {
    let themes = list_themes();
    assert_eq!(themes.len(), 45);
    assert_eq!(themes[0].id, "sunset");
    assert_eq!(themes[44].id, "prism-shard");

    let ids: HashSet<_> = themes.iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), themes.len());
}

#[test]
fn tier_counts_match_catalog() {
    let count = |tier: Tier| list_themes().iter().filter(|t| t.tier == tier).count();
    assert_eq!(count(Tier::Free), 19);
    assert_eq!(count(Tier::Pro), 13);
    assert_eq!(count(Tier::Premium), 13);
}

#[test]
fn every_pattern_reference_resolves() {
    for t in list_themes() {
        let key = t.pattern.as_str();
        assert_eq!(key.parse::<PatternId>().unwrap(), t.pattern, "{}", t.id);
    }
}

#[test]
fn lookup_by_id() {
    let ocean = get_theme(DEFAULT_THEME_ID).unwrap();
    assert_eq!(ocean.name, "Ocean Depth");
    assert_eq!(ocean.accent_color, Color::hex(0x764BA2));
    assert_eq!(ocean.pattern, PatternId::BasicCircles);

    let err = get_theme("nope").unwrap_err();
    assert!(matches!(err, WhisperError::ThemeNotFound(ref id) if id == "nope"));
}

#[test]
fn gradients_keep_exact_stops() {
    let galaxy = get_theme("galaxy").unwrap();
    assert_eq!(
        galaxy.gradient.to_css(),
        "linear-gradient(135deg, #0F2027 0%, #203A43 30%, #2C5364 60%, #8E44AD 100%)"
    );
    for t in list_themes() {
        assert_eq!(t.gradient.angle_deg, 135.0);
        assert_eq!(t.gradient.stops.first().map(|s| s.percent), Some(0.0));
        assert_eq!(t.gradient.stops.last().map(|s| s.percent), Some(100.0));
    }
}

#[test]
fn serialized_records_use_catalog_field_names() {
    let v = serde_json::to_value(get_theme("sunset").unwrap()).unwrap();
    let keys: HashSet<_> = v.as_object().unwrap().keys().cloned().collect();
    let expected: HashSet<String> = [
        "id",
        "name",
        "description",
        "category",
        "tier",
        "gradient",
        "textColor",
        "accentColor",
        "pattern",
        "badge",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(keys, expected);
    assert_eq!(v["pattern"], "soft-waves");
    assert_eq!(v["tier"], "free");
}

#[test]
fn serialized_catalog_reads_back_unchanged() {
    let json = serde_json::to_string(list_themes()).unwrap();
    let records: Vec<crate::catalog::ThemeRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(records.len(), 45);
    for (record, theme) in records.iter().zip(list_themes()) {
        assert_eq!(record, &crate::catalog::ThemeRecord::from(theme));
    }
}
