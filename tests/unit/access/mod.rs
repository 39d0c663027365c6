use super::*;

#[test]
fn unlock_truth_table_over_all_states() {
    for bits in 0u8..8 {
        let access = AccessState {
            free: bits & 1 != 0,
            pro: bits & 2 != 0,
            premium: bits & 4 != 0,
        };
        assert!(is_unlocked(Tier::Free, &access), "{access:?}");
        assert_eq!(
            is_unlocked(Tier::Pro, &access),
            access.pro || access.premium,
            "{access:?}"
        );
        assert_eq!(is_unlocked(Tier::Premium, &access), access.premium, "{access:?}");
    }
}

#[test]
fn premium_implies_pro() {
    let premium_only = AccessState {
        free: false,
        pro: false,
        premium: true,
    };
    assert!(is_unlocked(Tier::Pro, &premium_only));
    assert_eq!(premium_only.highest(), Tier::Premium);
    assert_eq!(AccessState::FREE_ONLY.highest(), Tier::Free);
}

#[test]
fn contexts_by_category() {
    assert_eq!(
        recommended_contexts(Category::Minimal),
        &["linkedin", "resume", "portfolio"]
    );
    assert_eq!(recommended_contexts_for("aesthetic"), &["instagram", "pinterest", "blog"]);
    assert_eq!(recommended_contexts_for("vaporwave"), &["web"]);
}

#[test]
fn contrast_follows_yiq() {
    assert!(is_dark_theme(Color::WHITE));
    assert!(!is_dark_theme(Color::hex(0x1E1E1E)));
    assert_eq!(contrasting_text_color(Color::hex(0xFFF200)), Color::BLACK);
    assert_eq!(contrasting_text_color(Color::hex(0x0F2027)), Color::WHITE);
}
