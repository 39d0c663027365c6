use std::sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
};

use super::*;

#[derive(Default)]
struct RecordingSaver {
    fail: AtomicBool,
    saved: Mutex<Vec<String>>,
}

impl ThemeSaver for RecordingSaver {
    async fn save(&self, theme_id: &str) -> WhisperResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(WhisperError::validation("network down"));
        }
        self.saved.lock().unwrap().push(theme_id.to_owned());
        Ok(())
    }
}

#[test]
fn filter_is_and_of_predicates() {
    let filter = BrowseFilter::default()
        .query("OCEAN")
        .category(Category::Minimal)
        .tier(Tier::Free);
    let got: Vec<_> = browse(&AccessState::FREE_ONLY, &filter)
        .into_iter()
        .map(|l| l.theme.id)
        .collect();

    let manual: Vec<_> = list_themes()
        .iter()
        .filter(|t| {
            t.name.to_lowercase().contains("ocean")
                && t.category == Category::Minimal
                && t.tier == Tier::Free
        })
        .map(|t| t.id)
        .collect();
    assert_eq!(got, manual);
    assert_eq!(got, vec!["ocean"]);
}

#[test]
fn empty_filter_lists_everything_in_order() {
    assert!(BrowseFilter::default().is_empty());
    let all = browse(&AccessState::ALL, &BrowseFilter::default());
    assert_eq!(all.len(), 45);
    assert!(all.iter().all(|l| !l.locked));
    assert_eq!(all[0].theme.id, "sunset");
}

#[test]
fn listings_carry_lock_and_hints() {
    let galaxy = ThemeListing::new(get_theme("galaxy").unwrap(), &AccessState::FREE_ONLY);
    assert!(galaxy.locked);
    assert_eq!(galaxy.recommended_for, &["twitter", "twitch", "youtube"]);
    assert!(galaxy.is_dark);
    assert_eq!(galaxy.badge_text_color, Color::WHITE);

    let pro = AccessState {
        pro: true,
        ..AccessState::FREE_ONLY
    };
    assert!(!ThemeListing::new(get_theme("galaxy").unwrap(), &pro).locked);
}

#[tokio::test]
async fn previewing_a_locked_theme_changes_nothing() {
    let mut store = ThemeStore::new("ocean", AccessState::FREE_ONLY).unwrap();
    let listing = store.open_preview("galaxy").unwrap();
    assert!(listing.locked);
    assert_eq!(store.current().id, "ocean");

    let scene = store.preview_scene().unwrap();
    assert_eq!(scene.source.theme_id, "galaxy");
    assert_eq!(scene.source.caption, SAMPLE_CAPTION);

    let saver = RecordingSaver::default();
    let outcome = store.apply_preview(&saver).await.unwrap();
    assert_eq!(outcome, ApplyOutcome::UnlockRequired(Tier::Pro));
    assert_eq!(store.current().id, "ocean");
    assert!(store.previewing().is_some());
    assert!(saver.saved.lock().unwrap().is_empty());
}

#[tokio::test]
async fn applying_an_unlocked_preview_selects_and_closes() {
    let mut store = ThemeStore::new("ocean", AccessState::FREE_ONLY).unwrap();
    let saver = RecordingSaver::default();
    assert_eq!(
        store.apply_preview(&saver).await.unwrap(),
        ApplyOutcome::NothingPreviewed
    );

    store.open_preview("forest").unwrap();
    let outcome = store.apply_preview(&saver).await.unwrap();
    assert_eq!(outcome, ApplyOutcome::Applied("forest"));
    assert_eq!(store.current().id, "forest");
    assert!(store.previewing().is_none());
    assert_eq!(*saver.saved.lock().unwrap(), vec!["forest".to_owned()]);
}

#[tokio::test]
async fn failed_save_rolls_back() {
    let mut store = ThemeStore::new("ocean", AccessState::ALL).unwrap();
    let saver = RecordingSaver::default();
    saver.fail.store(true, Ordering::SeqCst);

    let err = store.select_theme("neon", &saver).await.unwrap_err();
    assert!(matches!(err, WhisperError::SaveFailure(_)));
    assert_eq!(err.user_message(), "Failed to update theme");
    assert_eq!(store.current().id, "ocean");
}

#[tokio::test]
async fn selecting_locked_or_unknown_themes_fails_without_saving() {
    let mut store = ThemeStore::new("ocean", AccessState::FREE_ONLY).unwrap();
    let saver = RecordingSaver::default();
    assert!(matches!(
        store.select_theme("neon", &saver).await,
        Err(WhisperError::Validation(_))
    ));
    assert!(matches!(
        store.select_theme("nope", &saver).await,
        Err(WhisperError::ThemeNotFound(_))
    ));
    assert_eq!(store.current().id, "ocean");
    assert!(saver.saved.lock().unwrap().is_empty());
}

#[test]
fn access_change_relocks_listings() {
    let mut store = ThemeStore::new("ocean", AccessState::ALL).unwrap();
    store.set_filter(BrowseFilter::default().tier(Tier::Premium));
    assert!(store.listings().iter().all(|l| !l.locked));
    store.set_access(AccessState::FREE_ONLY);
    let listings = store.listings();
    assert_eq!(listings.len(), 13);
    assert!(listings.iter().all(|l| l.locked));
    store.clear_filter();
    assert!(store.filter().is_empty());
}

#[test]
fn unlock_notice_names_the_tier() {
    assert_eq!(unlock_notice(Tier::Pro).message, "Unlock PRO Access");
}
