use super::*;
use crate::{
    catalog::get_theme,
    compose::{CardPresentation, Fidelity, FontStyle, compose},
};

fn export_caption(text: &str, font: FontStyle) -> Caption {
    let p = CardPresentation::default().with_font(font);
    compose(get_theme("ocean").unwrap(), &p, text, Fidelity::Export).caption
}

fn words(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_owned).collect()
}

#[test]
fn short_caption_keeps_nominal_size() {
    let caption = export_caption("hi", FontStyle::Serif);
    let layout = layout_caption(&caption, &FontBook::empty());
    assert_eq!(layout.font_size, 100.0);
    assert_eq!(layout.lines, vec!["\"hi\"".to_owned()]);
    assert!(!layout.shaped);
}

#[test]
fn long_caption_shrinks_but_is_never_truncated() {
    let text = "I have wanted to tell you this for a very long time and I could never find the \
                right moment so here it is all at once without stopping to breathe even once";
    let caption = export_caption(text, FontStyle::Modern);
    let layout = layout_caption(&caption, &FontBook::empty());

    assert!(layout.font_size < caption.font_size);
    assert!(layout.block_height() <= caption.frame.height() + 0.5);
    assert!(layout.width <= caption.frame.width() + 0.5);
    assert_eq!(words(&layout.lines.join(" ")), words(&caption.display_text()));
}

#[test]
fn overlong_word_is_split_not_dropped() {
    let word = "a".repeat(400);
    let caption = export_caption(&word, FontStyle::Hand);
    let layout = layout_caption(&caption, &FontBook::empty());
    let joined: String = layout.lines.concat();
    assert_eq!(joined, format!("\"{word}\""));
}

#[test]
fn estimated_wrap_is_greedy() {
    let lines = wrap_estimated("aa bb cc", 10.0, 50.0);
    let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["aa bb", "cc"]);
    assert_eq!(lines[0].advance, 50.0);
}

#[test]
fn shaped_overlong_word_wraps_inside_the_frame() {
    let fonts = FontBook::load(&crate::render::fonts::FontOpts::default());
    if fonts.is_empty() {
        return;
    }
    let link = format!("https://whisper-box.xyz/{}", "x".repeat(300));
    let caption = export_caption(&link, FontStyle::Hand);
    let layout = layout_caption(&caption, &fonts);

    assert!(layout.shaped);
    assert!(layout.lines.len() > 1);
    assert!(layout.width <= caption.frame.width() + 0.5, "{}", layout.width);
    assert!(layout.block_height() <= caption.frame.height() + 0.5);
    assert_eq!(layout.lines.concat(), format!("\"{link}\""));
}
