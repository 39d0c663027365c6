use std::borrow::Cow;

use serde::Serialize;

use crate::{
    compose::scene::Caption,
    foundation::error::{WhisperError, WhisperResult},
    render::fonts::FontBook,
};

/// Smallest caption size the fitter will shrink to.
pub const MIN_CAPTION_SIZE: f64 = 6.0;

const SHRINK_STEP: f64 = 0.9;

/// A caption broken into lines at a size where the whole block fits its frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CaptionLayout {
    pub font_size: f64,
    /// Absolute distance between baselines.
    pub line_height: f64,
    pub lines: Vec<String>,
    /// Widest line advance.
    pub width: f64,
    /// Whether lines were measured with a real face (otherwise estimated).
    pub shaped: bool,
}

impl CaptionLayout {
    pub fn block_height(&self) -> f64 {
        self.lines.len() as f64 * self.line_height
    }
}

struct Line {
    text: String,
    advance: f64,
}

/// Stateful helper for breaking text with Parley from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family_name: Option<String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            family_name: None,
        }
    }

    /// Registers a face and makes its family the one used for subsequent layouts.
    pub fn register_face(&mut self, font_bytes: &[u8]) -> WhisperResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            WhisperError::validation("no font families registered from font bytes")
        })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| WhisperError::validation("registered font family has no name"))?
            .to_string();
        self.family_name = Some(family_name.clone());
        Ok(family_name)
    }

    fn break_lines(
        &mut self,
        text: &str,
        size_px: f32,
        letter_spacing_px: f32,
        max_width_px: f32,
    ) -> WhisperResult<Vec<Line>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(WhisperError::validation("text size must be finite and > 0"));
        }
        let family = self
            .family_name
            .clone()
            .ok_or_else(|| WhisperError::validation("no face registered for text layout"))?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::LetterSpacing(
            letter_spacing_px,
        ));
        // Unbreakable runs (links, long tokens) wrap mid-word instead of overflowing the frame.
        builder.push_default(parley::style::StyleProperty::OverflowWrap(
            parley::style::OverflowWrap::Anywhere,
        ));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(Some(max_width_px));

        Ok(layout
            .lines()
            .map(|line| Line {
                text: text[line.text_range()].trim_end().to_owned(),
                advance: f64::from(line.metrics().advance),
            })
            .collect())
    }
}

/// Greedy word wrap with estimated advances. Words wider than the box are split.
fn wrap_estimated(text: &str, em: f64, max_width: f64) -> Vec<Line> {
    let char_w = em.max(f64::EPSILON);
    let width_of = |s: &str| s.chars().count() as f64 * char_w;
    let max_chars = ((max_width / char_w).floor() as usize).max(1);

    let mut lines = Vec::new();
    let mut current = String::new();
    let flush = |current: &mut String, lines: &mut Vec<Line>| {
        if !current.is_empty() {
            let text = std::mem::take(current);
            lines.push(Line {
                advance: width_of(&text),
                text,
            });
        }
    };

    for word in text.split_whitespace() {
        let mut word: Cow<'_, str> = Cow::Borrowed(word);
        while word.chars().count() > max_chars {
            flush(&mut current, &mut lines);
            let head: String = word.chars().take(max_chars).collect();
            let tail: String = word.chars().skip(max_chars).collect();
            lines.push(Line {
                advance: width_of(&head),
                text: head,
            });
            word = Cow::Owned(tail);
        }
        if word.is_empty() {
            continue;
        }
        let candidate_len = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if candidate_len > max_chars {
            flush(&mut current, &mut lines);
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    flush(&mut current, &mut lines);
    lines
}

/// Breaks the caption into lines, shrinking from its nominal size until the block fits the
/// caption frame. The full text is always kept.
#[tracing::instrument(level = "debug", skip_all, fields(chars = caption.text.chars().count()))]
pub fn layout_caption(caption: &Caption, fonts: &FontBook) -> CaptionLayout {
    let text = caption.display_text();
    let max_w = caption.frame.width().max(1.0);
    let max_h = caption.frame.height().max(1.0);

    let mut engine = fonts
        .face_data(caption.families, caption.weight, caption.italic)
        .and_then(|bytes| {
            let mut engine = TextLayoutEngine::new();
            match engine.register_face(&bytes) {
                Ok(_) => Some(engine),
                Err(err) => {
                    tracing::warn!(%err, "caption face rejected, estimating metrics");
                    None
                }
            }
        });

    let mut size = caption.font_size.max(MIN_CAPTION_SIZE);
    loop {
        let spacing = caption.letter_spacing_em * size;
        let shaped = engine
            .as_mut()
            .and_then(|e| e.break_lines(&text, size as f32, spacing as f32, max_w as f32).ok());
        let is_shaped = shaped.is_some();
        let lines = shaped.unwrap_or_else(|| {
            let em = (caption.font.mean_advance_em() + caption.letter_spacing_em) * size;
            wrap_estimated(&text, em, max_w)
        });

        let line_height = size * caption.line_height;
        let width = lines.iter().map(|l| l.advance).fold(0.0, f64::max);
        let height = lines.len() as f64 * line_height;
        let fits = width <= max_w + 0.5 && height <= max_h + 0.5;

        if fits || size <= MIN_CAPTION_SIZE {
            if !fits {
                tracing::warn!(size, "caption still overflows at minimum size");
            }
            return CaptionLayout {
                font_size: size,
                line_height,
                lines: lines.into_iter().map(|l| l.text).collect(),
                width,
                shaped: is_shaped,
            };
        }
        size = (size * SHRINK_STEP).max(MIN_CAPTION_SIZE);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
