use crate::{
    catalog::{Theme, get_theme},
    compose::{
        CardPresentation, Fidelity, FontStyle, HeaderStyle, Scene, TextColorPreset, compose,
    },
    export::{
        pipeline::{ExportMode, ExportPipeline, ExportReport},
        platform::Platform,
    },
    foundation::{core::Color, error::WhisperResult},
    render::backend::RasterBackend,
};

/// One open share dialog: a message plus the presentation the user is tweaking.
///
/// Created on open and dropped on close; nothing here is persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct CardSession {
    caption: String,
    presentation: CardPresentation,
}

impl CardSession {
    pub fn open(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            presentation: CardPresentation::default(),
        }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn presentation(&self) -> &CardPresentation {
        &self.presentation
    }

    pub fn theme(&self) -> WhisperResult<&'static Theme> {
        get_theme(&self.presentation.selected_theme_key)
    }

    /// Unknown ids leave the selection unchanged.
    pub fn select_theme(&mut self, id: &str) -> WhisperResult<()> {
        self.presentation = self.presentation.clone().with_theme(id)?;
        Ok(())
    }

    pub fn set_header(&mut self, header: HeaderStyle) {
        self.presentation.header_style = header;
    }

    pub fn set_font(&mut self, font: FontStyle) {
        self.presentation.font_style = font;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.presentation.text_color = color;
    }

    pub fn set_text_preset(&mut self, preset: TextColorPreset) {
        self.set_text_color(preset.color());
    }

    pub fn scene(&self, fidelity: Fidelity) -> WhisperResult<Scene> {
        Ok(compose(
            self.theme()?,
            &self.presentation,
            &self.caption,
            fidelity,
        ))
    }

    pub fn preview(&self) -> WhisperResult<Scene> {
        self.scene(Fidelity::Preview)
    }

    /// Snapshots the current presentation into an export scene and runs it through `pipeline`.
    pub async fn export<P: Platform, B: RasterBackend + 'static>(
        &self,
        pipeline: &ExportPipeline<P, B>,
        mode: ExportMode,
    ) -> WhisperResult<ExportReport> {
        let scene = self.scene(Fidelity::Export)?;
        pipeline.export(scene, mode).await
    }
}
