//! Card composition: theme + presentation + caption -> scene.

pub mod composer;
pub mod presentation;
pub mod scene;

pub use composer::{compose, compose_selected};
pub use presentation::{CardPresentation, FontStyle, HeaderStyle, TextColorPreset};
pub use scene::{
    BlendMode, Border, Caption, CardSource, Fidelity, Footer, Header, PatternLayer, Pill, Scene,
    Shadow, TextRun,
};
