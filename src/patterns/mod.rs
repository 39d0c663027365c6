//! Procedural background patterns.
//!
//! Every pattern is a pure function from an opacity to a [`Drawing`] on a
//! 600x600 logical canvas. Generators use integer arithmetic sequences only,
//! so the same `(pattern, opacity)` always yields the same primitives.

pub mod drawing;

mod free;
mod premium;
mod pro;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    catalog::Tier,
    foundation::error::{WhisperError, WhisperResult},
};

pub use drawing::{AspectMode, Drawing, PATTERN_CANVAS};

/// Identifier of a procedural pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternId {
    PaperGrain,
    Halftone,
    GridDots,
    SoftWaves,
    SimpleLines,
    BasicCircles,
    MinimalCross,
    LightTexture,

    ConcreteTexture,
    CandyDots,
    WaterRipples,
    MarbleVeins,
    HexagonPattern,
    WaveGradient,
    DotMatrix,
    DiagonalLines,

    VolcanicCracks,
    ChromeReflection,
    ThermalScan,
    MistLayers,
    LiquidFlow,
    NeuralWeb,
    AuroraWaves,
    CrystalPrism,
    QuantumParticles,
    HeatShimmer,
    NebulaCloud,
    ScaleArmor,
    IceFractal,
}

impl PatternId {
    pub const ALL: [PatternId; 29] = [
        PatternId::PaperGrain,
        PatternId::Halftone,
        PatternId::GridDots,
        PatternId::SoftWaves,
        PatternId::SimpleLines,
        PatternId::BasicCircles,
        PatternId::MinimalCross,
        PatternId::LightTexture,
        PatternId::ConcreteTexture,
        PatternId::CandyDots,
        PatternId::WaterRipples,
        PatternId::MarbleVeins,
        PatternId::HexagonPattern,
        PatternId::WaveGradient,
        PatternId::DotMatrix,
        PatternId::DiagonalLines,
        PatternId::VolcanicCracks,
        PatternId::ChromeReflection,
        PatternId::ThermalScan,
        PatternId::MistLayers,
        PatternId::LiquidFlow,
        PatternId::NeuralWeb,
        PatternId::AuroraWaves,
        PatternId::CrystalPrism,
        PatternId::QuantumParticles,
        PatternId::HeatShimmer,
        PatternId::NebulaCloud,
        PatternId::ScaleArmor,
        PatternId::IceFractal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PatternId::PaperGrain => "paper-grain",
            PatternId::Halftone => "halftone",
            PatternId::GridDots => "grid-dots",
            PatternId::SoftWaves => "soft-waves",
            PatternId::SimpleLines => "simple-lines",
            PatternId::BasicCircles => "basic-circles",
            PatternId::MinimalCross => "minimal-cross",
            PatternId::LightTexture => "light-texture",
            PatternId::ConcreteTexture => "concrete-texture",
            PatternId::CandyDots => "candy-dots",
            PatternId::WaterRipples => "water-ripples",
            PatternId::MarbleVeins => "marble-veins",
            PatternId::HexagonPattern => "hexagon-pattern",
            PatternId::WaveGradient => "wave-gradient",
            PatternId::DotMatrix => "dot-matrix",
            PatternId::DiagonalLines => "diagonal-lines",
            PatternId::VolcanicCracks => "volcanic-cracks",
            PatternId::ChromeReflection => "chrome-reflection",
            PatternId::ThermalScan => "thermal-scan",
            PatternId::MistLayers => "mist-layers",
            PatternId::LiquidFlow => "liquid-flow",
            PatternId::NeuralWeb => "neural-web",
            PatternId::AuroraWaves => "aurora-waves",
            PatternId::CrystalPrism => "crystal-prism",
            PatternId::QuantumParticles => "quantum-particles",
            PatternId::HeatShimmer => "heat-shimmer",
            PatternId::NebulaCloud => "nebula-cloud",
            PatternId::ScaleArmor => "scale-armor",
            PatternId::IceFractal => "ice-fractal",
        }
    }

    /// Visual complexity tier. Informational; access is decided by the theme tier.
    pub fn tier(self) -> Tier {
        use PatternId::*;
        match self {
            PaperGrain | Halftone | GridDots | SoftWaves | SimpleLines | BasicCircles
            | MinimalCross | LightTexture => Tier::Free,
            ConcreteTexture | CandyDots | WaterRipples | MarbleVeins | HexagonPattern
            | WaveGradient | DotMatrix | DiagonalLines => Tier::Pro,
            VolcanicCracks | ChromeReflection | ThermalScan | MistLayers | LiquidFlow
            | NeuralWeb | AuroraWaves | CrystalPrism | QuantumParticles | HeatShimmer
            | NebulaCloud | ScaleArmor | IceFractal => Tier::Premium,
        }
    }

    /// Opacity used when the caller does not supply one.
    pub fn default_opacity(self) -> Opacity {
        let v = match self {
            PatternId::PaperGrain => 0.08,
            PatternId::Halftone => 0.10,
            PatternId::GridDots => 0.09,
            PatternId::SoftWaves => 0.11,
            PatternId::SimpleLines => 0.07,
            PatternId::BasicCircles => 0.09,
            PatternId::MinimalCross => 0.08,
            PatternId::LightTexture => 0.06,
            PatternId::ConcreteTexture => 0.13,
            PatternId::CandyDots => 0.16,
            PatternId::WaterRipples => 0.14,
            PatternId::MarbleVeins => 0.15,
            PatternId::HexagonPattern => 0.14,
            PatternId::WaveGradient => 0.15,
            PatternId::DotMatrix => 0.13,
            PatternId::DiagonalLines => 0.12,
            PatternId::VolcanicCracks => 0.20,
            PatternId::ChromeReflection => 0.18,
            PatternId::ThermalScan => 0.17,
            PatternId::MistLayers => 0.22,
            PatternId::LiquidFlow => 0.19,
            PatternId::NeuralWeb => 0.18,
            PatternId::AuroraWaves => 0.20,
            PatternId::CrystalPrism => 0.21,
            PatternId::QuantumParticles => 0.19,
            PatternId::HeatShimmer => 0.16,
            PatternId::NebulaCloud => 0.23,
            PatternId::ScaleArmor => 0.17,
            PatternId::IceFractal => 0.20,
        };
        Opacity(v)
    }

    /// Renders this pattern. See [`render`].
    pub fn render(self, opacity: Opacity) -> Drawing {
        render(self, opacity)
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternId {
    type Err = WhisperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatternId::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| WhisperError::unknown_pattern(s))
    }
}

/// Drawing opacity in `(0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Opacity(f64);

impl Opacity {
    pub const HALF: Opacity = Opacity(0.5);
    pub const FULL: Opacity = Opacity(1.0);

    pub fn new(value: f64) -> WhisperResult<Self> {
        if !value.is_finite() || value <= 0.0 || value > 1.0 {
            return Err(WhisperError::validation(format!(
                "pattern opacity must be in (0, 1], got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Renders `pattern` at `opacity`.
///
/// Pure and deterministic: repeated calls with equal inputs return equal drawings,
/// so results may be cached freely by the caller.
pub fn render(pattern: PatternId, opacity: Opacity) -> Drawing {
    let o = opacity.get();
    match pattern {
        PatternId::PaperGrain => free::paper_grain(o),
        PatternId::Halftone => free::halftone(o),
        PatternId::GridDots => free::grid_dots(o),
        PatternId::SoftWaves => free::soft_waves(o),
        PatternId::SimpleLines => free::simple_lines(o),
        PatternId::BasicCircles => free::basic_circles(o),
        PatternId::MinimalCross => free::minimal_cross(o),
        PatternId::LightTexture => free::light_texture(o),
        PatternId::ConcreteTexture => pro::concrete_texture(o),
        PatternId::CandyDots => pro::candy_dots(o),
        PatternId::WaterRipples => pro::water_ripples(o),
        PatternId::MarbleVeins => pro::marble_veins(o),
        PatternId::HexagonPattern => pro::hexagon_pattern(o),
        PatternId::WaveGradient => pro::wave_gradient(o),
        PatternId::DotMatrix => pro::dot_matrix(o),
        PatternId::DiagonalLines => pro::diagonal_lines(o),
        PatternId::VolcanicCracks => premium::volcanic_cracks(o),
        PatternId::ChromeReflection => premium::chrome_reflection(o),
        PatternId::ThermalScan => premium::thermal_scan(o),
        PatternId::MistLayers => premium::mist_layers(o),
        PatternId::LiquidFlow => premium::liquid_flow(o),
        PatternId::NeuralWeb => premium::neural_web(o),
        PatternId::AuroraWaves => premium::aurora_waves(o),
        PatternId::CrystalPrism => premium::crystal_prism(o),
        PatternId::QuantumParticles => premium::quantum_particles(o),
        PatternId::HeatShimmer => premium::heat_shimmer(o),
        PatternId::NebulaCloud => premium::nebula_cloud(o),
        PatternId::ScaleArmor => premium::scale_armor(o),
        PatternId::IceFractal => premium::ice_fractal(o),
    }
}

/// String-keyed entry point: resolves `key`, then renders at `opacity` or the
/// pattern's default.
#[tracing::instrument(level = "debug")]
pub fn render_key(key: &str, opacity: Option<f64>) -> WhisperResult<Drawing> {
    let pattern: PatternId = key.parse()?;
    let opacity = match opacity {
        Some(v) => Opacity::new(v)?,
        None => pattern.default_opacity(),
    };
    Ok(render(pattern, opacity))
}

#[cfg(test)]
#[path = "../../tests/unit/patterns/mod.rs"]
mod tests;
