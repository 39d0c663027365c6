use std::{collections::HashMap, sync::LazyLock};

use crate::{
    catalog::theme::{Category, Gradient, GradientStop, Theme, Tier},
    foundation::{
        core::Color,
        error::{WhisperError, WhisperResult},
    },
    patterns::PatternId,
};

/// Every catalog gradient runs along the 135deg diagonal.
macro_rules! diagonal {
    ($(($rgb:literal, $percent:literal)),+ $(,)?) => {
        Gradient::new(
            135.0,
            const { &[$(GradientStop::new(Color::hex($rgb), $percent)),+] },
        )
    };
}

static THEMES: [Theme; 45] = [
    // Free tier.
    Theme {
        id: "sunset",
        name: "Sunset Vibes",
        description: "Warm evening glow with golden hour magic",
        category: Category::Aesthetic,
        tier: Tier::Free,
        gradient: diagonal![(0xFF6B6B, 0.0), (0xFFE66D, 50.0), (0x4ECDC4, 100.0)],
        text_color: Color::hex(0xFFFFFF),
        accent_color: Color::hex(0xFF6B6B),
        pattern: PatternId::SoftWaves,
        badge: "🌅",
    },
    Theme {
        id: "ocean",
        name: "Ocean Depth",
        description: "Deep sea mystery with twilight blues",
        category: Category::Minimal,
        tier: Tier::Free,
        gradient: diagonal![(0x667EEA, 0.0), (0x764BA2, 100.0)],
        text_color: Color::hex(0xFFFFFF),
        accent_color: Color::hex(0x764BA2),
        pattern: PatternId::BasicCircles,
        badge: "🌊",
    },
    Theme {
        id: "forest",
        name: "Forest Dreams",
        description: "Natural green energy from the woodland",
        category: Category::Minimal,
        tier: Tier::Free,
        gradient: diagonal![(0x11998E, 0.0), (0x38EF7D, 100.0)],
        text_color: Color::hex(0xFFFFFF),
        accent_color: Color::hex(0x11998E),
        pattern: PatternId::PaperGrain,
        badge: "🌿",
    },
    Theme {
        id: "midnight",
        name: "Midnight Sky",
        description: "Dark starry night with cosmic hues",
        category: Category::Bold,
        tier: Tier::Free,
        gradient: diagonal![(0x2C3E50, 0.0), (0x4CA1AF, 50.0), (0xC471ED, 100.0)],
        text_color: Color::hex(0xFFFFFF),
        accent_color: Color::hex(0xC471ED),
        pattern: PatternId::GridDots,
        badge: "🌙",
    },
    Theme {
        id: "fire",
        name: "Fire Blaze",
        description: "Intense heat waves and burning passion",
        category: Category::Bold,
        tier: Tier::Free,
        gradient: diagonal![(0xFF512F, 0.0), (0xF09819, 50.0), (0xDD2476, 100.0)],
        text_color: Color::hex(0xFFFFFF),
        accent_color: Color::hex(0xFF512F),
        pattern: PatternId::SimpleLines,
        badge: "🔥",
    },
    Theme {
        id: "cherry",
        name: "Cherry Blossom",
        description: "Soft spring petals in gentle bloom",
        category: Category::Aesthetic,
        tier: Tier::Free,
        gradient: diagonal![(0xFFB6C1, 0.0), (0xFF69B4, 50.0), (0xDDA0DD, 100.0)],
        text_color: Color::hex(0xFFFFFF),
        accent_color: Color::hex(0xFF69B4),
        pattern: PatternId::Halftone,
        badge: "🌸",
    },
    Theme {
        id: "lemon",
        name: "Lemon Zest",
        description: "Bright citrus burst with sunny vibes",
        category: Category::Playful,
        tier: Tier::Free,
        gradient: diagonal![(0xFFF200, 0.0), (0xFFD700, 50.0), (0xFF8C00, 100.0)],
        text_color: Color::hex(0x713F12),
        accent_color: Color::hex(0xFF8C00),
        pattern: PatternId::MinimalCross,
        badge: "🍋",
    },
    Theme {
        id: "lavender",
        name: "Lavender Dream",
        description: "Calming purple haze for peaceful moments",
        category: Category::Minimal,
        tier: Tier::Free,
        gradient: diagonal![(0xE0C3FC, 0.0), (0x8EC5FC, 100.0)],
        text_color: Color::hex(0x1E1E1E),
        accent_color: Color::hex(0x8EC5FC),
        pattern: PatternId::LightTexture,
        badge: "💜",
    },
    Theme {
        id: "coral",
        name: "Coral Reef",
        description: "Underwater warmth from tropical seas",
        category: Category::Aesthetic,
        tier: Tier::Free,
        gradient: diagonal![(0xFF9A9E, 0.0), (0xFAD0C4, 100.0)],
        text_color: Color::hex(0xFFFFFF),
        accent_color: Color::hex(0xFF9A9E),
        pattern: PatternId::PaperGrain,
        badge: "🪸",
    },
    Theme {
        id: "mint",
        name: "Mint Fresh",
        description: "Cool refreshing breeze on a summer day",
        category: Category::Minimal,
        tier: Tier::Free,
        gradient: diagonal![(0xA8E6CF, 0.0), (0x56CCF2, 100.0)],
        text_color: Color::hex(0x1E1E1E),
        accent_color: Color::hex(0x56CCF2),
        pattern: PatternId::SoftWaves,
        badge: "🍃",
    },
    Theme {
        id: "peachy",
        name: "Peachy Keen",
        description: "Sweet fruit gradient with warm tones",
        category: Category::Playful,
        tier: Tier::Free,
        gradient: diagonal![(0xFFEAA7, 0.0), (0xFDCB6E, 50.0), (0xFD79A8, 100.0)],
        text_color: Color::hex(0x1E1E1E),
        accent_color: Color::hex(0xFD79A8),
        pattern: PatternId::Halftone,
        badge: "🍑",
    },
    Theme {
        id: "electric",
        name: "Electric Blue",
        description: "High voltage energy crackling bright",
        category: Category::Bold,
        tier: Tier::Free,
        gradient: diagonal![(0x00F5FF, 0.0), (0x0080FF, 50.0), (0x8000FF, 100.0)],
        text_color: Color::hex(0xFFFFFF),
        accent_color: Color::hex(0x00F5FF),
        pattern: PatternId::GridDots,
        badge: "⚡",
    },
    Theme {
        id: "cloud-nine",
        name: "Cloud Nine",
        description: "Soft sky serenity floating on air",
        category: Category::Minimal,
        tier: Tier::Free,
        gradient: diagonal![(0xF0F9FF, 0.0), (0xE0F2FE, 50.0), (0xBAE6FD, 100.0)],
        text_color: Color::hex(0x0C4A6E),
        accent_color: Color::hex(0x0369A1),
        pattern: PatternId::BasicCircles,
        badge: "☁️",
    },
    Theme {
        id: "slate-stone",
        name: "Slate Stone",
        description: "Neutral professional with subtle elegance",
        category: Category::Minimal,
        tier: Tier::Free,
        gradient: diagonal![(0xF8FAFC, 0.0), (0xE2E8F0, 50.0), (0xCBD5E1, 100.0)],
        text_color: Color::hex(0x1E293B),
        accent_color: Color::hex(0x475569),
        pattern: PatternId::LightTexture,
        badge: "⬜",
    },
    Theme {
        id: "blueprint-draft",
        name: "Blueprint",
        description: "Technical precision meets architectural design",
        category: Category::Minimal,
        tier: Tier::Free,
        gradient: diagonal![(0x1E3A8A, 0.0), (0x172554, 100.0)],
        text_color: Color::hex(0xFFFFFF),
        accent_color: Color::hex(0x60A5FA),
        pattern: PatternId::MinimalCross,
        badge: "📐",
    },
    Theme {
        id: "simple-mono",
        name: "Simple Mono",
        description: "Classic black & white timeless design",
        category: Category::Minimal,
        tier: Tier::Free,
        gradient: diagonal![(0x000000, 0.0), (0x434343, 100.0)],
        text_color: Color::hex(0xFFFFFF),
        accent_color: Color::hex(0xFFFFFF),
        pattern: PatternId::SimpleLines,
        badge: "⚫",
    },
    Theme {
        id: "bubblegum",
        name: "Bubblegum Pop",
        description: "Sweet pink candy for playful spirits",
        category: Category::Playful,
        tier: Tier::Free,
        gradient: diagonal![(0xFFB3D9, 0.0), (0xFF69B4, 100.0)],
        text_color: Color::hex(0x831843),
        accent_color: Color::hex(0xBE185D),
        pattern: PatternId::BasicCircles,
        badge: "🍬",
    },
    Theme {
        id: "sunshine",
        name: "Sunshine Day",
        description: "Bright happy yellow radiating warmth",
        category: Category::Playful,
        tier: Tier::Free,
        gradient: diagonal![(0xFEF08A, 0.0), (0xFBBF24, 100.0)],
        text_color: Color::hex(0x713F12),
        accent_color: Color::hex(0xD97706),
        pattern: PatternId::Halftone,
        badge: "☀️",
    },
    Theme {
        id: "cotton-candy",
        name: "Cotton Candy",
        description: "Fairground sweetness spun with joy",
        category: Category::Playful,
        tier: Tier::Free,
        gradient: diagonal![(0xA78BFA, 0.0), (0xF0ABFC, 100.0)],
        text_color: Color::hex(0x1E1E1E),
        accent_color: Color::hex(0xC026D3),
        pattern: PatternId::SoftWaves,
        badge: "🍭",
    },
    // Pro tier.
    Theme {
        id: "galaxy",
        name: "Galaxy Burst",
        description: "Cosmic purple wonders across the universe",
        category: Category::Bold,
        tier: Tier::Pro,
        gradient: diagonal![(0x0F2027, 0.0), (0x203A43, 30.0), (0x2C5364, 60.0), (0x8E44AD, 100.0)],
        text_color: Color::hex(0xFFFFFF),
        accent_color: Color::hex(0x8E44AD),
        pattern: PatternId::DotMatrix,
        badge: "🌌",
    },
    Theme {
        id: "aurora",
        name: "Aurora Lights",
        description: "Northern lights dance in vibrant color",
        category: Category::Aesthetic,
        tier: Tier::Pro,
        gradient: diagonal![(0x00C9FF, 0.0), (0x92FE9D, 50.0), (0xFF6BCB, 100.0)],
        text_color: Color::hex(0xFFFFFF),
        accent_color: Color::hex(0xFF6BCB),
        pattern: PatternId::WaveGradient,
        badge: "🌈",
    },
    Theme {
        id: "urban-concrete",
        name: "Urban Concrete",
        description: "Industrial streetwear with raw texture",
        category: Category::Bold,
        tier: Tier::Pro,
        gradient: diagonal![(0x4B5563, 0.0), (0x374151, 100.0)],
        text_color: Color::hex(0xF3F4F6),
        accent_color: Color::hex(0xD1D5DB),
        pattern: PatternId::ConcreteTexture,
        badge: "🏢",
    },
    Theme {
        id: "carrara-luxe",
        name: "Carrara Marble",
        description: "Italian luxury stone with elegant veins",
        category: Category::Luxury,
        tier: Tier::Pro,
        gradient: diagonal![(0xFAFAFA, 0.0), (0xF5F5F5, 100.0)],
        text_color: Color::hex(0x171717),
        accent_color: Color::hex(0x525252),
        pattern: PatternId::MarbleVeins,
        badge: "🏛️",
    },
    Theme {
        id: "honeycomb-gold",
        name: "Honeycomb",
        description: "Geometric gold cells in perfect harmony",
        category: Category::Luxury,
        tier: Tier::Pro,
        gradient: diagonal![(0xF59E0B, 0.0), (0xD97706, 100.0)],
        text_color: Color::hex(0xFFFBEB),
        accent_color: Color::hex(0xFFF7ED),
        pattern: PatternId::HexagonPattern,
        badge: "🐝",
    },
    Theme {
        id: "vapor-wave",
        name: "Vapor Wave",
        description: "Retro-future aesthetic from the 80s",
        category: Category::Aesthetic,
        tier: Tier::Pro,
        gradient: diagonal![(0x8B5CF6, 0.0), (0xD946EF, 100.0)],
        text_color: Color::hex(0xFFFFFF),
        accent_color: Color::hex(0x22D3EE),
        pattern: PatternId::WaveGradient,
        badge: "📼",
    },
    Theme {
        id: "system-failure",
        name: "System Error",
        description: "Glitchy matrix code in digital chaos",
        category: Category::Bold,
        tier: Tier::Pro,
        gradient: diagonal![(0x022C22, 0.0), (0x064E3B, 100.0)],
        text_color: Color::hex(0x34D399),
        accent_color: Color::hex(0x10B981),
        pattern: PatternId::DotMatrix,
        badge: "👾",
    },
    Theme {
        id: "hazard-warning",
        name: "High Voltage",
        description: "Caution stripes with electric danger",
        category: Category::Bold,
        tier: Tier::Pro,
        gradient: diagonal![(0x18181B, 0.0), (0x27272A, 100.0)],
        text_color: Color::hex(0xFACC15),
        accent_color: Color::hex(0xEAB308),
        pattern: PatternId::DiagonalLines,
        badge: "⚠️",
    },
    Theme {
        id: "ocean-ripple",
        name: "Ocean Ripple",
        description: "Concentric water waves spreading outward",
        category: Category::Aesthetic,
        tier: Tier::Pro,
        gradient: diagonal![(0x0891B2, 0.0), (0x0E7490, 100.0)],
        text_color: Color::hex(0xFFFFFF),
        accent_color: Color::hex(0x06B6D4),
        pattern: PatternId::WaterRipples,
        badge: "💧",
    },
    Theme {
        id: "candy-shop",
        name: "Candy Shop",
        description: "Sweet treat paradise with sugary delights",
        category: Category::Playful,
        tier: Tier::Pro,
        gradient: diagonal![(0xF9A8D4, 0.0), (0xF472B6, 100.0)],
        text_color: Color::hex(0x831843),
        accent_color: Color::hex(0xBE185D),
        pattern: PatternId::CandyDots,
        badge: "🍬",
    },
    Theme {
        id: "bronze-age",
        name: "Bronze Age",
        description: "Ancient metallic warmth of civilizations",
        category: Category::Luxury,
        tier: Tier::Pro,
        gradient: diagonal![(0x78350F, 0.0), (0x92400E, 100.0)],
        text_color: Color::hex(0xFEF3C7),
        accent_color: Color::hex(0xF59E0B),
        pattern: PatternId::HexagonPattern,
        badge: "🪙",
    },
    Theme {
        id: "retro-arcade",
        name: "Retro Arcade",
        description: "8-bit gaming nostalgia with pixel charm",
        category: Category::Playful,
        tier: Tier::Pro,
        gradient: diagonal![(0x7C3AED, 0.0), (0xDB2777, 100.0)],
        text_color: Color::hex(0xFFFFFF),
        accent_color: Color::hex(0xF472B6),
        pattern: PatternId::DotMatrix,
        badge: "🕹️",
    },
    Theme {
        id: "emerald-palace",
        name: "Emerald Palace",
        description: "Royal green luxury fit for royalty",
        category: Category::Luxury,
        tier: Tier::Pro,
        gradient: diagonal![(0x047857, 0.0), (0x065F46, 100.0)],
        text_color: Color::hex(0xD1FAE5),
        accent_color: Color::hex(0x34D399),
        pattern: PatternId::MarbleVeins,
        badge: "💚",
    },
    // Premium tier.
    Theme {
        id: "neon",
        name: "Neon Nights",
        description: "Cyberpunk glow with electric intensity",
        category: Category::Bold,
        tier: Tier::Premium,
        gradient: diagonal![(0xFF006E, 0.0), (0x8338EC, 50.0), (0x3A86FF, 100.0)],
        text_color: Color::hex(0xFFFFFF),
        accent_color: Color::hex(0xFF006E),
        pattern: PatternId::ThermalScan,
        badge: "⚡",
    },
    Theme {
        id: "magma-core",
        name: "Magma Core",
        description: "Volcanic lava cracks deep underground",
        category: Category::Bold,
        tier: Tier::Premium,
        gradient: diagonal![(0x450A0A, 0.0), (0x7F1D1D, 100.0)],
        text_color: Color::hex(0xFECACA),
        accent_color: Color::hex(0xEF4444),
        pattern: PatternId::VolcanicCracks,
        badge: "🌋",
    },
    Theme {
        id: "holographic",
        name: "Holographic",
        description: "Iridescent chrome shifting light spectrum",
        category: Category::Aesthetic,
        tier: Tier::Premium,
        gradient: diagonal![(0xE5E7EB, 0.0), (0x9CA3AF, 50.0), (0xE5E7EB, 100.0)],
        text_color: Color::hex(0x111827),
        accent_color: Color::hex(0x6366F1),
        pattern: PatternId::ChromeReflection,
        badge: "💿",
    },
    Theme {
        id: "midnight-fog",
        name: "Midnight Fog",
        description: "Ethereal dark mist in mysterious layers",
        category: Category::Minimal,
        tier: Tier::Premium,
        gradient: diagonal![(0x312E81, 0.0), (0x1E1B4B, 100.0)],
        text_color: Color::hex(0xC7D2FE),
        accent_color: Color::hex(0x818CF8),
        pattern: PatternId::MistLayers,
        badge: "🌫️",
    },
    Theme {
        id: "liquid-gold",
        name: "Liquid Gold",
        description: "Flowing molten luxury in motion",
        category: Category::Luxury,
        tier: Tier::Premium,
        gradient: diagonal![(0x713F12, 0.0), (0xA16207, 100.0)],
        text_color: Color::hex(0xFEF08A),
        accent_color: Color::hex(0xFACC15),
        pattern: PatternId::LiquidFlow,
        badge: "🧈",
    },
    Theme {
        id: "neural-network",
        name: "Neural Net",
        description: "AI brain synapses firing connections",
        category: Category::Bold,
        tier: Tier::Premium,
        gradient: diagonal![(0x4C1D95, 0.0), (0x2E1065, 100.0)],
        text_color: Color::hex(0xA78BFA),
        accent_color: Color::hex(0xC4B5FD),
        pattern: PatternId::NeuralWeb,
        badge: "🧠",
    },
    Theme {
        id: "northern-lights",
        name: "Northern Lights",
        description: "Polar aurora dance in celestial beauty",
        category: Category::Aesthetic,
        tier: Tier::Premium,
        gradient: diagonal![(0x022C22, 0.0), (0x064E3B, 50.0), (0x065F46, 100.0)],
        text_color: Color::hex(0x6EE7B7),
        accent_color: Color::hex(0x34D399),
        pattern: PatternId::AuroraWaves,
        badge: "✨",
    },
    Theme {
        id: "quantum-realm",
        name: "Quantum Realm",
        description: "Subatomic particles in infinite possibility",
        category: Category::Bold,
        tier: Tier::Premium,
        gradient: diagonal![(0x1E1B4B, 0.0), (0x312E81, 50.0), (0x4C1D95, 100.0)],
        text_color: Color::hex(0xDDD6FE),
        accent_color: Color::hex(0xA78BFA),
        pattern: PatternId::QuantumParticles,
        badge: "⚛️",
    },
    Theme {
        id: "desert-mirage",
        name: "Desert Mirage",
        description: "Shimmering heat waves across endless sand",
        category: Category::Aesthetic,
        tier: Tier::Premium,
        gradient: diagonal![(0x78350F, 0.0), (0x92400E, 50.0), (0xB45309, 100.0)],
        text_color: Color::hex(0xFEF3C7),
        accent_color: Color::hex(0xFBBF24),
        pattern: PatternId::HeatShimmer,
        badge: "🏜️",
    },
    Theme {
        id: "cosmic-dust",
        name: "Cosmic Dust",
        description: "Nebula clouds forming stars in deep space",
        category: Category::Luxury,
        tier: Tier::Premium,
        gradient: diagonal![(0x1E293B, 0.0), (0x334155, 50.0), (0x475569, 100.0)],
        text_color: Color::hex(0xF1F5F9),
        accent_color: Color::hex(0xCBD5E1),
        pattern: PatternId::NebulaCloud,
        badge: "☄️",
    },
    Theme {
        id: "dragon-scale",
        name: "Dragon Scale",
        description: "Mythical armor with iridescent shimmer",
        category: Category::Luxury,
        tier: Tier::Premium,
        gradient: diagonal![(0x166534, 0.0), (0x14532D, 50.0), (0x052E16, 100.0)],
        text_color: Color::hex(0xBBF7D0),
        accent_color: Color::hex(0x4ADE80),
        pattern: PatternId::ScaleArmor,
        badge: "🐉",
    },
    Theme {
        id: "frost-crystal",
        name: "Frost Crystal",
        description: "Frozen fractals in geometric perfection",
        category: Category::Aesthetic,
        tier: Tier::Premium,
        gradient: diagonal![(0x0C4A6E, 0.0), (0x075985, 50.0), (0x0369A1, 100.0)],
        text_color: Color::hex(0xE0F2FE),
        accent_color: Color::hex(0x7DD3FC),
        pattern: PatternId::IceFractal,
        badge: "❄️",
    },
    Theme {
        id: "prism-shard",
        name: "Prism Shard",
        description: "Refracting crystal splitting light beams",
        category: Category::Luxury,
        tier: Tier::Premium,
        gradient: diagonal![(0x1F2937, 0.0), (0x111827, 100.0)],
        text_color: Color::hex(0xFFFFFF),
        accent_color: Color::hex(0xFFFFFF),
        pattern: PatternId::CrystalPrism,
        badge: "💎",
    },
];

static INDEX: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    THEMES
        .iter()
        .enumerate()
        .map(|(i, t)| (t.id, i))
        .collect()
});

/// All themes, in registration order.
pub fn list_themes() -> &'static [Theme] {
    &THEMES
}

pub fn get_theme(id: &str) -> WhisperResult<&'static Theme> {
    INDEX
        .get(id)
        .map(|&i| &THEMES[i])
        .ok_or_else(|| WhisperError::theme_not_found(id))
}

/// Theme the share dialog starts from.
pub const DEFAULT_THEME_ID: &str = "ocean";

#[cfg(test)]
#[path = "../../tests/unit/catalog/registry.rs"]
mod tests;
