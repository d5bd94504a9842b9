//! Deterministic icon colors derived from persona identifiers.
//!
//! The seed is the sum of the identifier's character values. Hue is spread
//! with the golden angle so sequential seeds land far apart on the wheel.

use ratatui::style::Color;
use std::fmt;

/// Golden angle approximation, in degrees.
pub const GOLDEN_ANGLE: f64 = 137.508;

/// Identifier reserved for the placeholder persona.
pub const SENTINEL_ID: &str = "0";

/// Fixed neutral color used for [`SENTINEL_ID`].
pub const SENTINEL_RGB: (u8, u8, u8) = (0x26, 0x26, 0x26);

/// Saturation/lightness register for derived colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Muted, dark tones used for icon blocks on dark surfaces.
    #[default]
    Dark,
    /// Light pastel tones.
    Pastel,
}

impl Palette {
    const fn saturation_base(self) -> u8 {
        match self {
            Self::Dark => 35,
            Self::Pastel => 70,
        }
    }

    const fn lightness_base(self) -> u8 {
        match self {
            Self::Dark => 35,
            Self::Pastel => 85,
        }
    }

    const fn range(self) -> u64 {
        match self {
            Self::Dark | Self::Pastel => 10,
        }
    }
}

/// A color produced by [`icon_color`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconColor {
    /// The reserved neutral color for the placeholder identifier.
    Sentinel,
    /// A derived HSL color.
    Hsl {
        /// Hue in degrees, always in `[0, 360)`.
        hue: f64,
        /// Saturation percentage.
        saturation: u8,
        /// Lightness percentage.
        lightness: u8,
    },
}

impl IconColor {
    /// Convert to 8-bit RGB components.
    #[must_use]
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Sentinel => SENTINEL_RGB,
            Self::Hsl {
                hue,
                saturation,
                lightness,
            } => hsl_to_rgb(
                hue,
                f64::from(saturation) / 100.0,
                f64::from(lightness) / 100.0,
            ),
        }
    }
}

impl From<IconColor> for Color {
    fn from(color: IconColor) -> Self {
        let (r, g, b) = color.to_rgb();
        Self::Rgb(r, g, b)
    }
}

impl fmt::Display for IconColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sentinel => {
                let (r, g, b) = SENTINEL_RGB;
                write!(f, "#{r:02x}{g:02x}{b:02x}")
            }
            Self::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({hue}, {saturation}%, {lightness}%)"),
        }
    }
}

/// Sum of the character values of `id`.
#[must_use]
pub fn seed_of(id: &str) -> u64 {
    id.chars().map(|ch| u64::from(u32::from(ch))).sum()
}

/// Derive the icon color for an identifier.
///
/// The same identifier always yields the same color. `"0"` maps to
/// [`IconColor::Sentinel`] for every palette.
#[must_use]
pub fn icon_color(id: &str, palette: Palette) -> IconColor {
    if id == SENTINEL_ID {
        return IconColor::Sentinel;
    }

    let seed = seed_of(id);
    let offset = u8::try_from(seed % palette.range()).unwrap_or(0);

    IconColor::Hsl {
        hue: hue_of(seed),
        saturation: palette.saturation_base().saturating_add(offset),
        lightness: palette.lightness_base().saturating_add(offset),
    }
}

/// Color for any displayable identifier, hashed through its string form.
#[must_use]
pub fn icon_color_for(id: &impl fmt::Display, palette: Palette) -> IconColor {
    icon_color(&id.to_string(), palette)
}

#[expect(
    clippy::cast_precision_loss,
    reason = "seeds are character sums and stay far below 2^52"
)]
fn hue_of(seed: u64) -> f64 {
    let hue = (seed as f64 * GOLDEN_ANGLE) % 360.0;
    // Float remainder can round up to exactly 360 for huge seeds.
    if hue >= 360.0 { 0.0 } else { hue }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "channel values are clamped to 0..=255 before the cast"
)]
fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let chroma = (1.0 - 2.0f64.mul_add(lightness, -1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector {
        s if s < 1.0 => (chroma, x, 0.0),
        s if s < 2.0 => (x, chroma, 0.0),
        s if s < 3.0 => (0.0, chroma, x),
        s if s < 4.0 => (0.0, x, chroma),
        s if s < 5.0 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}
