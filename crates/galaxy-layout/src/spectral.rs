//! Spectral classification to display color and size.
//!
//! The store sends bare single-letter spectral codes; everything visual is
//! derived here. Display radii are deliberately compressed so no single
//! star dominates the view regardless of how extreme the story data is.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Display radius of a G-class star with unit physical radius
pub const BASE_STAR_RADIUS: f64 = 1.0;

/// Clamp range applied to the authored physical radius
pub const RADIUS_CLAMP_MIN: f64 = 0.6;
pub const RADIUS_CLAMP_MAX: f64 = 2.0;

/// Main-sequence spectral classification, single-letter codes
///
/// Anything outside the O–M sequence parses as `Unknown` and renders in a
/// neutral color at baseline size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
    Unknown,
}

impl SpectralClass {
    /// Parse a store code, case-insensitively
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "O" => Self::O,
            "B" => Self::B,
            "A" => Self::A,
            "F" => Self::F,
            "G" => Self::G,
            "K" => Self::K,
            "M" => Self::M,
            _ => Self::Unknown,
        }
    }

    /// Characteristic display color for this class
    pub fn color(&self) -> DisplayColor {
        match self {
            Self::O => DisplayColor::new(155, 176, 255),
            Self::B => DisplayColor::new(170, 191, 255),
            Self::A => DisplayColor::new(202, 215, 255),
            Self::F => DisplayColor::new(248, 247, 255),
            Self::G => DisplayColor::new(255, 244, 234),
            Self::K => DisplayColor::new(255, 210, 161),
            Self::M => DisplayColor::new(255, 204, 111),
            Self::Unknown => DisplayColor::NEUTRAL,
        }
    }

    /// Size multiplier relative to the G baseline
    ///
    /// Hot classes render larger, cool dwarfs smaller. The ordering is
    /// what matters for legibility, not the exact physical radii.
    pub fn size_multiplier(&self) -> f64 {
        match self {
            Self::O => 1.8,
            Self::B => 1.6,
            Self::A => 1.25,
            Self::F => 1.1,
            Self::G => 1.0,
            Self::K => 0.85,
            Self::M => 0.7,
            Self::Unknown => 1.0,
        }
    }

    /// On-screen radius for a star of this class
    ///
    /// The authored physical radius is clamped to [0.6, 2.0] before the
    /// class multiplier is applied. Always positive.
    pub fn display_radius(&self, physical_radius: f64) -> f64 {
        let clamped = physical_radius.clamp(RADIUS_CLAMP_MIN, RADIUS_CLAMP_MAX);
        BASE_STAR_RADIUS * self.size_multiplier() * clamped
    }
}

impl std::fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            Self::O => "O",
            Self::B => "B",
            Self::A => "A",
            Self::F => "F",
            Self::G => "G",
            Self::K => "K",
            Self::M => "M",
            Self::Unknown => "?",
        };
        write!(f, "{}", code)
    }
}

/// Convenience lookup straight from a store code
pub fn color_for(code: &str) -> DisplayColor {
    SpectralClass::from_code(code).color()
}

/// An sRGB display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct DisplayColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl DisplayColor {
    /// Fallback for unknown spectral codes and unparseable authored colors
    pub const NEUTRAL: DisplayColor = DisplayColor {
        r: 200,
        g: 200,
        b: 200,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as "#RRGGBB"
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse a "#RRGGBB" or "RRGGBB" string
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }
}
