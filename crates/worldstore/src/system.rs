//! Star system records and their galaxy-scale placement.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Where a system sits in the galaxy map, in cylindrical coordinates.
///
/// The store positions every system once: an azimuth around the galactic
/// center (degrees), a radial distance from it, and an elevation off the
/// galactic plane. Distances are in display units, not physical ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct GalacticPosition {
    pub azimuth_deg: f64,
    pub distance: f64,
    pub elevation: f64,
}

/// System classification by stellar multiplicity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum SystemKind {
    Single,
    Binary,
    Multiple,
}

impl SystemKind {
    /// Classification implied by a component count
    pub fn from_star_count(count: usize) -> Self {
        match count {
            0 | 1 => Self::Single,
            2 => Self::Binary,
            _ => Self::Multiple,
        }
    }
}

impl std::fmt::Display for SystemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "Single"),
            Self::Binary => write!(f, "Binary"),
            Self::Multiple => write!(f, "Multiple"),
        }
    }
}

/// A stellar component of a system, as authored in the store
///
/// Only the spectral code and physical radius are required; mass and the
/// orbital hints are author-optional. Absent or non-positive mass is
/// treated as 1 solar-relative unit by the layout solver, and the orbital
/// hints only ever act as a lower bound on the derived layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Star {
    pub id: Uuid,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Single-letter spectral code as sent by the store (e.g. "G", "m").
    /// Unrecognized codes are legal and fall back to a neutral rendering.
    pub spectral_class: String,

    /// Physical radius in relative units (positive)
    pub radius: f64,

    /// Relative mass (positive when present)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,

    /// Author-specified orbital separation, in natural story units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbit_radius: Option<f64>,

    /// Author-specified orbital angle in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbit_angle_deg: Option<f64>,
}

impl Star {
    /// Mass with the store's "absent or non-positive means 1" rule applied
    pub fn effective_mass(&self) -> f64 {
        match self.mass {
            Some(m) if m > 0.0 => m,
            _ => 1.0,
        }
    }
}

/// A star system record: identity, display name, stellar components and
/// galaxy placement
///
/// `stars` is non-empty by upstream contract (every system has at least
/// one star), but consumers tolerate a partial snapshot rather than
/// panicking; a fetch may be cancelled mid-session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct StarSystem {
    pub id: Uuid,

    /// World this system belongs to
    pub world_id: Uuid,

    /// Proper name; may be empty for unnamed systems
    #[serde(default)]
    pub name: String,

    pub kind: SystemKind,

    pub position: GalacticPosition,

    /// Stellar components, primary first
    pub stars: Vec<Star>,
}

impl StarSystem {
    /// Returns the primary (first) star, if the snapshot has one
    pub fn primary_star(&self) -> Option<&Star> {
        self.stars.first()
    }

    /// Combined mass of all components, with the defaulting rule applied
    pub fn total_mass(&self) -> f64 {
        self.stars.iter().map(Star::effective_mass).sum()
    }

    /// Generate a short catalog designation from the system's UUID
    ///
    /// Format: two uppercase letters + 4 digits (e.g. "KV-4729").
    /// Deterministic - the same UUID always produces the same designation.
    pub fn catalog_name(&self) -> String {
        let bytes = self.id.as_bytes();
        let prefix1 = (bytes[0] % 26 + b'A') as char;
        let prefix2 = (bytes[1] % 26 + b'A') as char;
        let number = u16::from_le_bytes([bytes[2], bytes[3]]) % 10000;
        format!("{}{}-{:04}", prefix1, prefix2, number)
    }

    /// Display name: the proper name when set, otherwise the catalog name
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            self.catalog_name()
        } else {
            self.name.clone()
        }
    }
}
