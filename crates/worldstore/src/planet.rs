//! Planet records: orbital elements plus render attributes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

fn default_color() -> String {
    "#FFFFFF".to_string()
}

/// A planet record as returned by the store
///
/// Orbital elements describe the orbit around the system barycenter:
/// semi-major axis (positive, natural story units), eccentricity in
/// [0, 1), inclination and current orbital angle in degrees. The render
/// attributes (colors as hex strings, atmosphere intensity in [0, 1])
/// pass through the geometry engine untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Planet {
    pub id: Uuid,

    /// System this planet orbits
    pub system_id: Uuid,

    #[serde(default)]
    pub name: String,

    /// Semi-major axis in natural story units (positive)
    pub semi_major_axis: f64,

    /// Orbital eccentricity, 0 ≤ e < 1
    #[serde(default)]
    pub eccentricity: f64,

    /// Orbital plane inclination in degrees
    #[serde(default)]
    pub inclination_deg: f64,

    /// Current position along the orbit, degrees
    #[serde(default)]
    pub orbit_angle_deg: f64,

    /// Display size input in relative units
    pub display_radius: f64,

    /// Surface color, hex string
    #[serde(default = "default_color")]
    pub primary_color: String,

    /// Atmosphere glow color, hex string
    #[serde(default = "default_color")]
    pub atmosphere_color: String,

    /// Atmosphere glow strength in [0, 1]
    #[serde(default)]
    pub atmosphere_intensity: f64,
}

impl Planet {
    /// Whether this record belongs to the given system
    pub fn belongs_to(&self, system_id: Uuid) -> bool {
        self.system_id == system_id
    }
}
