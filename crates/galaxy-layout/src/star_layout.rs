//! Barycentric multi-star placement.
//!
//! Stars of one system are laid out on circular orbits around a shared
//! barycenter at the local origin. Orbit radii are inversely proportional
//! to mass with equal angular spacing, which keeps the mass-weighted sum
//! of positions at zero for any rotation phase. The shared radius factor
//! is raised until every adjacent pair of display disks clears a safety
//! margin, and further until any author-specified separation is honored.

use std::f64::consts::PI;

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use worldstore::Star;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::spectral::{DisplayColor, SpectralClass};

/// Minimum clearance between adjacent display disks, as a multiple of
/// their combined radii
pub const SAFETY_FACTOR: f64 = 2.5;

/// Display units per natural story unit of authored orbital separation
pub const STORY_SEPARATION_SCALE: f64 = 20.0;

/// Resolved placement of one star around the system barycenter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct StarPlacement {
    pub display_radius: f64,
    pub color: DisplayColor,
    /// Distance from the barycenter; 0 for a sole star
    pub orbit_radius: f64,
    /// Angular slot on the shared orbit, radians
    pub angle_rad: f64,
}

impl StarPlacement {
    /// Scene position on the orbital plane (y = 0)
    pub fn position(&self) -> Point3<f64> {
        Point3::new(
            self.orbit_radius * self.angle_rad.cos(),
            0.0,
            self.orbit_radius * self.angle_rad.sin(),
        )
    }
}

/// Star layout for one system: ordered placements plus the outer bound
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct StarLayout {
    /// Placements in the order the store listed the stars
    pub placements: Vec<StarPlacement>,
    /// Outermost reach of the configuration: max(orbit radius + disk radius)
    pub max_extent: f64,
}

/// Computes the star layout for one system.
///
/// A single star sits at the barycenter with orbit radius 0. Two or more
/// stars are spaced `2π/N` apart at radii `k / massᵢ`, where `k` is the
/// larger of the collision-avoidance bound and the story-separation bound.
/// Absent or non-positive masses count as 1. The empty list (a partial
/// snapshot) yields an empty layout with zero extent rather than a panic.
pub fn solve(stars: &[Star]) -> StarLayout {
    let visuals: Vec<(f64, DisplayColor)> = stars
        .iter()
        .map(|star| {
            let class = SpectralClass::from_code(&star.spectral_class);
            (class.display_radius(star.radius), class.color())
        })
        .collect();

    // The primary's authored angle sets the rotation phase of the whole
    // configuration; equal spacing is preserved regardless.
    let phase = stars
        .first()
        .and_then(|star| star.orbit_angle_deg)
        .map(f64::to_radians)
        .unwrap_or(0.0);

    let placements: Vec<StarPlacement> = match stars.len() {
        0 => Vec::new(),
        1 => {
            let (display_radius, color) = visuals[0];
            vec![StarPlacement {
                display_radius,
                color,
                orbit_radius: 0.0,
                angle_rad: phase,
            }]
        }
        n => {
            let masses: Vec<f64> = stars.iter().map(Star::effective_mass).collect();
            let radii: Vec<f64> = visuals.iter().map(|(radius, _)| *radius).collect();
            let spacing = 2.0 * PI / n as f64;

            let k = collision_bound(&masses, &radii, spacing).max(story_bound(stars, &masses));

            visuals
                .iter()
                .enumerate()
                .map(|(i, &(display_radius, color))| StarPlacement {
                    display_radius,
                    color,
                    orbit_radius: k / masses[i],
                    angle_rad: phase + spacing * i as f64,
                })
                .collect()
        }
    };

    let max_extent = placements
        .iter()
        .map(|p| p.orbit_radius + p.display_radius)
        .fold(0.0, f64::max);

    StarLayout {
        placements,
        max_extent,
    }
}

/// Minimum radius factor that keeps every adjacent pair of disks separated
/// by `(Rᵢ + Rⱼ) × SAFETY_FACTOR`.
///
/// At radii `k/mᵢ` and `k/mⱼ` with the spacing angle between them, the
/// law-of-cosines separation scales linearly in `k`, so each pair has a
/// closed-form minimal `k`; the bound is the max over all pairs.
fn collision_bound(masses: &[f64], radii: &[f64], spacing: f64) -> f64 {
    let n = masses.len();
    let cos_spacing = spacing.cos();

    let mut k: f64 = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;

        // Separation per unit k between the two orbit slots
        let unit_separation = (1.0 / (masses[i] * masses[i]) + 1.0 / (masses[j] * masses[j])
            - 2.0 * cos_spacing / (masses[i] * masses[j]))
            .sqrt();

        let required = (radii[i] + radii[j]) * SAFETY_FACTOR;
        k = k.max(required / unit_separation);
    }

    k
}

/// Radius factor honoring the largest author-specified orbital separation,
/// or 0 when no star carries a hint.
///
/// For a binary the factor follows from `r₀ + r₁ = separation` in closed
/// form; for higher multiplicity a symmetric approximation spreads the
/// separation over the configuration.
fn story_bound(stars: &[Star], masses: &[f64]) -> f64 {
    let max_hint = stars
        .iter()
        .filter_map(|star| star.orbit_radius)
        .fold(0.0, f64::max);
    if max_hint <= 0.0 {
        return 0.0;
    }

    let separation = max_hint * STORY_SEPARATION_SCALE;

    if masses.len() == 2 {
        separation * masses[0] * masses[1] / (masses[0] + masses[1])
    } else {
        let total_mass: f64 = masses.iter().sum();
        separation * total_mass / masses.len() as f64
    }
}
