// SPDX-License-Identifier: MIT

//! Workout record model and derived-metric computation.
//!
//! A [`Workout`] is immutable after creation: the derived metric and the
//! description are computed exactly once in the validated constructors
//! and stored alongside the raw fields. The variant lives in the
//! serialized form as a `"kind"` tag, so rehydrating a persisted record
//! reconstructs the correct variant rather than a bare data bag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::time_utils::month_day_label;

/// Map location a workout was logged at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Opaque short workout identifier, unique within a session's collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkoutId(String);

impl WorkoutId {
    /// Derive an id token from a millisecond timestamp (its last five
    /// digits). Uniqueness against the live collection is the caller's
    /// job; see [`crate::controller::WorkoutController`].
    pub fn from_millis(millis: i64) -> Self {
        Self(format!("{:05}", millis.rem_euclid(100_000)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Activity kind, the variant discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Capitalized label used in descriptions ("Running", "Cycling").
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }
}

/// Variant-specific fields plus the derived metric.
///
/// Internally tagged so the persisted form keeps the variant identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WorkoutDetails {
    Running {
        /// Steps per minute
        cadence_spm: u32,
        /// Derived: duration / distance
        pace_min_per_km: f64,
    },
    Cycling {
        /// Net elevation gain in meters (may be zero or negative)
        elevation_gain_m: f64,
        /// Derived: distance / (duration / 60)
        speed_km_per_h: f64,
    },
}

/// Running pace in minutes per kilometer.
pub fn pace_min_per_km(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

/// Cycling speed in kilometers per hour.
pub fn speed_km_per_h(distance_km: f64, duration_min: f64) -> f64 {
    distance_km / (duration_min / 60.0)
}

/// One logged workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Short unique token, assigned at creation
    pub id: WorkoutId,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Map location the workout was logged at
    pub coords: Coordinates,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Duration in minutes
    pub duration_min: f64,
    /// "<Kind> on <Month name> <day>", set once at creation
    pub description: String,
    #[serde(flatten)]
    pub details: WorkoutDetails,
}

impl Workout {
    /// Build a running workout, or fail without constructing anything if
    /// a numeric constraint is violated.
    pub fn new_running(
        id: WorkoutId,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: u32,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        check_positive("distance", distance_km)?;
        check_positive("duration", duration_min)?;
        if cadence_spm == 0 {
            return Err(AppError::InvalidInput(
                "cadence must be a positive number".to_string(),
            ));
        }

        Ok(Self {
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            description: describe(WorkoutKind::Running, created_at),
            details: WorkoutDetails::Running {
                cadence_spm,
                pace_min_per_km: pace_min_per_km(distance_km, duration_min),
            },
        })
    }

    /// Build a cycling workout. Elevation gain may be zero or negative
    /// (net descent) but must be finite.
    pub fn new_cycling(
        id: WorkoutId,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        check_positive("distance", distance_km)?;
        check_positive("duration", duration_min)?;
        if !elevation_gain_m.is_finite() {
            return Err(AppError::InvalidInput(
                "elevation gain must be a number".to_string(),
            ));
        }

        Ok(Self {
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            description: describe(WorkoutKind::Cycling, created_at),
            details: WorkoutDetails::Cycling {
                elevation_gain_m,
                speed_km_per_h: speed_km_per_h(distance_km, duration_min),
            },
        })
    }

    /// The variant discriminant.
    pub fn kind(&self) -> WorkoutKind {
        match self.details {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    /// The derived performance metric: pace for running, speed for
    /// cycling. Reads the stored value; never recomputed.
    pub fn metric(&self) -> f64 {
        match self.details {
            WorkoutDetails::Running {
                pace_min_per_km, ..
            } => pace_min_per_km,
            WorkoutDetails::Cycling {
                speed_km_per_h, ..
            } => speed_km_per_h,
        }
    }
}

fn describe(kind: WorkoutKind, created_at: DateTime<Utc>) -> String {
    format!("{} on {}", kind.label(), month_day_label(created_at))
}

fn check_positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::InvalidInput(format!(
            "{} must be a positive number",
            field
        )));
    }
    Ok(())
}
