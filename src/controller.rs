// SPDX-License-Identifier: MIT

//! Workout-management state machine.
//!
//! Handles the core workflow:
//! 1. Map click opens the form and pins the clicked coordinates
//! 2. Form submission is parsed and validated
//! 3. A validated record is constructed, appended and persisted
//! 4. Marker and list render commands go out through the gateway
//!
//! All entry points run to completion synchronously; the hosting UI layer
//! registers them as event handlers and calls them with fully-specified
//! arguments.

use chrono::{DateTime, Utc};

use crate::error::{AppError, Result};
use crate::models::{Coordinates, Workout, WorkoutId, WorkoutKind};
use crate::render::RenderGateway;
use crate::store::{StorageSlot, WorkoutStore};

/// Controller lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerState {
    /// No pending form.
    Idle,
    /// A map location was chosen and the form is open. There is no
    /// timeout; an abandoned form just stays here until the next event.
    AwaitingInput {
        /// Coordinates held between map click and submission
        pending: Coordinates,
    },
}

/// Raw form values as submitted by the UI. Numeric fields arrive as text
/// (the form inputs are text boxes); the controller parses them.
#[derive(Debug, Clone)]
pub struct WorkoutForm {
    pub kind: WorkoutKind,
    pub distance: String,
    pub duration: String,
    /// Required for running, ignored for cycling
    pub cadence: String,
    /// Required for cycling, ignored for running
    pub elevation_gain: String,
}

impl WorkoutForm {
    pub fn running(
        distance: impl Into<String>,
        duration: impl Into<String>,
        cadence: impl Into<String>,
    ) -> Self {
        Self {
            kind: WorkoutKind::Running,
            distance: distance.into(),
            duration: duration.into(),
            cadence: cadence.into(),
            elevation_gain: String::new(),
        }
    }

    pub fn cycling(
        distance: impl Into<String>,
        duration: impl Into<String>,
        elevation_gain: impl Into<String>,
    ) -> Self {
        Self {
            kind: WorkoutKind::Cycling,
            distance: distance.into(),
            duration: duration.into(),
            cadence: String::new(),
            elevation_gain: elevation_gain.into(),
        }
    }
}

/// Orchestrates form submission, record construction, rendering and
/// persistence over a store and a render gateway it owns.
pub struct WorkoutController<S: StorageSlot, R: RenderGateway> {
    store: WorkoutStore<S>,
    gateway: R,
    state: ControllerState,
}

impl<S: StorageSlot, R: RenderGateway> WorkoutController<S, R> {
    pub fn new(store: WorkoutStore<S>, gateway: R) -> Self {
        Self {
            store,
            gateway,
            state: ControllerState::Idle,
        }
    }

    /// Rehydrate the persisted collection and replay list entries for
    /// every restored record, in stored order. List rendering has no map
    /// dependency, so this runs at startup before the map exists; marker
    /// replay waits for [`on_map_ready`](Self::on_map_ready).
    pub fn bootstrap(&mut self) {
        self.store.rehydrate();
        for workout in self.store.workouts() {
            self.gateway.append_list_item(workout);
        }
    }

    /// Replay marker placement for every stored record, in stored order.
    /// Called once the map surface becomes available; never called if
    /// geolocation fails, which leaves the list untouched but the map
    /// features unavailable.
    pub fn on_map_ready(&mut self) {
        for workout in self.store.workouts() {
            self.gateway
                .place_marker(workout.coords, workout.kind(), &workout.description);
        }
    }

    /// A map click pins the clicked coordinates and opens the form. A
    /// second click before submission replaces the pending coordinates.
    pub fn on_map_clicked(&mut self, coords: Coordinates) {
        tracing::debug!(lat = coords.lat, lng = coords.lng, "Map clicked, awaiting form input");
        self.state = ControllerState::AwaitingInput { pending: coords };
    }

    /// Validated submission path.
    ///
    /// On success the record is constructed, appended, persisted
    /// (best-effort), rendered as marker and list entry, and the state
    /// returns to `Idle` (the UI hides and clears the form). On failure
    /// the error carries a user-visible message, the form stays open and
    /// nothing else changes.
    pub fn on_form_submitted(&mut self, form: &WorkoutForm) -> Result<()> {
        let ControllerState::AwaitingInput { pending } = self.state else {
            // Not reachable under correct wiring: the form is hidden in Idle.
            return Err(AppError::InvalidInput(
                "no map location selected".to_string(),
            ));
        };

        let distance_km = parse_positive("distance", &form.distance)?;
        let duration_min = parse_positive("duration", &form.duration)?;

        let now = Utc::now();
        let id = self.fresh_id(now);
        let workout = match form.kind {
            WorkoutKind::Running => {
                let cadence_spm = parse_cadence(&form.cadence)?;
                Workout::new_running(id, pending, distance_km, duration_min, cadence_spm, now)?
            }
            WorkoutKind::Cycling => {
                let elevation_gain_m = parse_elevation(&form.elevation_gain)?;
                Workout::new_cycling(id, pending, distance_km, duration_min, elevation_gain_m, now)?
            }
        };

        tracing::info!(
            id = %workout.id,
            kind = workout.kind().label(),
            distance_km,
            duration_min,
            "Workout created"
        );

        self.store.append(workout.clone());
        if let Err(e) = self.store.persist() {
            tracing::warn!(error = %e, "Failed to persist workouts; in-memory state kept");
        }

        self.gateway
            .place_marker(workout.coords, workout.kind(), &workout.description);
        self.gateway.append_list_item(&workout);

        self.state = ControllerState::Idle;
        Ok(())
    }

    /// A list entry was activated: center the map on that workout. An
    /// unknown id indicates a wiring defect and is silently ignored.
    pub fn on_list_item_activated(&mut self, id: &WorkoutId) {
        match self.store.find_by_id(id) {
            Some(workout) => self.gateway.center_on(workout.coords),
            None => tracing::debug!(id = %id, "Activated list item not in collection, ignoring"),
        }
    }

    /// Clear the persisted slot and the session collection.
    pub fn reset(&mut self) -> Result<()> {
        self.store.reset()
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn store(&self) -> &WorkoutStore<S> {
        &self.store
    }

    pub fn gateway(&self) -> &R {
        &self.gateway
    }

    /// Id token from the creation timestamp, bumped until free in the
    /// session collection (the raw five-digit token collides for fast
    /// successive submissions).
    fn fresh_id(&self, now: DateTime<Utc>) -> WorkoutId {
        let mut millis = now.timestamp_millis();
        loop {
            let id = WorkoutId::from_millis(millis);
            if self.store.find_by_id(&id).is_none() {
                return id;
            }
            millis += 1;
        }
    }
}

/// Parse a required numeric field: must parse, be finite and positive.
fn parse_positive(field: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| invalid_number(field))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid_number(field));
    }
    Ok(value)
}

/// Cadence is a positive whole number of steps per minute.
fn parse_cadence(raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(AppError::InvalidInput(
            "cadence must be a positive whole number".to_string(),
        )),
    }
}

/// Elevation gain may be zero or negative (net descent) but must parse
/// to a finite number.
fn parse_elevation(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| invalid_finite("elevation gain"))?;
    if !value.is_finite() {
        return Err(invalid_finite("elevation gain"));
    }
    Ok(value)
}

fn invalid_number(field: &str) -> AppError {
    AppError::InvalidInput(format!("{} must be a positive number", field))
}

fn invalid_finite(field: &str) -> AppError {
    AppError::InvalidInput(format!("{} must be a number", field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("distance", "5").unwrap(), 5.0);
        assert_eq!(parse_positive("distance", " 2.5 ").unwrap(), 2.5);

        assert!(parse_positive("distance", "0").is_err());
        assert!(parse_positive("distance", "-3").is_err());
        assert!(parse_positive("distance", "").is_err());
        assert!(parse_positive("distance", "abc").is_err());
        assert!(parse_positive("distance", "NaN").is_err());
        assert!(parse_positive("distance", "inf").is_err());
    }

    #[test]
    fn test_parse_cadence() {
        assert_eq!(parse_cadence("150").unwrap(), 150);
        assert!(parse_cadence("0").is_err());
        assert!(parse_cadence("-10").is_err());
        assert!(parse_cadence("150.5").is_err());
        assert!(parse_cadence("").is_err());
    }

    #[test]
    fn test_parse_elevation() {
        assert_eq!(parse_elevation("523").unwrap(), 523.0);
        assert_eq!(parse_elevation("-120").unwrap(), -120.0);
        assert_eq!(parse_elevation("0").unwrap(), 0.0);
        assert!(parse_elevation("NaN").is_err());
        assert!(parse_elevation("").is_err());
    }
}
