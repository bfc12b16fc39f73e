// SPDX-License-Identifier: MIT

//! Render command sink consumed by the core.
//!
//! The map/DOM layer implements this; the core issues commands and makes
//! no assumption about rendering success (no return values).

use crate::models::{Coordinates, Workout, WorkoutKind};

/// Sink for render commands issued by the controller.
pub trait RenderGateway {
    /// Place a popup marker for a workout at its coordinates.
    fn place_marker(&mut self, coords: Coordinates, kind: WorkoutKind, description: &str);

    /// Append a workout entry to the sidebar list.
    fn append_list_item(&mut self, workout: &Workout);

    /// Center the map view on the given coordinates.
    fn center_on(&mut self, coords: Coordinates);
}
