// SPDX-License-Identifier: MIT

use waymark::models::{Coordinates, Workout, WorkoutId, WorkoutKind};
use waymark::render::RenderGateway;
use waymark::store::{MemorySlot, WorkoutStore};
use waymark::WorkoutController;

/// Render gateway fake that records every command it receives.
#[derive(Debug, Default)]
pub struct RecordingGateway {
    pub markers: Vec<(Coordinates, WorkoutKind, String)>,
    pub list_items: Vec<WorkoutId>,
    pub centered: Vec<Coordinates>,
}

impl RenderGateway for RecordingGateway {
    fn place_marker(&mut self, coords: Coordinates, kind: WorkoutKind, description: &str) {
        self.markers.push((coords, kind, description.to_string()));
    }

    fn append_list_item(&mut self, workout: &Workout) {
        self.list_items.push(workout.id.clone());
    }

    fn center_on(&mut self, coords: Coordinates) {
        self.centered.push(coords);
    }
}

/// Slot whose writes always fail, as when storage quota is exhausted.
/// Reads behave like an empty slot.
#[derive(Debug, Default)]
pub struct FailingSlot;

impl waymark::store::StorageSlot for FailingSlot {
    fn read(&self) -> waymark::Result<Option<String>> {
        Ok(None)
    }

    fn write(&mut self, _value: &str) -> waymark::Result<()> {
        Err(waymark::AppError::Storage("quota exceeded".to_string()))
    }

    fn clear(&mut self) -> waymark::Result<()> {
        Err(waymark::AppError::Storage("quota exceeded".to_string()))
    }
}

/// Controller over a slot that rejects every write.
#[allow(dead_code)]
pub fn test_controller_with_failing_slot(
) -> WorkoutController<FailingSlot, RecordingGateway> {
    WorkoutController::new(
        WorkoutStore::new(FailingSlot),
        RecordingGateway::default(),
    )
}

/// Controller over an in-memory slot and a recording gateway.
#[allow(dead_code)]
pub fn test_controller() -> WorkoutController<MemorySlot, RecordingGateway> {
    WorkoutController::new(
        WorkoutStore::new(MemorySlot::new()),
        RecordingGateway::default(),
    )
}

/// Controller whose slot is pre-seeded with a previous session's value.
#[allow(dead_code)]
pub fn test_controller_with_slot(
    value: String,
) -> WorkoutController<MemorySlot, RecordingGateway> {
    WorkoutController::new(
        WorkoutStore::new(MemorySlot::with_value(value)),
        RecordingGateway::default(),
    )
}
