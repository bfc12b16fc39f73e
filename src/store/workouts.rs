// SPDX-License-Identifier: MIT

//! The session's workout collection and its persistence round trip.
//!
//! The store owns the ordered sequence (insertion order = creation order)
//! and is the sole writer of the persisted representation: every persist
//! replaces the slot value wholesale with the serialized full sequence.

use crate::error::{AppError, Result};
use crate::models::{Workout, WorkoutId};
use crate::store::slot::StorageSlot;

/// Ordered workout collection backed by a persistent slot.
pub struct WorkoutStore<S: StorageSlot> {
    slot: S,
    workouts: Vec<Workout>,
}

impl<S: StorageSlot> WorkoutStore<S> {
    /// Empty store over `slot`. Call [`rehydrate`](Self::rehydrate) to
    /// load a previous session.
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            workouts: Vec::new(),
        }
    }

    /// Append a record to the end of the in-memory sequence. Persistence
    /// is explicit; in the canonical flow this is immediately followed by
    /// [`persist`](Self::persist).
    pub fn append(&mut self, workout: Workout) {
        self.workouts.push(workout);
    }

    /// Serialize the full sequence into the slot, replacing any prior
    /// value. Best-effort: on failure the in-memory sequence remains
    /// authoritative for the session.
    pub fn persist(&mut self) -> Result<()> {
        let serialized = serde_json::to_string(&self.workouts)
            .map_err(|e| AppError::Storage(format!("Failed to serialize workouts: {}", e)))?;
        self.slot.write(&serialized)
    }

    /// Load the persisted sequence. An absent or unparsable slot leaves
    /// the sequence empty: that is a first run, not an error.
    pub fn rehydrate(&mut self) {
        let raw = match self.slot.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No persisted workouts, starting empty");
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted workouts, starting empty");
                return;
            }
        };

        match serde_json::from_str::<Vec<Workout>>(&raw) {
            Ok(workouts) => {
                tracing::info!(count = workouts.len(), "Rehydrated persisted workouts");
                self.workouts = workouts;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Persisted workouts unparsable, starting empty");
            }
        }
    }

    /// Clear the slot and the in-memory sequence. Destructive and
    /// unrecoverable; any confirmation UX belongs to the caller.
    pub fn reset(&mut self) -> Result<()> {
        self.slot.clear()?;
        self.workouts.clear();
        Ok(())
    }

    /// Linear lookup by id.
    pub fn find_by_id(&self, id: &WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|w| &w.id == id)
    }

    /// The stored sequence, in insertion order.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}
