//! Storage layer: the persisted workout collection and its backing slot.

pub mod slot;
pub mod workouts;

pub use slot::{FileSlot, MemorySlot, StorageSlot};
pub use workouts::WorkoutStore;

/// Storage slot keys as constants.
pub mod keys {
    /// The single slot holding the serialized workout sequence.
    pub const WORKOUTS: &str = "workouts";
}
