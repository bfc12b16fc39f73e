// SPDX-License-Identifier: MIT

//! Waymark: log workouts on a map and keep them across sessions.
//!
//! This crate is the core of a map-based workout tracker: typed workout
//! records with derived performance metrics, a persisted ordered
//! collection, and the controller state machine that turns map clicks and
//! form submissions into stored, rendered records. Map tiles, geolocation
//! and DOM wiring live outside the core and talk to it through
//! [`render::RenderGateway`] and the controller's event entry points.

pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod render;
pub mod store;
pub mod time_utils;

pub use controller::{ControllerState, WorkoutController, WorkoutForm};
pub use error::{AppError, Result};
pub use models::{Coordinates, Workout, WorkoutDetails, WorkoutId, WorkoutKind};
pub use render::RenderGateway;
pub use store::WorkoutStore;
