//! PomoDesk Core - domain models and shared facilities
//!
//! This crate provides the foundational pieces shared by the persistence
//! layer and any consumer of it:
//! - Profile and Project domain models with their display defaults
//! - Error taxonomy for persistence and filesystem failures
//! - Zero-payload change signal ("re-read profile state")
//! - Logging initialization profiles

pub mod errors;
pub mod events;
pub mod logging;
pub mod model;

// Re-export commonly used types
pub use errors::{PomodeskError, Result};
pub use events::ChangeSignal;
pub use model::{Profile, Project, SessionSettings};
