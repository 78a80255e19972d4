//! Domain module for partition state tracking
//!
//! Contains value objects, entities, the transition table, errors, and invariants.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod transitions;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use transitions::{is_transition_allowed, permitted_successors};
pub use value_objects::*;
