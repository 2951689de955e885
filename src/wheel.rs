//! Rotary wheel gesture handling
//!
//! - `engine`: the pointer-to-minutes state machine (pure, host-independent)

pub mod engine;

pub use engine::{Engine, EngineEvent, Published};
