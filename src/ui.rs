//! UI module for the booking timer
//!
//! # Architecture
//!
//! The UI is organized into three layers:
//!
//! - **Primitives** (`primitives`): Low-level `canvas::Program` and
//!   `Widget` trait implementations
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling

pub mod components;
pub mod primitives;
pub mod theme;
pub mod widgets;
