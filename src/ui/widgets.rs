//! Reusable UI widgets - composable components without business logic
//!
//! Widgets must not depend on `crate::app`; they publish caller-supplied
//! messages instead.

pub mod dial_surface;

pub use dial_surface::DialSurface;
