//! Business-specific UI components with Message handling

pub mod confetti;
pub mod wheel;

pub use confetti::Confetti;
