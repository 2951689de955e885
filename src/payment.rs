//! Payment collaborator
//!
//! The wheel only ever talks to payments through this seam: one request
//! per confirm sequence, one settlement back. The demo handler below
//! stands in for a real processor; a host application replaces it.

use std::time::Duration;

/// Charge for a signed minute delta. Resolves to the settlement result;
/// latency is entirely up to the processor and the caller waits
/// indefinitely.
pub async fn process(minutes: i32, cost: f64) -> bool {
    tracing::info!(minutes, cost, "requesting payment");
    tokio::time::sleep(Duration::from_millis(800)).await;
    tracing::info!(minutes, "payment approved");
    true
}
