//! Application messages

/// All events the update loop handles
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer grabbed the dial at the given angle (degrees)
    DialGrabbed(f32),
    /// Pointer moved while dragging the dial
    DialTurned(f32),
    /// Pointer released the dial
    DialReleased,
    /// The overlay hub was tapped (cancels a running confirm sequence)
    HubPressed,
    /// Per-frame animation driver while anything moves
    AnimationTick,
    /// One-second countdown heartbeat
    CountdownTick,
    /// Payment collaborator settled the outstanding request
    PaymentSettled(bool),
}
