//! Network collaborator boundary.
//!
//! Connection and wall-clock sync are owned by a separate network stack.
//! The core only polls the two predicates on its own retry timers and fires
//! the two requests; both requests are fire-and-forget.

/// Network and time-sync collaborator.
pub trait NetworkLink {
    /// Whether the link is currently up.
    fn is_connected(&self) -> bool;

    /// Kick off a connection attempt. Fire-and-forget; the core re-polls
    /// [`is_connected`](NetworkLink::is_connected) on its retry interval.
    fn connect(&mut self);

    /// Whether the wall clock has been synchronized at least once.
    fn time_initialized(&self) -> bool;

    /// Request a wall-clock sync attempt. Fire-and-forget.
    fn sync_time(&mut self);
}
