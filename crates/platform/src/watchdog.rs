//! Watchdog collaborator boundary.

/// Hardware watchdog. The tick loop feeds it unconditionally, first thing,
/// every tick, including error paths. If any subsystem regresses into
/// blocking, the missed heartbeat restarts the process; that is the
/// backstop for runaway cooperative code.
pub trait Watchdog {
    /// Reset the watchdog countdown.
    fn feed(&mut self);
}
