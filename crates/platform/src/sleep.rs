//! Power side-effect collaborator boundary.

/// Display brightness and deep-sleep control.
///
/// [`deep_sleep_until_wake`](SleepControl::deep_sleep_until_wake) is the one
/// intentional blocking call in the whole core: it parks the hardware and
/// returns only after a wake source fires. Every other method returns
/// immediately.
pub trait SleepControl {
    /// Set backlight/strip brightness, 0-255.
    fn set_brightness(&mut self, level: u8);

    /// Block until a hardware wake source fires. Deep-sleep entry point;
    /// callers must treat the return as "the user is back".
    fn deep_sleep_until_wake(&mut self);
}
