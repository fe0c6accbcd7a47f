//! Error records and the subsystem fault taxonomy.
//!
//! Hardware collaborators report failures as values; the coordinator turns
//! them into [`ErrorRecord`]s at the tick boundary. Nothing below the
//! coordinator sees a raw collaborator error type.

use heapless::String;
use thiserror_no_std::Error;

/// Fault classes reportable by the hardware collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HardwareFault {
    /// The display link rejected a frame.
    #[error("display present failed")]
    Display,
    /// The LED strip driver rejected a write or flush.
    #[error("led strip write failed")]
    Strip,
    /// The tone sink rejected a command.
    #[error("tone output failed")]
    Audio,
}

impl HardwareFault {
    /// Stable code for the fault, grouped by subsystem nibble.
    pub fn code(self) -> u16 {
        match self {
            HardwareFault::Display => 0x0201,
            HardwareFault::Strip => 0x0202,
            HardwareFault::Audio => 0x0203,
        }
    }

    fn short(self) -> &'static str {
        match self {
            HardwareFault::Display => "Display fault",
            HardwareFault::Strip => "LED fault",
            HardwareFault::Audio => "Audio fault",
        }
    }
}

/// Code for a network association timeout (non-fatal, degraded boot).
pub const CODE_NETWORK_TIMEOUT: u16 = 0x0101;
/// Code for clock-sync retry exhaustion (non-fatal, degraded boot).
pub const CODE_SYNC_FAILED: u16 = 0x0102;

/// A user-visible error: stable code, one-line summary, bounded detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    /// Stable numeric identifier shown on the error screen.
    pub code: u16,
    /// One-line summary.
    pub short: &'static str,
    /// Free-form detail, truncated to its bound.
    pub detail: String<96>,
    /// Fatal records keep the device on the error screen until restart.
    pub fatal: bool,
}

impl ErrorRecord {
    /// A record that shows a countdown and auto-clears.
    pub fn warning(code: u16, short: &'static str, detail: &str) -> Self {
        Self {
            code,
            short,
            detail: clipped(detail),
            fatal: false,
        }
    }

    /// A record that holds the error screen and forces a restart.
    pub fn fatal(code: u16, short: &'static str, detail: &str) -> Self {
        Self {
            code,
            short,
            detail: clipped(detail),
            fatal: true,
        }
    }

    /// A non-fatal record for a hardware collaborator fault.
    pub fn from_fault(fault: HardwareFault, detail: &str) -> Self {
        Self::warning(fault.code(), fault.short(), detail)
    }
}

/// Copy a string into a bounded buffer, dropping whatever does not fit.
pub(crate) fn clipped<const N: usize>(s: &str) -> String<N> {
    let mut out = String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
