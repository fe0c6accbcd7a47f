//! Coordination core: behavior and power state machines, the notification
//! overlay, error records, and the cooperative per-tick coordinator.
//!
//! Everything in this crate is pure state driven by injected collaborators
//! from the `platform` crate, so the whole core runs under host tests with
//! mocks. The only blocking call anywhere is the sleep controller's
//! deep-sleep entry, dispatched inline by the coordinator.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]

pub mod behavior;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod overlay;
pub mod power;

pub use behavior::{BehaviorMachine, BehaviorSignal, BehaviorState, LoadingPhase, WorldView};
pub use coordinator::{DeviceCore, Peripherals, TickOutcome};
pub use error::{ErrorRecord, HardwareFault};
pub use overlay::NotificationOverlay;
pub use power::{PowerCommand, PowerState, PowerStateMachine};
