//! ir-remote library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does ir-remote do?
//!
//! `ir-core` knows how to turn a button press into a carrier frequency and
//! a list of mark/space durations.  This crate takes that result to the
//! hardware:
//!
//! 1. The caller picks a [`Payload`](ir_core::Payload) (directly, or by
//!    brand/device/label from the preset catalog).
//! 2. [`IrTransmitter`](application::transmit::IrTransmitter) encodes it,
//!    checks that an emitter is present and that the pattern and frequency
//!    are sane.
//! 3. The platform [`IrEmitter`](application::transmit::IrEmitter) switches
//!    the LED.  Its errors come back as values, never as panics.

/// Application layer: transmit and send-preset use cases.
pub mod application;

/// Infrastructure layer: emitter backends, configuration and preset files.
pub mod infrastructure;
