//! # ir-core
//!
//! Shared library for IR-Remote containing the infrared protocol encoders,
//! the command payload model, and the bundled preset catalog.
//!
//! This crate has zero dependencies on OS APIs, IR hardware, or the file
//! system.  Every encoder is a pure function and can be called from any
//! thread.
//!
//! # Architecture overview
//!
//! An infrared remote does not send bytes.  It switches a modulated carrier
//! (typically 36–40 kHz) on and off, and the receiver decodes the *durations*
//! of those on ("mark") and off ("space") intervals.  Turning a command into a
//! transmission therefore means producing a list of microsecond durations
//! plus the carrier frequency.
//!
//! - **`pattern`** – The [`PatternBuilder`] accumulates marks and spaces and
//!   guarantees the result alternates strictly, starting with a mark.
//!
//! - **`protocol`** – One encoder per supported protocol (NEC, Sony SIRC,
//!   Philips RC5 and RC6, Panasonic/Kaseikyo, Sharp).  Each one only depends
//!   on the builder.
//!
//! - **`payload`** – The [`Payload`] sum type: one variant per protocol plus a
//!   raw pattern.  [`Payload::encode`] picks the right encoder and carrier.
//!
//! - **`preset`** – Brands, devices and labelled commands, including the
//!   built-in catalog and the flat [`CommandRecord`] interchange form.

pub mod pattern;
pub mod payload;
pub mod preset;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `ir_core::Payload` instead of `ir_core::payload::Payload`.
pub use pattern::{PatternBuilder, PulsePattern};
pub use payload::{Payload, PayloadError, SircBits, Transmission};
pub use preset::{
    default_brands, BrandPreset, CommandRecord, DevicePreset, IrCommand, RecordError,
};
pub use protocol::Protocol;
