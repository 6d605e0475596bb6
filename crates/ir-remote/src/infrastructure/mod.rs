//! Infrastructure layer.
//!
//! Contains the adapters the application layer is wired to at start-up.
//!
//! **Dependency rule**: this layer may depend on `application` and `ir_core`,
//! but MUST NOT be imported by the `application` layer outside of tests.
//!
//! # Sub-modules
//!
//! - **`emitter`** – [`IrEmitter`](crate::application::transmit::IrEmitter)
//!   backends: a dry-run emitter that logs what it would send, and a
//!   recording `MockEmitter` for tests.
//!
//! - **`storage`** – TOML configuration and JSON preset files.

pub mod emitter;
pub mod storage;
