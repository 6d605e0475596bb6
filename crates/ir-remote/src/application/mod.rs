//! Application layer use cases.
//!
//! - **`transmit`** – The dispatcher: encodes a payload, validates the
//!   result and hands it to an injected [`transmit::IrEmitter`].
//!
//! - **`send_command`** – Resolves a labelled command on a device preset and
//!   sends it, honouring the device's carrier-frequency override.

pub mod send_command;
pub mod transmit;
