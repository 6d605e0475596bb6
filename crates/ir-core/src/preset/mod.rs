//! Preset catalog: brands, devices and labelled commands.
//!
//! A [`BrandPreset`] groups the devices of one manufacturer, each
//! [`DevicePreset`] lists the buttons of one remote, and every [`IrCommand`]
//! pairs a button label with its [`Payload`].
//!
//! The built-in catalog lives in [`catalog`]; [`record`] defines the flat
//! interchange form used by preset files.

pub mod catalog;
pub mod record;

use serde::{Deserialize, Serialize};

use crate::payload::Payload;
use crate::protocol::Protocol;

pub use catalog::default_brands;
pub use record::{CommandRecord, RecordError};

/// One button on a remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrCommand {
    pub label: String,
    pub payload: Payload,
}

impl IrCommand {
    pub fn new(label: impl Into<String>, payload: Payload) -> Self {
        Self {
            label: label.into(),
            payload,
        }
    }
}

/// The commands of one device model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevicePreset {
    pub model: Option<String>,
    pub commands: Vec<IrCommand>,
    /// Protocol assumed for records that name none; takes precedence over
    /// the brand protocol in [`DevicePreset::resolve_record`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol_override: Option<Protocol>,
    /// When set, replaces the payload's carrier frequency on send.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_override_hz: Option<u32>,
}

impl DevicePreset {
    pub fn new(model: impl Into<String>, commands: Vec<IrCommand>) -> Self {
        Self {
            model: Some(model.into()),
            commands,
            protocol_override: None,
            frequency_override_hz: None,
        }
    }

    /// Finds a command by label, ignoring ASCII case.
    pub fn command(&self, label: &str) -> Option<&IrCommand> {
        self.commands
            .iter()
            .find(|c| c.label.eq_ignore_ascii_case(label))
    }

    /// Converts `record` into a command of this device.  A record without a
    /// protocol uses `protocol_override`, then `brand_protocol`.
    ///
    /// # Errors
    ///
    /// See [`CommandRecord::into_command`].
    pub fn resolve_record(
        &self,
        record: CommandRecord,
        brand_protocol: Option<Protocol>,
    ) -> Result<IrCommand, RecordError> {
        record.into_command(self.protocol_override.or(brand_protocol))
    }

    /// Display name, falling back to `"Unknown model"`.
    pub fn display_name(&self) -> &str {
        self.model.as_deref().unwrap_or("Unknown model")
    }
}

/// A manufacturer and its devices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandPreset {
    pub name: String,
    pub protocol: Protocol,
    pub default_frequency_hz: u32,
    #[serde(default)]
    pub devices: Vec<DevicePreset>,
}

impl BrandPreset {
    /// Creates a brand whose default frequency is the protocol's.
    pub fn new(name: impl Into<String>, protocol: Protocol, devices: Vec<DevicePreset>) -> Self {
        Self {
            name: name.into(),
            protocol,
            default_frequency_hz: protocol.default_frequency_hz(),
            devices,
        }
    }

    /// Finds a device by model name, ignoring ASCII case.
    pub fn device(&self, model: &str) -> Option<&DevicePreset> {
        self.devices
            .iter()
            .find(|d| d.model.as_deref().is_some_and(|m| m.eq_ignore_ascii_case(model)))
    }
}

/// Finds a brand by name, ignoring ASCII case.
pub fn find_brand<'a>(brands: &'a [BrandPreset], name: &str) -> Option<&'a BrandPreset> {
    brands.iter().find(|b| b.name.eq_ignore_ascii_case(name))
}
