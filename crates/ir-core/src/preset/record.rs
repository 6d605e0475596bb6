//! Flat command records.
//!
//! Community preset lists describe a command as one flat object whose
//! fields are all optional; which ones matter depends on the protocol:
//!
//! ```json
//! { "label": "Power", "protocol": "sirc", "command": 21, "device_code": 1 }
//! ```
//!
//! [`CommandRecord::into_command`] fills in protocol defaults and produces
//! a typed [`IrCommand`].  A record that lacks a required field is rejected
//! with a [`RecordError`] so the caller can skip it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::payload::{Payload, SircBits};
use crate::preset::IrCommand;
use crate::protocol::panasonic::PANASONIC_VENDOR;
use crate::protocol::{rc6, Protocol, RAW_DEFAULT_FREQUENCY_HZ};

/// Reasons a [`CommandRecord`] cannot become an [`IrCommand`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("command {label:?}: unknown protocol {protocol:?}")]
    UnknownProtocol { label: String, protocol: String },

    #[error("command {label:?}: no protocol and no raw pattern")]
    MissingProtocol { label: String },

    #[error("command {label:?}: missing required field `{field}` for {protocol}")]
    MissingField {
        label: String,
        protocol: Protocol,
        field: &'static str,
    },

    #[error("command {label:?}: unsupported SIRC bit width {bits}")]
    InvalidSircBits { label: String, bits: u32 },
}

/// All-optional, protocol-agnostic description of one command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_hz: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_code: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toggle: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bits: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Vec<u32>>,
}

impl CommandRecord {
    /// Converts the record into a typed command.
    ///
    /// `fallback_protocol` is used when the record names none (typically
    /// the device or brand protocol).  A record with neither a protocol nor
    /// a fallback is treated as raw if it carries a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] when the protocol is unknown or a required
    /// field is missing.
    pub fn into_command(self, fallback_protocol: Option<Protocol>) -> Result<IrCommand, RecordError> {
        let protocol = match self.protocol.as_deref() {
            Some(name) => name.parse::<Protocol>().map_err(|_| RecordError::UnknownProtocol {
                label: self.label.clone(),
                protocol: name.to_string(),
            })?,
            None => match (fallback_protocol, &self.pattern) {
                (Some(p), _) => p,
                (None, Some(_)) => Protocol::Raw,
                (None, None) => {
                    return Err(RecordError::MissingProtocol { label: self.label })
                }
            },
        };

        let missing = |field: &'static str| RecordError::MissingField {
            label: self.label.clone(),
            protocol,
            field,
        };

        let payload = match protocol {
            Protocol::Nec => Payload::Nec {
                address: self.address.ok_or_else(|| missing("address"))?,
                command: self.command.ok_or_else(|| missing("command"))?,
            },
            Protocol::Sirc => {
                let width = self.bits.unwrap_or(12);
                let bits = u8::try_from(width)
                    .ok()
                    .and_then(|b| SircBits::try_from(b).ok())
                    .ok_or_else(|| RecordError::InvalidSircBits {
                        label: self.label.clone(),
                        bits: width,
                    })?;
                Payload::Sirc {
                    command: self.command.ok_or_else(|| missing("command"))?,
                    device: self.device_code.unwrap_or(0),
                    bits,
                }
            }
            Protocol::Rc5 => Payload::Rc5 {
                address: self.address.unwrap_or(0),
                command: self.command.ok_or_else(|| missing("command"))?,
                toggle: self.toggle.unwrap_or(0),
            },
            Protocol::Rc6 => Payload::Rc6 {
                mode: self.mode.unwrap_or(0),
                address: self.address.unwrap_or(0),
                command: self.command.ok_or_else(|| missing("command"))?,
                toggle: self.toggle.unwrap_or(0),
                // Anything wider than the payload is clamped by the encoder anyway.
                bits: self
                    .bits
                    .map_or(rc6::PAYLOAD_BITS, |b| b.min(u32::from(rc6::PAYLOAD_BITS)) as u8),
            },
            Protocol::Panasonic => Payload::Panasonic {
                vendor: self.vendor.unwrap_or(PANASONIC_VENDOR),
                address: self.address.unwrap_or(0),
                command: self.command.ok_or_else(|| missing("command"))?,
            },
            Protocol::Sharp => Payload::Sharp {
                address: self.address.unwrap_or(0),
                command: self.command.ok_or_else(|| missing("command"))?,
                repeat: self.repeat.unwrap_or(false),
            },
            Protocol::Raw => Payload::Raw {
                frequency_hz: self.frequency_hz.unwrap_or(RAW_DEFAULT_FREQUENCY_HZ),
                pattern: self.pattern.clone().ok_or_else(|| missing("pattern"))?,
            },
        };

        Ok(IrCommand {
            label: self.label,
            payload,
        })
    }
}

impl IrCommand {
    /// Flattens the command into a [`CommandRecord`].
    pub fn to_record(&self) -> CommandRecord {
        let mut record = CommandRecord {
            label: self.label.clone(),
            protocol: Some(self.payload.protocol().name().to_string()),
            ..CommandRecord::default()
        };

        match &self.payload {
            Payload::Nec { address, command } => {
                record.address = Some(*address);
                record.command = Some(*command);
            }
            Payload::Sirc {
                command,
                device,
                bits,
            } => {
                record.command = Some(*command);
                record.device_code = Some(*device);
                record.bits = Some(bits.count());
            }
            Payload::Rc5 {
                address,
                command,
                toggle,
            } => {
                record.address = Some(*address);
                record.command = Some(*command);
                record.toggle = Some(*toggle);
            }
            Payload::Rc6 {
                mode,
                address,
                command,
                toggle,
                bits,
            } => {
                record.mode = Some(*mode);
                record.address = Some(*address);
                record.command = Some(*command);
                record.toggle = Some(*toggle);
                record.bits = Some(u32::from(*bits));
            }
            Payload::Panasonic {
                vendor,
                address,
                command,
            } => {
                record.vendor = Some(*vendor);
                record.address = Some(*address);
                record.command = Some(*command);
            }
            Payload::Sharp {
                address,
                command,
                repeat,
            } => {
                record.address = Some(*address);
                record.command = Some(*command);
                record.repeat = Some(*repeat);
            }
            Payload::Raw {
                frequency_hz,
                pattern,
            } => {
                record.frequency_hz = Some(*frequency_hz);
                record.pattern = Some(pattern.clone());
            }
        }

        record
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn record(label: &str, protocol: &str) -> CommandRecord {
        CommandRecord {
            label: label.to_string(),
            protocol: Some(protocol.to_string()),
            ..CommandRecord::default()
        }
    }

    #[test]
    fn test_sirc_record_gets_default_device_and_width() {
        // Arrange
        let rec = CommandRecord {
            command: Some(0x15),
            ..record("Power", "sirc")
        };

        // Act
        let cmd = rec.into_command(None).expect("valid sirc record");

        // Assert
        assert_eq!(cmd.payload, Payload::sirc(0x15, 0, SircBits::Twelve));
    }

    #[test]
    fn test_rc6_and_panasonic_defaults() {
        let rc6 = CommandRecord {
            command: Some(0x0C),
            ..record("Power", "RC6")
        };
        assert_eq!(
            rc6.into_command(None).unwrap().payload,
            Payload::rc6(0, 0, 0x0C)
        );

        let pana = CommandRecord {
            command: Some(0x1000),
            ..record("Power", "Panasonic")
        };
        assert_eq!(
            pana.into_command(None).unwrap().payload,
            Payload::panasonic(0x2002, 0, 0x1000)
        );
    }

    #[test]
    fn test_missing_command_is_rejected() {
        let rec = CommandRecord {
            address: Some(0xE0E0),
            ..record("Power", "nec")
        };
        assert_eq!(
            rec.into_command(None),
            Err(RecordError::MissingField {
                label: "Power".to_string(),
                protocol: Protocol::Nec,
                field: "command",
            })
        );
    }

    #[test]
    fn test_unknown_protocol_is_rejected() {
        let rec = record("Power", "xmp");
        assert!(matches!(
            rec.into_command(None),
            Err(RecordError::UnknownProtocol { .. })
        ));
    }

    #[test]
    fn test_pattern_without_protocol_becomes_raw_with_default_frequency() {
        let rec = CommandRecord {
            label: "Learned".to_string(),
            pattern: Some(vec![500, 500]),
            ..CommandRecord::default()
        };
        assert_eq!(
            rec.into_command(None).unwrap().payload,
            Payload::raw(38_000, vec![500, 500])
        );
    }

    #[test]
    fn test_fallback_protocol_applies_when_record_has_none() {
        let rec = CommandRecord {
            label: "Mute".to_string(),
            address: Some(0xE0E0),
            command: Some(0x0E11),
            ..CommandRecord::default()
        };
        let cmd = rec.into_command(Some(Protocol::Nec)).unwrap();
        assert_eq!(cmd.payload, Payload::nec(0xE0E0, 0x0E11));
    }

    #[test]
    fn test_record_without_protocol_or_pattern_is_rejected() {
        let rec = CommandRecord {
            label: "Mystery".to_string(),
            command: Some(1),
            ..CommandRecord::default()
        };
        assert_eq!(
            rec.into_command(None),
            Err(RecordError::MissingProtocol {
                label: "Mystery".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_sirc_width_is_rejected() {
        let rec = CommandRecord {
            command: Some(1),
            bits: Some(300),
            ..record("Power", "sirc")
        };
        assert!(matches!(
            rec.into_command(None),
            Err(RecordError::InvalidSircBits { bits: 300, .. })
        ));
    }

    #[test]
    fn test_to_record_is_accepted_back_for_every_catalog_command() {
        for brand in crate::preset::default_brands() {
            for device in &brand.devices {
                for command in &device.commands {
                    let back = command.to_record().into_command(None).expect("record");
                    assert_eq!(&back, command);
                }
            }
        }
    }
}
