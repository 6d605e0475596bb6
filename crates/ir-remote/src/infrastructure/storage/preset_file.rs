//! JSON preset files.
//!
//! A preset file extends the built-in catalog with more brands:
//!
//! ```json
//! {
//!   "brands": [
//!     {
//!       "name": "LG",
//!       "protocol": "nec",
//!       "devices": [
//!         {
//!           "model": "OLED C1",
//!           "commands": [
//!             { "label": "Power", "address": 4, "command": 8 },
//!             { "label": "Mute", "address": 4, "command": 9 }
//!           ]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Commands use the flat [`CommandRecord`] form.  A record that cannot be
//! turned into a command is skipped with a warning; the rest of the file
//! still loads.  A brand whose protocol name is unknown is skipped whole.

use std::path::{Path, PathBuf};

use ir_core::{default_brands, BrandPreset, CommandRecord, DevicePreset, Protocol};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::infrastructure::storage::config::PresetsConfig;

/// Error type for preset file operations.
#[derive(Debug, Error)]
pub enum PresetFileError {
    #[error("I/O error reading preset file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse preset file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// On-disk layout of a preset file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresetFile {
    #[serde(default)]
    pub brands: Vec<BrandEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandEntry {
    pub name: String,
    /// Protocol of the brand's commands unless a device or record says
    /// otherwise.  Absent means records must name their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_hz: Option<u32>,
    #[serde(default)]
    pub devices: Vec<DeviceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Carrier used for every command of this device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_hz: Option<u32>,
    #[serde(default)]
    pub commands: Vec<CommandRecord>,
}

/// Reads and converts the preset file at `path`.
///
/// # Errors
///
/// Returns [`PresetFileError::Io`] if the file cannot be read and
/// [`PresetFileError::Parse`] if it is not a valid preset document.
pub fn load_preset_file(path: &Path) -> Result<Vec<BrandPreset>, PresetFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| PresetFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file = parse_preset_file(&content).map_err(|source| PresetFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let brands = file.into_brands();
    debug!(path = %path.display(), brands = brands.len(), "loaded preset file");
    Ok(brands)
}

/// Parses a preset document without converting it.
pub fn parse_preset_file(content: &str) -> Result<PresetFile, serde_json::Error> {
    serde_json::from_str(content)
}

impl PresetFile {
    /// Converts every brand, skipping what cannot be converted.
    pub fn into_brands(self) -> Vec<BrandPreset> {
        self.brands
            .into_iter()
            .filter_map(BrandEntry::into_brand)
            .collect()
    }
}

impl BrandEntry {
    fn into_brand(self) -> Option<BrandPreset> {
        let protocol = match parse_protocol(self.protocol.as_deref()) {
            Ok(p) => p,
            Err(name) => {
                warn!(brand = %self.name, protocol = %name, "skipping brand with unknown protocol");
                return None;
            }
        };

        let devices = self
            .devices
            .into_iter()
            .filter_map(|d| d.into_device(&self.name, protocol))
            .collect();

        let mut brand = BrandPreset::new(self.name, protocol.unwrap_or(Protocol::Raw), devices);
        if let Some(hz) = self.frequency_hz {
            brand.default_frequency_hz = hz;
        }
        Some(brand)
    }
}

impl DeviceEntry {
    fn into_device(self, brand: &str, brand_protocol: Option<Protocol>) -> Option<DevicePreset> {
        let protocol_override = match parse_protocol(self.protocol.as_deref()) {
            Ok(p) => p,
            Err(name) => {
                warn!(brand, model = ?self.model, protocol = %name, "skipping device with unknown protocol");
                return None;
            }
        };
        let mut device = DevicePreset {
            model: self.model,
            commands: Vec::with_capacity(self.commands.len()),
            protocol_override,
            frequency_override_hz: self.frequency_hz,
        };

        for record in self.commands {
            match device.resolve_record(record, brand_protocol) {
                Ok(command) => device.commands.push(command),
                Err(e) => warn!(brand, model = ?device.model, "skipping preset command: {e}"),
            }
        }
        Some(device)
    }
}

/// `Ok(None)` when absent, `Err(name)` when the name is unknown.
fn parse_protocol(name: Option<&str>) -> Result<Option<Protocol>, String> {
    name.map(|n| n.parse::<Protocol>().map_err(|_| n.to_string()))
        .transpose()
}

/// Appends `extra` to `catalog`.
///
/// A brand whose name already exists (ignoring ASCII case) contributes its
/// devices to the existing brand instead of appearing twice.
pub fn merge_brands(catalog: &mut Vec<BrandPreset>, extra: Vec<BrandPreset>) {
    for brand in extra {
        match catalog
            .iter_mut()
            .find(|b| b.name.eq_ignore_ascii_case(&brand.name))
        {
            Some(existing) => existing.devices.extend(brand.devices),
            None => catalog.push(brand),
        }
    }
}

/// Assembles the catalog described by `config`: the built-in brands (unless
/// disabled) followed by every preset file in order.
///
/// # Errors
///
/// Fails on the first preset file that cannot be read or parsed.
pub fn build_catalog(config: &PresetsConfig) -> Result<Vec<BrandPreset>, PresetFileError> {
    let mut catalog = if config.include_defaults {
        default_brands()
    } else {
        Vec::new()
    };
    for path in &config.files {
        merge_brands(&mut catalog, load_preset_file(path)?);
    }
    Ok(catalog)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use ir_core::Payload;

    const LG_FILE: &str = r#"{
        "brands": [{
            "name": "LG",
            "protocol": "nec",
            "devices": [{
                "model": "OLED C1",
                "commands": [
                    { "label": "Power", "address": 4, "command": 8 },
                    { "label": "Broken" },
                    { "label": "Learned", "protocol": "raw", "frequency_hz": 40000, "pattern": [100, 200] }
                ]
            }]
        }]
    }"#;

    #[test]
    fn test_invalid_records_are_skipped() {
        // Arrange / Act
        let brands = parse_preset_file(LG_FILE).expect("parse").into_brands();

        // Assert
        let device = brands[0].device("oled c1").expect("device");
        let labels: Vec<_> = device.commands.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Power", "Learned"]);
        assert_eq!(device.commands[0].payload, Payload::nec(4, 8));
        assert_eq!(device.commands[1].payload, Payload::raw(40_000, vec![100, 200]));
    }

    #[test]
    fn test_device_protocol_and_frequency_override_brand() {
        // Arrange
        let json = r#"{ "brands": [{
            "name": "Mixed",
            "protocol": "nec",
            "devices": [{ "model": "Amp", "protocol": "sirc", "frequency_hz": 38000,
                          "commands": [{ "label": "Power", "command": 21, "device_code": 16 }] }]
        }] }"#;

        // Act
        let brands = parse_preset_file(json).expect("parse").into_brands();

        // Assert
        let device = &brands[0].devices[0];
        assert_eq!(device.protocol_override, Some(Protocol::Sirc));
        assert_eq!(device.frequency_override_hz, Some(38_000));
        assert_eq!(device.commands[0].payload.protocol(), Protocol::Sirc);
        assert_eq!(brands[0].protocol, Protocol::Nec);
    }

    #[test]
    fn test_brand_with_unknown_protocol_is_skipped() {
        let json = r#"{ "brands": [
            { "name": "Odd", "protocol": "rcmm", "devices": [] },
            { "name": "Fine", "protocol": "rc5", "frequency_hz": 38000, "devices": [] }
        ] }"#;

        let brands = parse_preset_file(json).expect("parse").into_brands();

        assert_eq!(brands.len(), 1);
        assert_eq!(brands[0].name, "Fine");
        assert_eq!(brands[0].default_frequency_hz, 38_000);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(parse_preset_file("{ brands: ").is_err());
    }

    #[test]
    fn test_load_preset_file_missing_path_is_io_error() {
        let result = load_preset_file(Path::new("/nonexistent/ir_remote/presets.json"));
        assert!(matches!(result, Err(PresetFileError::Io { .. })));
    }

    #[test]
    fn test_load_preset_file_reads_from_disk() {
        // Arrange
        let path = std::env::temp_dir().join(format!("ir_remote_presets_{}.json", std::process::id()));
        std::fs::write(&path, LG_FILE).unwrap();

        // Act
        let brands = load_preset_file(&path).expect("load");

        // Assert
        assert_eq!(brands[0].name, "LG");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_merge_appends_new_brands_after_builtins() {
        // Arrange
        let mut catalog = default_brands();
        let builtin_count = catalog.len();
        let extra = parse_preset_file(LG_FILE).expect("parse").into_brands();

        // Act
        merge_brands(&mut catalog, extra);

        // Assert
        assert_eq!(catalog.len(), builtin_count + 1);
        assert_eq!(catalog.last().map(|b| b.name.as_str()), Some("LG"));
    }

    #[test]
    fn test_merge_extends_existing_brand_devices() {
        // Arrange
        let mut catalog = default_brands();
        let samsung_devices = catalog[0].devices.len();
        let extra = vec![BrandPreset::new(
            "SAMSUNG",
            Protocol::Nec,
            vec![DevicePreset::new("Soundbar", Vec::new())],
        )];

        // Act
        merge_brands(&mut catalog, extra);

        // Assert
        assert_eq!(catalog.len(), default_brands().len());
        assert_eq!(catalog[0].devices.len(), samsung_devices + 1);
        assert!(catalog[0].device("soundbar").is_some());
    }

    #[test]
    fn test_build_catalog_without_defaults_or_files_is_empty() {
        let config = PresetsConfig {
            include_defaults: false,
            files: Vec::new(),
        };
        assert!(build_catalog(&config).expect("build").is_empty());
    }

    #[test]
    fn test_build_catalog_fails_on_missing_file() {
        let config = PresetsConfig {
            include_defaults: true,
            files: vec![PathBuf::from("/nonexistent/ir_remote/extra.json")],
        };
        assert!(matches!(build_catalog(&config), Err(PresetFileError::Io { .. })));
    }
}
