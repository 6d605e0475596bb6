//! ir-remote: command-line front end for the IR encoders and dispatcher.
//!
//! # Usage
//!
//! ```text
//! ir-remote [--config <PATH>] <COMMAND>
//!
//! Commands:
//!   brands   List the preset catalog
//!   encode   Encode a single command and print its frequency and pattern
//!   send     Transmit a preset command through the configured emitter
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable           | Description                                  |
//! |--------------------|----------------------------------------------|
//! | `IR_REMOTE_CONFIG` | Path of the TOML config file                 |
//! | `RUST_LOG`         | Log filter; overrides `remote.log_level`     |

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use ir_core::{BrandPreset, CommandRecord, Protocol, Transmission};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ir_remote::application::send_command::SendCommandUseCase;
use ir_remote::application::transmit::IrTransmitter;
use ir_remote::infrastructure::emitter::build_emitter;
use ir_remote::infrastructure::storage::config::{self, AppConfig, ConfigError};
use ir_remote::infrastructure::storage::preset_file::build_catalog;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Infrared remote control encoder and transmitter.
#[derive(Debug, Parser)]
#[command(name = "ir-remote", about = "Encode and send consumer IR remote commands", version)]
struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true, env = "IR_REMOTE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List brands, devices and (with --commands) their buttons.
    Brands {
        #[arg(long)]
        commands: bool,
    },
    /// Encode one command and print the carrier frequency and pattern.
    Encode(EncodeArgs),
    /// Transmit a preset command.
    Send {
        /// Brand name; defaults to `remote.default_brand` from the config.
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        device: String,
        #[arg(long)]
        command: String,
    },
}

/// Flags mirroring the fields of a flat command record.
#[derive(Debug, Args)]
struct EncodeArgs {
    /// Protocol name: nec, sirc, rc5, rc6, panasonic, sharp or raw.
    #[arg(long)]
    protocol: String,
    #[arg(long)]
    address: Option<u32>,
    #[arg(long)]
    command: Option<u32>,
    /// SIRC device code.
    #[arg(long)]
    device_code: Option<u32>,
    /// RC6 mode.
    #[arg(long)]
    mode: Option<u32>,
    #[arg(long)]
    toggle: Option<u32>,
    /// SIRC frame width (12, 15, 20) or RC6 payload bits.
    #[arg(long)]
    bits: Option<u32>,
    /// Panasonic vendor code.
    #[arg(long)]
    vendor: Option<u32>,
    /// Sharp repeat frame.
    #[arg(long)]
    repeat: bool,
    /// Raw carrier frequency.
    #[arg(long)]
    frequency_hz: Option<u32>,
    /// Raw pattern as comma-separated microseconds.
    #[arg(long, value_delimiter = ',')]
    pattern: Option<Vec<u32>>,
    /// Print the transmission as JSON.
    #[arg(long)]
    json: bool,
}

impl EncodeArgs {
    fn to_record(&self) -> CommandRecord {
        CommandRecord {
            label: "cli".to_string(),
            protocol: Some(self.protocol.clone()),
            frequency_hz: self.frequency_hz,
            address: self.address,
            command: self.command,
            device_code: self.device_code,
            mode: self.mode,
            toggle: self.toggle,
            bits: self.bits,
            vendor: self.vendor,
            repeat: Some(self.repeat),
            pattern: self.pattern.clone(),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (app_config, has_config_dir) = load_app_config(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&app_config.remote.log_level)),
        )
        .init();

    if !has_config_dir {
        warn!("no platform config directory; using default configuration");
    }

    match cli.command {
        Command::Brands { commands } => {
            let catalog = build_catalog(&app_config.presets).context("failed to load presets")?;
            print!("{}", render_brands(&catalog, commands));
        }
        Command::Encode(args) => {
            let transmission = encode(&args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&transmission)?);
            } else {
                print!("{}", render_transmission(&transmission));
            }
        }
        Command::Send {
            brand,
            device,
            command,
        } => {
            let Some(brand) = brand.or_else(|| app_config.remote.default_brand.clone()) else {
                bail!("no --brand given and no remote.default_brand configured");
            };
            let catalog = build_catalog(&app_config.presets).context("failed to load presets")?;
            let transmitter = Arc::new(IrTransmitter::new(build_emitter(&app_config.emitter)));
            let use_case = SendCommandUseCase::new(transmitter, catalog);

            let report = use_case
                .send(&brand, &device, &command)
                .with_context(|| format!("failed to send {command:?} to {brand} {device}"))?;
            info!(frequency_hz = report.frequency_hz, duration_us = report.duration_us, "{}", report.info);
            println!("{} ({} Hz, {} us)", report.info, report.frequency_hz, report.duration_us);
        }
    }
    Ok(())
}

/// Loads the config; the flag is `false` when no platform directory exists
/// and defaults were substituted.
fn load_app_config(path: Option<&Path>) -> anyhow::Result<(AppConfig, bool)> {
    let result = match path {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    match result {
        Ok(cfg) => Ok((cfg, true)),
        Err(ConfigError::NoPlatformConfigDir) => Ok((AppConfig::default(), false)),
        Err(e) => Err(e).context("failed to load configuration"),
    }
}

fn encode(args: &EncodeArgs) -> anyhow::Result<Transmission> {
    let protocol: Protocol = args
        .protocol
        .parse()
        .with_context(|| format!("unknown protocol {:?}", args.protocol))?;
    let command = args
        .to_record()
        .into_command(Some(protocol))
        .context("incomplete command")?;
    Ok(command.payload.encode())
}

fn render_brands(catalog: &[BrandPreset], with_commands: bool) -> String {
    let mut out = String::new();
    for brand in catalog {
        out.push_str(&format!(
            "{} ({}, {} Hz)\n",
            brand.name, brand.protocol, brand.default_frequency_hz
        ));
        for device in &brand.devices {
            out.push_str(&format!(
                "  {} [{} commands]\n",
                device.display_name(),
                device.commands.len()
            ));
            if with_commands {
                for command in &device.commands {
                    out.push_str(&format!("    {}\n", command.label));
                }
            }
        }
    }
    out
}

fn render_transmission(transmission: &Transmission) -> String {
    let pattern = transmission
        .pattern
        .as_slice()
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "frequency_hz: {}\npattern: {}\nduration_us: {}\n",
        transmission.frequency_hz,
        pattern,
        transmission.total_duration_us()
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
