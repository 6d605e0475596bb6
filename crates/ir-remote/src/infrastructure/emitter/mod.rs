//! IR emitter backends.
//!
//! The backend is chosen from [`EmitterConfig`](crate::infrastructure::storage::config::EmitterConfig)
//! at start-up by [`build_emitter`].

pub mod dry_run;
pub mod mock;

use std::sync::Arc;

use crate::application::transmit::IrEmitter;
use crate::infrastructure::storage::config::{EmitterBackend, EmitterConfig};

/// Creates the emitter selected by `config`.
pub fn build_emitter(config: &EmitterConfig) -> Arc<dyn IrEmitter> {
    match config.backend {
        EmitterBackend::DryRun => Arc::new(dry_run::DryRunEmitter::new(config.fail_transmissions)),
        EmitterBackend::None => Arc::new(dry_run::DryRunEmitter::unavailable()),
    }
}
