/// Integrator configuration.
///
/// Hosts either pass a flat f64 buffer (the WASM path) or a JSON document
/// (native hosts). Missing entries take their defaults; an unknown law is
/// rejected on both paths.

use serde::{Deserialize, Serialize};

use crate::error::{LightcurveError, Result};
use crate::scattering::{ScatteringId, DEFAULT_C_LAMBERT};

/// Epoch count at which the native build switches to the parallel loop.
pub const DEFAULT_PARALLEL_MIN_EPOCHS: usize = 64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegratorConfig {
    /// Lambert weight of the mixed law (not range checked)
    pub c_lambert: f64,
    /// Scattering law to evaluate
    pub law: ScatteringId,
    /// Minimum epoch count for the rayon path (ignored on wasm32)
    pub parallel_min_epochs: usize,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            c_lambert: DEFAULT_C_LAMBERT,
            law: ScatteringId::LambertLommel,
            parallel_min_epochs: DEFAULT_PARALLEL_MIN_EPOCHS,
        }
    }
}

impl IntegratorConfig {
    /// Build from a flat parameter buffer.
    ///
    /// Layout: [c_lambert, law_id, parallel_min_epochs]
    ///
    /// A non-finite weight or epoch threshold keeps its default. The law id
    /// must be one of 0, 1, 2.
    pub fn from_buffer(data: &[f64]) -> Result<Self> {
        let mut config = Self::default();

        if let Some(&c) = data.first() {
            if c.is_finite() {
                config.c_lambert = c;
            }
        }

        if let Some(&id) = data.get(1) {
            config.law = Some(id)
                .filter(|id| id.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(id))
                .and_then(|id| ScatteringId::from_u32(id as u32))
                .ok_or(LightcurveError::UnknownLaw { id })?;
        }

        if let Some(&n) = data.get(2) {
            if n.is_finite() && n >= 0.0 {
                config.parallel_min_epochs = n as usize;
            }
        }

        Ok(config)
    }

    /// Parse from JSON; absent fields take their defaults.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
