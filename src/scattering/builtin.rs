/// Built-in scattering laws.

use super::{ScatteringLaw, LS_EPSILON};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Lambert: ideal diffuse scattering, proportional to mu0
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub struct Lambert;

impl ScatteringLaw for Lambert {
    fn name(&self) -> &str { "Lambert" }

    #[inline(always)]
    fn reflectance(&self, mu0: f64, _mu: f64) -> f64 {
        mu0
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Lommel-Seeliger: single scattering, mu0 / (mu0 + mu)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub struct LommelSeeliger;

/// Regularized Lommel-Seeliger term. The epsilon is always added, so a
/// denominator that underflows to zero cannot yield inf or NaN.
#[inline(always)]
pub fn lommel_seeliger(mu0: f64, mu: f64) -> f64 {
    mu0 / (mu0 + mu + LS_EPSILON)
}

impl ScatteringLaw for LommelSeeliger {
    fn name(&self) -> &str { "Lommel-Seeliger" }

    #[inline(always)]
    fn reflectance(&self, mu0: f64, mu: f64) -> f64 {
        lommel_seeliger(mu0, mu)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Lambert + Lommel-Seeliger mix
// S = (1 - c) * mu0 / (mu0 + mu + eps) + c * mu0
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Two-term law weighted by `c_lambert`. The weight is not range checked;
/// values outside [0, 1] extrapolate linearly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LambertLommel {
    pub c_lambert: f64,
    /// Cached `1 - c_lambert`
    c_ls: f64,
}

impl LambertLommel {
    pub fn new(c_lambert: f64) -> Self {
        Self { c_lambert, c_ls: 1.0 - c_lambert }
    }
}

impl Default for LambertLommel {
    fn default() -> Self {
        Self::new(super::DEFAULT_C_LAMBERT)
    }
}

impl ScatteringLaw for LambertLommel {
    fn name(&self) -> &str { "Lambert + Lommel-Seeliger" }

    #[inline(always)]
    fn reflectance(&self, mu0: f64, mu: f64) -> f64 {
        self.c_ls * lommel_seeliger(mu0, mu) + self.c_lambert * mu0
    }
}
