/// Scattering laws for the disk-integrated brightness integral.
///
/// Each law maps the incidence/emission cosine pair of one illuminated,
/// visible facet to a reflectance value. The visibility cut itself
/// (`mu0 > 0 && mu > 0`) is applied by the integrator, never by a law.

pub mod builtin;

use serde::{Deserialize, Serialize};

/// Lambert weight used when the caller does not supply one.
pub const DEFAULT_C_LAMBERT: f64 = 0.1;

/// Additive regularization of the Lommel-Seeliger denominator.
pub const LS_EPSILON: f64 = 1e-30;

/// Scattering law trait: reflectance of a facet from its two cosines.
pub trait ScatteringLaw: Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Reflectance for incidence cosine `mu0` and emission cosine `mu`.
    /// Only called with `mu0 > 0` and `mu > 0`.
    fn reflectance(&self, mu0: f64, mu: f64) -> f64;
}

impl<T: ScatteringLaw + ?Sized> ScatteringLaw for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline(always)]
    fn reflectance(&self, mu0: f64, mu: f64) -> f64 {
        (**self).reflectance(mu0, mu)
    }
}

/// Scattering law identifier as passed across the WASM boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScatteringId {
    #[default]
    LambertLommel,
    Lambert,
    LommelSeeliger,
}

impl ScatteringId {
    /// Map a numeric id (0, 1, 2) to a law.
    pub fn from_u32(id: u32) -> Option<Self> {
        match id {
            0 => Some(ScatteringId::LambertLommel),
            1 => Some(ScatteringId::Lambert),
            2 => Some(ScatteringId::LommelSeeliger),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> u32 {
        match self {
            ScatteringId::LambertLommel => 0,
            ScatteringId::Lambert => 1,
            ScatteringId::LommelSeeliger => 2,
        }
    }

    /// Create a boxed law instance. `c_lambert` only affects the mixed law.
    pub fn create(&self, c_lambert: f64) -> Box<dyn ScatteringLaw> {
        match self {
            ScatteringId::LambertLommel => Box::new(builtin::LambertLommel::new(c_lambert)),
            ScatteringId::Lambert => Box::new(builtin::Lambert),
            ScatteringId::LommelSeeliger => Box::new(builtin::LommelSeeliger),
        }
    }
}
