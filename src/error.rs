/// Input validation errors raised at the call boundary.
///
/// Every variant is an invalid-input condition: the kernel refuses to
/// compute instead of producing NaN or silently wrong brightness.

/// Which caller buffer a validation error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Buffer {
    Normals,
    Areas,
    SunDirs,
    ObsDirs,
    Output,
}

impl std::fmt::Display for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Buffer::Normals => "normals",
            Buffer::Areas => "areas",
            Buffer::SunDirs => "sun_dirs",
            Buffer::ObsDirs => "obs_dirs",
            Buffer::Output => "output",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LightcurveError {
    #[error("invalid input: {buffer} has {len} values, not a whole number of xyz rows")]
    RaggedBuffer { buffer: Buffer, len: usize },

    #[error("invalid input: {left} has {left_len} rows but {right} has {right_len}")]
    LengthMismatch {
        left: Buffer,
        left_len: usize,
        right: Buffer,
        right_len: usize,
    },

    #[error("invalid input: facet {index} has negative area {area}")]
    NegativeArea { index: usize, area: f64 },

    #[error("invalid input: non-finite value in {buffer} at row {index}")]
    NonFinite { buffer: Buffer, index: usize },

    #[error("invalid input: unknown scattering law id {id}")]
    UnknownLaw { id: f64 },
}

impl LightcurveError {
    /// All validation failures share the single invalid-input kind.
    pub fn is_invalid_input(&self) -> bool {
        true
    }
}

pub type Result<T> = std::result::Result<T, LightcurveError>;
