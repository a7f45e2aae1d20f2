//! Error type shared by the zone, direction and spectral modules.

/// Coarse classification of a [`CoreError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed something the operation cannot work with.
    InvalidArgument,
    /// Internal sizing logic produced inconsistent buffers. Not recoverable.
    InvariantViolation,
}

/// Reasons a single core call can fail. No partial results are returned.
#[derive(Clone, Debug, PartialEq)]
pub enum CoreError {
    ZeroParts,
    InvertedRange {
        start: isize,
        end: isize,
    },
    RangeTooLarge {
        start: isize,
        end: isize,
    },
    EmptyImage {
        width: usize,
        height: usize,
    },
    InvalidStride {
        width: usize,
        stride: usize,
    },
    BufferTooSmall {
        required: usize,
        actual: usize,
    },
    ChannelMismatch {
        expected: usize,
        found: usize,
    },
    ShapeMismatch {
        what: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },
    InvalidKernelSize {
        size: usize,
    },
    InvalidSigma {
        sigma: f64,
    },
    SpectrumMismatch {
        image: (usize, usize),
        kernel: (usize, usize),
    },
    KernelExceedsWorkingSize {
        kernel: usize,
        working: (usize, usize),
    },
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::SpectrumMismatch { .. } | CoreError::KernelExceedsWorkingSize { .. } => {
                ErrorKind::InvariantViolation
            }
            _ => ErrorKind::InvalidArgument,
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::ZeroParts => write!(f, "partition count must be at least 1"),
            CoreError::InvertedRange { start, end } => {
                write!(f, "interval end {end} lies before start {start}")
            }
            CoreError::RangeTooLarge { start, end } => {
                write!(f, "interval [{start}, {end}] length overflows isize")
            }
            CoreError::EmptyImage { width, height } => {
                write!(f, "degenerate image size {width}×{height}")
            }
            CoreError::InvalidStride { width, stride } => {
                write!(f, "row stride {stride} is smaller than width {width}")
            }
            CoreError::BufferTooSmall { required, actual } => {
                write!(f, "buffer holds {actual} samples, need {required}")
            }
            CoreError::ChannelMismatch { expected, found } => {
                write!(f, "expected {expected} channel(s), found {found}")
            }
            CoreError::ShapeMismatch {
                what,
                expected,
                found,
            } => write!(
                f,
                "{what} is {}×{}, expected {}×{}",
                found.0, found.1, expected.0, expected.1
            ),
            CoreError::InvalidKernelSize { size } => {
                write!(f, "kernel size must be odd and ≥1, got {size}")
            }
            CoreError::InvalidSigma { sigma } => {
                write!(f, "gaussian sigma must be finite, got {sigma}")
            }
            CoreError::SpectrumMismatch { image, kernel } => write!(
                f,
                "spectrum size mismatch: image {}×{}, kernel {}×{}",
                image.0, image.1, kernel.0, kernel.1
            ),
            CoreError::KernelExceedsWorkingSize { kernel, working } => write!(
                f,
                "kernel of size {kernel} does not fit working size {}×{}",
                working.0, working.1
            ),
        }
    }
}

impl std::error::Error for CoreError {}
