use std::fmt;

/// Everything that can go wrong while decoding a module matrix into a message.
///
/// Each stage of the pipeline (VER, FMT, READ, ECC, MSG) owns a disjoint subset
/// of these variants, so the variant alone tells you which stage rejected the
/// symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The matrix is smaller than the minimum legal symbol (21x21, version 1).
    MatrixTooSmall { side: usize },
    /// The dark module at (4*version+9, 8) is not set; the matrix is not a
    /// valid QR symbol.
    DarkModuleMissing,
    /// Neither the vertical nor horizontal timing pattern produced a
    /// consistent alternation, so no version could be read.
    VersionNotFound,
    /// A version was read but falls outside the legal 1..=40 range.
    InvalidVersion { version: i32 },
    /// The format word vote ended in a tie between two or more candidates.
    AmbiguousFormat,
    /// Neither 15-bit format strip is within correction distance of any
    /// legal format codeword.
    InvalidFormat,
    /// Reed-Solomon correction failed for the given block; it has more
    /// errors than its error-correcting codewords can repair.
    Uncorrectable { block: usize },
    /// The message stream used the Kanji or ECI mode, which this decoder
    /// does not interpret.
    UnsupportedMode { mode: u8 },
    /// The message stream used a 4-bit mode indicator this decoder does not
    /// recognize at all.
    InvalidMode { mode: u8 },
    /// A character count violated the bounds for its mode/version.
    InvalidLength { length: usize, capacity: usize },
    /// The bit stream ran out before the declared character count was
    /// satisfied.
    TruncatedMessage,
    /// A numeric group's decoded value does not fit in its declared digit
    /// width (e.g. a 3-digit group with value >= 1000).
    InvalidNumeric,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::MatrixTooSmall { side } => {
                write!(f, "matrix side {side} is smaller than the minimum legal symbol")
            }
            DecodeError::DarkModuleMissing => write!(f, "dark module not found"),
            DecodeError::VersionNotFound => write!(f, "version not found in timing pattern"),
            DecodeError::InvalidVersion { version } => {
                write!(f, "version {version} is out of the legal 1..=40 range")
            }
            DecodeError::AmbiguousFormat => write!(f, "ambiguous value for format"),
            DecodeError::InvalidFormat => write!(f, "format word has no matching codeword"),
            DecodeError::Uncorrectable { block } => {
                write!(f, "block {block} has more errors than can be corrected")
            }
            DecodeError::UnsupportedMode { mode } => write!(f, "unsupported mode {mode:#06b}"),
            DecodeError::InvalidMode { mode } => write!(f, "invalid mode indicator {mode:#06b}"),
            DecodeError::InvalidLength { length, capacity } => {
                write!(f, "length {length} exceeds capacity {capacity}")
            }
            DecodeError::TruncatedMessage => write!(f, "message truncated before declared length"),
            DecodeError::InvalidNumeric => write!(f, "numeric group value out of range"),
        }
    }
}

impl std::error::Error for DecodeError {}
