//! Error types for encoding, decoding and correction.

/// Errors from code construction, encoding, decoding or correction.
#[derive(Debug, thiserror::Error)]
pub enum CodeError {
    /// The `(k, n)` pair is out of range.
    #[error("invalid parameters: k={k}, n={n} (need 0 < k <= n <= 256)")]
    InvalidParameters {
        /// Requested number of required shares.
        k: usize,
        /// Requested total number of shares.
        n: usize,
    },

    /// The message length does not split into `k` equal blocks.
    #[error("data length {len} is not a multiple of k={k}")]
    InvalidInput {
        /// Provided message length.
        len: usize,
        /// Number of blocks the message must split into.
        k: usize,
    },

    /// A share index is out of range or appears twice.
    #[error("invalid share index {index}: duplicate or out of range")]
    InvalidShare {
        /// The offending index.
        index: u8,
    },

    /// Share payloads disagree on the block length.
    #[error("share length mismatch: expected {expected}, got {got}")]
    LengthMismatch {
        /// Length of the first share's payload.
        expected: usize,
        /// Length of the mismatching payload.
        got: usize,
    },

    /// More shares than the code ever produces.
    #[error("too many shares: got {got}, the code only produces {total}")]
    TooManyShares {
        /// Shares actually provided.
        got: usize,
        /// Total shares the code produces (n).
        total: usize,
    },

    /// Not enough shares were provided for decoding.
    #[error("not enough shares: need {needed}, got {got}")]
    NotEnoughShares {
        /// Minimum shares required (k).
        needed: usize,
        /// Shares actually provided.
        got: usize,
    },

    /// Error correction found no consistent solution; more shares are
    /// corrupted than the redundancy can repair.
    #[error("shares are corrupted beyond repair")]
    Unrecoverable,

    /// A failure inside the algebra layer. Validated inputs never
    /// trigger this; it indicates a bug.
    #[error(transparent)]
    Algebra(#[from] reef_gf::GfError),
}
