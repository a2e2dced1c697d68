// RSA Error Types
// All failure modes of the core, as explicit variants instead of sentinels

use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors surfaced by key generation and the block cipher layer.
#[derive(Debug, Error)]
pub enum RsaError {
    /// Modular arithmetic with a zero modulus.
    #[error("modulus must be nonzero")]
    InvalidModulus,

    /// The operands share a factor, so no modular inverse exists.
    #[error("operands are not coprime, no modular inverse exists")]
    InverseNotFound,

    /// The Jacobi symbol is undefined when the operands share a factor.
    #[error("Jacobi symbol undefined: operands share a factor")]
    JacobiUndefined,

    /// Decrypted bytes were requested as text but are not valid UTF-8.
    #[error("decrypted data is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),

    /// A block's integer value does not fit below the modulus; the key size
    /// and block size are mismatched.
    #[error("block {index} does not fit the modulus (key/block size mismatch)")]
    BlockTooLarge { index: usize },

    /// A ciphertext buffer cannot be split into fixed-width blocks.
    #[error("ciphertext length {len} is not a multiple of the {width}-byte block width")]
    MalformedCiphertext { len: usize, width: usize },

    /// Rejected cipher parameters.
    #[error("invalid parameters: {0}")]
    InvalidConfig(&'static str),
}

/// Result type for the RSA core.
pub type RsaResult<T> = Result<T, RsaError>;
