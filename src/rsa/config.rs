// RSA Cipher Parameters
// Key size, plaintext block size, and primality-test trial count

use super::error::{RsaError, RsaResult};

/// Parameters shared by key generation and the block cipher layer.
///
/// `block_size` is the plaintext block width in bytes. It must satisfy
/// `block_size * 8 < num_bits` so every block's integer value stays below the
/// modulus; the margin also absorbs a modulus that does not fill all
/// `num_bits` bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaConfig {
    /// Modulus size in bits.
    pub num_bits: u64,
    /// Plaintext block size in bytes.
    pub block_size: usize,
    /// Solovay-Strassen trials per primality check.
    pub prime_iterations: u32,
}

impl Default for RsaConfig {
    fn default() -> Self {
        Self {
            num_bits: 2048,
            block_size: 214,
            prime_iterations: 100,
        }
    }
}

impl RsaConfig {
    /// Build a validated configuration.
    pub fn new(num_bits: u64, block_size: usize, prime_iterations: u32) -> RsaResult<Self> {
        if num_bits < 16 || num_bits % 8 != 0 {
            return Err(RsaError::InvalidConfig(
                "modulus bit length must be a multiple of 8, at least 16",
            ));
        }
        if block_size == 0 {
            return Err(RsaError::InvalidConfig("block size must be nonzero"));
        }
        if (block_size as u64) * 8 >= num_bits {
            return Err(RsaError::InvalidConfig(
                "block size in bits must be smaller than the modulus bit length",
            ));
        }
        Ok(Self {
            num_bits,
            block_size,
            prime_iterations,
        })
    }

    /// Width of one ciphertext block in bytes.
    pub fn cipher_block_size(&self) -> usize {
        (self.num_bits / 8) as usize
    }

    /// Bit length of each generated prime.
    pub fn prime_bits(&self) -> u64 {
        self.num_bits / 2
    }
}
