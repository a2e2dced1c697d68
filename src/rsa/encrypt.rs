// RSA Encryption
// Block-wise encryption of arbitrary-length messages

use super::bigint::{from_bytes, mod_pow, to_fixed_width, RsaBigInt};
use super::config::RsaConfig;
use super::error::{RsaError, RsaResult};
use super::keygen::RsaPublicKey;
use super::padding::pad_to_block;

/// Encrypt an arbitrary-length message, returning the ciphertext as one
/// big integer.
///
/// The message is zero-padded to a block boundary and split into
/// `block_size`-byte chunks. Each chunk, read as a big-endian integer, is
/// raised to `e` mod `n` and re-encoded as a fixed `num_bits/8`-byte block;
/// the blocks are concatenated in message order. A chunk whose integer value
/// reaches the modulus fails with `BlockTooLarge`, which indicates the key
/// and the configured block size do not belong together.
pub fn encrypt_bytes(
    config: &RsaConfig,
    key: &RsaPublicKey,
    plaintext: &[u8],
) -> RsaResult<RsaBigInt> {
    let padded = pad_to_block(plaintext, config.block_size);
    let cipher_width = config.cipher_block_size();
    let num_blocks = padded.len() / config.block_size;
    let mut result = Vec::with_capacity(num_blocks * cipher_width);

    for (index, chunk) in padded.chunks(config.block_size).enumerate() {
        let m = from_bytes(chunk);
        if m >= key.n {
            return Err(RsaError::BlockTooLarge { index });
        }
        let c = mod_pow(&m, &key.e, &key.n)?;
        result.extend_from_slice(&to_fixed_width(&c, cipher_width));
    }

    Ok(from_bytes(&result))
}

/// Encrypt a text message.
pub fn encrypt_string(config: &RsaConfig, key: &RsaPublicKey, text: &str) -> RsaResult<RsaBigInt> {
    encrypt_bytes(config, key, text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;
    use crate::rsa::keygen::generate_keypair;
    use num_traits::Zero;

    fn test_config() -> RsaConfig {
        RsaConfig::new(512, 53, 20).unwrap()
    }

    /// Textbook key: n = 61 * 53, e = 17, d = 2753.
    fn textbook_key() -> RsaPublicKey {
        RsaPublicKey {
            n: from_u64(3233),
            e: from_u64(17),
        }
    }

    #[test]
    fn test_encrypt_bytes() {
        let config = test_config();
        let keypair = generate_keypair(&config).unwrap();
        let message = b"Hello, RSA!";

        let ciphertext = encrypt_bytes(&config, &keypair.public_key, message).unwrap();
        assert!(!ciphertext.is_zero());
        // one plaintext block produces one cipher block
        assert!(ciphertext.bits() <= config.num_bits);
    }

    #[test]
    fn test_encrypt_empty() {
        let config = test_config();
        let keypair = generate_keypair(&config).unwrap();
        let ciphertext = encrypt_bytes(&config, &keypair.public_key, b"").unwrap();
        assert!(ciphertext.is_zero());
    }

    #[test]
    fn test_encrypt_exactly_one_block() {
        let config = test_config();
        let keypair = generate_keypair(&config).unwrap();
        let message = vec![7u8; config.block_size];

        let ciphertext = encrypt_bytes(&config, &keypair.public_key, &message).unwrap();
        // no extra block appears for an aligned message
        assert!(ciphertext.bits() <= config.num_bits);
    }

    #[test]
    fn test_encrypt_multi_block_length() {
        let config = test_config();
        let keypair = generate_keypair(&config).unwrap();
        let message = vec![9u8; config.block_size * 2 + 1];

        let ciphertext = encrypt_bytes(&config, &keypair.public_key, &message).unwrap();
        // three blocks: the third holds the padded tail
        assert!(ciphertext.bits() > 2 * config.num_bits - 16);
        assert!(ciphertext.bits() <= 3 * config.num_bits);
    }

    #[test]
    fn test_block_too_large_for_key() {
        // a 4-byte block cannot stay below the 12-bit textbook modulus
        let config = RsaConfig::new(64, 4, 10).unwrap();
        let result = encrypt_bytes(&config, &textbook_key(), &[0xFF, 0xFF, 0xFF, 0xFF]);
        assert!(matches!(result, Err(RsaError::BlockTooLarge { index: 0 })));
    }

    #[test]
    fn test_encrypt_string() {
        let config = test_config();
        let keypair = generate_keypair(&config).unwrap();
        let ciphertext = encrypt_string(&config, &keypair.public_key, "Test message").unwrap();
        assert!(!ciphertext.is_zero());
    }
}
