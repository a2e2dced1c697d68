// RSA Decryption
// Block-wise decryption back to the original message

use num_traits::Zero;

use super::bigint::{from_bytes, mod_pow, to_fixed_width, RsaBigInt};
use super::config::RsaConfig;
use super::error::{RsaError, RsaResult};
use super::keygen::RsaPrivateKey;
use super::padding::strip_padding;

/// Decrypt a ciphertext integer back to plaintext bytes.
///
/// The integer form drops any leading zero bytes of the first cipher block;
/// they are restored before splitting. Block order is preserved, and the
/// zero padding is stripped once from the very end of the reassembled
/// buffer. There is no integrity check: a tampered ciphertext decrypts to
/// garbage rather than an error.
pub fn decrypt(config: &RsaConfig, key: &RsaPrivateKey, cipher: &RsaBigInt) -> RsaResult<Vec<u8>> {
    let width = config.cipher_block_size();
    let bytes = if cipher.is_zero() {
        Vec::new()
    } else {
        cipher.to_bytes_be()
    };

    let missing = (width - bytes.len() % width) % width;
    let mut buffer = vec![0u8; missing];
    buffer.extend_from_slice(&bytes);

    decrypt_blocks(config, key, &buffer)
}

/// Decrypt a buffer of fixed-width ciphertext blocks.
///
/// The buffer length must be an exact multiple of the cipher block width;
/// anything else fails with `MalformedCiphertext`.
pub fn decrypt_blocks(
    config: &RsaConfig,
    key: &RsaPrivateKey,
    cipher: &[u8],
) -> RsaResult<Vec<u8>> {
    let width = config.cipher_block_size();
    if cipher.len() % width != 0 {
        return Err(RsaError::MalformedCiphertext {
            len: cipher.len(),
            width,
        });
    }

    let num_blocks = cipher.len() / width;
    let mut plain = Vec::with_capacity(num_blocks * config.block_size);

    for (index, chunk) in cipher.chunks(width).enumerate() {
        let c = from_bytes(chunk);
        let m = mod_pow(&c, &key.d, &key.n)?;
        // a result wider than a plaintext block means the ciphertext was not
        // produced under this key/block-size pairing
        if m.bits() > (config.block_size as u64) * 8 {
            return Err(RsaError::BlockTooLarge { index });
        }
        plain.extend_from_slice(&to_fixed_width(&m, config.block_size));
    }

    Ok(strip_padding(&plain))
}

/// Decrypt a ciphertext integer and decode the result as UTF-8 text.
pub fn decrypt_to_string(
    config: &RsaConfig,
    key: &RsaPrivateKey,
    cipher: &RsaBigInt,
) -> RsaResult<String> {
    let plaintext = decrypt(config, key, cipher)?;
    Ok(String::from_utf8(plaintext)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;
    use crate::rsa::encrypt::{encrypt_bytes, encrypt_string};
    use crate::rsa::keygen::{generate_keypair, RsaKeyPair, RsaPublicKey};

    fn test_config() -> RsaConfig {
        RsaConfig::new(512, 53, 20).unwrap()
    }

    /// Textbook key: n = 61 * 53 = 3233, e = 17, d = 2753.
    fn textbook_pair() -> (RsaConfig, RsaPublicKey, RsaPrivateKey) {
        let config = RsaConfig::new(16, 1, 10).unwrap();
        let public = RsaPublicKey {
            n: from_u64(3233),
            e: from_u64(17),
        };
        let private = RsaPrivateKey {
            n: from_u64(3233),
            d: from_u64(2753),
        };
        (config, public, private)
    }

    fn roundtrip(config: &RsaConfig, keypair: &RsaKeyPair, message: &[u8]) {
        let ciphertext = encrypt_bytes(config, &keypair.public_key, message).unwrap();
        let decrypted = decrypt(config, &keypair.private_key, &ciphertext).unwrap();
        assert_eq!(message, decrypted.as_slice());
    }

    #[test]
    fn test_textbook_roundtrip() {
        // deterministic check with single-byte blocks, no key generation
        let (config, public, private) = textbook_pair();
        let message = b"ABC";
        let ciphertext = encrypt_bytes(&config, &public, message).unwrap();
        let decrypted = decrypt(&config, &private, &ciphertext).unwrap();
        assert_eq!(decrypted, message);
    }

    #[test]
    fn test_roundtrip_abcd() {
        let config = test_config();
        let keypair = generate_keypair(&config).unwrap();
        let ciphertext = encrypt_string(&config, &keypair.public_key, "abcd").unwrap();
        let decrypted = decrypt(&config, &keypair.private_key, &ciphertext).unwrap();
        assert_eq!(decrypted, b"abcd");
    }

    #[test]
    fn test_roundtrip_various_sizes() {
        let config = test_config();
        let keypair = generate_keypair(&config).unwrap();

        let cases: Vec<Vec<u8>> = vec![
            b"A".to_vec(),
            b"Hello, World!".to_vec(),
            vec![1u8; config.block_size],         // exactly one block
            vec![2u8; config.block_size + 1],     // one block plus one byte
            vec![3u8; config.block_size * 3],     // several aligned blocks
            vec![0, 0, 9],                        // leading zeros survive
        ];
        for message in cases {
            roundtrip(&config, &keypair, &message);
        }
    }

    #[test]
    fn test_roundtrip_empty() {
        let config = test_config();
        let keypair = generate_keypair(&config).unwrap();
        roundtrip(&config, &keypair, b"");
    }

    #[test]
    fn test_decrypt_to_string() {
        let config = test_config();
        let keypair = generate_keypair(&config).unwrap();
        let message = "variable length message that spans more than one block of the cipher";

        let ciphertext = encrypt_string(&config, &keypair.public_key, message).unwrap();
        let decrypted = decrypt_to_string(&config, &keypair.private_key, &ciphertext).unwrap();
        assert_eq!(decrypted, message);
    }

    #[test]
    fn test_decrypt_invalid_utf8() {
        let config = test_config();
        let keypair = generate_keypair(&config).unwrap();

        let ciphertext = encrypt_bytes(&config, &keypair.public_key, &[0xFF, 0xFE]).unwrap();
        let result = decrypt_to_string(&config, &keypair.private_key, &ciphertext);
        assert!(matches!(result, Err(RsaError::Encoding(_))));
    }

    #[test]
    fn test_decrypt_blocks_bad_length() {
        let config = test_config();
        let keypair = generate_keypair(&config).unwrap();
        let result = decrypt_blocks(&config, &keypair.private_key, &[0u8; 10]);
        assert!(matches!(
            result,
            Err(RsaError::MalformedCiphertext { len: 10, width: 64 })
        ));
    }

    #[test]
    fn test_trailing_zeros_are_stripped() {
        // the known data-loss case of the zero-padding scheme: a plaintext
        // ending in zero bytes comes back without them
        let config = test_config();
        let keypair = generate_keypair(&config).unwrap();

        let ciphertext = encrypt_bytes(&config, &keypair.public_key, &[5, 0, 0]).unwrap();
        let decrypted = decrypt(&config, &keypair.private_key, &ciphertext).unwrap();
        assert_eq!(decrypted, vec![5]);
    }
}
