// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod config;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keygen;
pub mod padding;
pub mod prime;

pub use bigint::{gcd, mod_inverse, mod_pow, RsaBigInt};
pub use config::RsaConfig;
pub use decrypt::{decrypt, decrypt_blocks, decrypt_to_string};
pub use encrypt::{encrypt_bytes, encrypt_string};
pub use error::{RsaError, RsaResult};
pub use keygen::{generate_keypair, RsaKeyPair, RsaPrivateKey, RsaPublicKey};
pub use padding::{pad_to_block, strip_padding};
pub use prime::{find_prime, is_probable_prime, jacobi, PrimeSearch};
