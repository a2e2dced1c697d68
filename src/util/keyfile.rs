// Key and Message File Persistence
// Key files are two lines of decimal digits: the modulus n, then the
// exponent (e for public keys, d for private keys). Ciphertext files hold a
// single decimal integer.

use std::fs;
use std::io;
use std::path::Path;

use num_bigint::{BigUint, ParseBigIntError};
use thiserror::Error;

use crate::rsa::{RsaPrivateKey, RsaPublicKey};

/// Errors that can occur while reading or writing key material
#[derive(Debug, Error)]
pub enum KeyfileError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("key file must contain two lines of decimal digits")]
    MissingField,
    #[error("invalid decimal integer: {0}")]
    Parse(#[from] ParseBigIntError),
}

/// Result type for file operations
pub type KeyfileResult<T> = Result<T, KeyfileError>;

fn read_two_integers(path: &Path) -> KeyfileResult<(BigUint, BigUint)> {
    let contents = fs::read_to_string(path)?;
    let mut lines = contents.lines();
    let first = lines.next().ok_or(KeyfileError::MissingField)?;
    let second = lines.next().ok_or(KeyfileError::MissingField)?;
    Ok((first.trim().parse()?, second.trim().parse()?))
}

/// Read a public key file (n, then e)
pub fn read_public_key(path: &Path) -> KeyfileResult<RsaPublicKey> {
    let (n, e) = read_two_integers(path)?;
    Ok(RsaPublicKey { n, e })
}

/// Write a public key file (n, then e)
pub fn write_public_key(path: &Path, key: &RsaPublicKey) -> KeyfileResult<()> {
    fs::write(path, format!("{}\n{}\n", key.n, key.e))?;
    Ok(())
}

/// Read a private key file (n, then d)
pub fn read_private_key(path: &Path) -> KeyfileResult<RsaPrivateKey> {
    let (n, d) = read_two_integers(path)?;
    Ok(RsaPrivateKey { n, d })
}

/// Write a private key file (n, then d)
pub fn write_private_key(path: &Path, key: &RsaPrivateKey) -> KeyfileResult<()> {
    fs::write(path, format!("{}\n{}\n", key.n, key.d))?;
    Ok(())
}

/// Read a ciphertext file holding one decimal integer
pub fn read_cipher(path: &Path) -> KeyfileResult<BigUint> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.trim().parse()?)
}

/// Write a ciphertext file holding one decimal integer
pub fn write_cipher(path: &Path, cipher: &BigUint) -> KeyfileResult<()> {
    fs::write(path, format!("{}\n", cipher))?;
    Ok(())
}
