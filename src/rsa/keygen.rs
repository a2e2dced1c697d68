// RSA Key Generation
// Builds a key pair from two random primes

use log::debug;
use num_traits::One;

use super::bigint::{gcd, mod_inverse, random_below, RsaBigInt};
use super::config::RsaConfig;
use super::error::RsaResult;
use super::prime::find_prime;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    /// Modulus
    pub n: RsaBigInt,
    /// Public exponent
    pub e: RsaBigInt,
}

/// RSA Private Key
///
/// Holds only the modulus and the private exponent. The primes and the
/// totient are discarded at generation time and cannot be recovered from
/// this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    /// Modulus (same as public)
    pub n: RsaBigInt,
    /// Private exponent
    pub d: RsaBigInt,
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
}

impl RsaPublicKey {
    /// Bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Encrypt a message under this key, returning the ciphertext integer
    pub fn encrypt(&self, config: &RsaConfig, plaintext: &[u8]) -> RsaResult<RsaBigInt> {
        super::encrypt::encrypt_bytes(config, self, plaintext)
    }
}

impl RsaPrivateKey {
    /// Bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Decrypt a ciphertext integer back to plaintext bytes
    pub fn decrypt(&self, config: &RsaConfig, ciphertext: &RsaBigInt) -> RsaResult<Vec<u8>> {
        super::decrypt::decrypt(config, self, ciphertext)
    }
}

impl RsaKeyPair {
    pub fn bit_length(&self) -> u64 {
        self.public_key.bit_length()
    }
}

/// Generate an RSA key pair for the given parameters.
///
/// Draws two independent primes of `num_bits / 2` bits, derives the modulus
/// and totient, picks a random public exponent coprime to the totient, and
/// inverts it. The primes and the totient are dropped once `e` and `d` are
/// derived.
pub fn generate_keypair(config: &RsaConfig) -> RsaResult<RsaKeyPair> {
    let half_bits = config.prime_bits();

    let p = find_prime(half_bits, config.prime_iterations)?;
    let q = find_prime(half_bits, config.prime_iterations)?;
    debug!(
        "primes drawn after {} and {} candidates",
        p.attempts, q.attempts
    );

    let n = &p.prime * &q.prime;
    let phi = (&p.prime - 1u8) * (&q.prime - 1u8);

    let e = generate_exponent(&phi);
    let d = mod_inverse(&e, &phi)?;
    debug_assert!(((&e * &d) % &phi).is_one());

    Ok(RsaKeyPair {
        public_key: RsaPublicKey { n: n.clone(), e },
        private_key: RsaPrivateKey { n, d },
    })
}

/// Draw uniform exponents below `phi` until one is coprime to it.
fn generate_exponent(phi: &RsaBigInt) -> RsaBigInt {
    loop {
        let e = random_below(phi);
        if gcd(&e, phi).is_one() {
            return e;
        }
    }
}
