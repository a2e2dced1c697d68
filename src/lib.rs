//! Variable-length RSA.
//!
//! A fixed-modulus RSA primitive with a block framing scheme on top, so the
//! cipher handles messages of any length: the plaintext is zero-padded to a
//! multiple of the block size, each block is encrypted independently, and the
//! fixed-width ciphertext blocks are concatenated into a single integer.
//!
//! This is a self-contained educational cipher. It uses raw (unpadded-block)
//! RSA with zero-byte framing, has no ciphertext integrity protection, and
//! makes no attempt at side-channel resistance. Do not use it to protect
//! real data.

pub mod cli;
pub mod rsa;
pub mod util;
