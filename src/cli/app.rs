// Interactive Terminal Front End
// Menu-driven encrypt / decrypt / key generation, with key material loaded
// from files or typed at the prompt

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::debug;
use num_bigint::BigUint;

use crate::rsa::{
    decrypt, encrypt_bytes, generate_keypair, RsaConfig, RsaPrivateKey, RsaPublicKey,
};
use crate::util::keyfile;

const PUBLIC_KEY_FILE: &str = "public_key.txt";
const PRIVATE_KEY_FILE: &str = "private_key.txt";
const ENCRYPTED_MESSAGE_FILE: &str = "encrypted_message.txt";
const DECRYPTED_MESSAGE_FILE: &str = "decrypted_message.txt";

/// Run the interactive session on stdin/stdout.
pub fn run() -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let config = RsaConfig::default();

    let choice = prompt_choice(
        &mut input,
        "Would you like to encrypt a message, decrypt a message, or generate keys? (1: encrypt, 2: decrypt, 3: keys)",
    )?;
    match choice {
        1 => run_encrypt(&mut input, &config),
        2 => run_decrypt(&mut input, &config),
        3 => run_keygen(&config),
        other => bail!("unknown option: {}", other),
    }
}

fn run_encrypt(input: &mut impl BufRead, config: &RsaConfig) -> Result<()> {
    let key = prompt_public_key(input)?;
    let message = prompt_message_bytes(input)?;

    let cipher = encrypt_bytes(config, &key, &message).context("encryption failed")?;
    debug!(
        "ciphertext hex: {}",
        hex::encode(cipher.to_bytes_be())
    );

    println!("Encrypted message: {}", cipher);
    keyfile::write_cipher(Path::new(ENCRYPTED_MESSAGE_FILE), &cipher)
        .with_context(|| format!("failed to write {}", ENCRYPTED_MESSAGE_FILE))?;
    println!("Encrypted message stored in: {}", ENCRYPTED_MESSAGE_FILE);
    Ok(())
}

fn run_decrypt(input: &mut impl BufRead, config: &RsaConfig) -> Result<()> {
    let key = prompt_private_key(input)?;
    let cipher = prompt_cipher(input)?;

    let plaintext = decrypt(config, &key, &cipher).context("decryption failed")?;
    match String::from_utf8(plaintext.clone()) {
        Ok(text) => println!("Decrypted message: {}", text),
        Err(_) => println!("Decrypted message is not valid UTF-8 ({} bytes)", plaintext.len()),
    }

    fs::write(DECRYPTED_MESSAGE_FILE, &plaintext)
        .with_context(|| format!("failed to write {}", DECRYPTED_MESSAGE_FILE))?;
    println!("Decrypted message stored in: {}", DECRYPTED_MESSAGE_FILE);
    Ok(())
}

fn run_keygen(config: &RsaConfig) -> Result<()> {
    println!("Generating keys");
    let keypair = generate_keypair(config).context("key generation failed")?;

    keyfile::write_public_key(Path::new(PUBLIC_KEY_FILE), &keypair.public_key)
        .with_context(|| format!("failed to write {}", PUBLIC_KEY_FILE))?;
    keyfile::write_private_key(Path::new(PRIVATE_KEY_FILE), &keypair.private_key)
        .with_context(|| format!("failed to write {}", PRIVATE_KEY_FILE))?;

    println!("n: {}", keypair.public_key.n);
    println!("e: {}", keypair.public_key.e);
    println!("d: {}", keypair.private_key.d);
    println!("Public key stored in: {}", PUBLIC_KEY_FILE);
    println!("Private key stored in: {}", PRIVATE_KEY_FILE);
    Ok(())
}

fn prompt_public_key(input: &mut impl BufRead) -> Result<RsaPublicKey> {
    let choice = prompt_choice(
        input,
        "Would you like to load encryption keys from a file or enter them in the terminal? (1: file, 2: terminal)",
    )?;
    if choice == 1 {
        let path = prompt_line(
            input,
            "Please enter the public key file name (n and e on the first two lines):",
        )?;
        keyfile::read_public_key(Path::new(&path))
            .with_context(|| format!("failed to read public key from {}", path))
    } else {
        let n = prompt_integer(input, "Please enter n:")?;
        let e = prompt_integer(input, "Please enter e:")?;
        Ok(RsaPublicKey { n, e })
    }
}

fn prompt_private_key(input: &mut impl BufRead) -> Result<RsaPrivateKey> {
    let choice = prompt_choice(
        input,
        "Would you like to load the decryption key from a file or enter it in the terminal? (1: file, 2: terminal)",
    )?;
    if choice == 1 {
        let path = prompt_line(
            input,
            "Please enter the private key file name (n and d on the first two lines):",
        )?;
        keyfile::read_private_key(Path::new(&path))
            .with_context(|| format!("failed to read private key from {}", path))
    } else {
        let n = prompt_integer(input, "Please enter n:")?;
        let d = prompt_integer(input, "Please enter d:")?;
        Ok(RsaPrivateKey { n, d })
    }
}

fn prompt_message_bytes(input: &mut impl BufRead) -> Result<Vec<u8>> {
    let choice = prompt_choice(
        input,
        "Would you like to encrypt a message from a file or the terminal? (1: file, 2: terminal)",
    )?;
    if choice == 1 {
        let path = prompt_line(input, "Please enter the message's file name:")?;
        fs::read(&path).with_context(|| format!("failed to read message from {}", path))
    } else {
        let text = prompt_line(input, "Please enter your message:")?;
        Ok(text.into_bytes())
    }
}

fn prompt_cipher(input: &mut impl BufRead) -> Result<BigUint> {
    let choice = prompt_choice(
        input,
        "Would you like to decrypt a message from a file or the terminal? (1: file, 2: terminal)",
    )?;
    if choice == 1 {
        let path = prompt_line(input, "Please enter the encrypted message's file name:")?;
        keyfile::read_cipher(Path::new(&path))
            .with_context(|| format!("failed to read ciphertext from {}", path))
    } else {
        let text = prompt_line(input, "Please enter your encrypted message:")?;
        text.parse().context("ciphertext must be a decimal integer")
    }
}

fn prompt_line(input: &mut impl BufRead, message: &str) -> Result<String> {
    println!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_choice(input: &mut impl BufRead, message: &str) -> Result<u32> {
    prompt_line(input, message)?
        .parse()
        .context("expected a numeric option")
}

fn prompt_integer(input: &mut impl BufRead, message: &str) -> Result<BigUint> {
    prompt_line(input, message)?
        .parse()
        .context("expected a decimal integer")
}
