//! Solana address encoding and validation.
//!
//! Solana addresses are Base58-encoded 32-byte values. For wallet accounts the
//! bytes are an Ed25519 public key; for program-derived addresses they are a
//! SHA-256 digest that is deliberately off the curve. Either way the address
//! is compared by byte equality and carries no checksum.

use serde::Serializer;

use crate::error::SolError;

/// A 32-byte Solana account address.
pub type Address = [u8; 32];

/// Validate a Solana address string.
///
/// A valid Solana address is a Base58-encoded string that decodes to exactly
/// 32 bytes. Returns `Ok(true)` if valid, or an error if decoding fails or
/// the length is wrong.
pub fn validate_address(address: &str) -> Result<bool, SolError> {
    address_to_bytes(address).map(|_| true)
}

/// Decode a Solana address string to its 32-byte representation.
///
/// Returns an error if the address is not valid Base58 or does not decode
/// to exactly 32 bytes.
pub fn address_to_bytes(address: &str) -> Result<Address, SolError> {
    let bytes = bs58::decode(address.trim())
        .into_vec()
        .map_err(|e| SolError::InvalidAddress(format!("base58 decode failed: {e}")))?;

    let arr: Address = bytes.try_into().map_err(|v: Vec<u8>| {
        SolError::InvalidAddress(format!("expected 32 bytes, got {}", v.len()))
    })?;

    Ok(arr)
}

/// Encode 32 bytes as a Solana address (Base58 string).
pub fn bytes_to_address(bytes: &Address) -> String {
    bs58::encode(bytes).into_string()
}

/// `serde` helper rendering an address as its Base58 string.
pub fn serialize_base58<S: Serializer>(bytes: &Address, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&bytes_to_address(bytes))
}
