use alloy_primitives::keccak256;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, Binary, CanonicalAddr};

pub const SIGNATURE_LENGTH: usize = 65;

// Returned by a bootloader-hosted account when validation succeeds
pub const ACCOUNT_VALIDATION_SUCCESS_MAGIC: [u8; 4] = [0x20, 0x2b, 0xcc, 0xe7];
// Validation data an entry-point-hosted account returns on signature failure
pub const SIG_VALIDATION_FAILED: u8 = 1;

/// Result of comparing the recovered signer with the owner. A mismatch is data, not an error.
#[cw_serde]
pub enum ValidationOutcome {
    Authorized,
    Unauthorized,
}

impl ValidationOutcome {
    pub fn is_authorized(&self) -> bool {
        matches!(self, ValidationOutcome::Authorized)
    }

    /// 4-byte magic on success, zeroes otherwise.
    pub fn bootloader_code(&self) -> Binary {
        match self {
            ValidationOutcome::Authorized => Binary::from(ACCOUNT_VALIDATION_SUCCESS_MAGIC.to_vec()),
            ValidationOutcome::Unauthorized => Binary::from(vec![0u8; 4]),
        }
    }

    /// 32-byte big-endian validation data: 0 on success, `SIG_VALIDATION_FAILED` otherwise.
    pub fn validation_data(&self) -> Binary {
        let mut data = vec![0u8; 32];
        if !self.is_authorized() {
            data[31] = SIG_VALIDATION_FAILED;
        }
        Binary::from(data)
    }
}

impl std::fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationOutcome::Authorized => write!(f, "authorized"),
            ValidationOutcome::Unauthorized => write!(f, "unauthorized"),
        }
    }
}

/// Recovers the address that signed `digest`.
///
/// Any malformed input (wrong length, unknown recovery id, failed recovery) yields `None`
/// so the caller can report the mismatch as data.
pub fn recover_signer(api: &dyn Api, digest: &[u8; 32], signature: &[u8]) -> Option<Addr> {
    if signature.len() != SIGNATURE_LENGTH {
        return None;
    }

    let (rs, v) = signature.split_at(64);
    let recovery_param = match v[0] {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return None,
    };

    let pubkey = api
        .secp256k1_recover_pubkey(digest, rs, recovery_param)
        .ok()?;
    let address = pubkey_to_address(&pubkey)?;

    api.addr_humanize(&CanonicalAddr::from(address.as_slice()))
        .ok()
}

/// Last 20 bytes of the keccak256 hash of an uncompressed secp256k1 public key.
pub fn pubkey_to_address(pubkey: &[u8]) -> Option<[u8; 20]> {
    if pubkey.len() != 65 || pubkey[0] != 0x04 {
        return None;
    }

    let hash = keccak256(&pubkey[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Some(address)
}
