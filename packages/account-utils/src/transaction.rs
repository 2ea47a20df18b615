use std::borrow::Cow;

use alloy_primitives::{keccak256, utils::eip191_hash_message, Bytes, B256, U256};
use alloy_sol_types::{sol, Eip712Domain, SolStruct, SolValue};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, StdResult, Uint128};

pub const DOMAIN_NAME: &str = "ValenceSmartAccount";
pub const DOMAIN_VERSION: &str = "1";

// EIP-712 typed representation of a transaction. The signature is not part of it.
sol! {
    struct AccountTransaction {
        uint64 nonce;
        string to;
        uint256 value;
        bytes data;
        uint64 gasLimit;
        uint64 gasPerPubdataByteLimit;
        uint256 maxFeePerGas;
    }
}

/// A transaction submitted to the account for authorization.
#[cw_serde]
pub struct Transaction {
    pub nonce: u64,
    pub to: String,
    pub value: Uint128,
    pub data: Binary,
    pub fee: Option<FeeParams>,
    // 65 bytes: r || s || v
    pub signature: Binary,
}

/// Fee fields declared by transactions going through a bootloader host.
#[cw_serde]
pub struct FeeParams {
    pub gas_limit: u64,
    pub gas_per_pubdata_byte_limit: u64,
    pub max_fee_per_gas: Uint128,
}

impl FeeParams {
    pub fn total_required_balance(&self) -> StdResult<Uint128> {
        Ok(Uint128::from(self.gas_limit).checked_mul(self.max_fee_per_gas)?)
    }
}

impl Transaction {
    /// Amount the account must hold to cover the declared fee. Zero without fee fields.
    pub fn total_required_balance(&self) -> StdResult<Uint128> {
        match &self.fee {
            Some(fee) => fee.total_required_balance(),
            None => Ok(Uint128::zero()),
        }
    }

    pub fn typed(&self) -> AccountTransaction {
        let fee = self.fee.clone().unwrap_or(FeeParams {
            gas_limit: 0,
            gas_per_pubdata_byte_limit: 0,
            max_fee_per_gas: Uint128::zero(),
        });

        AccountTransaction {
            nonce: self.nonce,
            to: self.to.clone(),
            value: U256::from(self.value.u128()),
            data: Bytes::from(self.data.to_vec()),
            gasLimit: fee.gas_limit,
            gasPerPubdataByteLimit: fee.gas_per_pubdata_byte_limit,
            maxFeePerGas: U256::from(fee.max_fee_per_gas.u128()),
        }
    }

    /// EIP-712 hash of the transaction, bound to the chain and to the account that executes it.
    pub fn digest(&self, chain_id: &str, account: &str) -> [u8; 32] {
        self.typed()
            .eip712_signing_hash(&domain(chain_id, account))
            .0
    }

    /// Digest the owner actually signs: the transaction digest wrapped as an
    /// EIP-191 signed message.
    pub fn signing_digest(&self, chain_id: &str, account: &str) -> [u8; 32] {
        eip191_hash_message(self.digest(chain_id, account)).0
    }
}

pub fn domain(chain_id: &str, account: &str) -> Eip712Domain {
    let salt: B256 = keccak256((chain_id.to_string(), account.to_string()).abi_encode());

    Eip712Domain::new(
        Some(Cow::Borrowed(DOMAIN_NAME)),
        Some(Cow::Borrowed(DOMAIN_VERSION)),
        None,
        None,
        Some(salt),
    )
}
