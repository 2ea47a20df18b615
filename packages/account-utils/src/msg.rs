use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Api, Binary, StdResult, Uint128};
use cw_ownable::{cw_ownable_execute, cw_ownable_query};

use crate::{signature::ValidationOutcome, transaction::Transaction};

#[cw_serde]
pub struct InstantiateMsg {
    // Address derived from the owner's secp256k1 key
    pub owner: String,
    pub host: HostConfig,
    // Native denom the account holds and pays fees in
    pub denom: String,
}

/// Host the account is deployed under, as received in the instantiate message.
#[cw_serde]
pub enum HostConfig {
    /// Generic entry-point host. Nonce ordering is enforced by the entry point itself.
    EntryPoint { entry_point: String },
    /// Bootloader host with native account abstraction and its system services.
    Bootloader {
        bootloader: String,
        nonce_holder: String,
        deployer: String,
    },
}

impl HostConfig {
    pub fn into_checked(self, api: &dyn Api) -> StdResult<Host> {
        match self {
            HostConfig::EntryPoint { entry_point } => Ok(Host::EntryPoint(EntryPointHost {
                entry_point: api.addr_validate(&entry_point)?,
            })),
            HostConfig::Bootloader {
                bootloader,
                nonce_holder,
                deployer,
            } => Ok(Host::Bootloader(BootloaderHost {
                bootloader: api.addr_validate(&bootloader)?,
                nonce_holder: api.addr_validate(&nonce_holder)?,
                deployer: api.addr_validate(&deployer)?,
            })),
        }
    }
}

#[cw_serde]
pub enum Host {
    EntryPoint(EntryPointHost),
    Bootloader(BootloaderHost),
}

impl Host {
    /// Address allowed to drive the validate / pay / execute sequence.
    pub fn address(&self) -> &Addr {
        match self {
            Host::EntryPoint(host) => &host.entry_point,
            Host::Bootloader(host) => &host.bootloader,
        }
    }
}

#[cw_serde]
pub struct EntryPointHost {
    pub entry_point: Addr,
}

#[cw_serde]
pub struct BootloaderHost {
    pub bootloader: Addr,
    pub nonce_holder: Addr,
    pub deployer: Addr,
}

#[cw_serde]
pub struct Config {
    pub host: Host,
    pub denom: String,
}

#[cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    // Validation phase (host only). Responds with the host's sentinel code as data
    ValidateTransaction {
        tx_hash: Option<Binary>,
        suggested_signed_hash: Option<Binary>,
        transaction: Transaction,
    },
    // Fee phase (host only). `missing_funds` is the prefund requested by an entry point
    PayForTransaction {
        transaction: Transaction,
        missing_funds: Option<Uint128>,
    },
    // Execution phase (host or owner)
    ExecuteTransaction { transaction: Transaction },
    // Validation and execution in one call, open to anyone holding an owner signature
    ExecuteTransactionFromOutside { transaction: Transaction },
}

#[cw_ownable_query]
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    #[returns(DigestResponse)]
    TransactionDigest { transaction: Transaction },
    // Runs the signature validator against the current owner without side effects
    #[returns(ValidationOutcome)]
    CheckSignature { transaction: Transaction },
}

#[cw_serde]
pub struct DigestResponse {
    pub digest: Binary,
    pub signing_digest: Binary,
}
