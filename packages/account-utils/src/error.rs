use cosmwasm_std::{Addr, StdError, Uint128};
use cw_ownable::OwnershipError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    #[error("Unauthorized caller: {caller}")]
    UnauthorizedCaller { caller: Addr },

    #[error("Insufficient balance: {available} available, {required} required")]
    InsufficientBalance {
        required: Uint128,
        available: Uint128,
    },

    #[error("Payment to host failed: {reason}")]
    PaymentFailed { reason: String },

    #[error("Execution failed: {reason}")]
    ExecutionFailed { reason: String },

    #[error("Invalid signature")]
    InvalidSignature {},

    #[error("{entry} is not supported by this host")]
    UnsupportedByHost { entry: String },

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}
