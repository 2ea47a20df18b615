use cosmwasm_std::{CosmosMsg, Deps, Env, StdResult, Uint128};
use valence_account_utils::{
    error::ContractError,
    msg::Config,
    signature::{recover_signer, ValidationOutcome},
    transaction::Transaction,
};

use crate::{fee, host::protocol};

pub struct Validation {
    pub outcome: ValidationOutcome,
    // Replay protection message, dispatched in the same call so a nonce mismatch aborts it
    pub nonce_msg: Option<CosmosMsg>,
    pub required_balance: Uint128,
}

/// Compares the signer of the transaction with the current owner.
pub fn validate_signature(
    deps: Deps,
    env: &Env,
    transaction: &Transaction,
) -> StdResult<ValidationOutcome> {
    let digest = transaction.signing_digest(&env.block.chain_id, env.contract.address.as_str());

    let Some(signer) = recover_signer(deps.api, &digest, transaction.signature.as_slice()) else {
        return Ok(ValidationOutcome::Unauthorized);
    };

    let ownership = cw_ownable::get_ownership(deps.storage)?;
    if ownership.owner.as_ref() == Some(&signer) {
        Ok(ValidationOutcome::Authorized)
    } else {
        Ok(ValidationOutcome::Unauthorized)
    }
}

/// Validation phase: consumes the nonce and checks the declared fee where the host
/// requires it, then checks the signature. Only the former two can fail the call.
pub fn validate_transaction(
    deps: Deps,
    env: &Env,
    config: &Config,
    transaction: &Transaction,
) -> Result<Validation, ContractError> {
    let protocol = protocol(&config.host);

    let nonce_msg = protocol.consume_nonce(transaction.nonce)?;

    let required_balance = if protocol.checks_required_balance() {
        fee::ensure_required_balance(deps, env, &config.denom, transaction)?
    } else {
        Uint128::zero()
    };

    let outcome = validate_signature(deps, env, transaction)?;

    Ok(Validation {
        outcome,
        nonce_msg,
        required_balance,
    })
}
