use cosmwasm_std::{coins, BankMsg, Deps, DepsMut, Env, Response, SubMsg, Uint128};
use valence_account_utils::{error::ContractError, transaction::Transaction};

use crate::host::HostProtocol;

// Reply ids for fee transfers to the host
pub const PAYMENT_REPLY_ID: u64 = 1;
pub const PREFUND_REPLY_ID: u64 = 2;

/// Fails when the account cannot cover the fee the transaction declares.
pub fn ensure_required_balance(
    deps: Deps,
    env: &Env,
    denom: &str,
    transaction: &Transaction,
) -> Result<Uint128, ContractError> {
    let required = transaction.total_required_balance()?;
    let available = deps
        .querier
        .query_balance(env.contract.address.clone(), denom)?
        .amount;

    if available < required {
        return Err(ContractError::InsufficientBalance {
            required,
            available,
        });
    }

    Ok(required)
}

/// Transfer of the fee to the host, or `None` when nothing is owed.
///
/// The transfer carries no gas limit. How its failure is handled depends on the host,
/// see [`PAYMENT_REPLY_ID`] and [`PREFUND_REPLY_ID`].
pub fn pay_host(
    protocol: &dyn HostProtocol,
    denom: &str,
    transaction: &Transaction,
    missing_funds: Option<Uint128>,
) -> Result<Option<(SubMsg, Uint128)>, ContractError> {
    let amount = protocol.payment_amount(transaction, missing_funds)?;
    if amount.is_zero() {
        return Ok(None);
    }

    let transfer = BankMsg::Send {
        to_address: protocol.host().to_string(),
        amount: coins(amount.u128(), denom),
    };
    let reply_id = if protocol.payment_is_fatal() {
        PAYMENT_REPLY_ID
    } else {
        PREFUND_REPLY_ID
    };

    Ok(Some((SubMsg::reply_on_error(transfer, reply_id), amount)))
}

pub fn payment_failed(reason: String) -> ContractError {
    ContractError::PaymentFailed { reason }
}

// A failed prefund leaves the balance untouched and is left for the entry point to act on
pub fn prefund_failed(deps: DepsMut, reason: String) -> Response {
    deps.api.debug(&format!("prefund transfer failed: {reason}"));

    Response::new()
        .add_attribute("method", "prefund_failed")
        .add_attribute("reason", reason)
}
