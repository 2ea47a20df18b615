use cosmwasm_std::{coins, Api, BankMsg, Coin, Response, SubMsg, WasmMsg};
use valence_account_utils::{error::ContractError, transaction::Transaction};

use crate::host::HostProtocol;

pub const EXECUTION_REPLY_ID: u64 = 3;

/// How a transaction reaches its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchPath {
    // Call into the deployer service; its failure aborts with the deployer's own error
    Privileged,
    // Contract call with the payload as message
    Call,
    // Plain value transfer, the transaction carries no payload
    Transfer,
    // Neither payload nor value
    Noop,
}

impl DispatchPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchPath::Privileged => "privileged",
            DispatchPath::Call => "call",
            DispatchPath::Transfer => "transfer",
            DispatchPath::Noop => "noop",
        }
    }
}

/// Builds the call requested by the transaction. The result of the call is not inspected
/// and the target may call back into the account.
pub fn dispatch(
    api: &dyn Api,
    protocol: &dyn HostProtocol,
    denom: &str,
    transaction: &Transaction,
) -> Result<Response, ContractError> {
    let to = api
        .addr_validate(&transaction.to)
        .map_err(|err| execution_failed(err.to_string()))?;
    let funds: Vec<Coin> = if transaction.value.is_zero() {
        vec![]
    } else {
        coins(transaction.value.u128(), denom)
    };

    let (path, msg) = if protocol.privileged_target() == Some(&to) {
        let call = WasmMsg::Execute {
            contract_addr: to.to_string(),
            msg: transaction.data.clone(),
            funds,
        };
        (DispatchPath::Privileged, Some(SubMsg::new(call)))
    } else if !transaction.data.is_empty() {
        let call = WasmMsg::Execute {
            contract_addr: to.to_string(),
            msg: transaction.data.clone(),
            funds,
        };
        (
            DispatchPath::Call,
            Some(SubMsg::reply_on_error(call, EXECUTION_REPLY_ID)),
        )
    } else if !funds.is_empty() {
        let transfer = BankMsg::Send {
            to_address: to.to_string(),
            amount: funds,
        };
        (
            DispatchPath::Transfer,
            Some(SubMsg::reply_on_error(transfer, EXECUTION_REPLY_ID)),
        )
    } else {
        (DispatchPath::Noop, None)
    };

    Ok(Response::new()
        .add_submessages(msg)
        .add_attribute("dispatch", path.as_str())
        .add_attribute("to", to)
        .add_attribute("value", transaction.value))
}

pub fn execution_failed(reason: String) -> ContractError {
    ContractError::ExecutionFailed { reason }
}
