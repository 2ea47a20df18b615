#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdError,
    StdResult,
};
use cw2::set_contract_version;
use valence_account_utils::{
    error::ContractError,
    msg::{Config, DigestResponse, ExecuteMsg, InstantiateMsg, QueryMsg},
};

use crate::{
    dispatch::{execution_failed, EXECUTION_REPLY_ID},
    fee::{payment_failed, prefund_failed, PAYMENT_REPLY_ID, PREFUND_REPLY_ID},
    state::CONFIG,
    validation::validate_signature,
};

// version info for migration info
const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Phase of the validate / pay / execute sequence a call belongs to.
///
/// Only the phases a successful call runs through are reported: a rejected call
/// reverts along with its attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionPhase {
    Validating,
    Paying,
    Executing,
}

impl TransactionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionPhase::Validating => "validating",
            TransactionPhase::Paying => "paying",
            TransactionPhase::Executing => "executing",
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.denom.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "denom must not be empty".to_string(),
        });
    }

    let ownership = cw_ownable::initialize_owner(deps.storage, deps.api, Some(&msg.owner))?;
    let host = msg.host.into_checked(deps.api)?;

    let config = Config {
        host,
        denom: msg.denom,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute(
            "owner",
            ownership.owner.map(|owner| owner.to_string()).unwrap_or_default(),
        )
        .add_attribute("host", config.host.address().as_str())
        .add_attribute("denom", config.denom))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::ValidateTransaction {
            tx_hash,
            suggested_signed_hash,
            transaction,
        } => execute::validate_transaction(
            deps,
            env,
            info,
            tx_hash,
            suggested_signed_hash,
            transaction,
        ),
        ExecuteMsg::PayForTransaction {
            transaction,
            missing_funds,
        } => execute::pay_for_transaction(deps, info, transaction, missing_funds),
        ExecuteMsg::ExecuteTransaction { transaction } => {
            execute::execute_transaction(deps, info, transaction)
        }
        ExecuteMsg::ExecuteTransactionFromOutside { transaction } => {
            execute::execute_transaction_from_outside(deps, env, info, transaction)
        }
        ExecuteMsg::UpdateOwnership(action) => execute::update_ownership(deps, env, info, action),
    }
}

mod execute {
    use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response, Uint128};
    use valence_account_utils::{error::ContractError, transaction::Transaction};

    use crate::{dispatch::dispatch, fee::pay_host, guard, host::protocol, state::CONFIG, validation};

    use super::TransactionPhase;

    pub fn validate_transaction(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        tx_hash: Option<Binary>,
        suggested_signed_hash: Option<Binary>,
        transaction: Transaction,
    ) -> Result<Response, ContractError> {
        let config = CONFIG.load(deps.storage)?;
        guard::require_host(&config, &info.sender)?;

        let validation =
            validation::validate_transaction(deps.as_ref(), &env, &config, &transaction)?;
        let code = protocol(&config.host).validation_code(&validation.outcome);

        let mut response = Response::new()
            .set_data(code)
            .add_messages(validation.nonce_msg)
            .add_attribute("method", "validate_transaction")
            .add_attribute("phase", TransactionPhase::Validating.as_str())
            .add_attribute("nonce", transaction.nonce.to_string())
            .add_attribute("required_balance", validation.required_balance)
            .add_attribute("outcome", validation.outcome.to_string());

        // Hashes suggested by the host are informational, the account always derives its own
        if let Some(tx_hash) = tx_hash {
            response = response.add_attribute("tx_hash", tx_hash.to_base64());
        }
        if let Some(suggested_signed_hash) = suggested_signed_hash {
            response =
                response.add_attribute("suggested_signed_hash", suggested_signed_hash.to_base64());
        }

        Ok(response)
    }

    pub fn pay_for_transaction(
        deps: DepsMut,
        info: MessageInfo,
        transaction: Transaction,
        missing_funds: Option<Uint128>,
    ) -> Result<Response, ContractError> {
        let config = CONFIG.load(deps.storage)?;
        guard::require_host(&config, &info.sender)?;

        let payment = pay_host(
            protocol(&config.host),
            &config.denom,
            &transaction,
            missing_funds,
        )?;
        let paid = payment
            .as_ref()
            .map(|(_, amount)| *amount)
            .unwrap_or_default();

        Ok(Response::new()
            .add_submessages(payment.map(|(transfer, _)| transfer))
            .add_attribute("method", "pay_for_transaction")
            .add_attribute("phase", TransactionPhase::Paying.as_str())
            .add_attribute("host", config.host.address().as_str())
            .add_attribute("amount", paid))
    }

    pub fn execute_transaction(
        deps: DepsMut,
        info: MessageInfo,
        transaction: Transaction,
    ) -> Result<Response, ContractError> {
        let config = CONFIG.load(deps.storage)?;
        let role = guard::require_host_or_owner(deps.as_ref(), &config, &info.sender)?;

        let response = dispatch(
            deps.api,
            protocol(&config.host),
            &config.denom,
            &transaction,
        )?;

        Ok(response
            .add_attribute("method", "execute_transaction")
            .add_attribute("phase", TransactionPhase::Executing.as_str())
            .add_attribute("caller_role", format!("{:?}", role)))
    }

    // No caller check: the owner's signature is the only authorization, and no fee is paid
    pub fn execute_transaction_from_outside(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        transaction: Transaction,
    ) -> Result<Response, ContractError> {
        let config = CONFIG.load(deps.storage)?;
        let protocol = protocol(&config.host);

        // Without replay protection of its own the account cannot accept unsequenced submissions
        if !protocol.supports_outside_execution() {
            return Err(ContractError::UnsupportedByHost {
                entry: "execute_transaction_from_outside".to_string(),
            });
        }

        let validation =
            validation::validate_transaction(deps.as_ref(), &env, &config, &transaction)?;
        if !validation.outcome.is_authorized() {
            return Err(ContractError::InvalidSignature {});
        }

        let dispatched = dispatch(deps.api, protocol, &config.denom, &transaction)?;

        Ok(Response::new()
            .add_messages(validation.nonce_msg)
            .add_submessages(dispatched.messages)
            .add_attributes(dispatched.attributes)
            .add_attribute("method", "execute_transaction_from_outside")
            .add_attribute(
                "phase",
                format!(
                    "{},{}",
                    TransactionPhase::Validating.as_str(),
                    TransactionPhase::Executing.as_str()
                ),
            )
            .add_attribute("submitter", info.sender)
            .add_attribute("nonce", transaction.nonce.to_string()))
    }

    pub fn update_ownership(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        action: cw_ownable::Action,
    ) -> Result<Response, ContractError> {
        let result = cw_ownable::update_ownership(deps, &env.block, &info.sender, action.clone())?;
        Ok(Response::default()
            .add_attribute("method", "update_ownership")
            .add_attribute("action", format!("{:?}", action))
            .add_attribute("result", format!("{:?}", result)))
    }
}

// Only failures are replied to
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    let reason = msg.result.into_result().err().unwrap_or_default();

    match msg.id {
        PAYMENT_REPLY_ID => Err(payment_failed(reason)),
        PREFUND_REPLY_ID => Ok(prefund_failed(deps, reason)),
        EXECUTION_REPLY_ID => Err(execution_failed(reason)),
        _ => Err(ContractError::Std(StdError::generic_err("unknown reply id"))),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::Ownership {} => to_json_binary(&cw_ownable::get_ownership(deps.storage)?),
        QueryMsg::TransactionDigest { transaction } => {
            let chain_id = env.block.chain_id.as_str();
            let account = env.contract.address.as_str();
            to_json_binary(&DigestResponse {
                digest: Binary::from(transaction.digest(chain_id, account).to_vec()),
                signing_digest: Binary::from(transaction.signing_digest(chain_id, account).to_vec()),
            })
        }
        QueryMsg::CheckSignature { transaction } => {
            to_json_binary(&validate_signature(deps, &env, &transaction)?)
        }
    }
}
