#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    ensure, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError,
    StdResult,
};
use cw2::set_contract_version;
use thiserror::Error;

use crate::{
    msg::{ExecuteMsg, InstantiateMsg, QueryMsg},
    state::MIN_NONCE,
};

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Nonce mismatch: expected {expected}, got {provided}")]
    NonceMismatch { expected: u64, provided: u64 },
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> StdResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new().add_attribute("method", "instantiate"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::IncrementMinNonceIfEquals { expected_nonce } => {
            let current = MIN_NONCE
                .may_load(deps.storage, info.sender.clone())?
                .unwrap_or_default();
            ensure!(
                current == expected_nonce,
                ContractError::NonceMismatch {
                    expected: current,
                    provided: expected_nonce,
                }
            );

            MIN_NONCE.save(deps.storage, info.sender.clone(), &(current + 1))?;

            Ok(Response::new()
                .add_attribute("method", "increment_min_nonce_if_equals")
                .add_attribute("account", info.sender)
                .add_attribute("nonce", current.to_string()))
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetMinNonce { address } => {
            let address = deps.api.addr_validate(&address)?;
            to_json_binary(
                &MIN_NONCE
                    .may_load(deps.storage, address)?
                    .unwrap_or_default(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::{
        from_json,
        testing::{message_info, mock_dependencies, mock_env},
    };

    #[test]
    fn advances_only_on_matching_nonce() {
        let mut deps = mock_dependencies();
        let account = deps.api.addr_make("account");
        let info = message_info(&account, &[]);

        execute(
            deps.as_mut(),
            mock_env(),
            info.clone(),
            ExecuteMsg::IncrementMinNonceIfEquals { expected_nonce: 0 },
        )
        .unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            info.clone(),
            ExecuteMsg::IncrementMinNonceIfEquals { expected_nonce: 0 },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::NonceMismatch {
                expected: 1,
                provided: 0
            }
        );

        let nonce: u64 = from_json(
            query(
                deps.as_ref(),
                mock_env(),
                QueryMsg::GetMinNonce {
                    address: account.to_string(),
                },
            )
            .unwrap(),
        )
        .unwrap();
        assert_eq!(nonce, 1);
    }

    #[test]
    fn nonces_are_tracked_per_account() {
        let mut deps = mock_dependencies();
        let first = deps.api.addr_make("first");
        let second = deps.api.addr_make("second");

        execute(
            deps.as_mut(),
            mock_env(),
            message_info(&first, &[]),
            ExecuteMsg::IncrementMinNonceIfEquals { expected_nonce: 0 },
        )
        .unwrap();

        // The second account still starts from zero
        execute(
            deps.as_mut(),
            mock_env(),
            message_info(&second, &[]),
            ExecuteMsg::IncrementMinNonceIfEquals { expected_nonce: 0 },
        )
        .unwrap();
    }
}
