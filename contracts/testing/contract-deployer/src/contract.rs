#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult,
    WasmMsg,
};
use cw2::set_contract_version;
use cw_storage_plus::Item;
use thiserror::Error;

use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const CREATED_COUNT: Item<u64> = Item::new("created_count");

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> StdResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CREATED_COUNT.save(deps.storage, &0)?;

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
        ExecuteMsg::Create {
            code_id,
            label,
            msg,
        } => {
            CREATED_COUNT.update(deps.storage, |count| -> StdResult<_> { Ok(count + 1) })?;

            Ok(Response::new()
                .add_message(WasmMsg::Instantiate {
                    admin: None,
                    code_id,
                    msg,
                    funds: info.funds,
                    label: label.clone(),
                })
                .add_attribute("method", "create")
                .add_attribute("creator", info.sender)
                .add_attribute("code_id", code_id.to_string())
                .add_attribute("label", label))
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::CreatedCount {} => to_json_binary(&CREATED_COUNT.load(deps.storage)?),
    }
}
