use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, StdResult, WasmMsg};

/// Interface of the nonce holder system service used by bootloader hosts.
#[cw_serde]
pub enum NonceHolderExecuteMsg {
    // Fails unless the sender's current minimum nonce equals `expected_nonce`, then advances it by one
    IncrementMinNonceIfEquals { expected_nonce: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum NonceHolderQueryMsg {
    #[returns(u64)]
    GetMinNonce { address: String },
}

pub fn increment_min_nonce_if_equals(nonce_holder: &Addr, expected_nonce: u64) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: nonce_holder.to_string(),
        msg: to_json_binary(&NonceHolderExecuteMsg::IncrementMinNonceIfEquals { expected_nonce })?,
        funds: vec![],
    }))
}
