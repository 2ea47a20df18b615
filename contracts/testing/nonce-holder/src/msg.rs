use cosmwasm_schema::cw_serde;

pub use valence_account_utils::nonce::{NonceHolderExecuteMsg as ExecuteMsg, NonceHolderQueryMsg as QueryMsg};

#[cw_serde]
pub struct InstantiateMsg {}
