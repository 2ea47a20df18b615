use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    // Instantiates `code_id` with the attached funds. The new contract has no admin
    Create {
        code_id: u64,
        label: String,
        msg: Binary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    // Number of successful `Create` calls
    #[returns(u64)]
    CreatedCount {},
}
