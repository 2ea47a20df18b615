use cosmwasm_std::Addr;
use cw_storage_plus::Map;

// Minimum nonce the next transaction of each account must carry
pub const MIN_NONCE: Map<Addr, u64> = Map::new("min_nonce");
