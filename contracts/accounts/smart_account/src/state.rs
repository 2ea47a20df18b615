use cw_storage_plus::Item;
use valence_account_utils::msg::Config;

// Host identity and fee denom, fixed at instantiation. The owner is kept by cw-ownable
pub const CONFIG: Item<Config> = Item::new("config");
