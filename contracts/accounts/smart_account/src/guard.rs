use cosmwasm_std::{Addr, Deps, StdResult};
use valence_account_utils::{error::ContractError, msg::Config};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallerRole {
    TrustedHost,
    Owner,
    Other,
}

pub fn classify_caller(deps: Deps, config: &Config, caller: &Addr) -> StdResult<CallerRole> {
    if caller == config.host.address() {
        return Ok(CallerRole::TrustedHost);
    }

    if cw_ownable::is_owner(deps.storage, caller)? {
        return Ok(CallerRole::Owner);
    }

    Ok(CallerRole::Other)
}

/// Gate for the validation and fee phases.
pub fn require_host(config: &Config, caller: &Addr) -> Result<(), ContractError> {
    if caller != config.host.address() {
        return Err(ContractError::UnauthorizedCaller {
            caller: caller.clone(),
        });
    }
    Ok(())
}

/// Gate for the execution phase. The owner may execute directly, outside the host's sequence.
pub fn require_host_or_owner(
    deps: Deps,
    config: &Config,
    caller: &Addr,
) -> Result<CallerRole, ContractError> {
    match classify_caller(deps, config, caller)? {
        CallerRole::Other => Err(ContractError::UnauthorizedCaller {
            caller: caller.clone(),
        }),
        role => Ok(role),
    }
}
