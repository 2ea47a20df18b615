use cosmwasm_std::{Addr, Binary, CosmosMsg, StdResult, Uint128};
use valence_account_utils::{
    msg::{BootloaderHost, EntryPointHost, Host},
    nonce::increment_min_nonce_if_equals,
    signature::ValidationOutcome,
    transaction::Transaction,
};

/// Capabilities that differ between the hosts an account can be deployed under.
///
/// The validate / pay / execute sequence is the same for every host; each host
/// only decides how nonces are consumed, how validation results and fees are
/// reported to it, and which calls are privileged.
pub trait HostProtocol {
    /// Identity allowed to drive the protocol.
    fn host(&self) -> &Addr;

    /// Message consuming `nonce`, when the account is responsible for replay protection.
    fn consume_nonce(&self, nonce: u64) -> StdResult<Option<CosmosMsg>>;

    /// Whether validation rejects transactions whose declared fee exceeds the balance.
    fn checks_required_balance(&self) -> bool;

    /// Sentinel returned as data from the validation phase.
    fn validation_code(&self, outcome: &ValidationOutcome) -> Binary;

    /// Amount forwarded to the host during the fee phase.
    fn payment_amount(
        &self,
        transaction: &Transaction,
        missing_funds: Option<Uint128>,
    ) -> StdResult<Uint128>;

    /// Whether a failed fee transfer aborts the call.
    fn payment_is_fatal(&self) -> bool;

    /// Deployer reached through the privileged call path.
    fn privileged_target(&self) -> Option<&Addr>;

    /// Whether validation and execution may be submitted by anyone in a single call.
    fn supports_outside_execution(&self) -> bool;
}

impl HostProtocol for EntryPointHost {
    fn host(&self) -> &Addr {
        &self.entry_point
    }

    // The entry point enforces nonce ordering before calling the account
    fn consume_nonce(&self, _nonce: u64) -> StdResult<Option<CosmosMsg>> {
        Ok(None)
    }

    fn checks_required_balance(&self) -> bool {
        false
    }

    fn validation_code(&self, outcome: &ValidationOutcome) -> Binary {
        outcome.validation_data()
    }

    fn payment_amount(
        &self,
        _transaction: &Transaction,
        missing_funds: Option<Uint128>,
    ) -> StdResult<Uint128> {
        Ok(missing_funds.unwrap_or_default())
    }

    fn payment_is_fatal(&self) -> bool {
        false
    }

    fn privileged_target(&self) -> Option<&Addr> {
        None
    }

    fn supports_outside_execution(&self) -> bool {
        false
    }
}

impl HostProtocol for BootloaderHost {
    fn host(&self) -> &Addr {
        &self.bootloader
    }

    fn consume_nonce(&self, nonce: u64) -> StdResult<Option<CosmosMsg>> {
        increment_min_nonce_if_equals(&self.nonce_holder, nonce).map(Some)
    }

    fn checks_required_balance(&self) -> bool {
        true
    }

    fn validation_code(&self, outcome: &ValidationOutcome) -> Binary {
        outcome.bootloader_code()
    }

    // The bootloader is paid what the transaction declares, whatever it asks for
    fn payment_amount(
        &self,
        transaction: &Transaction,
        _missing_funds: Option<Uint128>,
    ) -> StdResult<Uint128> {
        transaction.total_required_balance()
    }

    fn payment_is_fatal(&self) -> bool {
        true
    }

    fn privileged_target(&self) -> Option<&Addr> {
        Some(&self.deployer)
    }

    fn supports_outside_execution(&self) -> bool {
        true
    }
}

pub fn protocol(host: &Host) -> &dyn HostProtocol {
    match host {
        Host::EntryPoint(host) => host,
        Host::Bootloader(host) => host,
    }
}
