use cosmwasm_std::{testing::MockApi, Addr, Api, Binary, CanonicalAddr, Coin, Empty, Uint128};
use cw20::{Cw20Coin, MinterResponse};
use cw_multi_test::{error::AnyResult, App, AppResponse, Contract, ContractWrapper, Executor};
use k256::ecdsa::SigningKey;
use serde::Serialize;
use std::fmt::Debug;

use crate::{signature::pubkey_to_address, transaction::Transaction};

pub const OWNER_SECRET: [u8; 32] = [0x11; 32];
pub const STRANGER_SECRET: [u8; 32] = [0x22; 32];

pub struct AccountTestSuiteBase {
    app: App,
    owner_key: SigningKey,
    owner: Addr,
    account_code_id: u64,
    nonce_holder_code_id: u64,
    deployer_code_id: u64,
    cw20_code_id: u64,
}

#[allow(dead_code)]
impl AccountTestSuiteBase {
    pub fn new(
        account_contract: Box<dyn Contract<Empty>>,
        nonce_holder_contract: Box<dyn Contract<Empty>>,
        deployer_contract: Box<dyn Contract<Empty>>,
    ) -> Self {
        let mut app = App::default();

        let owner_key = signing_key(&OWNER_SECRET);
        let owner = key_address(app.api(), &owner_key);

        let account_code_id = app.store_code(account_contract);
        let nonce_holder_code_id = app.store_code(nonce_holder_contract);
        let deployer_code_id = app.store_code(deployer_contract);

        let cw20_code = ContractWrapper::new(
            cw20_base::contract::execute,
            cw20_base::contract::instantiate,
            cw20_base::contract::query,
        );

        let cw20_code_id = app.store_code(Box::new(cw20_code));

        Self {
            app,
            owner_key,
            owner,
            account_code_id,
            nonce_holder_code_id,
            deployer_code_id,
            cw20_code_id,
        }
    }
}

pub fn signing_key(secret: &[u8; 32]) -> SigningKey {
    SigningKey::from_slice(secret).unwrap()
}

/// Chain address controlled by `key`: keccak-derived 20 bytes, bech32 encoded by the api.
pub fn key_address(api: &MockApi, key: &SigningKey) -> Addr {
    let pubkey = key.verifying_key().to_encoded_point(false);
    let address = pubkey_to_address(pubkey.as_bytes()).unwrap();
    api.addr_humanize(&CanonicalAddr::from(address.as_slice()))
        .unwrap()
}

pub trait AccountTestSuite {
    fn app(&self) -> &App;
    fn app_mut(&mut self) -> &mut App;
    fn owner(&self) -> &Addr;
    fn owner_key(&self) -> &SigningKey;
    fn account_code_id(&self) -> u64;
    fn nonce_holder_code_id(&self) -> u64;
    fn deployer_code_id(&self) -> u64;
    fn cw20_code_id(&self) -> u64;

    fn api(&self) -> &MockApi {
        self.app().api()
    }

    fn chain_id(&self) -> String {
        self.app().block_info().chain_id
    }

    /// Signs `tx` for execution by `account` and stores the 65-byte signature in it.
    fn sign(&self, key: &SigningKey, account: &Addr, mut tx: Transaction) -> Transaction {
        let digest = tx.signing_digest(&self.chain_id(), account.as_str());
        let (signature, recovery_id) = key.sign_prehash_recoverable(&digest).unwrap();

        let mut bytes = signature.to_bytes().to_vec();
        bytes.push(recovery_id.to_byte() + 27);
        tx.signature = Binary::from(bytes);
        tx
    }

    fn sign_as_owner(&self, account: &Addr, tx: Transaction) -> Transaction {
        self.sign(self.owner_key(), account, tx)
    }

    fn contract_init<T: Serialize>(
        &mut self,
        code_id: u64,
        label: &str,
        init_msg: &T,
        funds: &[Coin],
    ) -> Addr {
        let owner = self.owner().clone();
        self.app_mut()
            .instantiate_contract(
                code_id,
                owner.clone(),
                &init_msg,
                funds,
                label,
                Some(owner.to_string()),
            )
            .unwrap()
    }

    fn contract_execute<T: Serialize + Debug>(
        &mut self,
        sender: &Addr,
        addr: &Addr,
        msg: &T,
    ) -> AnyResult<AppResponse> {
        self.app_mut()
            .execute_contract(sender.clone(), addr.clone(), &msg, &[])
    }

    fn query_balance(&self, addr: &Addr, denom: &str) -> Coin {
        self.app().wrap().query_balance(addr, denom).unwrap()
    }

    fn assert_balance(&self, addr: &Addr, coin: Coin) {
        let bal = self.query_balance(addr, &coin.denom);
        assert_eq!(bal, coin);
    }

    fn init_balance(&mut self, addr: &Addr, amounts: Vec<Coin>) {
        self.app_mut().init_modules(|router, _, store| {
            router.bank.init_balance(store, addr, amounts).unwrap();
        });
    }

    fn cw20_init(
        &mut self,
        name: &str,
        symbol: &str,
        initial_balances: Vec<Cw20Coin>,
        minter: Option<&Addr>,
    ) -> Addr {
        let msg = cw20_base::msg::InstantiateMsg {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals: 6,
            initial_balances,
            mint: minter.map(|minter| MinterResponse {
                minter: minter.to_string(),
                cap: None,
            }),
            marketing: None,
        };

        let owner = self.owner().clone();
        let cw20_code_id = self.cw20_code_id();
        self.app_mut()
            .instantiate_contract(
                cw20_code_id,
                owner.clone(),
                &msg,
                &[],
                format!("CW20 {name}"),
                Some(owner.to_string()),
            )
            .unwrap()
    }

    fn cw20_query_balance(&self, addr: &Addr, cw20_addr: &Addr) -> Uint128 {
        let res = self.query_wasm::<_, cw20::BalanceResponse>(
            cw20_addr,
            &cw20::Cw20QueryMsg::Balance {
                address: addr.to_string(),
            },
        );
        res.balance
    }

    fn query_wasm<T, U>(&self, addr: &Addr, query: &T) -> U
    where
        T: Serialize,
        U: serde::de::DeserializeOwned,
    {
        self.app()
            .wrap()
            .query_wasm_smart::<U>(addr, &query)
            .unwrap()
    }
}

impl AccountTestSuite for AccountTestSuiteBase {
    fn app(&self) -> &App {
        &self.app
    }

    fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    fn owner(&self) -> &Addr {
        &self.owner
    }

    fn owner_key(&self) -> &SigningKey {
        &self.owner_key
    }

    fn account_code_id(&self) -> u64 {
        self.account_code_id
    }

    fn nonce_holder_code_id(&self) -> u64 {
        self.nonce_holder_code_id
    }

    fn deployer_code_id(&self) -> u64 {
        self.deployer_code_id
    }

    fn cw20_code_id(&self) -> u64 {
        self.cw20_code_id
    }
}
