#![allow(dead_code)]

use launchpad::{LaunchpadContract, LaunchpadContractClient, LaunchpadError, SaleParams};
use launchpad_nft::{LaunchpadNft, LaunchpadNftClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, vec, Address, Env, Error, IntoVal, InvokeError, String, Symbol, Val,
    Vec,
};

pub const BLOCK_TIME: u64 = 1_700_000_000;
pub const HALF_HOUR: u64 = 30 * 60;
pub const HOUR: u64 = 60 * 60;
pub const INITIAL_BALANCE: i128 = 100_000_000;

pub type MintResult = Result<Result<u64, Error>, Result<LaunchpadError, InvokeError>>;
pub type RawMintResult = Result<Result<u64, Error>, Result<Error, InvokeError>>;

pub struct LaunchpadTest<'a> {
    pub env: Env,
    pub launchpad: LaunchpadContractClient<'a>,
    pub collection: LaunchpadNftClient<'a>,
    pub license: LaunchpadNftClient<'a>,
    pub pay_token: token::Client<'a>,
    pub pay_token_admin: token::StellarAssetClient<'a>,
    pub owner: Address,
    pub creator: Address,
    pub alice: Address,
    pub carol: Address,
    pub bob: Address,
    pub vic: Address,
    /// License held by `creator`; `license_token_id + 1` is held by `carol`.
    pub license_token_id: u64,
}

impl<'a> LaunchpadTest<'a> {
    /// Phase for the creator's license starting in half an hour and ending
    /// in an hour, relative to the current ledger time.
    pub fn sale_params(&self, total_quantity: u32, max_buy: u32, price: i128) -> SaleParams {
        let now = self.env.ledger().timestamp();
        SaleParams {
            creator: self.creator.clone(),
            nft_address: Some(self.collection.address.clone()),
            license_address: self.license.address.clone(),
            license_token_id: self.license_token_id,
            collection_name: String::from_str(&self.env, "NFTSALE"),
            start_time: now + HALF_HOUR,
            end_time: now + HOUR,
            pay_token: self.pay_token.address.clone(),
            total_quantity,
            max_buy,
            price,
            base_uri: String::from_str(&self.env, "URI"),
            extension_uri: String::from_str(&self.env, "URI"),
            royalty_percentage: 0,
            royalty_address: self.bob.clone(),
        }
    }

    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }

    pub fn approve(&self, buyer: &Address, amount: i128) {
        self.pay_token.approve(
            buyer,
            &self.launchpad.address,
            &amount,
            &(self.env.ledger().sequence() + 1000),
        );
    }

    pub fn uri(&self) -> String {
        String::from_str(&self.env, "uri")
    }

    /// Mints from the current phase of the creator's license.
    pub fn mint_as(&self, buyer: &Address, quantity: u32, pay_amount: i128) -> u64 {
        self.launchpad.mint(
            buyer,
            &self.license.address,
            &self.license_token_id,
            &quantity,
            &self.pay_token.address,
            &pay_amount,
            &self.uri(),
        )
    }

    pub fn try_mint_as(
        &self,
        buyer: &Address,
        quantity: u32,
        pay_token: &Address,
        pay_amount: i128,
    ) -> MintResult {
        self.launchpad.try_mint(
            buyer,
            &self.license.address,
            &self.license_token_id,
            &quantity,
            pay_token,
            &pay_amount,
            &self.uri(),
        )
    }

    /// Same call as `try_mint_as` with the pay token, but the failure is
    /// returned as the raw host `Error`, so a collaborator's contract error
    /// code is seen as it propagated.
    pub fn try_mint_raw(&self, buyer: &Address, quantity: u32, pay_amount: i128) -> RawMintResult {
        let args: Vec<Val> = vec![
            &self.env,
            buyer.into_val(&self.env),
            self.license.address.into_val(&self.env),
            self.license_token_id.into_val(&self.env),
            quantity.into_val(&self.env),
            self.pay_token.address.into_val(&self.env),
            pay_amount.into_val(&self.env),
            self.uri().into_val(&self.env),
        ];
        self.env.try_invoke_contract::<u64, Error>(
            &self.launchpad.address,
            &Symbol::new(&self.env, "mint"),
            args,
        )
    }
}

pub fn setup_launchpad<'a>() -> LaunchpadTest<'a> {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(BLOCK_TIME);

    let owner = Address::generate(&env);
    let creator = Address::generate(&env);
    let alice = Address::generate(&env);
    let carol = Address::generate(&env);
    let bob = Address::generate(&env);
    let vic = Address::generate(&env);

    // License collection: the owner mints token 1 to the creator and 2 to carol
    let license_id = env.register_contract(None, LaunchpadNft);
    let license = LaunchpadNftClient::new(&env, &license_id);
    license.initialize(
        &owner,
        &String::from_str(&env, "LICENSE"),
        &String::from_str(&env, "LIC"),
    );
    license.set_minter(&owner, &owner, &true);
    let license_token_id = license.mint(&owner, &creator, &1, &String::from_str(&env, "license"));
    license.mint(&owner, &carol, &1, &String::from_str(&env, "license"));

    let collection_id = env.register_contract(None, LaunchpadNft);
    let collection = LaunchpadNftClient::new(&env, &collection_id);
    collection.initialize(
        &owner,
        &String::from_str(&env, "SALENFT"),
        &String::from_str(&env, "SALENFT"),
    );

    let launchpad_id = env.register_contract(None, LaunchpadContract);
    let launchpad = LaunchpadContractClient::new(&env, &launchpad_id);
    launchpad.initialize(&owner);
    collection.set_minter(&owner, &launchpad_id, &true);

    let pay_token_id = env
        .register_stellar_asset_contract_v2(owner.clone())
        .address();
    let pay_token = token::Client::new(&env, &pay_token_id);
    let pay_token_admin = token::StellarAssetClient::new(&env, &pay_token_id);
    pay_token_admin.mint(&alice, &INITIAL_BALANCE);
    pay_token_admin.mint(&vic, &INITIAL_BALANCE);

    launchpad.set_accept_pay_token(&owner, &pay_token_id, &true);

    LaunchpadTest {
        env,
        launchpad,
        collection,
        license,
        pay_token,
        pay_token_admin,
        owner,
        creator,
        alice,
        carol,
        bob,
        vic,
        license_token_id,
    }
}
