// Launchpad NFT - mintable collection sold through the launchpad registry
#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, symbol_short, Address,
    Env, String,
};

contractmeta!(
    key = "Description",
    val = "Mintable NFT collection with delegated minters"
);

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    Name,
    Symbol,
    TokenCounter,
    Minter(Address),
    TokenOwner(u64),
    TokenUri(u64),
    Balance(Address),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum NftError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    NotMinter = 4,
    InvalidQuantity = 5,
    TokenNotFound = 6,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintedEvent {
    pub minter: Address,
    pub to: Address,
    pub first_token_id: u64,
    pub quantity: u32,
    pub uri: String,
}

#[contract]
pub struct LaunchpadNft;

fn read_owner(env: &Env) -> Result<Address, NftError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(NftError::NotInitialized)
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), NftError> {
    caller.require_auth();
    if read_owner(env)? != *caller {
        return Err(NftError::NotOwner);
    }
    Ok(())
}

#[contractimpl]
impl LaunchpadNft {
    /// Initialize the collection with its owner and display metadata
    pub fn initialize(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
    ) -> Result<(), NftError> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(NftError::AlreadyInitialized);
        }

        owner.require_auth();
        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Name, &name);
        env.storage().instance().set(&DataKey::Symbol, &symbol);
        env.storage().instance().set(&DataKey::TokenCounter, &0u64);

        Ok(())
    }

    /// Grant or revoke the right to mint. Only the collection owner may call this.
    pub fn set_minter(
        env: Env,
        caller: Address,
        minter: Address,
        enabled: bool,
    ) -> Result<(), NftError> {
        require_owner(&env, &caller)?;

        env.storage()
            .persistent()
            .set(&DataKey::Minter(minter.clone()), &enabled);

        env.events()
            .publish((symbol_short!("minter"), minter), enabled);
        Ok(())
    }

    pub fn is_minter(env: Env, minter: Address) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Minter(minter))
            .unwrap_or(false)
    }

    /// Mint `quantity` sequential tokens to `to`, all tagged with `uri`.
    /// Returns the id of the first minted token.
    pub fn mint(
        env: Env,
        minter: Address,
        to: Address,
        quantity: u32,
        uri: String,
    ) -> Result<u64, NftError> {
        minter.require_auth();

        if !Self::is_minter(env.clone(), minter.clone()) {
            return Err(NftError::NotMinter);
        }
        if quantity == 0 {
            return Err(NftError::InvalidQuantity);
        }

        let counter: u64 = env
            .storage()
            .instance()
            .get(&DataKey::TokenCounter)
            .ok_or(NftError::NotInitialized)?;
        let first_token_id = counter + 1;

        for token_id in first_token_id..first_token_id + quantity as u64 {
            env.storage()
                .persistent()
                .set(&DataKey::TokenOwner(token_id), &to);
            env.storage()
                .persistent()
                .set(&DataKey::TokenUri(token_id), &uri);
        }

        let balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .persistent()
            .set(&DataKey::Balance(to.clone()), &(balance + quantity));
        env.storage()
            .instance()
            .set(&DataKey::TokenCounter, &(counter + quantity as u64));

        env.events().publish(
            (symbol_short!("mint"), to.clone()),
            MintedEvent {
                minter,
                to,
                first_token_id,
                quantity,
                uri,
            },
        );

        Ok(first_token_id)
    }

    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, NftError> {
        env.storage()
            .persistent()
            .get(&DataKey::TokenOwner(token_id))
            .ok_or(NftError::TokenNotFound)
    }

    pub fn token_uri(env: Env, token_id: u64) -> Result<String, NftError> {
        env.storage()
            .persistent()
            .get(&DataKey::TokenUri(token_id))
            .ok_or(NftError::TokenNotFound)
    }

    pub fn balance(env: Env, owner: Address) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(owner))
            .unwrap_or(0)
    }

    pub fn total_supply(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::TokenCounter)
            .unwrap_or(0)
    }

    pub fn owner(env: Env) -> Result<Address, NftError> {
        read_owner(&env)
    }

    pub fn name(env: Env) -> Result<String, NftError> {
        env.storage()
            .instance()
            .get(&DataKey::Name)
            .ok_or(NftError::NotInitialized)
    }

    pub fn symbol(env: Env) -> Result<String, NftError> {
        env.storage()
            .instance()
            .get(&DataKey::Symbol)
            .ok_or(NftError::NotInitialized)
    }
}
