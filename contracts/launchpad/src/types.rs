use soroban_sdk::{contracttype, Address, Env, String};

/// Arguments of `create_sale`. `nft_address` is `None` when the caller did not
/// supply a collection.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleParams {
    pub creator: Address,
    pub nft_address: Option<Address>,
    pub license_address: Address,
    pub license_token_id: u64,
    pub collection_name: String,
    pub start_time: u64,
    pub end_time: u64,
    pub pay_token: Address,
    pub total_quantity: u32,
    pub max_buy: u32,
    pub price: i128,
    pub base_uri: String,
    pub extension_uri: String,
    pub royalty_percentage: u32, // basis points, 10_000 = 100%
    pub royalty_address: Address,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SalePhase {
    pub phase: u32,
    pub creator: Address,
    pub nft_address: Address,
    pub license_address: Address,
    pub license_token_id: u64,
    pub collection_name: String,
    pub start_time: u64,
    pub end_time: u64,
    pub pay_token: Address,
    pub total_quantity: u32,
    pub max_buy: u32,
    pub price: i128,
    pub base_uri: String,
    pub extension_uri: String,
    pub royalty_percentage: u32,
    pub royalty_address: Address,
    pub minted_quantity: u32,
    pub created_at: u64,
}

impl SalePhase {
    pub fn is_open_at(&self, now: u64) -> bool {
        now >= self.start_time && now < self.end_time
    }

    pub fn has_ended_at(&self, now: u64) -> bool {
        now >= self.end_time
    }

    pub fn remaining(&self) -> u32 {
        self.total_quantity.saturating_sub(self.minted_quantity)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SaleStatus {
    None,
    Upcoming,
    Open,
    SoldOut,
    Ended,
}

#[contracttype]
pub enum DataKey {
    Owner,
    AcceptedPayToken(Address),
    PhaseCount(Address, u64),
    Phase(Address, u64, u32),
    BuyerMinted(Address, u64, u32, Address),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
