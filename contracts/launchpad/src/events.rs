use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

// ==================== Event Schema Definitions ====================

pub const EVENT_TOPIC: Symbol = symbol_short!("LAUNCH");

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleCreatedEvent {
    pub license_address: Address,
    pub license_token_id: u64,
    pub phase: u32,
    pub creator: Address,
    pub nft_address: Address,
    pub pay_token: Address,
    pub start_time: u64,
    pub end_time: u64,
    pub total_quantity: u32,
    pub price: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct MintedEvent {
    pub license_address: Address,
    pub license_token_id: u64,
    pub phase: u32,
    pub buyer: Address,
    pub quantity: u32,
    pub cost: i128,
    pub first_token_id: u64,
    pub minted_quantity: u32,
    pub metadata_uri: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PayTokenEvent {
    pub token: Address,
    pub accepted: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct OwnerChangedEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
}

// ==================== Event Emission ====================

pub fn emit_initialized(env: &Env, owner: Address) {
    env.events()
        .publish((EVENT_TOPIC, symbol_short!("INIT")), owner);
}

pub fn emit_sale_created(env: &Env, event: SaleCreatedEvent) {
    env.events()
        .publish((EVENT_TOPIC, symbol_short!("SALE_NEW")), event);
}

pub fn emit_minted(env: &Env, event: MintedEvent) {
    env.events()
        .publish((EVENT_TOPIC, symbol_short!("MINTED")), event);
}

pub fn emit_pay_token_updated(env: &Env, token: Address, accepted: bool) {
    env.events().publish(
        (EVENT_TOPIC, symbol_short!("PAY_TOKEN")),
        PayTokenEvent { token, accepted },
    );
}

pub fn emit_owner_changed(env: &Env, previous_owner: Address, new_owner: Address) {
    env.events().publish(
        (EVENT_TOPIC, symbol_short!("OWNER")),
        OwnerChangedEvent {
            previous_owner,
            new_owner,
        },
    );
}
