use crate::errors::LaunchpadError;
use crate::types::*;
use soroban_sdk::{Address, Env};

const DAY_IN_LEDGERS: u32 = 17_280;
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Result<Address, LaunchpadError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(LaunchpadError::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn is_accepted_pay_token(env: &Env, token: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::AcceptedPayToken(token.clone()))
        .unwrap_or(false)
}

pub fn set_accepted_pay_token(env: &Env, token: &Address, accepted: bool) {
    let key = DataKey::AcceptedPayToken(token.clone());
    env.storage().persistent().set(&key, &accepted);
    bump_persistent(env, &key);
}

pub fn get_phase_count(env: &Env, license: &Address, token_id: u64) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::PhaseCount(license.clone(), token_id))
        .unwrap_or(0)
}

pub fn set_phase_count(env: &Env, license: &Address, token_id: u64, count: u32) {
    let key = DataKey::PhaseCount(license.clone(), token_id);
    env.storage().persistent().set(&key, &count);
    bump_persistent(env, &key);
}

pub fn get_sale_phase(
    env: &Env,
    license: &Address,
    token_id: u64,
    phase: u32,
) -> Option<SalePhase> {
    env.storage()
        .persistent()
        .get(&DataKey::Phase(license.clone(), token_id, phase))
}

pub fn set_sale_phase(env: &Env, sale: &SalePhase) {
    let key = DataKey::Phase(
        sale.license_address.clone(),
        sale.license_token_id,
        sale.phase,
    );
    env.storage().persistent().set(&key, sale);
    bump_persistent(env, &key);
}

/// Latest phase for the key, if one was ever created.
pub fn get_current_phase(env: &Env, license: &Address, token_id: u64) -> Option<SalePhase> {
    match get_phase_count(env, license, token_id) {
        0 => None,
        phase => get_sale_phase(env, license, token_id, phase),
    }
}

pub fn get_buyer_minted(
    env: &Env,
    license: &Address,
    token_id: u64,
    phase: u32,
    buyer: &Address,
) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::BuyerMinted(license.clone(), token_id, phase, buyer.clone()))
        .unwrap_or(0)
}

pub fn set_buyer_minted(
    env: &Env,
    license: &Address,
    token_id: u64,
    phase: u32,
    buyer: &Address,
    minted: u32,
) {
    let key = DataKey::BuyerMinted(license.clone(), token_id, phase, buyer.clone());
    env.storage().persistent().set(&key, &minted);
    bump_persistent(env, &key);
}
