use crate::errors::LaunchpadError;
use crate::external::LicenseTokenClient;
use crate::storage::{get_current_phase, is_accepted_pay_token};
use crate::types::SaleParams;
use soroban_sdk::{Address, Env};

pub const MAX_ROYALTY_BPS: u32 = 10_000;

/// Runs the creation checks in their reporting order and returns the
/// collection address to mint into. The first failing check wins.
pub fn validate_sale_params(
    env: &Env,
    caller: &Address,
    params: &SaleParams,
    now: u64,
) -> Result<Address, LaunchpadError> {
    if !is_accepted_pay_token(env, &params.pay_token) {
        return Err(LaunchpadError::InvalidPayToken);
    }

    let license = LicenseTokenClient::new(env, &params.license_address);
    match license.try_owner_of(&params.license_token_id) {
        Ok(Ok(owner)) if owner == *caller => {}
        _ => return Err(LaunchpadError::NotLicenseOwner),
    }
    let nft_address = params
        .nft_address
        .clone()
        .ok_or(LaunchpadError::InvalidNftAddress)?;

    validate_terms(params, now)?;

    let previous = get_current_phase(env, &params.license_address, params.license_token_id);
    if let Some(previous) = previous {
        if !previous.has_ended_at(now) {
            return Err(LaunchpadError::PriorSaleNotEnded);
        }
    }

    Ok(nft_address)
}

/// Quantity, schedule and pricing checks that need no ledger state.
pub fn validate_terms(params: &SaleParams, now: u64) -> Result<(), LaunchpadError> {
    if params.max_buy == 0 {
        return Err(LaunchpadError::InvalidMaxBuy);
    }
    if params.total_quantity == 0 {
        return Err(LaunchpadError::InvalidTotalQuantity);
    }
    if params.start_time <= now {
        return Err(LaunchpadError::InvalidStartTime);
    }
    if params.end_time <= params.start_time {
        return Err(LaunchpadError::InvalidEndTime);
    }
    if params.price < 0 {
        return Err(LaunchpadError::InvalidPrice);
    }
    if params.royalty_percentage > MAX_ROYALTY_BPS {
        return Err(LaunchpadError::InvalidRoyalty);
    }
    Ok(())
}

/// Total owed for `quantity` units, `None` on overflow.
pub fn mint_cost(price: i128, quantity: u32) -> Option<i128> {
    price.checked_mul(quantity as i128)
}
