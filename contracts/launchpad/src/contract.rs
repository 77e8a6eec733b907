use crate::errors::LaunchpadError;
use crate::events::{self, MintedEvent, SaleCreatedEvent};
use crate::external::LaunchpadCollectionClient;
use crate::storage::*;
use crate::types::*;
use crate::validation::{mint_cost, validate_sale_params};
use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, Env, String};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Phased NFT launchpad gated by license ownership"
);

#[contract]
pub struct LaunchpadContract;

fn require_owner(env: &Env, caller: &Address) -> Result<(), LaunchpadError> {
    caller.require_auth();
    if get_owner(env)? != *caller {
        return Err(LaunchpadError::NotOwner);
    }
    Ok(())
}

#[contractimpl]
impl LaunchpadContract {
    /// Initialize the registry with its administrative owner
    pub fn initialize(env: Env, owner: Address) -> Result<(), LaunchpadError> {
        if has_owner(&env) {
            return Err(LaunchpadError::AlreadyInitialized);
        }

        owner.require_auth();
        set_owner(&env, &owner);
        bump_instance(&env);

        events::emit_initialized(&env, owner);
        Ok(())
    }

    /// Add or remove a token from the pay-token allow-list
    pub fn set_accept_pay_token(
        env: Env,
        caller: Address,
        token: Address,
        accepted: bool,
    ) -> Result<(), LaunchpadError> {
        require_owner(&env, &caller)?;

        set_accepted_pay_token(&env, &token, accepted);
        bump_instance(&env);

        events::emit_pay_token_updated(&env, token, accepted);
        Ok(())
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), LaunchpadError> {
        require_owner(&env, &caller)?;

        set_owner(&env, &new_owner);
        bump_instance(&env);

        events::emit_owner_changed(&env, caller, new_owner);
        Ok(())
    }

    /// Open a new sale phase for a license token. The caller must hold the
    /// license and the previous phase for the same license must have ended.
    /// Returns the new phase number.
    pub fn create_sale(
        env: Env,
        caller: Address,
        params: SaleParams,
    ) -> Result<u32, LaunchpadError> {
        caller.require_auth();

        let now = get_ledger_timestamp(&env);
        let nft_address = validate_sale_params(&env, &caller, &params, now)?;

        let phase = get_phase_count(&env, &params.license_address, params.license_token_id) + 1;
        let sale = SalePhase {
            phase,
            creator: params.creator,
            nft_address,
            license_address: params.license_address,
            license_token_id: params.license_token_id,
            collection_name: params.collection_name,
            start_time: params.start_time,
            end_time: params.end_time,
            pay_token: params.pay_token,
            total_quantity: params.total_quantity,
            max_buy: params.max_buy,
            price: params.price,
            base_uri: params.base_uri,
            extension_uri: params.extension_uri,
            royalty_percentage: params.royalty_percentage,
            royalty_address: params.royalty_address,
            minted_quantity: 0,
            created_at: now,
        };

        set_sale_phase(&env, &sale);
        set_phase_count(&env, &sale.license_address, sale.license_token_id, phase);
        bump_instance(&env);

        events::emit_sale_created(
            &env,
            SaleCreatedEvent {
                license_address: sale.license_address,
                license_token_id: sale.license_token_id,
                phase,
                creator: sale.creator,
                nft_address: sale.nft_address,
                pay_token: sale.pay_token,
                start_time: sale.start_time,
                end_time: sale.end_time,
                total_quantity: sale.total_quantity,
                price: sale.price,
            },
        );

        Ok(phase)
    }

    /// Buy `quantity` units from the current phase of a license token.
    ///
    /// The buyer pays `quantity * price` in the phase's pay token to the
    /// phase creator through an allowance granted to this contract, and the
    /// collection mints the units to the buyer. Returns the first minted
    /// token id.
    #[allow(clippy::too_many_arguments)]
    pub fn mint(
        env: Env,
        caller: Address,
        license_address: Address,
        license_token_id: u64,
        quantity: u32,
        pay_token: Address,
        pay_amount: i128,
        metadata_uri: String,
    ) -> Result<u64, LaunchpadError> {
        caller.require_auth();

        let now = get_ledger_timestamp(&env);
        let mut sale = get_current_phase(&env, &license_address, license_token_id)
            .ok_or(LaunchpadError::SaleNotFound)?;

        if !sale.is_open_at(now) {
            return Err(LaunchpadError::SaleNotOpen);
        }
        if pay_token != sale.pay_token {
            return Err(LaunchpadError::WrongPayToken);
        }
        if quantity == 0 || quantity > sale.max_buy {
            return Err(LaunchpadError::InvalidQuantity);
        }
        let cost = mint_cost(sale.price, quantity)
            .filter(|cost| pay_amount >= *cost)
            .ok_or(LaunchpadError::InsufficientFunds)?;
        let minted_quantity = sale
            .minted_quantity
            .checked_add(quantity)
            .filter(|minted| *minted <= sale.total_quantity)
            .ok_or(LaunchpadError::SoldOut)?;
        let buyer_minted =
            get_buyer_minted(&env, &license_address, license_token_id, sale.phase, &caller)
                .checked_add(quantity)
                .filter(|minted| *minted <= sale.max_buy)
                .ok_or(LaunchpadError::PurchaseLimitExceeded)?;

        // effects: counters are committed before any external call
        sale.minted_quantity = minted_quantity;
        set_sale_phase(&env, &sale);
        set_buyer_minted(
            &env,
            &license_address,
            license_token_id,
            sale.phase,
            &caller,
            buyer_minted,
        );

        // interactions: payment then mint; a failure in either aborts the invocation
        let registry = env.current_contract_address();
        if cost > 0 {
            token::Client::new(&env, &sale.pay_token).transfer_from(
                &registry,
                &caller,
                &sale.creator,
                &cost,
            );
        }
        let first_token_id = LaunchpadCollectionClient::new(&env, &sale.nft_address).mint(
            &registry,
            &caller,
            &quantity,
            &metadata_uri,
        );
        bump_instance(&env);

        events::emit_minted(
            &env,
            MintedEvent {
                license_address,
                license_token_id,
                phase: sale.phase,
                buyer: caller,
                quantity,
                cost,
                first_token_id,
                minted_quantity,
                metadata_uri,
            },
        );

        Ok(first_token_id)
    }

    // View functions
    pub fn current_launchpad_phase(
        env: Env,
        license_address: Address,
        license_token_id: u64,
    ) -> u32 {
        get_phase_count(&env, &license_address, license_token_id)
    }

    pub fn get_sale(
        env: Env,
        license_address: Address,
        license_token_id: u64,
        phase: u32,
    ) -> Result<SalePhase, LaunchpadError> {
        get_sale_phase(&env, &license_address, license_token_id, phase)
            .ok_or(LaunchpadError::SaleNotFound)
    }

    pub fn sale_status(env: Env, license_address: Address, license_token_id: u64) -> SaleStatus {
        let now = get_ledger_timestamp(&env);
        match get_current_phase(&env, &license_address, license_token_id) {
            None => SaleStatus::None,
            Some(sale) if now < sale.start_time => SaleStatus::Upcoming,
            Some(sale) if sale.has_ended_at(now) => SaleStatus::Ended,
            Some(sale) if sale.remaining() == 0 => SaleStatus::SoldOut,
            Some(_) => SaleStatus::Open,
        }
    }

    pub fn minted_by(
        env: Env,
        license_address: Address,
        license_token_id: u64,
        phase: u32,
        buyer: Address,
    ) -> u32 {
        get_buyer_minted(&env, &license_address, license_token_id, phase, &buyer)
    }

    pub fn is_accepted_pay_token(env: Env, token: Address) -> bool {
        is_accepted_pay_token(&env, &token)
    }

    pub fn owner(env: Env) -> Result<Address, LaunchpadError> {
        get_owner(&env)
    }
}
