use core::fmt;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LaunchpadError {
    InvalidPayToken = 1,
    NotLicenseOwner = 2,
    InvalidNftAddress = 3,
    InvalidMaxBuy = 4,
    InvalidTotalQuantity = 5,
    InvalidStartTime = 6,
    InvalidEndTime = 7,
    PriorSaleNotEnded = 8,
    SaleNotFound = 9,
    SaleNotOpen = 10,
    WrongPayToken = 11,
    InvalidQuantity = 12,
    InsufficientFunds = 13,
    SoldOut = 14,
    NotOwner = 15,
    AlreadyInitialized = 16,
    NotInitialized = 17,
    PurchaseLimitExceeded = 18,
    InvalidPrice = 19,
    InvalidRoyalty = 20,
}

impl LaunchpadError {
    /// Stable identifier surfaced to callers alongside the numeric code.
    pub const fn code(&self) -> &'static str {
        match self {
            LaunchpadError::InvalidPayToken => "invalid_pay_token",
            LaunchpadError::NotLicenseOwner => "not_license_owner",
            LaunchpadError::InvalidNftAddress => "invalid_nft_address",
            LaunchpadError::InvalidMaxBuy => "invalid_max_buy",
            LaunchpadError::InvalidTotalQuantity => "invalid_total_quantity",
            LaunchpadError::InvalidStartTime => "invalid_start_time",
            LaunchpadError::InvalidEndTime => "invalid_end_time",
            LaunchpadError::PriorSaleNotEnded => "prior_sale_not_ended",
            LaunchpadError::SaleNotFound => "sale_not_found",
            LaunchpadError::SaleNotOpen => "sale_not_open",
            LaunchpadError::WrongPayToken => "wrong_pay_token",
            LaunchpadError::InvalidQuantity => "invalid_quantity",
            LaunchpadError::InsufficientFunds => "insufficient_funds",
            LaunchpadError::SoldOut => "sold_out",
            LaunchpadError::NotOwner => "not_owner",
            LaunchpadError::AlreadyInitialized => "already_initialized",
            LaunchpadError::NotInitialized => "not_initialized",
            LaunchpadError::PurchaseLimitExceeded => "purchase_limit_exceeded",
            LaunchpadError::InvalidPrice => "invalid_price",
            LaunchpadError::InvalidRoyalty => "invalid_royalty",
        }
    }
}

impl fmt::Display for LaunchpadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
