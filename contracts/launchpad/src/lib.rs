#![no_std]

mod contract;
mod errors;
mod events;
mod external;
mod storage;
mod types;
mod validation;


pub use contract::{LaunchpadContract, LaunchpadContractClient};
pub use errors::LaunchpadError;
pub use events::{MintedEvent, OwnerChangedEvent, PayTokenEvent, SaleCreatedEvent, EVENT_TOPIC};
pub use external::{
    LaunchpadCollection, LaunchpadCollectionClient, LicenseToken, LicenseTokenClient,
};
pub use types::{SaleParams, SalePhase, SaleStatus};
pub use validation::MAX_ROYALTY_BPS;
