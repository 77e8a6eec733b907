use soroban_sdk::{contractclient, Address, Env, String};

// Minimal interfaces of the collaborator contracts

/// Collection the launchpad mints into. The collection owner must register
/// the launchpad as a minter before any sale can mint.
#[contractclient(name = "LaunchpadCollectionClient")]
pub trait LaunchpadCollection {
    fn mint(env: Env, minter: Address, to: Address, quantity: u32, uri: String) -> u64;
}

/// Collection whose tokens license the right to open sales.
#[contractclient(name = "LicenseTokenClient")]
pub trait LicenseToken {
    fn owner_of(env: Env, token_id: u64) -> Address;
}
