use soroban_sdk::{contracttype, Address};

const DAY_IN_LEDGERS: u32 = 17_280;

// Donor totals are lifetime records; keep them (and the instance) live for a month past each write.
pub const TTL_EXTEND_TO: u32 = 30 * DAY_IN_LEDGERS;
pub const TTL_THRESHOLD: u32 = TTL_EXTEND_TO - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,         // -> FundConfig
    Balance,        // -> i128
    TotalWithdrawn, // -> i128
    Donor(Address), // donor -> i128
}

/// Deployment-time configuration. Written once by the constructor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundConfig {
    pub owner: Address,
    pub goal: i128,
    pub token: Address,
}
