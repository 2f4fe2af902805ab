use soroban_sdk::contracterror;

/// Error codes are part of the contract's public interface and must not be renumbered.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FundRaiserError {
    InvalidAmount = 1,
    Unauthorized = 2,
    GoalNotReached = 3,
}
