//! Pure state transitions for the fund raiser.
//!
//! The contract reads a [`LedgerState`] snapshot out of storage, runs one of
//! the transitions below and writes the returned state back only on `Ok`.
//! Nothing in this module touches the environment, so a failed transition
//! cannot leave a partial update behind.

use soroban_sdk::Address;

use crate::errors::FundRaiserError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerState {
    pub owner: Address,
    pub goal: i128,
    /// Funds held and not yet released to the owner.
    pub balance: i128,
    /// Sum of every amount released by a successful withdrawal.
    pub total_withdrawn: i128,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FundReceipt {
    pub donor_total: i128,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WithdrawReceipt {
    pub released: i128,
}

impl LedgerState {
    pub fn new(owner: Address, goal: i128) -> Self {
        Self {
            owner,
            goal,
            balance: 0,
            total_withdrawn: 0,
        }
    }

    pub fn is_goal_reached(&self) -> bool {
        self.balance >= self.goal
    }

    pub fn holds_invariants(&self) -> bool {
        self.goal >= 0 && self.balance >= 0 && self.total_withdrawn >= 0
    }
}

/// Credit `amount` to a donor whose recorded contribution is `donor_total`.
pub fn fund(
    state: &LedgerState,
    donor_total: i128,
    amount: i128,
) -> Result<(LedgerState, FundReceipt), FundRaiserError> {
    if amount <= 0 {
        return Err(FundRaiserError::InvalidAmount);
    }

    let next = LedgerState {
        balance: state.balance + amount,
        ..state.clone()
    };
    debug_assert!(next.holds_invariants());

    Ok((
        next,
        FundReceipt {
            donor_total: donor_total + amount,
        },
    ))
}

/// Release the whole balance to the owner.
///
/// The caller check runs before the goal check, so a non-owner always sees
/// `Unauthorized` whatever the balance is.
pub fn withdraw(
    state: &LedgerState,
    caller: &Address,
) -> Result<(LedgerState, WithdrawReceipt), FundRaiserError> {
    if *caller != state.owner {
        return Err(FundRaiserError::Unauthorized);
    }
    if !state.is_goal_reached() {
        return Err(FundRaiserError::GoalNotReached);
    }

    let released = state.balance;
    let next = LedgerState {
        balance: 0,
        total_withdrawn: state.total_withdrawn + released,
        ..state.clone()
    };
    debug_assert!(next.holds_invariants());

    Ok((next, WithdrawReceipt { released }))
}
