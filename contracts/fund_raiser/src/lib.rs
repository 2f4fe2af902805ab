#![no_std]

mod errors;
mod events;
mod ledger;
mod storage;
mod token;

pub use errors::FundRaiserError;
use events::{FundedEvent, WithdrawnEvent};
use ledger::LedgerState;
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env};
use storage::{DataKey, FundConfig, TTL_EXTEND_TO, TTL_THRESHOLD};

#[contract]
pub struct FundRaiserContract;

fn read_config(env: &Env) -> FundConfig {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("config is written by the constructor")
}

fn read_state(env: &Env, config: &FundConfig) -> LedgerState {
    let storage = env.storage().instance();
    LedgerState {
        owner: config.owner.clone(),
        goal: config.goal,
        balance: storage.get(&DataKey::Balance).unwrap_or(0),
        total_withdrawn: storage.get(&DataKey::TotalWithdrawn).unwrap_or(0),
    }
}

fn write_state(env: &Env, state: &LedgerState) {
    let storage = env.storage().instance();
    storage.set(&DataKey::Balance, &state.balance);
    storage.set(&DataKey::TotalWithdrawn, &state.total_withdrawn);
    storage.extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

#[contractimpl]
impl FundRaiserContract {
    /// Deploy the fund raiser with a fixed owner, goal and token.
    ///
    /// None of the three can be changed afterwards. A negative goal aborts the
    /// deployment with [`FundRaiserError::InvalidAmount`].
    pub fn __constructor(env: Env, owner: Address, goal: i128, token: Address) {
        if goal < 0 {
            panic_with_error!(&env, FundRaiserError::InvalidAmount);
        }

        let state = LedgerState::new(owner.clone(), goal);
        env.storage()
            .instance()
            .set(&DataKey::Config, &FundConfig { owner, goal, token });
        write_state(&env, &state);
    }

    /// Contribute `amount` tokens from `donor`.
    ///
    /// Any address may fund, and funding past the goal is allowed.
    pub fn fund(env: Env, donor: Address, amount: i128) -> Result<bool, FundRaiserError> {
        // Require donor authorization
        donor.require_auth();

        let config = read_config(&env);
        let state = read_state(&env, &config);
        let donor_key = DataKey::Donor(donor.clone());
        let donor_total: i128 = env.storage().persistent().get(&donor_key).unwrap_or(0);

        let (next, receipt) = ledger::fund(&state, donor_total, amount)?;

        // Transfer tokens from donor to contract
        let contract_address = env.current_contract_address();
        token::transfer(&env, &config.token, &donor, &contract_address, &amount);

        let donors = env.storage().persistent();
        donors.set(&donor_key, &receipt.donor_total);
        donors.extend_ttl(&donor_key, TTL_THRESHOLD, TTL_EXTEND_TO);
        write_state(&env, &next);

        log!(&env, "funded", donor, amount, next.balance);
        FundedEvent {
            donor,
            amount,
            donor_total: receipt.donor_total,
            balance: next.balance,
        }
        .publish(&env);

        Ok(true)
    }

    /// Release the entire balance to the owner once the goal is reached.
    pub fn withdraw(env: Env, caller: Address) -> Result<bool, FundRaiserError> {
        let config = read_config(&env);

        // Verify owner identity
        if caller != config.owner {
            return Err(FundRaiserError::Unauthorized);
        }

        // Require owner authorization
        caller.require_auth();

        let state = read_state(&env, &config);
        let (next, receipt) = ledger::withdraw(&state, &caller)?;

        // Transfer tokens from contract to owner
        if receipt.released > 0 {
            let contract_address = env.current_contract_address();
            token::transfer(
                &env,
                &config.token,
                &contract_address,
                &config.owner,
                &receipt.released,
            );
        }

        write_state(&env, &next);

        log!(&env, "withdrawn", caller, receipt.released);
        WithdrawnEvent {
            owner: caller,
            amount: receipt.released,
        }
        .publish(&env);

        Ok(true)
    }

    /// Get the funds currently held by the contract
    pub fn get_balance(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::Balance)
            .unwrap_or(0)
    }

    /// Get the fundraising goal
    pub fn get_goal(env: Env) -> i128 {
        read_config(&env).goal
    }

    /// Get the owner address
    pub fn get_owner(env: Env) -> Address {
        read_config(&env).owner
    }

    /// Get the token address
    pub fn get_token(env: Env) -> Address {
        read_config(&env).token
    }

    /// Get the total contributed by `donor`.
    ///
    /// An address that never funded reads as zero. Contributions are kept
    /// after a withdrawal, so this is a lifetime total.
    pub fn get_donor_amount(env: Env, donor: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Donor(donor))
            .unwrap_or(0)
    }

    /// Get the total released to the owner across all withdrawals
    pub fn get_total_withdrawn(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalWithdrawn)
            .unwrap_or(0)
    }

    /// Check whether the balance currently meets the goal
    pub fn is_goal_reached(env: Env) -> bool {
        let config = read_config(&env);
        read_state(&env, &config).is_goal_reached()
    }
}
