#![cfg(test)]
extern crate std;

use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};

use fund_raiser::{FundRaiserContract, FundRaiserContractClient as FundClient, FundRaiserError};

#[test]
fn test_fund_raiser_campaign_e2e() {
    let env = Env::default();
    env.mock_all_auths();

    // Identities
    let issuer = Address::generate(&env);
    let deployer = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    // Token the campaign accounts in
    let asset = env.register_stellar_asset_contract_v2(issuer.clone());
    let token = TokenClient::new(&env, &asset.address());
    let token_admin = StellarAssetClient::new(&env, &asset.address());
    token_admin.mint(&alice, &2_000_000i128);
    token_admin.mint(&bob, &2_000_000i128);

    // Deploy with a 1,000,000 goal owned by the deployer
    let fund_id = env.register(
        FundRaiserContract,
        (deployer.clone(), 1_000_000i128, asset.address()),
    );
    let fund = FundClient::new(&env, &fund_id);

    // Below goal: owner cannot withdraw yet, strangers never can
    fund.fund(&bob, &300_000i128);
    fund.fund(&alice, &200_000i128);
    assert_eq!(fund.get_balance(), 500_000i128);
    assert_eq!(
        fund.try_withdraw(&deployer),
        Err(Ok(FundRaiserError::GoalNotReached))
    );
    assert_eq!(
        fund.try_withdraw(&alice),
        Err(Ok(FundRaiserError::Unauthorized))
    );

    // Crossing the goal
    fund.fund(&alice, &600_000i128);
    assert!(fund.is_goal_reached());
    assert_eq!(fund.get_donor_amount(&alice), 800_000i128);
    assert_eq!(fund.get_donor_amount(&bob), 300_000i128);

    assert!(fund.withdraw(&deployer));

    // Everything held by the contract landed with the owner
    assert_eq!(token.balance(&deployer), 1_100_000i128);
    assert_eq!(token.balance(&fund_id), 0i128);
    assert_eq!(token.balance(&alice), 1_200_000i128);
    assert_eq!(token.balance(&bob), 1_700_000i128);
    assert_eq!(fund.get_balance(), 0i128);
    assert_eq!(fund.get_total_withdrawn(), 1_100_000i128);

    // Drained: a repeat withdrawal is gated again
    assert_eq!(
        fund.try_withdraw(&deployer),
        Err(Ok(FundRaiserError::GoalNotReached))
    );

    std::println!("fund raiser campaign settled: {} released", fund.get_total_withdrawn());
}
