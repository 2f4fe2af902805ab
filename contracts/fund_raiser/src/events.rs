use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundedEvent {
    #[topic]
    pub donor: Address,
    pub amount: i128,
    pub donor_total: i128,
    pub balance: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    #[topic]
    pub owner: Address,
    pub amount: i128,
}
