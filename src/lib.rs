#![no_std]

multiversx_sc::imports!();

pub mod collector_proxy;
pub mod execution;
pub mod marketplace_proxy;
pub mod membership;
pub mod proposal;
pub mod signature;
pub mod types;
pub mod voting;

use membership::JOIN_FEE;
use proposal::{QUORUM_PERCENTAGE, VOTE_WINDOW};

// ============================================================
// Contract
// ============================================================

/// Member-run treasury. Members pay to join, propose batches of
/// contract calls, vote on them directly or through signed ballots,
/// and anyone can execute a batch once its window closes with quorum.
#[multiversx_sc::contract]
pub trait Collector:
    membership::MembershipModule
    + proposal::ProposalModule
    + voting::VotingModule
    + signature::SignatureModule
    + execution::ExecutionModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// `domain_name` and `chain_id` feed the ballot signing domain.
    #[init]
    fn init(&self, domain_name: ManagedBuffer, chain_id: ManagedBuffer) {
        self.domain_name().set(&domain_name);
        self.chain_id().set(&chain_id);
        self.executing().set(false);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue3<BigUint, u64, usize> {
        (BigUint::from(JOIN_FEE), VOTE_WINDOW, QUORUM_PERCENTAGE).into()
    }
}
