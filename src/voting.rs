multiversx_sc::imports!();

use crate::{
    membership, proposal,
    proposal::VOTE_WINDOW,
    types::{ProposalId, VoteType},
};

#[multiversx_sc::module]
pub trait VotingModule: membership::MembershipModule + proposal::ProposalModule {
    // ========================================================
    // ENDPOINT: vote
    // One vote per member per proposal, no changing it later.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: ProposalId<Self::Api>, support: VoteType) {
        let caller = self.blockchain().get_caller();
        self.cast_vote(&caller, &proposal_id, support);
    }

    /// Every check runs before the first write.
    fn cast_vote(
        &self,
        voter: &ManagedAddress,
        proposal_id: &ProposalId<Self::Api>,
        support: VoteType,
    ) {
        self.require_member(voter);

        let mut proposal = self.require_proposal(proposal_id);
        require!(
            !self.has_voted(proposal_id, voter).get(),
            "Already voted"
        );

        let now = self.blockchain().get_block_timestamp();
        require!(
            proposal.is_voting_open(now, VOTE_WINDOW),
            "Voting is closed"
        );

        proposal.add_vote(support);
        self.proposals(proposal_id).set(&proposal);
        self.has_voted(proposal_id, voter).set(true);

        self.vote_cast_event(proposal_id, voter, support);
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: VoteType,
    );
}
