multiversx_sc::imports!();

use multiversx_sc::contract_base::ManagedSerializer;

use crate::{
    membership,
    types::{CallData, Proposal, ProposalBatch, ProposalId, ProposalStatus},
};

/// Voting window: 3 days in seconds
pub const VOTE_WINDOW: u64 = 259_200;

/// Share of registered members that must take part (any choice)
pub const QUORUM_PERCENTAGE: usize = 25;

#[multiversx_sc::module]
pub trait ProposalModule: membership::MembershipModule {
    // ========================================================
    // ENDPOINT: propose
    // Members only. The id is derived from the batch itself, so
    // re-proposing an identical batch re-opens the same record.
    // ========================================================

    #[endpoint(propose)]
    fn propose(
        &self,
        targets: ManagedVec<ManagedAddress>,
        values: ManagedVec<BigUint>,
        calldatas: ManagedVec<CallData<Self::Api>>,
        description_hash: ManagedByteArray<Self::Api, 32>,
    ) -> ProposalId<Self::Api> {
        let caller = self.blockchain().get_caller();
        self.require_member(&caller);

        let batch = self.build_batch(targets, values, calldatas, description_hash);
        let proposal_id = self.proposal_id(&batch);
        let timestamp = self.blockchain().get_block_timestamp();

        let proposal_mapper = self.proposals(&proposal_id);
        if proposal_mapper.is_empty() {
            proposal_mapper.set(Proposal::new(proposal_id.clone(), caller.clone(), timestamp));
        } else {
            // Tallies and voter flags survive, only the window restarts.
            proposal_mapper.update(|proposal| {
                proposal.proposer = caller.clone();
                proposal.created_at = timestamp;
            });
        }

        self.proposal_created_event(&proposal_id, &caller, timestamp);

        proposal_id
    }

    // ========================================================
    // INTERNAL: batch assembly and id derivation
    // ========================================================

    fn build_batch(
        &self,
        targets: ManagedVec<ManagedAddress>,
        values: ManagedVec<BigUint>,
        calldatas: ManagedVec<CallData<Self::Api>>,
        description_hash: ManagedByteArray<Self::Api, 32>,
    ) -> ProposalBatch<Self::Api> {
        require!(
            targets.len() == values.len(),
            "Targets and values lengths differ"
        );
        require!(
            targets.len() == calldatas.len(),
            "Targets and calldatas lengths differ"
        );

        ProposalBatch {
            targets,
            values,
            calldatas,
            description_hash,
        }
    }

    fn proposal_id(&self, batch: &ProposalBatch<Self::Api>) -> ProposalId<Self::Api> {
        let encoded = ManagedSerializer::<Self::Api>::new().top_encode_to_managed_buffer(batch);
        self.crypto().keccak256(&encoded)
    }

    fn require_proposal(&self, proposal_id: &ProposalId<Self::Api>) -> Proposal<Self::Api> {
        let proposal_mapper = self.proposals(proposal_id);
        require!(!proposal_mapper.is_empty(), "Proposal does not exist");
        proposal_mapper.get()
    }

    /// 25% of registrations, rounded down.
    fn quorum(&self) -> u64 {
        (self.member_count() * QUORUM_PERCENTAGE / 100) as u64
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(hashProposal)]
    fn hash_proposal(
        &self,
        targets: ManagedVec<ManagedAddress>,
        values: ManagedVec<BigUint>,
        calldatas: ManagedVec<CallData<Self::Api>>,
        description_hash: ManagedByteArray<Self::Api, 32>,
    ) -> ProposalId<Self::Api> {
        let batch = self.build_batch(targets, values, calldatas, description_hash);
        self.proposal_id(&batch)
    }

    #[view(hashDescription)]
    fn hash_description(&self, description: ManagedBuffer) -> ManagedByteArray<Self::Api, 32> {
        self.crypto().keccak256(&description)
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: ProposalId<Self::Api>) -> Proposal<Self::Api> {
        self.require_proposal(&proposal_id)
    }

    #[view(getProposalStatus)]
    fn get_proposal_status(&self, proposal_id: ProposalId<Self::Api>) -> ProposalStatus {
        let proposal = self.require_proposal(&proposal_id);
        if proposal.executed {
            return ProposalStatus::Executed;
        }

        let now = self.blockchain().get_block_timestamp();
        if proposal.is_voting_open(now, VOTE_WINDOW) {
            ProposalStatus::Open
        } else if proposal.total_votes() >= self.quorum() {
            ProposalStatus::Succeeded
        } else {
            ProposalStatus::Defeated
        }
    }

    #[view(getQuorum)]
    fn get_quorum(&self) -> u64 {
        self.quorum()
    }

    #[view(hasVoted)]
    fn has_member_voted(&self, proposal_id: ProposalId<Self::Api>, voter: ManagedAddress) -> bool {
        self.has_voted(&proposal_id, &voter).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] proposer: &ManagedAddress,
        created_at: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: &ProposalId<Self::Api>) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("hasVoted")]
    fn has_voted(
        &self,
        proposal_id: &ProposalId<Self::Api>,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<bool>;
}
