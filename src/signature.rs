multiversx_sc::imports!();

use crate::{
    membership, proposal,
    types::{BallotSignature, ProposalId, VoteType},
    voting,
};

const DOMAIN_TYPE: &[u8] = b"Domain(string name,string chainId,address verifyingContract)";
const BALLOT_TYPE: &[u8] = b"Ballot(uint8 support)";
const DIGEST_PREFIX: &[u8] = b"\x19\x01";

/// Votes relayed on behalf of members who signed a ballot off-chain.
///
/// A ballot digest commits to the signing domain and the support choice
/// only. The same signature is therefore accepted on any proposal the
/// signer has not voted on yet.
#[multiversx_sc::module]
pub trait SignatureModule:
    membership::MembershipModule + proposal::ProposalModule + voting::VotingModule
{
    #[endpoint(voteBySig)]
    fn vote_by_sig(
        &self,
        proposal_id: ProposalId<Self::Api>,
        support: VoteType,
        voter: ManagedAddress,
        signature: BallotSignature<Self::Api>,
    ) {
        self.verify_ballot(&voter, support, &signature);
        self.cast_vote(&voter, &proposal_id, support);
    }

    #[endpoint(recordVotesBySigs)]
    fn record_votes_by_sigs(
        &self,
        proposal_id: ProposalId<Self::Api>,
        supports: ManagedVec<VoteType>,
        voters: ManagedVec<ManagedAddress>,
        signatures: ManagedVec<BallotSignature<Self::Api>>,
    ) {
        require!(
            supports.len() == voters.len(),
            "Supports and voters lengths differ"
        );
        require!(
            supports.len() == signatures.len(),
            "Supports and signatures lengths differ"
        );

        for i in 0..supports.len() {
            let support = supports.get(i);
            let voter = voters.get(i);
            let signature = signatures.get(i);

            self.verify_ballot(&voter, support, &signature);
            self.cast_vote(&voter, &proposal_id, support);
        }
    }

    /// The VM hook aborts the transaction on a signature that does
    /// not verify against `voter`.
    fn verify_ballot(
        &self,
        voter: &ManagedAddress,
        support: VoteType,
        signature: &BallotSignature<Self::Api>,
    ) {
        let empty_signature = ManagedByteArray::<Self::Api, 64>::new_from_bytes(&[0u8; 64]);
        require!(
            !voter.is_zero() && signature != &empty_signature,
            "Invalid signature"
        );

        let digest = self.ballot_digest(support);
        self.crypto().verify_ed25519(
            voter.as_managed_buffer(),
            digest.as_managed_buffer(),
            signature.as_managed_buffer(),
        );
    }

    // ========================================================
    // INTERNAL: typed-data digest
    // ========================================================

    fn domain_separator(&self) -> ManagedByteArray<Self::Api, 32> {
        let mut encoded = ManagedBuffer::new();
        encoded.append(
            self.crypto()
                .keccak256(&ManagedBuffer::new_from_bytes(DOMAIN_TYPE))
                .as_managed_buffer(),
        );
        encoded.append(self.crypto().keccak256(&self.domain_name().get()).as_managed_buffer());
        encoded.append(self.crypto().keccak256(&self.chain_id().get()).as_managed_buffer());
        encoded.append(self.blockchain().get_sc_address().as_managed_buffer());

        self.crypto().keccak256(&encoded)
    }

    fn ballot_digest(&self, support: VoteType) -> ManagedByteArray<Self::Api, 32> {
        let mut ballot = ManagedBuffer::new();
        ballot.append(
            self.crypto()
                .keccak256(&ManagedBuffer::new_from_bytes(BALLOT_TYPE))
                .as_managed_buffer(),
        );
        ballot.append_bytes(&[support.as_byte()]);
        let struct_hash = self.crypto().keccak256(&ballot);

        let mut digest_input = ManagedBuffer::new_from_bytes(DIGEST_PREFIX);
        digest_input.append(self.domain_separator().as_managed_buffer());
        digest_input.append(struct_hash.as_managed_buffer());

        self.crypto().keccak256(&digest_input)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getBallotDigest)]
    fn get_ballot_digest(&self, support: VoteType) -> ManagedByteArray<Self::Api, 32> {
        self.ballot_digest(support)
    }

    #[view(getDomainSeparator)]
    fn get_domain_separator(&self) -> ManagedByteArray<Self::Api, 32> {
        self.domain_separator()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getDomainName)]
    #[storage_mapper("domainName")]
    fn domain_name(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getChainId)]
    #[storage_mapper("chainId")]
    fn chain_id(&self) -> SingleValueMapper<ManagedBuffer>;
}
