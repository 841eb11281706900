multiversx_sc::imports!();

use crate::{
    marketplace_proxy, membership, proposal,
    proposal::VOTE_WINDOW,
    types::{CallData, ProposalId},
};

#[multiversx_sc::module]
pub trait ExecutionModule: membership::MembershipModule + proposal::ProposalModule {
    // ========================================================
    // ENDPOINT: execute
    // Anyone, once the window has closed with quorum. The calls
    // run in order and a single failure reverts all of them.
    // ========================================================

    #[endpoint(execute)]
    fn execute(
        &self,
        targets: ManagedVec<ManagedAddress>,
        values: ManagedVec<BigUint>,
        calldatas: ManagedVec<CallData<Self::Api>>,
        description_hash: ManagedByteArray<Self::Api, 32>,
    ) -> ProposalId<Self::Api> {
        let batch = self.build_batch(targets, values, calldatas, description_hash);
        let proposal_id = self.proposal_id(&batch);

        let mut proposal = self.require_proposal(&proposal_id);
        require!(!proposal.executed, "Proposal already executed");

        let now = self.blockchain().get_block_timestamp();
        require!(
            !proposal.is_voting_open(now, VOTE_WINDOW),
            "Voting still ongoing"
        );
        // Participation only: No and Abstain count towards quorum too.
        require!(
            proposal.total_votes() >= self.quorum(),
            "Quorum not reached"
        );

        proposal.executed = true;
        self.proposals(&proposal_id).set(&proposal);

        // A batch may execute another proposal; the outer batch keeps its flag.
        let was_executing = self.executing().get();
        self.executing().set(true);
        for (index, target) in batch.targets.iter().enumerate() {
            let value = batch.values.get(index);
            let call = batch.calldatas.get(index);
            self.perform_call(&target, &value, &call);
        }
        self.executing().set(was_executing);

        let caller = self.blockchain().get_caller();
        self.proposal_executed_event(&proposal_id, &caller);

        proposal_id
    }

    /// A failing callee aborts the transaction with its own error message,
    /// which is empty when the callee gave none.
    fn perform_call(
        &self,
        target: &ManagedAddress,
        value: &BigUint,
        call: &CallData<Self::Api>,
    ) {
        if call.endpoint.is_empty() {
            if *value > 0u64 {
                self.tx().to(target).egld(value).transfer();
            }
            return;
        }

        self.tx()
            .to(target)
            .egld(value)
            .raw_call(call.endpoint.clone())
            .arguments_raw(ManagedArgBuffer::from(call.arguments.clone()))
            .sync_call();
    }

    // ========================================================
    // ENDPOINT: buyFromMarketplace
    // Only reachable as one of the calls of a running batch.
    // ========================================================

    #[endpoint(buyFromMarketplace)]
    fn buy_from_marketplace(
        &self,
        marketplace: ManagedAddress,
        asset_contract: ManagedAddress,
        asset_id: u64,
        max_price: BigUint,
    ) {
        require!(self.executing().get(), "Unauthorized");

        let price = self
            .tx()
            .to(&marketplace)
            .typed(marketplace_proxy::MarketplaceProxy)
            .get_price(&asset_contract, asset_id)
            .returns(ReturnsResult)
            .sync_call();
        require!(max_price > price, "Price too high");

        self.tx()
            .to(&marketplace)
            .typed(marketplace_proxy::MarketplaceProxy)
            .buy(&asset_contract, asset_id)
            .egld(&price)
            .sync_call();

        self.marketplace_purchase_event(&marketplace, &asset_contract, asset_id, &price);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isExecuting)]
    fn is_executing(&self) -> bool {
        self.executing().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] executor: &ManagedAddress,
    );

    #[event("marketplacePurchase")]
    fn marketplace_purchase_event(
        &self,
        #[indexed] marketplace: &ManagedAddress,
        #[indexed] asset_contract: &ManagedAddress,
        #[indexed] asset_id: u64,
        price: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("executing")]
    fn executing(&self) -> SingleValueMapper<bool>;
}
