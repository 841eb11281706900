#![allow(dead_code)]

use call_recorder::call_recorder_proxy;
use collector::{
    collector_proxy,
    types::{CallData, VoteType},
};
use mock_marketplace::mock_marketplace_proxy;
use multiversx_sc_scenario::imports::*;

pub const OWNER: TestAddress = TestAddress::new("owner");
pub const OUTSIDER: TestAddress = TestAddress::new("outsider");
pub const COLLECTOR: TestSCAddress = TestSCAddress::new("collector");
pub const RECORDER: TestSCAddress = TestSCAddress::new("call-recorder");
pub const MARKETPLACE: TestSCAddress = TestSCAddress::new("marketplace");
pub const ASSET_CONTRACT: TestSCAddress = TestSCAddress::new("asset-collection");

pub const COLLECTOR_CODE: MxscPath = MxscPath::new("output/collector.mxsc.json");
pub const RECORDER_CODE: MxscPath =
    MxscPath::new("test-contracts/call-recorder/output/call-recorder.mxsc.json");
pub const MARKETPLACE_CODE: MxscPath =
    MxscPath::new("test-contracts/mock-marketplace/output/mock-marketplace.mxsc.json");

pub const ONE_EGLD: u64 = 1_000_000_000_000_000_000;
pub const VOTE_WINDOW: u64 = 259_200;
pub const START_TIMESTAMP: u64 = 1_700_000_000;
pub const VOTING_END: u64 = START_TIMESTAMP + VOTE_WINDOW;

pub const DOMAIN_NAME: &str = "Collector";
pub const CHAIN_ID: &str = "D";

pub type ProposalId = ManagedByteArray<StaticApi, 32>;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(COLLECTOR_CODE, collector::ContractBuilder);
    blockchain.register_contract(RECORDER_CODE, call_recorder::ContractBuilder);
    blockchain.register_contract(MARKETPLACE_CODE, mock_marketplace::ContractBuilder);
    blockchain
}

/// Top-encodes one endpoint argument the way a transaction would carry it.
pub fn encode_arg<T: TopEncode>(value: &T) -> ManagedBuffer<StaticApi> {
    ManagedBuffer::new_from_bytes(&multiversx_sc::codec::top_encode_to_vec_u8_or_panic(value))
}

pub fn description_hash(seed: u8) -> ManagedByteArray<StaticApi, 32> {
    ManagedByteArray::new_from_bytes(&[seed; 32])
}

/// A proposal batch as the four parallel arrays the endpoints take.
#[derive(Clone)]
pub struct Batch {
    pub targets: ManagedVec<StaticApi, ManagedAddress<StaticApi>>,
    pub values: ManagedVec<StaticApi, BigUint<StaticApi>>,
    pub calldatas: ManagedVec<StaticApi, CallData<StaticApi>>,
    pub description_hash: ManagedByteArray<StaticApi, 32>,
}

impl Batch {
    pub fn new(seed: u8) -> Self {
        Batch {
            targets: ManagedVec::new(),
            values: ManagedVec::new(),
            calldatas: ManagedVec::new(),
            description_hash: description_hash(seed),
        }
    }

    pub fn call(
        mut self,
        target: ManagedAddress<StaticApi>,
        value: u64,
        endpoint: &str,
        arguments: &[ManagedBuffer<StaticApi>],
    ) -> Self {
        let mut encoded_arguments = ManagedVec::new();
        for argument in arguments {
            encoded_arguments.push(argument.clone());
        }

        self.targets.push(target);
        self.values.push(BigUint::from(value));
        self.calldatas.push(CallData {
            endpoint: ManagedBuffer::from(endpoint),
            arguments: encoded_arguments,
        });
        self
    }

    pub fn record(self, value: u64, payment: u64) -> Self {
        self.call(RECORDER.to_managed_address(), payment, "record", &[encode_arg(&value)])
    }

    pub fn reject(self) -> Self {
        self.call(RECORDER.to_managed_address(), 0, "reject", &[])
    }

    pub fn reject_silently(self) -> Self {
        self.call(RECORDER.to_managed_address(), 0, "rejectSilently", &[])
    }

    pub fn execute_other(self, other: &Batch) -> Self {
        self.call(
            COLLECTOR.to_managed_address(),
            0,
            "execute",
            &[
                encode_arg(&other.targets),
                encode_arg(&other.values),
                encode_arg(&other.calldatas),
                encode_arg(&other.description_hash),
            ],
        )
    }

    pub fn buy_from_marketplace(self, asset_id: u64, max_price: u64) -> Self {
        self.call(
            COLLECTOR.to_managed_address(),
            0,
            "buyFromMarketplace",
            &[
                encode_arg(&MARKETPLACE.to_managed_address::<StaticApi>()),
                encode_arg(&ASSET_CONTRACT.to_managed_address::<StaticApi>()),
                encode_arg(&asset_id),
                encode_arg(&BigUint::<StaticApi>::from(max_price)),
            ],
        )
    }
}

pub struct CollectorTestState {
    pub world: ScenarioWorld,
}

impl CollectorTestState {
    pub fn new() -> Self {
        let mut world = world();

        world.account(OWNER).nonce(1).balance(5 * ONE_EGLD);
        world.account(OUTSIDER).nonce(1).balance(5 * ONE_EGLD);
        world.current_block().block_timestamp(START_TIMESTAMP);

        world
            .tx()
            .from(OWNER)
            .typed(collector_proxy::CollectorProxy)
            .init(
                ManagedBuffer::<StaticApi>::from(DOMAIN_NAME),
                ManagedBuffer::<StaticApi>::from(CHAIN_ID),
            )
            .code(COLLECTOR_CODE)
            .new_address(COLLECTOR)
            .run();

        world
            .tx()
            .from(OWNER)
            .typed(call_recorder_proxy::CallRecorderProxy)
            .init()
            .code(RECORDER_CODE)
            .new_address(RECORDER)
            .run();

        world
            .tx()
            .from(OWNER)
            .typed(mock_marketplace_proxy::MockMarketplaceProxy)
            .init()
            .code(MARKETPLACE_CODE)
            .new_address(MARKETPLACE)
            .run();

        Self { world }
    }

    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    /// Funds a fresh account and joins with exactly the fee.
    pub fn add_member(&mut self, member: TestAddress) {
        self.world.account(member).nonce(1).balance(5 * ONE_EGLD);
        self.join(member);
    }

    pub fn add_members(&mut self, members: &[TestAddress]) {
        for member in members {
            self.add_member(*member);
        }
    }

    pub fn join(&mut self, member: TestAddress) {
        self.world
            .tx()
            .from(member)
            .to(COLLECTOR)
            .typed(collector_proxy::CollectorProxy)
            .join()
            .egld(ONE_EGLD)
            .run();
    }

    pub fn propose(&mut self, proposer: TestAddress, batch: &Batch) -> ProposalId {
        self.world
            .tx()
            .from(proposer)
            .to(COLLECTOR)
            .typed(collector_proxy::CollectorProxy)
            .propose(
                batch.targets.clone(),
                batch.values.clone(),
                batch.calldatas.clone(),
                batch.description_hash.clone(),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn propose_expect_err(&mut self, proposer: TestAddress, batch: &Batch, message: &str) {
        self.world
            .tx()
            .from(proposer)
            .to(COLLECTOR)
            .typed(collector_proxy::CollectorProxy)
            .propose(
                batch.targets.clone(),
                batch.values.clone(),
                batch.calldatas.clone(),
                batch.description_hash.clone(),
            )
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn vote(&mut self, voter: TestAddress, proposal_id: &ProposalId, support: VoteType) {
        self.world
            .tx()
            .from(voter)
            .to(COLLECTOR)
            .typed(collector_proxy::CollectorProxy)
            .vote(proposal_id.clone(), support)
            .run();
    }

    pub fn vote_expect_err(
        &mut self,
        voter: TestAddress,
        proposal_id: &ProposalId,
        support: VoteType,
        message: &str,
    ) {
        self.world
            .tx()
            .from(voter)
            .to(COLLECTOR)
            .typed(collector_proxy::CollectorProxy)
            .vote(proposal_id.clone(), support)
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn execute(&mut self, batch: &Batch) -> ProposalId {
        self.world
            .tx()
            .from(OUTSIDER)
            .to(COLLECTOR)
            .typed(collector_proxy::CollectorProxy)
            .execute(
                batch.targets.clone(),
                batch.values.clone(),
                batch.calldatas.clone(),
                batch.description_hash.clone(),
            )
            .returns(ReturnsResult)
            .run()
    }

    /// Matches on the message only, so failures raised inside a
    /// sub-call are checked the same way as local ones.
    pub fn execute_expect_err(&mut self, batch: &Batch, message: &str) {
        self.world
            .tx()
            .from(OUTSIDER)
            .to(COLLECTOR)
            .typed(collector_proxy::CollectorProxy)
            .execute(
                batch.targets.clone(),
                batch.values.clone(),
                batch.calldatas.clone(),
                batch.description_hash.clone(),
            )
            .returns(ExpectMessage(message))
            .run();
    }

    pub fn hash_proposal(&mut self, batch: &Batch) -> ProposalId {
        self.world
            .query()
            .to(COLLECTOR)
            .typed(collector_proxy::CollectorProxy)
            .hash_proposal(
                batch.targets.clone(),
                batch.values.clone(),
                batch.calldatas.clone(),
                batch.description_hash.clone(),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn has_voted(&mut self, proposal_id: &ProposalId, voter: ManagedAddress<StaticApi>) -> bool {
        self.world
            .query()
            .to(COLLECTOR)
            .typed(collector_proxy::CollectorProxy)
            .has_voted(proposal_id.clone(), voter)
            .returns(ReturnsResult)
            .run()
    }

    /// Returns (no, yes, abstain).
    pub fn tallies(&mut self, proposal_id: &ProposalId) -> (u64, u64, u64) {
        let proposal = self
            .world
            .query()
            .to(COLLECTOR)
            .typed(collector_proxy::CollectorProxy)
            .get_proposal(proposal_id.clone())
            .returns(ReturnsResult)
            .run();
        (proposal.no_votes, proposal.yes_votes, proposal.abstain_votes)
    }

    pub fn record_count(&mut self) -> usize {
        self.world
            .query()
            .to(RECORDER)
            .typed(call_recorder_proxy::CallRecorderProxy)
            .get_record_count()
            .returns(ReturnsResult)
            .run()
    }
}
