multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// keccak256 over a proposal batch. Doubles as the storage key.
pub type ProposalId<M> = ManagedByteArray<M, 32>;

/// ed25519 signature over a ballot digest.
pub type BallotSignature<M> = ManagedByteArray<M, 64>;

// ============================================================
// Vote Type — ballot choices, encoded as 0 / 1 / 2
// ============================================================

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Copy, PartialEq, Debug,
)]
pub enum VoteType {
    No,
    Yes,
    Abstain,
}

impl VoteType {
    pub fn as_byte(&self) -> u8 {
        match self {
            VoteType::No => 0,
            VoteType::Yes => 1,
            VoteType::Abstain => 2,
        }
    }
}

// ============================================================
// Proposal Status — derived on read, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Voting window still running.
    Open,
    /// Window closed and participation met quorum. Anyone may execute.
    Succeeded,
    /// Window closed without enough participation.
    Defeated,
    /// Batch ran successfully. Terminal state.
    Executed,
}

// ============================================================
// Call Data — one endpoint invocation inside a batch
// ============================================================

/// An empty `endpoint` means a plain EGLD transfer.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug)]
pub struct CallData<M: ManagedTypeApi> {
    pub endpoint: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
}

// ============================================================
// Proposal Batch — the hashed content of a proposal
// ============================================================

/// Fields are nested-encoded (length-prefixed) when hashed, so two
/// different batches never share an encoding.
#[derive(TopEncode, NestedEncode, Clone)]
pub struct ProposalBatch<M: ManagedTypeApi> {
    pub targets: ManagedVec<M, ManagedAddress<M>>,
    pub values: ManagedVec<M, BigUint<M>>,
    pub calldatas: ManagedVec<M, CallData<M>>,
    pub description_hash: ManagedByteArray<M, 32>,
}

impl<M: ManagedTypeApi> ProposalBatch<M> {
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: ProposalId<M>,
    pub proposer: ManagedAddress<M>,
    /// Block timestamp of the latest `propose` for this id
    pub created_at: u64,
    pub no_votes: u64,
    pub yes_votes: u64,
    pub abstain_votes: u64,
    pub executed: bool,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn new(id: ProposalId<M>, proposer: ManagedAddress<M>, created_at: u64) -> Self {
        Proposal {
            id,
            proposer,
            created_at,
            no_votes: 0,
            yes_votes: 0,
            abstain_votes: 0,
            executed: false,
        }
    }

    pub fn total_votes(&self) -> u64 {
        self.no_votes + self.yes_votes + self.abstain_votes
    }

    pub fn add_vote(&mut self, support: VoteType) {
        match support {
            VoteType::No => self.no_votes += 1,
            VoteType::Yes => self.yes_votes += 1,
            VoteType::Abstain => self.abstain_votes += 1,
        }
    }

    /// The window end is already closed.
    pub fn is_voting_open(&self, now: u64, window: u64) -> bool {
        now < self.created_at + window
    }
}
