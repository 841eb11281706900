#![no_std]

multiversx_sc::imports!();

pub mod call_recorder_proxy;

/// Batch target for tests: records what it receives, or rejects with or
/// without a reason.
#[multiversx_sc::contract]
pub trait CallRecorder {
    #[init]
    fn init(&self) {}

    #[endpoint(record)]
    #[payable("EGLD")]
    fn record(&self, value: u64) {
        let payment = self.call_value().egld_value().clone_value();
        self.records().push(&value);
        self.received().update(|received| *received += payment);
    }

    #[endpoint(reject)]
    fn reject(&self) {
        sc_panic!("target rejected call");
    }

    #[endpoint(rejectSilently)]
    fn reject_silently(&self) {
        sc_panic!("");
    }

    #[view(getRecordCount)]
    fn get_record_count(&self) -> usize {
        self.records().len()
    }

    #[view(getLastRecord)]
    fn get_last_record(&self) -> u64 {
        let count = self.records().len();
        require!(count > 0, "No records");
        self.records().get(count)
    }

    #[storage_mapper("records")]
    fn records(&self) -> VecMapper<u64>;

    #[view(getReceived)]
    #[storage_mapper("received")]
    fn received(&self) -> SingleValueMapper<BigUint>;
}
