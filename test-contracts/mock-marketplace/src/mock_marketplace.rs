#![no_std]

multiversx_sc::imports!();

pub mod mock_marketplace_proxy;

/// Fixed-price seller: the owner lists assets, buyers pay the exact price.
#[multiversx_sc::contract]
pub trait MockMarketplace {
    #[init]
    fn init(&self) {}

    #[endpoint(setPrice)]
    fn set_price(&self, asset_contract: ManagedAddress, asset_id: u64, price: BigUint) {
        self.prices(&asset_contract, asset_id).set(&price);
    }

    #[view(getPrice)]
    fn get_price(&self, asset_contract: ManagedAddress, asset_id: u64) -> BigUint {
        let price_mapper = self.prices(&asset_contract, asset_id);
        require!(!price_mapper.is_empty(), "Asset not listed");
        price_mapper.get()
    }

    #[endpoint(buy)]
    #[payable("EGLD")]
    fn buy(&self, asset_contract: ManagedAddress, asset_id: u64) {
        let payment = self.call_value().egld_value().clone_value();
        let price = self.get_price(asset_contract.clone(), asset_id);
        require!(payment == price, "Incorrect payment");

        let owner_mapper = self.owners(&asset_contract, asset_id);
        require!(owner_mapper.is_empty(), "Asset already sold");
        owner_mapper.set(self.blockchain().get_caller());
    }

    #[view(getOwner)]
    fn get_owner(&self, asset_contract: ManagedAddress, asset_id: u64) -> ManagedAddress {
        self.owners(&asset_contract, asset_id).get()
    }

    #[storage_mapper("prices")]
    fn prices(&self, asset_contract: &ManagedAddress, asset_id: u64) -> SingleValueMapper<BigUint>;

    #[storage_mapper("owners")]
    fn owners(&self, asset_contract: &ManagedAddress, asset_id: u64) -> SingleValueMapper<ManagedAddress>;
}
