multiversx_sc::imports!();

/// Membership fee: 1 EGLD
pub const JOIN_FEE: u64 = 1_000_000_000_000_000_000;

#[multiversx_sc::module]
pub trait MembershipModule {
    // ========================================================
    // ENDPOINT: join
    // Anyone paying the fee becomes a member. Joining again
    // appends a duplicate entry and keeps membership intact.
    // ========================================================

    #[endpoint(join)]
    #[payable("EGLD")]
    fn join(&self) {
        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();
        require!(
            payment_amount >= JOIN_FEE,
            "Insufficient payment to join"
        );

        self.member_list().push(&caller);
        self.is_member(&caller).set(true);

        self.member_joined_event(&caller);
    }

    fn require_member(&self, address: &ManagedAddress) {
        require!(self.is_member(address).get(), "Not a member");
    }

    /// Counts registrations, so duplicate joins are included.
    fn member_count(&self) -> usize {
        self.member_list().len()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getMemberCount)]
    fn get_member_count(&self) -> usize {
        self.member_count()
    }

    #[view(getMembers)]
    fn get_members(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for member in self.member_list().iter() {
            result.push(member);
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("memberJoined")]
    fn member_joined_event(&self, #[indexed] member: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("memberList")]
    fn member_list(&self) -> VecMapper<ManagedAddress>;

    #[view(isMember)]
    #[storage_mapper("isMember")]
    fn is_member(&self, address: &ManagedAddress) -> SingleValueMapper<bool>;
}
