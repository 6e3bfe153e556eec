multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("price_updated")]
    fn price_updated_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] price: &BigUint,
        #[indexed] timestamp: u64,
        #[indexed] feeder: &ManagedAddress,
    );

    #[event("feeders_changed")]
    fn feeders_changed_event(&self, #[indexed] feeder: &ManagedAddress, #[indexed] active: bool);
}
