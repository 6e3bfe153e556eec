multiversx_sc::imports!();

use common_errors::ERROR_ADDRESS_IS_ZERO;

#[multiversx_sc::module]
pub trait AdminModule: crate::storage::StorageModule + crate::events::EventsModule {
    #[init]
    fn init(&self, feeders: MultiValueEncoded<ManagedAddress>) {
        self.add_feeders(feeders);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(addFeeders)]
    fn add_feeders(&self, feeders: MultiValueEncoded<ManagedAddress>) {
        let mut feeders_mapper = self.feeders();
        for feeder in feeders {
            require!(!feeder.is_zero(), ERROR_ADDRESS_IS_ZERO);
            if feeders_mapper.insert(feeder.clone()) {
                self.feeders_changed_event(&feeder, true);
            }
        }
    }

    #[only_owner]
    #[endpoint(removeFeeders)]
    fn remove_feeders(&self, feeders: MultiValueEncoded<ManagedAddress>) {
        let mut feeders_mapper = self.feeders();
        for feeder in feeders {
            if feeders_mapper.swap_remove(&feeder) {
                self.feeders_changed_event(&feeder, false);
            }
        }
    }
}
