multiversx_sc::imports!();

use common_errors::{ERROR_NOT_FEEDER, ERROR_PRICE_NOT_SET};
use common_structs::TimestampedPrice;

#[multiversx_sc::module]
pub trait UtilsModule: crate::storage::StorageModule {
    fn require_is_feeder_or_owner(&self) {
        let caller = self.blockchain().get_caller();
        let is_owner = caller == self.blockchain().get_owner_address();
        require!(
            is_owner || self.feeders().contains(&caller),
            ERROR_NOT_FEEDER
        );
    }

    fn require_price(&self, token: &EgldOrEsdtTokenIdentifier) -> TimestampedPrice<Self::Api> {
        let price_mapper = self.prices(token);
        require!(!price_mapper.is_empty(), ERROR_PRICE_NOT_SET);

        price_mapper.get()
    }
}
