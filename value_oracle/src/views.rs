multiversx_sc::imports!();

use common_constants::PRICE_PRECISION;
use common_structs::TimestampedPrice;

#[multiversx_sc::module]
pub trait ViewsModule: crate::storage::StorageModule + crate::utils::UtilsModule {
    /// Value of `quantity` raw units of `token`, floor of `quantity * price / 10^18`.
    /// A zero quantity is worth nothing even when the token has no price yet.
    #[view(getValue)]
    fn get_value(&self, token: EgldOrEsdtTokenIdentifier, quantity: BigUint) -> BigUint {
        if quantity == BigUint::zero() {
            return BigUint::zero();
        }

        let feed = self.require_price(&token);
        quantity * &feed.price / BigUint::from(PRICE_PRECISION)
    }

    #[view(getPrice)]
    fn get_price(&self, token: EgldOrEsdtTokenIdentifier) -> TimestampedPrice<Self::Api> {
        self.require_price(&token)
    }

    #[view(getFeeders)]
    fn get_feeders(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for feeder in self.feeders().iter() {
            result.push(feeder);
        }

        result
    }
}
