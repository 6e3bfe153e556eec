#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod events;
pub mod storage;
pub mod utils;
pub mod views;

use common_errors::ERROR_INVALID_PRICE;
use common_structs::TimestampedPrice;

#[multiversx_sc::contract]
pub trait ValueOracle:
    storage::StorageModule
    + events::EventsModule
    + utils::UtilsModule
    + views::ViewsModule
    + admin::AdminModule
{
    /// Records the price of one raw unit of `token`, scaled by `PRICE_PRECISION`.
    /// Callable by the owner or a registered feeder. Overwrites the previous price.
    #[endpoint(submitPrice)]
    fn submit_price(&self, token: EgldOrEsdtTokenIdentifier, price: BigUint) {
        self.require_is_feeder_or_owner();
        require!(price > BigUint::zero(), ERROR_INVALID_PRICE);

        let feed = TimestampedPrice {
            price,
            timestamp: self.blockchain().get_block_timestamp(),
        };

        let caller = self.blockchain().get_caller();
        self.price_updated_event(&token, &feed.price, feed.timestamp, &caller);
        self.prices(&token).set(feed);
    }
}
