multiversx_sc::imports!();

use common_structs::TimestampedPrice;

#[multiversx_sc::module]
pub trait StorageModule {
    #[storage_mapper("feeders")]
    fn feeders(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("prices")]
    fn prices(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<TimestampedPrice<Self::Api>>;
}
