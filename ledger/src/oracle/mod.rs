multiversx_sc::imports!();

use common_proxies::proxy_value_oracle;

use crate::storage;

#[multiversx_sc::module]
pub trait OracleModule: storage::Storage {
    /// Value of `quantity` units of `token`, expressed in loan token units.
    ///
    /// Nothing is worth nothing, so the oracle is only queried for non-zero quantities.
    fn get_value(
        &self,
        token: &EgldOrEsdtTokenIdentifier<Self::Api>,
        quantity: &BigUint<Self::Api>,
    ) -> BigUint<Self::Api> {
        if quantity == &BigUint::zero() {
            return BigUint::zero();
        }

        let oracle_address = self.value_oracle_address().get();
        self.tx()
            .to(&oracle_address)
            .typed(proxy_value_oracle::ValueOracleProxy)
            .get_value(token, quantity)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn get_collateral_value(&self, collateral_amount: &BigUint<Self::Api>) -> BigUint<Self::Api> {
        let collateral_token = self.collateral_token().get();
        self.get_value(&collateral_token, collateral_amount)
    }

    fn get_debt_value(&self, debt_amount: &BigUint<Self::Api>) -> BigUint<Self::Api> {
        let loan_token = self.loan_token().get();
        self.get_value(&loan_token, debt_amount)
    }
}
