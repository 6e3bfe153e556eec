fn main() {
    multiversx_sc_meta_lib::cli_main::<value_oracle::AbiProvider>();
}
