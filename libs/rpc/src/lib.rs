//! Protobuf messages and tonic stubs generated from `proto/` with
//! `buf generate`. Do not edit the files under `src/generated` by hand.

pub mod product {
    include!("generated/product/product.rs");
}
