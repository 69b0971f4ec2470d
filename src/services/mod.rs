pub mod crypto;
pub mod envelope;
pub mod request_builder;
pub mod transport;
