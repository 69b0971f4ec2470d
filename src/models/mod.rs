pub mod common;
pub mod params;
pub mod requests;
pub mod responses;
pub mod transactions;
pub mod webhooks;
