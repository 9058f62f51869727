pub mod checkout;
pub mod endpoint;
pub mod error;
pub mod nav;
pub mod store;
