pub mod adapters;
pub mod domain;
pub mod infra;
pub mod services;
