pub mod add;
pub mod cleanup;
pub mod config;
pub mod del;
pub mod dial;
pub mod edit;
pub mod logic;
