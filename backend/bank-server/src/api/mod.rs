pub mod error;
pub mod extractors;
pub mod gateway;
pub mod identity;
