pub mod caller;
pub mod cookie;
