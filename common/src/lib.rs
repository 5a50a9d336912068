pub mod config;
pub mod errors;
pub mod models;
pub mod util;

pub type UserId = u64;
