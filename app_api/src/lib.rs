pub mod handlers;
pub mod result;
