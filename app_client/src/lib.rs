pub mod errors;
pub mod forms;
pub mod gateway;
pub mod matcher;
pub mod session;

pub use errors::ClientError;
pub use gateway::ChatGateway;
pub use session::Session;
