pub mod client;
pub mod command;
pub mod executor;
pub mod pipeline;
pub mod status;

pub use client::CloudClient;
pub use command::CommandError;
pub use executor::{CommandExecutor, RealExecutor};
pub use pipeline::{DeployOutcome, PipelineError};
pub use status::{FunctionStatus, StatusError};
