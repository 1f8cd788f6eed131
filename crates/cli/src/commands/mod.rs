//! CLI Commands

pub mod hire;
pub mod init;
pub mod jobs;

pub use hire::HireCommand;
pub use init::InitCommand;
pub use jobs::JobsCommand;
