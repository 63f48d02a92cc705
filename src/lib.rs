pub mod cli;
pub mod config;
pub mod deadline;
pub mod error;
pub mod models;
pub mod store;
pub mod validate;

pub use config::Config;
pub use store::TaskStore;
