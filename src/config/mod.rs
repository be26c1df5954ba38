#[allow(clippy::module_inception)]
mod config;
mod options;

pub use config::Config;
pub use options::ContentOptions;
