mod config;
mod dataset;
mod server;

pub use config::Config;
pub use dataset::DatasetConfig;
pub use server::ServerConfig;
