mod config;
mod convert;
mod error;
mod provider;

pub use provider::AwsProvider;
