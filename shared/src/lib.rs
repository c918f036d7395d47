pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod normalize;
pub mod provider;
pub mod repository;

pub use config::Config;
pub use database::get_client;
pub use error::IngestError;
pub use models::{Dividend, DividendHistory, RequestPayload};
pub use normalize::normalize;
pub use provider::AlphaVantageClient;
pub use repository::DividendRepository;
