pub mod config;
pub mod detail;
pub mod filters;
pub mod models;
pub mod pipeline;
pub mod scoring;
pub mod search;
pub mod terminal;
pub mod utils;
pub mod writer;

pub use detail::{BrowserPage, DetailEnricher, DetailPage, EnricherConfig};
pub use models::{CandidateOffer, Offer, Preferences, ScoredOffer};
pub use pipeline::CrawlPipeline;
pub use scoring::score_offer;
pub use search::{ApiSearchClient, OfferSource};
pub use writer::export_filtered;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
