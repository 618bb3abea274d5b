//! Provision a product index on Elasticsearch and seed it with generated documents.
//!
//! The seeding routine in [`seeder`] works against any [`SearchStore`]; the
//! binary hands it an [`EsClient`] built from configuration.

pub mod catalog;
pub mod clock;
pub mod conf;
pub mod errors;
pub mod es_client;
pub mod generator;
pub mod loader;
pub mod messages;
pub mod models;
pub mod provisioner;
pub mod schema;
pub mod seeder;
pub mod store;

pub use catalog::ValuePools;
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::SeedError;
pub use es_client::EsClient;
pub use loader::{InsertReport, ItemOutcome};
pub use models::product::ProductDocument;
pub use provisioner::IndexStatus;
pub use schema::{FieldType, IndexSchema};
pub use seeder::{SeedOutcome, SeedPlan};
pub use store::SearchStore;
