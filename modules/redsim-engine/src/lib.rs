pub mod audit;
pub mod builder;
pub mod catalog;
pub mod classifier;
pub mod composer;
pub mod reproject;
pub mod sampler;

pub use audit::{audit, AuditReport};
pub use builder::{BatchStats, CorpusBuilder};
pub use reproject::{reproject_users, ReprojectStats};
pub use sampler::{colombia_sampler, Anchor, AnchorTable, GeoSampler};
