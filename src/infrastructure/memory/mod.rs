//! Process-local collections, selected with a `memory://` connection string.
//!
//! Contents are lost on restart.

mod asset_store;
mod score_store;

pub use asset_store::InMemoryAssetRepository;
pub use score_store::InMemoryScoreRepository;
