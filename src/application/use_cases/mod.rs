mod delete_asset;
mod delete_score;
mod get_asset;
mod get_score;
mod list_scores;
mod record_score;
mod replace_asset;
mod update_score;
mod upload_asset;

pub use delete_asset::DeleteAssetUseCase;
pub use delete_score::DeleteScoreUseCase;
pub use get_asset::GetAssetUseCase;
pub use get_score::GetScoreUseCase;
pub use list_scores::ListScoresUseCase;
pub use record_score::RecordScoreUseCase;
pub use replace_asset::ReplaceAssetUseCase;
pub use update_score::UpdateScoreUseCase;
pub use upload_asset::UploadAssetUseCase;
