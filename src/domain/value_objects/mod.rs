mod asset_kind;
mod document_id;
mod player_name;

pub use asset_kind::AssetKind;
pub use document_id::DocumentId;
pub use player_name::{PlayerName, PLAYER_NAME_MAX_LEN, PLAYER_NAME_REGEX};
