use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::input_sanitization::Validator;

/// Category of binary asset, each with its own collection and extension allow-list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Sprite,
    Audio,
}

impl AssetKind {
    /// Lower-case label used in messages and error details
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Sprite => "sprite",
            AssetKind::Audio => "audio",
        }
    }

    /// Name of the backing collection
    pub fn collection(&self) -> &'static str {
        match self {
            AssetKind::Sprite => "sprites",
            AssetKind::Audio => "audio",
        }
    }

    /// Apply the file-type gate for this category
    pub fn accepts(&self, filename: Option<&str>) -> bool {
        match self {
            AssetKind::Sprite => Validator::is_valid_image_file(filename),
            AssetKind::Audio => Validator::is_valid_audio_file(filename),
        }
    }

    pub fn rejection_message(&self) -> &'static str {
        match self {
            AssetKind::Sprite => "Only PNG and JPG/JPEG files are allowed",
            AssetKind::Audio => "Only MP3 files are allowed",
        }
    }

    pub fn uploaded_message(&self) -> &'static str {
        match self {
            AssetKind::Sprite => "Sprite uploaded",
            AssetKind::Audio => "Audio file uploaded",
        }
    }

    pub fn updated_message(&self) -> &'static str {
        match self {
            AssetKind::Sprite => "Sprite updated",
            AssetKind::Audio => "Audio updated",
        }
    }

    pub fn deleted_message(&self) -> &'static str {
        match self {
            AssetKind::Sprite => "Sprite deleted",
            AssetKind::Audio => "Audio deleted",
        }
    }

    pub fn not_found_message(&self) -> &'static str {
        match self {
            AssetKind::Sprite => "Sprite not found",
            AssetKind::Audio => "Audio not found",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
