/// Length of a rendered document identifier
pub const DOCUMENT_ID_LEN: usize = 24;

pub const IMAGE_EXTENSIONS: [&str; 3] = [".png", ".jpg", ".jpeg"];
pub const AUDIO_EXTENSIONS: [&str; 1] = [".mp3"];

/// Syntax checks run before a value crosses into the store
pub struct Validator;

impl Validator {
    /// True iff `input` is exactly 24 hexadecimal characters.
    ///
    /// Only syntax is checked; the document may not exist.
    pub fn is_valid_document_id(input: &str) -> bool {
        input.len() == DOCUMENT_ID_LEN && input.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Image gate: `.png`, `.jpg` or `.jpeg`, any case
    pub fn is_valid_image_file(filename: Option<&str>) -> bool {
        Self::has_allowed_extension(filename, &IMAGE_EXTENSIONS)
    }

    /// Audio gate: `.mp3`, any case
    pub fn is_valid_audio_file(filename: Option<&str>) -> bool {
        Self::has_allowed_extension(filename, &AUDIO_EXTENSIONS)
    }

    fn has_allowed_extension(filename: Option<&str>, allowed: &[&str]) -> bool {
        match filename {
            Some(name) if !name.is_empty() => {
                let lower = name.to_lowercase();
                allowed.iter().any(|ext| lower.ends_with(ext))
            }
            _ => false,
        }
    }
}
