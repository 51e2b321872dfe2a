pub mod assets;
pub mod health;
pub mod multipart;
pub mod scores;

pub use assets::{
    delete_audio_handler, delete_sprite_handler, get_audio_handler, get_sprite_handler,
    update_audio_handler, update_sprite_handler, upload_audio_handler, upload_sprite_handler,
};
pub use health::{health_handler, readiness_handler, root_handler};
pub use scores::{
    delete_score_handler, get_score_handler, list_scores_handler, record_score_handler,
    update_score_handler,
};
