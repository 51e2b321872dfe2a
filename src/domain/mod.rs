pub mod entities;
pub mod errors;
pub mod input_sanitization;
pub mod value_objects;
