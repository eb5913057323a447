pub mod month;
pub mod pattern;
pub mod settings;
pub mod status;
pub mod summary;
