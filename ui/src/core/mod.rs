pub mod format;
pub mod platform;
