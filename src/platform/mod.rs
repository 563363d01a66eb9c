// Platform-specific code module

pub mod fs;

pub use fs::{has_hidden_attribute, is_dot_name, is_hidden};
