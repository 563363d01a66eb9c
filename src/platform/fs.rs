// Platform-specific filesystem helpers

use std::ffi::OsStr;
use std::fs::Metadata;

/// Dot-prefixed names (`.DS_Store`, `._track.mp3`, ...)
pub fn is_dot_name(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

#[cfg(windows)]
pub fn has_hidden_attribute(metadata: &Metadata) -> bool {
    use std::os::windows::fs::MetadataExt;
    const FILE_ATTRIBUTE_HIDDEN: u32 = 2;

    (metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN) != 0
}

#[cfg(not(windows))]
pub fn has_hidden_attribute(_metadata: &Metadata) -> bool {
    false
}

/// A file the sync never copies
pub fn is_hidden(name: &OsStr, metadata: &Metadata) -> bool {
    is_dot_name(name) || has_hidden_attribute(metadata)
}
