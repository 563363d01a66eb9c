// Command handlers module
pub mod completions;
pub mod config;
pub mod mirror;
pub mod sync;
pub mod version;

// Re-exports for cleaner imports
pub use mirror::execute as mirror;
pub use sync::execute as sync;
pub use version::execute as version;
