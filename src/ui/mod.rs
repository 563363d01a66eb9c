// UI and formatting module

pub mod formatters;
pub mod progress;
pub mod prompts;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_size, percentage, plural};
pub use progress::{show_progress_bar, ConsoleObserver};
pub use prompts::{
    error, error_hint, info, read_exact_confirmation, select_mode, success, warn, StdinConfirmer,
};
