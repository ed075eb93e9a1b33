//! CLI command handlers
//!
//! The interactive menu plus the one-shot commands, bridging the clap
//! argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod menu;
pub mod prompt;

pub use expense::{handle_history_command, handle_list_command, ListArgs};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use menu::Menu;
pub use prompt::Console;
