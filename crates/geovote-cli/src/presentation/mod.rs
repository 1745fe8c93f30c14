pub mod console;
pub mod text;
pub mod tui;

pub use console::ConsoleRenderer;
