//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, SourceEvent, run_tui};
