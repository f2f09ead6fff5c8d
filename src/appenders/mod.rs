//! Appender implementations
//!
//! Console and file output share the line layout from
//! [`LineFormatter`](crate::core::LineFormatter).

pub mod console;
pub mod file;

pub use console::ConsoleAppender;
pub use file::FileAppender;

pub use crate::core::Appender;
