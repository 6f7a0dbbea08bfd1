// Interactive session loop
mod input;
mod repl;

pub use input::{ConsoleInput, LineReader, PlainInput};
pub use repl::{converse, start_chat};
