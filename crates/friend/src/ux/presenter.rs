use friend_core::completion::CompletionError;
use friend_core::config::{API_KEY_VAR, ENDPOINT_VAR, MODEL_VAR};
use std::io::{self, Write};
use std::path::Path;

pub const USER_PROMPT: &str = "User > ";
pub const RESPONSE_LABEL: &str = "Imaginary Friend Response: ";
pub const FAREWELL: &str = "Our Imaginary Friend says 'Go Pack Sand'.";

/// Tells the user which environment variables to set.
pub fn write_guidance<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "The '{ENDPOINT_VAR}' and '{API_KEY_VAR}' environment variables must be set"
    )?;
    writeln!(
        out,
        "and the '{MODEL_VAR}' environment variable can be set to the model you want to use."
    )?;
    writeln!(out, "\nPlease set them and try again.")
}

pub fn write_reply<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{RESPONSE_LABEL}{text}")
}

pub fn write_service_error<W: Write>(out: &mut W, error: &CompletionError) -> io::Result<()> {
    writeln!(out, "Error: {error}")
}

pub fn write_farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{FAREWELL}")
}

pub fn write_history_saved<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "Chat history written to '{}'.", path.display())
}
