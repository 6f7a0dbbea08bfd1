mod presenter;

pub use presenter::{
    FAREWELL, RESPONSE_LABEL, USER_PROMPT, write_farewell, write_guidance, write_history_saved,
    write_reply, write_service_error,
};

use console::style;

pub fn present_error(error: anyhow::Error) {
    let error_text = style("ERROR:").red().bold();
    eprintln!("\n{error_text} {error:#}");
}
