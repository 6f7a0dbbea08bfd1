use crate::chat::{ConsoleInput, start_chat};
use anyhow::Result;
use friend_core::config::Config;
use friend_core::get_completion_model;
use friend_core::session::Session;
use std::io;
use tracing::info;

pub async fn execute(config: Config) -> Result<()> {
    info!(model = %config.model.name, "Starting chat");

    let model = get_completion_model(&config.model);
    let session = Session::new(model, config.settings.clone());
    let mut input = ConsoleInput::new()?;

    start_chat(session, &mut input, &mut io::stdout(), &config.history_path).await?;
    Ok(())
}
