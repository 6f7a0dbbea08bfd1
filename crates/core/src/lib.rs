mod assets;
mod provider;

pub mod completion;
pub mod config;
pub mod history;
pub mod model;
pub mod session;

pub use crate::assets::get_data_dir;
pub use crate::provider::{AzureChatModel, get_completion_model};
