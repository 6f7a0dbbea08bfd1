mod azure;
mod openai_types;
#[cfg(test)]
pub(crate) mod test_provider;

pub use azure::AzureChatModel;

use crate::completion::ChatCompletion;
use crate::model::ModelConfig;
use tracing::instrument;

/// Builds the chat completion service for `model_config`.
#[instrument(skip(model_config), fields(model = %model_config.name))]
pub fn get_completion_model(model_config: &ModelConfig) -> Box<dyn ChatCompletion> {
    Box::new(AzureChatModel::new(model_config))
}
