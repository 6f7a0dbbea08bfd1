use std::fmt;

/// Secret used to authenticate against the service.
///
/// `Debug` never prints the value; use [`ApiKey::expose`] where the raw key is
/// needed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// Connection details for an Azure OpenAI chat deployment.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    /// Model identifier, also the deployment name.
    pub name: String,
    pub endpoint: String,
    pub api_key: ApiKey,
    pub api_version: String,
}
