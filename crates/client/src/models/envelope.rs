use serde::Deserialize;

/// `{ "data": ..., "metadata": { ... } }` wrapper shared by the API endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub metadata: Metadata,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Metadata {
    #[allow(dead_code)]
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[allow(dead_code)]
    #[serde(default)]
    pub num_cryptocurrencies: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Metadata {
    /// The embedded error message, if the API set a non-empty one.
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .map(str::trim)
            .filter(|msg| !msg.is_empty())
    }
}
