//! Provider selection and configuration types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Provider Types
// ============================================================================

/// Queue providers supported by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderType {
    /// Amazon Simple Queue Service
    AwsSqs,
    /// In-memory provider for local runs and testing
    InMemory,
}

impl ProviderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::AwsSqs => "aws-sqs",
            ProviderType::InMemory => "in-memory",
        }
    }
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Configuration for a queue provider instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "kebab-case")]
pub enum ProviderConfig {
    AwsSqs(AwsSqsConfig),
    InMemory(InMemoryConfig),
}

impl ProviderConfig {
    pub fn provider_type(&self) -> ProviderType {
        match self {
            ProviderConfig::AwsSqs(_) => ProviderType::AwsSqs,
            ProviderConfig::InMemory(_) => ProviderType::InMemory,
        }
    }
}

/// AWS SQS provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwsSqsConfig {
    /// AWS region hosting the queues
    #[serde(default = "default_region")]
    pub region: String,
    /// Custom endpoint, used for local SQS-compatible services
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
    /// Static access key id. When unset the ambient credential chain is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    /// Static secret access key, paired with `access_key_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,
}

impl Default for AwsSqsConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            endpoint_url: None,
            access_key_id: None,
            secret_access_key: None,
        }
    }
}

fn default_region() -> String {
    "us-east-1".to_string()
}

/// In-memory provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InMemoryConfig {
    /// Maximum accepted message body size. Mirrors the SQS limit.
    #[serde(default = "default_max_message_size")]
    pub max_message_size_bytes: usize,
}

impl Default for InMemoryConfig {
    fn default() -> Self {
        Self {
            max_message_size_bytes: default_max_message_size(),
        }
    }
}

fn default_max_message_size() -> usize {
    256 * 1024
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
