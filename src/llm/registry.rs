// src/llm/registry.rs

//! Lazily constructed, memoized provider clients keyed by short name.

// dependencies
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use tracing::debug;

use super::client::LlmClient;
use super::providers::{ClaudeClient, GptClient};
use crate::errors::{Error, Result};

/// Keys understood by [`ClientRegistry::get`].
pub const SUPPORTED_CLIENTS: [&str; 2] = ["gpt", "claude"];

/// Memoizing client registry.
///
/// The first lookup of a key constructs the client with its default model;
/// later lookups return the same `Arc`.
#[derive(Default)]
pub struct ClientRegistry {
    clients: DashMap<String, Arc<dyn LlmClient>>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry shared by [`get_client`].
    pub fn global() -> &'static ClientRegistry {
        static GLOBAL: OnceLock<ClientRegistry> = OnceLock::new();
        GLOBAL.get_or_init(ClientRegistry::new)
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn LlmClient>> {
        if let Some(client) = self.clients.get(name) {
            return Ok(Arc::clone(client.value()));
        }

        let client: Arc<dyn LlmClient> = match name {
            "gpt" => Arc::new(GptClient::default()),
            "claude" => Arc::new(ClaudeClient::default()),
            _ => {
                return Err(Error::UnknownClient {
                    name: name.to_string(),
                });
            }
        };
        debug!(client = name, provider = client.provider_name(), "Registering client");

        // a concurrent lookup may have won the race; keep whichever landed first
        let entry = self.clients.entry(name.to_string()).or_insert(client);
        Ok(Arc::clone(entry.value()))
    }

    /// Number of clients constructed so far.
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

/// Look up a client in the process-wide registry.
pub fn get_client(name: &str) -> Result<Arc<dyn LlmClient>> {
    ClientRegistry::global().get(name)
}
