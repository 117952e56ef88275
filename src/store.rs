//! Token persistence.
//!
//! The token manager never touches the filesystem directly; it goes through
//! a [`TokenStore`] so the backing storage can be swapped out.

use crate::error::Result;
use crate::token::Token;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Durable storage for the app access token.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Load the stored token. `Ok(None)` means nothing was stored yet.
    async fn load(&self) -> Result<Option<Token>>;

    /// Replace the stored token wholesale.
    async fn save(&self, token: &Token) -> Result<()>;
}

/// Stores the token as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileTokenStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<Token>> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if data.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&data)?))
    }

    async fn save(&self, token: &Token) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let data = serde_json::to_string_pretty(token)?;
        tokio::fs::write(&self.path, data).await?;
        Ok(())
    }
}

/// Keeps the token in memory only.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<Token>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a token already stored
    pub fn with_token(token: Token) -> Self {
        MemoryTokenStore {
            token: Mutex::new(Some(token)),
        }
    }

    /// Current stored token
    pub fn get(&self) -> Option<Token> {
        self.token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> Result<Option<Token>> {
        Ok(self.get())
    }

    async fn save(&self, token: &Token) -> Result<()> {
        *self
            .token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(token.clone());
        Ok(())
    }
}
