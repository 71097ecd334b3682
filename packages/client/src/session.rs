//! Local session store.
//!
//! Tokens and identifiers are kept in a JSON file. Logging in saves the
//! file, logging out removes it, and a session is "logged in" while the file exists.

use std::{fs, path::PathBuf};

use daily_memo_server::infrastructure::dto::http::AuthResponse;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

const APP_DIR: &str = "daily-memo";
const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    /// Unix millis
    pub access_token_expired_at: i64,
    pub refresh_token: String,
    /// Unix millis
    pub refresh_token_expired_at: i64,
    pub user_id: u64,
    pub account_id: String,
    pub nickname: String,
    pub default_room_id: Option<u64>,
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Session {
            access_token: response.access_token,
            access_token_expired_at: response.access_token_expired_at,
            refresh_token: response.refresh_token,
            refresh_token_expired_at: response.refresh_token_expired_at,
            user_id: response.user_id,
            account_id: response.account_id,
            nickname: response.nickname,
            default_room_id: response.default_room_id,
        }
    }
}

impl Session {
    pub fn is_access_token_expired(&self, now_millis: i64) -> bool {
        self.access_token_expired_at <= now_millis
    }
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `<config dir>/daily-memo/session.json`
    pub fn default_path() -> Result<PathBuf, ClientError> {
        let config_dir = dirs::config_dir().ok_or(ClientError::ConfigDirNotFound)?;
        Ok(config_dir.join(APP_DIR).join(SESSION_FILE))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn load(&self) -> Result<Option<Session>, ClientError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(|source| ClientError::Storage {
            path: self.path.clone(),
            source,
        })?;
        let session = serde_json::from_str(&content).map_err(|e| ClientError::SessionFormat {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(Some(session))
    }

    /// Like [`load`](Self::load) but a missing session is an error.
    pub fn require(&self) -> Result<Session, ClientError> {
        self.load()?.ok_or(ClientError::NotLoggedIn)
    }

    pub fn save(&self, session: &Session) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ClientError::Storage {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content =
            serde_json::to_string_pretty(session).map_err(|e| ClientError::SessionFormat {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        fs::write(&self.path, content).map_err(|source| ClientError::Storage {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    /// Remove the session file. Clearing an absent session is not an error.
    pub fn clear(&self) -> Result<(), ClientError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(ClientError::Storage {
                path: self.path.clone(),
                source,
            }),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.load(), Ok(Some(_)))
    }
}
