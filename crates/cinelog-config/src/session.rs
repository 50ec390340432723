use anyhow::Result;
use cinelog_models::SessionIdentity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

const TOKEN_KEY: &str = "auth_token";
const MEMBER_ID_KEY: &str = "member_id";

#[derive(Debug, Serialize, Deserialize, Default)]
struct SessionData {
    #[serde(flatten)]
    data: HashMap<String, String>,
}

/// Persisted session state: the bearer token and member id, written at
/// login and cleared at logout. Absent keys read as None, never an error.
/// There is no expiry check; a stale token is only discovered when a
/// gated call is rejected.
pub struct SessionStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            values: HashMap::new(),
        }
    }

    pub fn load(&mut self) -> Result<()> {
        if self.path.exists() {
            let content = std::fs::read_to_string(&self.path)?;
            let data: SessionData = toml::from_str(&content)?;
            self.values = data.data;
        }
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = SessionData {
            data: self.values.clone(),
        };
        let content = toml::to_string_pretty(&data)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn set_session(&mut self, token: String, member_id: String) {
        self.values.insert(TOKEN_KEY.to_string(), token);
        self.values.insert(MEMBER_ID_KEY.to_string(), member_id);
    }

    pub fn token(&self) -> Option<&String> {
        self.values.get(TOKEN_KEY)
    }

    pub fn member_id(&self) -> Option<&String> {
        self.values.get(MEMBER_ID_KEY)
    }

    /// Some only when both the token and the member id are present.
    pub fn identity(&self) -> Option<SessionIdentity> {
        match (self.token(), self.member_id()) {
            (Some(token), Some(member_id)) => {
                Some(SessionIdentity::new(token.clone(), member_id.clone()))
            }
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.values.remove(TOKEN_KEY);
        self.values.remove(MEMBER_ID_KEY);
    }
}
