//! Client-side Role
//!
//! Read from short-lived session state. This only gates the UI; anyone can
//! set the flag from the browser console, so real authorization needs a
//! server-side collaborator.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Guest,
    Admin,
}

impl Role {
    /// Interpret the raw session flag against the privileged marker
    pub fn from_flag(flag: Option<&str>, admin_marker: &str) -> Self {
        match flag {
            Some(value) if value == admin_marker => Role::Admin,
            _ => Role::Guest,
        }
    }

    pub fn is_privileged(&self) -> bool {
        matches!(self, Role::Admin)
    }
}
