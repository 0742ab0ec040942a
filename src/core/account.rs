//! Account registry and session management

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{SESSION_KEY, USERS_KEY};
use crate::error::{HfError, Result};
use crate::storage::{KvStore, KvStoreExt};

/// One registered account. The phone number is the identity; the password
/// is compared by exact value (toy auth, by scope).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub phone: String,
    pub password: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// What a successful `authenticate` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Known phone, matching password.
    LoggedIn,
    /// Unknown phone: a credential record was registered on the spot.
    AccountCreated,
}

impl LoginOutcome {
    pub const fn message(self) -> &'static str {
        match self {
            Self::LoggedIn => "Login successful!",
            Self::AccountCreated => "Account created successfully!",
        }
    }
}

/// Registry of known users plus the identity of the active session.
///
/// The session marker and the registry both live in the injected store and
/// survive restarts; the session is restored at `open`. Format validation
/// of phone/password is the caller's job, this layer only matches
/// credentials.
pub struct AccountStore {
    store: Arc<dyn KvStore>,
    session: Option<String>,
}

impl AccountStore {
    /// Open the account store, restoring any persisted session.
    pub fn open(store: Arc<dyn KvStore>) -> Result<Self> {
        let session = store.get(SESSION_KEY)?;
        if let Some(phone) = &session {
            debug!(phone, "restored session");
        }
        Ok(Self { store, session })
    }

    /// Phone number of the logged-in user, if any.
    pub fn current_user(&self) -> Option<&str> {
        self.session.as_deref()
    }

    /// Log in, registering the account implicitly if the phone is unseen.
    ///
    /// A wrong password for a known phone returns
    /// [`HfError::IncorrectPassword`] and leaves the session untouched.
    /// Registry and session are persisted before returning on every
    /// success path.
    pub fn authenticate(&mut self, phone: &str, password: &str) -> Result<LoginOutcome> {
        let mut users = self.load_registry()?;

        let outcome = match users.iter().find(|u| u.phone == phone) {
            Some(user) if user.password == password => LoginOutcome::LoggedIn,
            Some(_) => return Err(HfError::IncorrectPassword),
            None => {
                users.push(Credential {
                    phone: phone.to_string(),
                    password: password.to_string(),
                    created_at: Utc::now(),
                });
                self.store.put_json(USERS_KEY, &users)?;
                debug!(phone, "registered new account");
                LoginOutcome::AccountCreated
            }
        };

        self.store.put(SESSION_KEY, phone)?;
        self.session = Some(phone.to_string());
        Ok(outcome)
    }

    /// Clear the session and remove the persisted marker. Calling this
    /// while logged out is a no-op.
    pub fn end_session(&mut self) -> Result<()> {
        self.session = None;
        self.store.delete(SESSION_KEY)?;
        Ok(())
    }

    /// Registered accounts, in registration order.
    pub fn registry(&self) -> Result<Vec<Credential>> {
        self.load_registry()
    }

    // Corrupt registry JSON degrades to an empty registry rather than
    // taking the session down with it. Real storage errors still propagate.
    fn load_registry(&self) -> Result<Vec<Credential>> {
        match self.store.get_json::<Vec<Credential>>(USERS_KEY) {
            Ok(users) => Ok(users.unwrap_or_default()),
            Err(HfError::Serialization(e)) => {
                warn!(error = %e, "corrupt user registry, starting empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}
