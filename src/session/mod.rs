//! Current-user session slot.
//!
//! At most one user is current per process. The slot is read synchronously and every
//! change is written through to the store under its own key, separate from the domain
//! collections.

use std::sync::RwLock;

use crate::errors::{GatewayError, Result};
use crate::models::User;
use crate::store::{keys, KvStore};

pub struct Session {
    store: KvStore,
    current: RwLock<Option<User>>,
}

impl Session {
    /// Restore the slot from whatever the store last persisted.
    pub async fn load(store: KvStore) -> Result<Self> {
        let current = match store.get::<User>(keys::CURRENT_USER).await {
            Ok(user) => user,
            // A corrupt record is dropped rather than blocking startup.
            Err(e @ GatewayError::Serialization(_)) => {
                tracing::warn!("Discarding unreadable current-user record: {}", e);
                None
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            store,
            current: RwLock::new(current),
        })
    }

    /// Never fails; a poisoned lock reads as "nobody signed in".
    pub fn current_user(&self) -> Option<User> {
        self.current.read().ok().and_then(|guard| guard.clone())
    }

    pub async fn set(&self, user: &User) -> Result<()> {
        self.store.set(keys::CURRENT_USER, user).await?;
        if let Ok(mut guard) = self.current.write() {
            *guard = Some(user.clone());
        }
        Ok(())
    }

    pub async fn clear(&self) -> Result<()> {
        if let Ok(mut guard) = self.current.write() {
            *guard = None;
        }
        self.store.remove(keys::CURRENT_USER).await
    }
}
