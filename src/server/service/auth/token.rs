//! In-memory store of expiring random tokens.
//!
//! Backs both the bearer tokens issued at login and the one-time admin registration code
//! generated at startup. Entries live only in process memory: a restart logs everyone out.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tokio::sync::RwLock;

/// Length of generated tokens.
const TOKEN_LENGTH: usize = 32;

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> Entry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Expiring token → value map.
///
/// Clones share the same underlying map.
pub struct TokenCache<V> {
    entries: Arc<RwLock<HashMap<String, Entry<V>>>>,
}

impl<V> Clone for TokenCache<V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<V: Clone> TokenCache<V> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Stores `value` under a freshly generated token.
    ///
    /// # Arguments
    /// - `value` - Value the token resolves to
    /// - `ttl` - Lifetime of the token
    ///
    /// # Returns
    /// - `String` - The generated 32-character alphanumeric token
    pub async fn issue(&self, value: V, ttl: Duration) -> String {
        let token = generate_random_token();
        let entry = Entry {
            value,
            expires_at: Instant::now() + ttl,
        };
        self.entries.write().await.insert(token.clone(), entry);
        token
    }

    /// Resolves a token without consuming it.
    ///
    /// An expired entry is removed on access.
    ///
    /// # Returns
    /// - `Some(V)` - Token known and not expired
    /// - `None` - Unknown or expired token
    pub async fn get(&self, token: &str) -> Option<V> {
        let mut entries = self.entries.write().await;
        let now = Instant::now();

        match entries.get(token) {
            Some(entry) if entry.is_expired(now) => {
                entries.remove(token);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    /// Resolves and removes a token so it can be used only once.
    ///
    /// # Returns
    /// - `Some(V)` - Token was valid and is now consumed
    /// - `None` - Unknown or expired token
    pub async fn take(&self, token: &str) -> Option<V> {
        self.take_with_expiry(token).await.map(|(value, _)| value)
    }

    /// Like [`TokenCache::take`], also returning when the token would have expired so it
    /// can be handed back with [`TokenCache::restore`].
    pub async fn take_with_expiry(&self, token: &str) -> Option<(V, Instant)> {
        let entry = self.entries.write().await.remove(token)?;

        if entry.is_expired(Instant::now()) {
            return None;
        }

        Some((entry.value, entry.expires_at))
    }

    /// Puts a consumed token back with its original expiry.
    pub async fn restore(&self, token: String, value: V, expires_at: Instant) {
        self.entries
            .write()
            .await
            .insert(token, Entry { value, expires_at });
    }

    /// Removes a token.
    ///
    /// # Returns
    /// - `true` - Token existed
    /// - `false` - Token was unknown
    pub async fn revoke(&self, token: &str) -> bool {
        self.entries.write().await.remove(token).is_some()
    }

    /// Drops every expired entry and returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let now = Instant::now();
        let before = entries.len();

        entries.retain(|_, entry| !entry.is_expired(now));

        before - entries.len()
    }
}

impl<V: Clone> Default for TokenCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates a random alphanumeric token using the thread-local CSPRNG.
fn generate_random_token() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
