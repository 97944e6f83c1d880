//! Session storage with automatic serialization.

use crate::StoreError;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, RwLock};

/// Session store generic over the payload type `T`.
///
/// Payloads are kept JSON-serialized, as a key-value backend would hold
/// them, and deserialized on access.
///
/// # Example
///
/// ```rust,ignore
/// let sessions = SessionStore::<ShopSession>::new();
/// let data = sessions.get_or_create(session_id.as_str())?;
///
/// sessions.update(session_id.as_str(), |s| {
///     s.cart.add(product_id, 1);
/// })?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionStore<T> {
    entries: Arc<RwLock<HashMap<String, String>>>,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> SessionStore<T>
where
    T: Serialize + DeserializeOwned + Default + Clone,
{
    /// Create an empty session store.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            _phantom: PhantomData,
        }
    }

    /// Get session data, or create a default session if it doesn't exist.
    pub fn get_or_create(&self, id: &str) -> Result<T, StoreError> {
        if let Some(data) = self.get(id)? {
            return Ok(data);
        }
        let data = T::default();
        self.set(id, &data)?;
        Ok(data)
    }

    /// Get session data if it exists.
    pub fn get(&self, id: &str) -> Result<Option<T>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        match entries.get(id) {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    /// Set session data (unconditional write).
    pub fn set(&self, id: &str, data: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(data)?;
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.insert(id.to_string(), raw);
        Ok(())
    }

    /// Update session data with a closure, creating a default session if
    /// none exists. Returns the data after the write.
    pub fn update<F>(&self, id: &str, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut T),
    {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        let mut data: T = match entries.get(id) {
            Some(raw) => serde_json::from_str(raw)?,
            None => T::default(),
        };
        f(&mut data);
        entries.insert(id.to_string(), serde_json::to_string(&data)?);
        Ok(data)
    }

    /// Delete a session.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.remove(id);
        Ok(())
    }

    /// Check if a session exists.
    pub fn exists(&self, id: &str) -> Result<bool, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.contains_key(id))
    }
}
