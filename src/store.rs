//! Review Store Client: the visitor's reviews, persisted as one JSON array in
//! a local key-value slot.
use crate::error::StoreError;
use crate::models::review::Review;
use leptos::logging::{log, warn};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

/// Storage key holding the JSON-encoded review array.
pub const REVIEWS_KEY: &str = "reviews";

/// A single persisted string value.
pub trait StorageSlot {
    /// Current value, or None when nothing is stored or the slot is unreachable.
    fn read(&self) -> Option<String>;
    /// Replaces the stored value.
    fn write(&self, value: &str) -> Result<(), StoreError>;
}

/// Slot backed by the browser's `localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorageSlot {
    key: String,
}

impl LocalStorageSlot {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        // wasm-bindgen imports abort on native targets (server rendering)
        if !cfg!(target_arch = "wasm32") {
            return None;
        }
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl Default for LocalStorageSlot {
    fn default() -> Self {
        Self::new(REVIEWS_KEY)
    }
}

impl StorageSlot for LocalStorageSlot {
    fn read(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok().flatten()
    }

    fn write(&self, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage()
            .ok_or_else(|| StoreError::Write("localStorage is not available".to_string()))?;
        storage
            .set_item(&self.key, value)
            .map_err(|err| StoreError::Write(format!("{:?}", err)))
    }
}

/// In-process slot used while rendering on the server and in tests.
/// Clones share the same value.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    value: Rc<RefCell<Option<String>>>,
}

impl MemorySlot {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Rc::new(RefCell::new(Some(value.into()))),
        }
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn write(&self, value: &str) -> Result<(), StoreError> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

/// Ordered collection of reviews kept in a [`StorageSlot`].
#[derive(Debug, Clone)]
pub struct ReviewStore<S> {
    slot: S,
}

impl<S: StorageSlot> ReviewStore<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    /// The stored array as raw records. Anything that is not a JSON array
    /// reads as empty.
    fn records(&self) -> Vec<Value> {
        let Some(raw) = self.slot.read() else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(records) => records,
            Err(err) => {
                warn!("[STORE] Ignoring unreadable stored reviews: {}", err);
                Vec::new()
            }
        }
    }

    /// All stored reviews in insertion order. Records that do not decode as a
    /// review are skipped; the rest still load.
    pub fn load(&self) -> Vec<Review> {
        self.records()
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<Review>(record) {
                Ok(review) => Some(review),
                Err(err) => {
                    warn!("[STORE] Skipping stored review {}: {}", index, err);
                    None
                }
            })
            .collect()
    }

    /// Adds `review` to the end of the collection and rewrites the slot.
    /// Stored records this version cannot decode are written back as they were.
    pub fn append(&self, review: Review) -> Result<(), StoreError> {
        let mut records = self.records();
        records.push(serde_json::to_value(&review)?);
        let encoded = serde_json::to_string(&records)?;
        self.slot.write(&encoded)?;
        log!("[STORE] Saved review {} ({} stored)", review.id, records.len());
        Ok(())
    }
}
