// Copyright 2026 The Matrix.org Foundation C.I.C.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Saving a document to, and restoring it from, a key-value store.
//!
//! The whole document is written as one JSON [`RawContent`] value under a
//! single key. Saving overwrites whatever was there before.

mod memory_store;

pub use memory_store::MemoryStore;

cfg_if::cfg_if! {
    if #[cfg(feature = "js")] {
        mod local_storage;
        pub use local_storage::LocalStorage;
    }
}

use crate::{RawContent, RichTextDocument, SnapshotError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error("storage error: {0}")]
    Backend(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("stored content is unusable: {0}")]
    Snapshot(#[from] SnapshotError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A string-to-string store with the shape of the web storage API.
///
/// All methods take `&self`; implementations use interior mutability.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// The result of [`PersistenceBridge::restore`].
#[derive(Debug)]
pub enum LoadOutcome<D> {
    /// Nothing was stored; the document is empty.
    Empty(D),
    /// The stored document.
    Restored(D),
    /// Something was stored but could not be used; the document is empty.
    Recovered { document: D, error: PersistenceError },
}

impl<D> LoadOutcome<D> {
    pub fn document(&self) -> &D {
        match self {
            Self::Empty(document)
            | Self::Restored(document)
            | Self::Recovered { document, .. } => document,
        }
    }

    pub fn into_document(self) -> D {
        match self {
            Self::Empty(document)
            | Self::Restored(document)
            | Self::Recovered { document, .. } => document,
        }
    }
}

/// Saves and loads documents under one fixed key of a store.
pub struct PersistenceBridge<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceBridge<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write `doc` to the store, replacing any previous snapshot.
    pub fn save<D>(&self, doc: &D) -> Result<(), PersistenceError>
    where
        D: RichTextDocument + ?Sized,
    {
        let json = doc.to_snapshot().to_json()?;
        self.store.set_item(&self.key, &json)?;
        log::info!("saved {} bytes under {:?}", json.len(), self.key);
        Ok(())
    }

    /// Read the stored document. `Ok(None)` when nothing or an empty
    /// string is stored; any other value that cannot be decoded is an
    /// error.
    pub fn load<D: RichTextDocument>(
        &self,
    ) -> Result<Option<D>, PersistenceError> {
        let Some(json) = self.store.get_item(&self.key)? else {
            return Ok(None);
        };
        if json.is_empty() {
            return Ok(None);
        }
        let raw = RawContent::from_json(&json)?;
        Ok(Some(D::from_snapshot(raw)?))
    }

    /// Like [`load`](Self::load), but never fails: when the stored value
    /// is unusable an empty document is returned together with the error.
    pub fn restore<D: RichTextDocument + Default>(&self) -> LoadOutcome<D> {
        match self.load() {
            Ok(Some(document)) => {
                log::info!("restored document from {:?}", self.key);
                LoadOutcome::Restored(document)
            }
            Ok(None) => LoadOutcome::Empty(D::default()),
            Err(error) => {
                log::warn!(
                    "could not restore document from {:?}, starting empty: \
                     {error}",
                    self.key
                );
                LoadOutcome::Recovered {
                    document: D::default(),
                    error,
                }
            }
        }
    }

    /// Forget the stored document.
    pub fn clear(&self) -> Result<(), PersistenceError> {
        self.store.remove_item(&self.key)?;
        Ok(())
    }
}
