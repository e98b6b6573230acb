//! JSON file-backed [`Storage`] implementation.

mod impls;

use std::{io, path::PathBuf};

use derive_more::{Display, Error as StdError};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;
use tracerr::Traced;

use crate::infra::storage::{self, Record};
#[cfg(doc)]
use crate::infra::Storage;

/// JSON file-backed [`Storage`].
///
/// Each collection is a single `<dir>/<key>.json` document, rewritten whole
/// on every mutation. The inner lock serializes writers within this process
/// only: concurrent processes over the same directory are last-write-wins,
/// with no versioning or reconciliation.
#[derive(Debug)]
pub struct Json {
    /// Directory holding the collection documents.
    dir: PathBuf,

    /// Guard serializing mutations within this process.
    lock: RwLock<()>,
}

impl Json {
    /// Creates a new [`Json`] storage over the provided directory.
    ///
    /// The directory is created lazily on the first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            lock: RwLock::new(()),
        }
    }

    /// Returns the document path of the provided storage key.
    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Loads the whole collection of `T`s, seeding (and persisting the seed)
    /// on first read, and falling back to the seed on a corrupt document.
    async fn load<T: Record>(&self) -> Result<Vec<T>, Traced<storage::Error>> {
        self.load_value(T::KEY, T::seed).await
    }

    /// Persists the whole collection of `T`s.
    async fn persist<T: Record>(
        &self,
        items: &[T],
    ) -> Result<(), Traced<storage::Error>> {
        self.persist_value(T::KEY, &items).await
    }

    /// Loads the value stored under the provided `key`, seeding (and
    /// persisting the seed) on first read, and falling back to the seed on a
    /// corrupt document.
    async fn load_value<T>(
        &self,
        key: &'static str,
        seed: impl FnOnce() -> T,
    ) -> Result<T, Traced<storage::Error>>
    where
        T: Serialize + DeserializeOwned,
    {
        match tokio::fs::read(self.path(key)).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(value) => Ok(value),
                Err(e) => {
                    tracing::warn!(
                        key,
                        error = %e,
                        "corrupt persisted collection, \
                         falling back to its seed",
                    );
                    Ok(seed())
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let value = seed();
                self.persist_value(key, &value).await?;
                tracing::info!(key, "seeded collection on first read");
                Ok(value)
            }
            Err(source) => {
                Err(tracerr::new!(storage::Error::from(Error::Io {
                    key,
                    source,
                })))
            }
        }
    }

    /// Persists the value under the provided `key`, rewriting the whole
    /// document.
    async fn persist_value<T: Serialize>(
        &self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Traced<storage::Error>> {
        let bytes = serde_json::to_vec_pretty(value).map_err(|source| {
            tracerr::new!(storage::Error::from(Error::Codec { key, source }))
        })?;

        tokio::fs::create_dir_all(&self.dir).await.map_err(|source| {
            tracerr::new!(storage::Error::from(Error::Io { key, source }))
        })?;
        tokio::fs::write(self.path(key), bytes).await.map_err(|source| {
            tracerr::new!(storage::Error::from(Error::Io { key, source }))
        })?;

        tracing::debug!(key, "collection rewritten");
        Ok(())
    }
}

/// JSON storage [`Error`].
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// Filesystem failure underneath a collection document.
    #[display("filesystem failure on `{key}` collection: {source}")]
    Io {
        /// Storage key of the collection.
        key: &'static str,

        /// Underlying I/O error.
        source: io::Error,
    },

    /// Collection failed to encode.
    #[display("cannot encode `{key}` collection: {source}")]
    Codec {
        /// Storage key of the collection.
        key: &'static str,

        /// Underlying encoding error.
        source: serde_json::Error,
    },
}
