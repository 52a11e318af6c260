use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::models::{Item, ItemFields};
use crate::persist;

/// Shareable handle to the item collection and its store file
///
/// The whole collection lives in memory and is flushed to disk in full after
/// every mutation. All mutations take the same lock for the whole
/// read-modify-flush sequence, so concurrent writers are serialized and no
/// update is lost.
#[derive(Clone)]
pub struct ItemStore {
    items: Arc<Mutex<Vec<Item>>>,
    path: Arc<PathBuf>,
}

impl ItemStore {
    /// Load the store file at `path` and wrap its contents
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or not a JSON
    /// array of items.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let items = persist::load(&path)?;

        tracing::info!("Loaded {} items from {}", items.len(), path.display());

        Ok(Self {
            items: Arc::new(Mutex::new(items)),
            path: Arc::new(path),
        })
    }

    /// Path to the backing store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of every item in insertion order
    pub async fn list(&self) -> Vec<Item> {
        self.items.lock().await.clone()
    }

    /// Number of items currently held
    pub async fn count(&self) -> usize {
        self.items.lock().await.len()
    }

    /// Whether any item carries `id`
    pub async fn contains(&self, id: i64) -> bool {
        self.items.lock().await.iter().any(|item| item.id == id)
    }

    /// Append `item` and flush
    ///
    /// No uniqueness check is made on `id`.
    pub async fn create(&self, item: Item) -> Result<Item> {
        let mut items = self.items.lock().await;

        let mut next = items.clone();
        next.push(item.clone());
        self.commit(&mut items, next).await?;

        Ok(item)
    }

    /// Replace the first item with `id` by `{id, ...fields}` and flush
    ///
    /// # Returns
    /// * `Ok(Some(item))` - the replacement now stored
    /// * `Ok(None)` - no item has that id; nothing was written
    pub async fn replace(&self, id: i64, fields: ItemFields) -> Result<Option<Item>> {
        let mut items = self.items.lock().await;

        let Some(pos) = items.iter().position(|item| item.id == id) else {
            return Ok(None);
        };

        let item = fields.into_item(id);
        let mut next = items.clone();
        next[pos] = item.clone();
        self.commit(&mut items, next).await?;

        Ok(Some(item))
    }

    /// Remove the first item with `id` and flush
    ///
    /// Returns `false` without writing if no item has that id.
    pub async fn remove(&self, id: i64) -> Result<bool> {
        let mut items = self.items.lock().await;

        let Some(pos) = items.iter().position(|item| item.id == id) else {
            return Ok(false);
        };

        let mut next = items.clone();
        next.remove(pos);
        self.commit(&mut items, next).await?;

        Ok(true)
    }

    // Memory only changes once the file write has succeeded.
    async fn commit(&self, current: &mut Vec<Item>, next: Vec<Item>) -> Result<()> {
        persist::save(self.path(), &next).await?;
        *current = next;
        Ok(())
    }
}
