use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use playshelf_common::{Activity, ActivityDraft, ActivityPatch, PlayshelfError};

use crate::migrate::RawActivity;

/// Flat-file JSON store for the activity collection.
///
/// Every mutation is a full read-modify-write of the backing file. There is
/// no locking or transaction handling: the deployment assumption is a single
/// admin writer.
pub struct ActivityStore {
    path: PathBuf,
}

impl ActivityStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole collection, normalizing legacy tag shapes on the way
    /// in. A missing file is an empty collection, not an error.
    pub fn load(&self) -> Result<Vec<Activity>, PlayshelfError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)
            .map_err(|e| PlayshelfError::Store(format!("read {}: {e}", self.path.display())))?;
        let raw: Vec<RawActivity> = serde_json::from_str(&data)
            .map_err(|e| PlayshelfError::Store(format!("parse {}: {e}", self.path.display())))?;
        Ok(raw.into_iter().map(RawActivity::into_canonical).collect())
    }

    pub fn get(&self, id: &str) -> Result<Activity, PlayshelfError> {
        self.load()?
            .into_iter()
            .find(|a| a.id == id)
            .ok_or_else(|| PlayshelfError::NotFound { id: id.to_string() })
    }

    /// Append a new activity. The store assigns the id and creation time;
    /// both are immutable afterwards.
    pub fn create(&self, draft: ActivityDraft) -> Result<Activity, PlayshelfError> {
        let mut activities = self.load()?;
        let activity = Activity {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            image: draft.image,
            tags: draft.tags,
            house_location: draft.house_location,
            created_at: Utc::now(),
        };
        activities.push(activity.clone());
        self.save(&activities)?;
        info!(id = %activity.id, name = %activity.name, "Activity created");
        Ok(activity)
    }

    /// Merge a partial update into an existing record. `id` and `createdAt`
    /// are preserved regardless of the patch contents.
    pub fn update(&self, id: &str, patch: ActivityPatch) -> Result<Activity, PlayshelfError> {
        let mut activities = self.load()?;
        let Some(existing) = activities.iter_mut().find(|a| a.id == id) else {
            return Err(PlayshelfError::NotFound { id: id.to_string() });
        };
        if let Some(name) = patch.name {
            existing.name = name;
        }
        if let Some(image) = patch.image {
            existing.image = image;
        }
        if let Some(tags) = patch.tags {
            existing.tags = tags;
        }
        if let Some(house_location) = patch.house_location {
            existing.house_location = Some(house_location);
        }
        let updated = existing.clone();
        self.save(&activities)?;
        info!(id = %updated.id, "Activity updated");
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> Result<(), PlayshelfError> {
        let mut activities = self.load()?;
        let before = activities.len();
        activities.retain(|a| a.id != id);
        if activities.len() == before {
            return Err(PlayshelfError::NotFound { id: id.to_string() });
        }
        self.save(&activities)?;
        info!(id, "Activity deleted");
        Ok(())
    }

    /// Rewrite the file in canonical multi-valued form, backing up the
    /// previous contents first. Returns the number of records migrated.
    pub fn rewrite_canonical(&self) -> Result<usize, PlayshelfError> {
        let activities = self.load()?;
        if self.path.exists() {
            let backup = self
                .path
                .with_extension(format!("json.backup-{}", Utc::now().timestamp()));
            fs::copy(&self.path, &backup)
                .map_err(|e| PlayshelfError::Store(format!("backup {}: {e}", backup.display())))?;
            info!(backup = %backup.display(), "Backup written");
        }
        self.save(&activities)?;
        Ok(activities.len())
    }

    fn save(&self, activities: &[Activity]) -> Result<(), PlayshelfError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    PlayshelfError::Store(format!("create {}: {e}", parent.display()))
                })?;
            }
        }
        let json = serde_json::to_string_pretty(activities)
            .map_err(|e| PlayshelfError::Store(format!("serialize activities: {e}")))?;
        fs::write(&self.path, json)
            .map_err(|e| PlayshelfError::Store(format!("write {}: {e}", self.path.display())))
    }
}
