use super::StorageBackend;
use crate::defaults::{default_document, DEFAULT_STORAGE_KEY};
use crate::error::{FolioError, Result};
use crate::model::ProfileDocument;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Persists one [`ProfileDocument`] under one key of a [`StorageBackend`].
///
/// `load`, `save` and `reset` never fail: problems are logged and the caller
/// gets defaults (load) or keeps its in-memory state (save). The `try_*`
/// variants expose the underlying errors for callers that want to report them.
pub struct ProfileStorage<B: StorageBackend> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> ProfileStorage<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location(&self.key)
    }

    /// The stored document merged over the defaults, or the defaults when
    /// nothing usable is stored.
    pub fn load(&self) -> ProfileDocument {
        match self.try_load() {
            Ok(Some(doc)) => doc,
            Ok(None) => {
                debug!(key = %self.key, "no stored profile, using defaults");
                default_document()
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to load profile data, using defaults");
                default_document()
            }
        }
    }

    /// Returns Ok(None) when nothing is stored.
    pub fn try_load(&self) -> Result<Option<ProfileDocument>> {
        let raw = match self.backend.read(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(None),
        };

        let stored = match serde_json::from_str::<Value>(&raw)? {
            Value::Object(map) => map,
            other => {
                return Err(FolioError::Store(format!(
                    "stored profile is not a JSON object (found {})",
                    json_kind(&other)
                )))
            }
        };

        let mut doc = default_document();
        for (field, value) in stored {
            if value.is_null() {
                continue;
            }
            if let Err(err) = merge_key(&mut doc, &field, value) {
                warn!(key = %self.key, %field, error = %err, "unreadable stored value, keeping default");
            }
        }
        Ok(Some(doc))
    }

    /// Write `doc` with a fresh `lastUpdated`. Failures are logged and dropped.
    pub fn save(&self, doc: &ProfileDocument) {
        if let Err(err) = self.try_save(doc) {
            warn!(key = %self.key, error = %err, "failed to save profile data");
        }
    }

    /// Write `doc` with a fresh `lastUpdated` and return the stamp written.
    pub fn try_save(&self, doc: &ProfileDocument) -> Result<DateTime<Utc>> {
        let now = Utc::now();
        let mut value = serde_json::to_value(doc)?;
        if let Value::Object(map) = &mut value {
            map.insert("lastUpdated".to_string(), serde_json::to_value(now)?);
        }
        let content = serde_json::to_string(&value)?;
        self.backend.write(&self.key, &content)?;
        debug!(key = %self.key, bytes = content.len(), "profile saved");
        Ok(now)
    }

    /// Forget the stored document so the next load returns defaults.
    pub fn reset(&self) {
        match self.backend.remove(&self.key) {
            Ok(()) => debug!(key = %self.key, "stored profile removed"),
            Err(err) => warn!(key = %self.key, error = %err, "failed to reset profile data"),
        }
    }
}

/// Replace one top-level key of `doc` with its stored value. Nested values are
/// not merged. Unknown keys are ignored; on error `doc` is left unchanged.
fn merge_key(doc: &mut ProfileDocument, field: &str, value: Value) -> serde_json::Result<()> {
    match field {
        "personalInfo" => doc.personal_info = serde_json::from_value(value)?,
        "skills" => doc.skills = serde_json::from_value(value)?,
        "projects" => doc.projects = serde_json::from_value(value)?,
        "experience" => doc.experience = serde_json::from_value(value)?,
        "education" => doc.education = serde_json::from_value(value)?,
        "certifications" => doc.certifications = serde_json::from_value(value)?,
        "achievements" => doc.achievements = serde_json::from_value(value)?,
        "socialLinks" => doc.social_links = serde_json::from_value(value)?,
        "lastUpdated" => doc.last_updated = serde_json::from_value(value)?,
        _ => {}
    }
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Record, Skill, SkillCategory};
    use crate::store::mem_backend::MemBackend;
    use serde_json::json;

    fn storage() -> (MemBackend, ProfileStorage<MemBackend>) {
        let backend = MemBackend::new();
        (backend.clone(), ProfileStorage::new(backend))
    }

    #[test]
    fn test_load_empty_returns_defaults() {
        let (_, storage) = storage();
        assert!(storage.load().same_content(&default_document()));
        assert!(storage.try_load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_roundtrip_refreshes_timestamp() {
        let (_, storage) = storage();
        let mut doc = default_document();
        doc.last_updated = "2020-01-01T00:00:00Z".parse().unwrap();
        doc.skills.push(Record::new(
            "x1",
            Skill::new("Rust", SkillCategory::Languages, 60),
        ));

        let stamp = storage.try_save(&doc).unwrap();
        let loaded = storage.load();

        assert!(loaded.same_content(&doc));
        assert_eq!(loaded.last_updated, stamp);
        assert!(loaded.last_updated > doc.last_updated);
    }

    #[test]
    fn test_missing_top_level_key_is_backfilled() {
        let (backend, storage) = storage();
        let mut stored = serde_json::to_value(default_document()).unwrap();
        let map = stored.as_object_mut().unwrap();
        map.remove("achievements");
        map.insert(
            "skills".to_string(),
            json!([{"id": "s1", "name": "Zig", "category": "languages", "proficiency": 40}]),
        );
        backend.insert_raw(storage.key(), &stored.to_string());

        let loaded = storage.load();
        assert_eq!(loaded.achievements, default_document().achievements);
        assert_eq!(loaded.skills.len(), 1);
        assert_eq!(loaded.skills[0].name, "Zig");
    }

    #[test]
    fn test_merge_is_shallow_for_personal_info() {
        let (backend, storage) = storage();
        backend.insert_raw(storage.key(), r#"{"personalInfo": {"name": "Ada"}}"#);

        let loaded = storage.load();
        assert_eq!(loaded.personal_info.name, "Ada");
        // The stored object replaces the default one entirely.
        assert_eq!(loaded.personal_info.email, "");
        assert_eq!(loaded.skills.len(), 14);
    }

    #[test]
    fn test_null_key_does_not_override_default() {
        let (backend, storage) = storage();
        backend.insert_raw(storage.key(), r#"{"projects": null}"#);
        assert_eq!(storage.load().projects.len(), 3);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let (backend, storage) = storage();
        backend.insert_raw(storage.key(), r#"{"theme": "dark", "experience": []}"#);
        assert!(storage.load().same_content(&default_document()));
    }

    #[test]
    fn test_corrupt_data_falls_back_to_defaults() {
        let (backend, storage) = storage();
        backend.insert_raw(storage.key(), "{not json");
        assert!(storage.load().same_content(&default_document()));
        assert!(matches!(
            storage.try_load(),
            Err(FolioError::Serialization(_))
        ));
    }

    #[test]
    fn test_non_object_falls_back_to_defaults() {
        let (backend, storage) = storage();
        backend.insert_raw(storage.key(), "[1, 2, 3]");
        assert!(matches!(storage.try_load(), Err(FolioError::Store(_))));
        assert!(storage.load().same_content(&default_document()));
    }

    #[test]
    fn test_mistyped_collection_falls_back_to_its_default() {
        let (backend, storage) = storage();
        backend.insert_raw(storage.key(), r#"{"skills": "lots"}"#);
        assert!(storage.load().same_content(&default_document()));
    }

    #[test]
    fn test_bad_collection_keeps_the_other_stored_keys() {
        let (backend, storage) = storage();
        backend.insert_raw(
            storage.key(),
            &json!({
                "personalInfo": {"name": "Ada"},
                "projects": [{
                    "id": "p1", "title": "MyOwn", "description": "d", "tech": [],
                    "date": "2025", "features": [], "status": "WIP", "category": "CLI"
                }],
                "skills": [{"id": "s1", "name": "Ops", "category": "devops", "proficiency": 50}],
                "certifications": "not a list"
            })
            .to_string(),
        );

        let loaded = storage.load();
        assert_eq!(loaded.personal_info.name, "Ada");
        assert_eq!(loaded.projects.len(), 1);
        assert_eq!(loaded.projects[0].title, "MyOwn");
        assert_eq!(loaded.skills, default_document().skills);
        assert_eq!(loaded.certifications, default_document().certifications);
    }

    #[test]
    fn test_out_of_range_proficiency_keeps_stored_document() {
        let (backend, storage) = storage();
        backend.insert_raw(
            storage.key(),
            &json!({
                "projects": [],
                "skills": [
                    {"id": "s1", "name": "Big", "category": "tools", "proficiency": 300},
                    {"id": "s2", "name": "Neg", "category": "tools", "proficiency": -5}
                ]
            })
            .to_string(),
        );

        let loaded = storage.load();
        assert!(loaded.projects.is_empty());
        assert_eq!(loaded.skills.len(), 2);
        assert_eq!(loaded.skills[0].proficiency, 100);
        assert_eq!(loaded.skills[1].proficiency, 0);
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let (backend, storage) = storage();
        backend.set_simulate_write_error(true);

        storage.save(&default_document());
        assert!(storage.try_save(&default_document()).is_err());
        assert_eq!(backend.write_count(), 0);
    }

    #[test]
    fn test_reset_forgets_stored_document() {
        let (backend, storage) = storage();
        let mut doc = default_document();
        doc.skills.clear();
        storage.save(&doc);
        assert!(storage.load().skills.is_empty());

        storage.reset();
        assert_eq!(backend.read(storage.key()).unwrap(), None);
        assert_eq!(storage.load().skills.len(), 14);
    }

    #[test]
    fn test_custom_key_is_used() {
        let backend = MemBackend::new();
        let storage = ProfileStorage::with_key(backend.clone(), "other");
        storage.save(&default_document());
        assert!(backend.read("other").unwrap().is_some());
        assert!(backend.read(DEFAULT_STORAGE_KEY).unwrap().is_none());
        assert_eq!(storage.location(), PathBuf::from("memory://other"));
    }
}
