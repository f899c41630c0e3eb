use super::storage::ProfileStorage;
use super::StorageBackend;
use crate::defaults::default_document;
use crate::model::{
    new_entry_id, Achievement, AchievementPatch, Certification, CertificationPatch, Education,
    EducationPatch, Entry, Experience, ExperiencePatch, Merge, PersonalInfoPatch, ProfileDocument,
    Project, ProjectPatch, Record, Skill, SkillPatch, SocialLink, SocialLinkPatch,
};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// Document is the defaults, nothing is persisted.
    Loading,
    /// Document came from storage, every mutation is persisted.
    Ready,
}

/// The single owner of the live [`ProfileDocument`] and the only way to change it.
///
/// Readers take cheap [`snapshot`](Self::snapshot)s; mutations copy-on-write, so
/// a snapshot held by a renderer never changes under it. Once [`StoreState::Ready`],
/// every mutation that changes the document is saved before the call returns.
///
/// Unknown ids are not errors: `update_*` and `remove_*` report whether an entry
/// matched and otherwise leave the document and storage untouched.
pub struct ProfileStore<B: StorageBackend> {
    storage: ProfileStorage<B>,
    document: Arc<ProfileDocument>,
    state: StoreState,
}

impl<B: StorageBackend> ProfileStore<B> {
    /// A store in the Loading state, holding the defaults.
    pub fn new(storage: ProfileStorage<B>) -> Self {
        Self {
            storage,
            document: Arc::new(default_document()),
            state: StoreState::Loading,
        }
    }

    /// A store that has already loaded from `storage`.
    pub fn open(storage: ProfileStorage<B>) -> Self {
        let mut store = Self::new(storage);
        store.load();
        store
    }

    /// Load from storage and become Ready. Only the first call has an effect.
    pub fn load(&mut self) {
        if self.state == StoreState::Ready {
            return;
        }
        let mut doc = self.storage.load();
        doc.normalize();
        self.document = Arc::new(doc);
        self.state = StoreState::Ready;
        debug!(key = %self.storage.key(), "profile store ready");
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == StoreState::Loading
    }

    pub fn document(&self) -> &ProfileDocument {
        &self.document
    }

    pub fn snapshot(&self) -> Arc<ProfileDocument> {
        Arc::clone(&self.document)
    }

    pub fn storage(&self) -> &ProfileStorage<B> {
        &self.storage
    }

    /// Drop the stored document and go back to the defaults.
    /// The defaults are not written back; the next load finds nothing stored.
    pub fn reset(&mut self) {
        self.storage.reset();
        self.document = Arc::new(default_document());
    }

    // --- Generic collection operations ---

    /// Append a new entry and return its generated id.
    pub fn add<T: Entry>(&mut self, mut data: T) -> String {
        data.normalize();
        let id = new_entry_id();
        let record = Record::new(id.clone(), data);
        self.commit(|doc| T::collection_mut(doc).push(record));
        debug!(collection = T::COLLECTION, %id, "entry added");
        id
    }

    /// Shallow-merge `patch` into the entry with `id`. Returns false if none matched.
    pub fn update<T: Entry>(&mut self, id: &str, patch: T::Patch) -> bool {
        if self.document.find::<T>(id).is_none() {
            return false;
        }
        self.commit(|doc| {
            if let Some(record) = T::collection_mut(doc).iter_mut().find(|r| r.id == id) {
                record.data.merge(patch);
            }
        });
        true
    }

    /// Remove the entry with `id`. Returns false if none matched.
    pub fn remove<T: Entry>(&mut self, id: &str) -> bool {
        if self.document.find::<T>(id).is_none() {
            return false;
        }
        self.commit(|doc| T::collection_mut(doc).retain(|r| r.id != id));
        debug!(collection = T::COLLECTION, %id, "entry removed");
        true
    }

    pub fn update_personal_info(&mut self, patch: PersonalInfoPatch) {
        self.commit(|doc| doc.personal_info.merge(patch));
    }

    fn commit(&mut self, mutate: impl FnOnce(&mut ProfileDocument)) {
        mutate(Arc::make_mut(&mut self.document));
        if self.state == StoreState::Ready {
            self.storage.save(&self.document);
        }
    }

    // --- Skills ---

    pub fn add_skill(&mut self, skill: Skill) -> String {
        self.add(skill)
    }

    pub fn update_skill(&mut self, id: &str, patch: SkillPatch) -> bool {
        self.update::<Skill>(id, patch)
    }

    pub fn remove_skill(&mut self, id: &str) -> bool {
        self.remove::<Skill>(id)
    }

    // --- Projects ---

    pub fn add_project(&mut self, project: Project) -> String {
        self.add(project)
    }

    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) -> bool {
        self.update::<Project>(id, patch)
    }

    pub fn remove_project(&mut self, id: &str) -> bool {
        self.remove::<Project>(id)
    }

    // --- Experience ---

    pub fn add_experience(&mut self, experience: Experience) -> String {
        self.add(experience)
    }

    pub fn update_experience(&mut self, id: &str, patch: ExperiencePatch) -> bool {
        self.update::<Experience>(id, patch)
    }

    pub fn remove_experience(&mut self, id: &str) -> bool {
        self.remove::<Experience>(id)
    }

    // --- Education ---

    pub fn add_education(&mut self, education: Education) -> String {
        self.add(education)
    }

    pub fn update_education(&mut self, id: &str, patch: EducationPatch) -> bool {
        self.update::<Education>(id, patch)
    }

    pub fn remove_education(&mut self, id: &str) -> bool {
        self.remove::<Education>(id)
    }

    // --- Certifications ---

    pub fn add_certification(&mut self, certification: Certification) -> String {
        self.add(certification)
    }

    pub fn update_certification(&mut self, id: &str, patch: CertificationPatch) -> bool {
        self.update::<Certification>(id, patch)
    }

    pub fn remove_certification(&mut self, id: &str) -> bool {
        self.remove::<Certification>(id)
    }

    // --- Achievements ---

    pub fn add_achievement(&mut self, achievement: Achievement) -> String {
        self.add(achievement)
    }

    pub fn update_achievement(&mut self, id: &str, patch: AchievementPatch) -> bool {
        self.update::<Achievement>(id, patch)
    }

    pub fn remove_achievement(&mut self, id: &str) -> bool {
        self.remove::<Achievement>(id)
    }

    // --- Social Links ---

    pub fn add_social_link(&mut self, link: SocialLink) -> String {
        self.add(link)
    }

    pub fn update_social_link(&mut self, id: &str, patch: SocialLinkPatch) -> bool {
        self.update::<SocialLink>(id, patch)
    }

    pub fn remove_social_link(&mut self, id: &str) -> bool {
        self.remove::<SocialLink>(id)
    }
}
