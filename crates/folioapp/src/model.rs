use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::ops::{Deref, DerefMut};
use uuid::Uuid;

pub const MAX_PROFICIENCY: u8 = 100;

/// The whole portfolio: one aggregate, persisted as a single JSON document.
///
/// Field names serialize in camelCase so stored documents keep the layout
/// `{ personalInfo, skills, projects, ..., lastUpdated }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    pub personal_info: PersonalInfo,
    pub skills: Vec<Record<Skill>>,
    pub projects: Vec<Record<Project>>,
    pub experience: Vec<Record<Experience>>,
    pub education: Vec<Record<Education>>,
    pub certifications: Vec<Record<Certification>>,
    pub achievements: Vec<Record<Achievement>>,
    pub social_links: Vec<Record<SocialLink>>,
    pub last_updated: DateTime<Utc>,
}

impl ProfileDocument {
    /// Equality over everything except `last_updated`.
    pub fn same_content(&self, other: &ProfileDocument) -> bool {
        self.personal_info == other.personal_info
            && self.skills == other.skills
            && self.projects == other.projects
            && self.experience == other.experience
            && self.education == other.education
            && self.certifications == other.certifications
            && self.achievements == other.achievements
            && self.social_links == other.social_links
    }

    pub fn find<T: Entry>(&self, id: &str) -> Option<&Record<T>> {
        T::collection(self).iter().find(|record| record.id == id)
    }

    pub fn skills_in(&self, category: SkillCategory) -> impl Iterator<Item = &Record<Skill>> {
        self.skills
            .iter()
            .filter(move |skill| skill.category == category)
    }

    /// Skills grouped by category in display order, empty groups omitted.
    pub fn skills_by_category(&self) -> Vec<(SkillCategory, Vec<&Record<Skill>>)> {
        SkillCategory::ALL
            .iter()
            .map(|category| (*category, self.skills_in(*category).collect::<Vec<_>>()))
            .filter(|(_, skills)| !skills.is_empty())
            .collect()
    }

    pub(crate) fn normalize(&mut self) {
        for skill in &mut self.skills {
            skill.data.normalize();
        }
    }
}

/// A collection entry: a stable string id plus the entity's own fields.
///
/// The id serializes inline with the entity (`{ "id": "3", "name": ... }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<T> {
    pub id: String,
    #[serde(flatten)]
    pub data: T,
}

impl<T> Record<T> {
    pub fn new(id: impl Into<String>, data: T) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

impl<T> Deref for Record<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

impl<T> DerefMut for Record<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.data
    }
}

/// Fresh identifier for a new collection entry.
pub fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

/// Shallow, field-by-field update with a patch where every field is optional.
pub trait Merge {
    type Patch;

    fn merge(&mut self, patch: Self::Patch);
}

/// An entity that lives in one of the document's collections.
pub trait Entry: Merge + Clone {
    /// Top-level document key of the collection.
    const COLLECTION: &'static str;

    fn collection(doc: &ProfileDocument) -> &[Record<Self>];

    fn collection_mut(doc: &mut ProfileDocument) -> &mut Vec<Record<Self>>;

    /// Bring field values back inside their allowed ranges.
    fn normalize(&mut self) {}
}

macro_rules! merge_fields {
    ($target:expr, $patch:expr; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )+
    };
}

macro_rules! entry {
    ($ty:ty, $key:literal, $field:ident) => {
        impl Entry for $ty {
            const COLLECTION: &'static str = $key;

            fn collection(doc: &ProfileDocument) -> &[Record<Self>] {
                &doc.$field
            }

            fn collection_mut(doc: &mut ProfileDocument) -> &mut Vec<Record<Self>> {
                &mut doc.$field
            }
        }
    };
}

// Patch fields for optional model fields are `Option<Option<T>>`: a missing key
// leaves the value alone, an explicit `null` clears it.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// Any JSON number is accepted and pulled into `0..=MAX_PROFICIENCY`.
fn clamp_proficiency(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, f64::from(MAX_PROFICIENCY)) as u8
}

fn proficiency<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(clamp_proficiency)
}

fn optional_proficiency<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(|value| value.map(clamp_proficiency))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub location: String,
    pub title: String,
    pub github_username: String,
    pub linkedin_username: String,
    pub leetcode_username: String,
    /// Data-URI or external URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// Data-URI or external URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PersonalInfoPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub title: Option<String>,
    pub github_username: Option<String>,
    pub linkedin_username: Option<String>,
    pub leetcode_username: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub profile_image: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub resume_url: Option<Option<String>>,
}

impl Merge for PersonalInfo {
    type Patch = PersonalInfoPatch;

    fn merge(&mut self, patch: PersonalInfoPatch) {
        merge_fields!(self, patch;
            name, email, phone, bio, location, title,
            github_username, linkedin_username, leetcode_username,
            profile_image, resume_url,
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Languages,
    Frontend,
    Backend,
    Tools,
    Databases,
    Cloud,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Languages,
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Tools,
        SkillCategory::Databases,
        SkillCategory::Cloud,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "languages",
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Tools => "tools",
            SkillCategory::Databases => "databases",
            SkillCategory::Cloud => "cloud",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    /// Percentage, kept within `0..=MAX_PROFICIENCY` by the store.
    #[serde(deserialize_with = "proficiency")]
    pub proficiency: u8,
}

impl Skill {
    pub fn new(name: impl Into<String>, category: SkillCategory, proficiency: u8) -> Self {
        Self {
            name: name.into(),
            category,
            proficiency,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub category: Option<SkillCategory>,
    #[serde(default, deserialize_with = "optional_proficiency")]
    pub proficiency: Option<u8>,
}

impl Merge for Skill {
    type Patch = SkillPatch;

    fn merge(&mut self, patch: SkillPatch) {
        merge_fields!(self, patch; name, category, proficiency);
        self.normalize();
    }
}

impl Entry for Skill {
    const COLLECTION: &'static str = "skills";

    fn collection(doc: &ProfileDocument) -> &[Record<Self>] {
        &doc.skills
    }

    fn collection_mut(doc: &mut ProfileDocument) -> &mut Vec<Record<Self>> {
        &mut doc.skills
    }

    fn normalize(&mut self) {
        self.proficiency = self.proficiency.min(MAX_PROFICIENCY);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub tech: Vec<String>,
    pub date: String,
    pub features: Vec<String>,
    pub status: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub long_description: Option<Option<String>>,
    pub tech: Option<Vec<String>>,
    pub date: Option<String>,
    pub features: Option<Vec<String>>,
    pub status: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub github_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub live_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: Option<Option<String>>,
}

impl Merge for Project {
    type Patch = ProjectPatch;

    fn merge(&mut self, patch: ProjectPatch) {
        merge_fields!(self, patch;
            title, description, long_description, tech, date, features,
            status, category, github_url, live_url, image_url,
        );
    }
}

entry!(Project, "projects", projects);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub description: String,
    pub technologies: Vec<String>,
    pub current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub end_date: Option<Option<String>>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub current: Option<bool>,
}

impl Merge for Experience {
    type Patch = ExperiencePatch;

    fn merge(&mut self, patch: ExperiencePatch) {
        merge_fields!(self, patch;
            company, position, start_date, end_date, description, technologies, current,
        );
    }
}

entry!(Experience, "experience", experience);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub end_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub grade: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub current: Option<bool>,
}

impl Merge for Education {
    type Patch = EducationPatch;

    fn merge(&mut self, patch: EducationPatch) {
        merge_fields!(self, patch;
            institution, degree, field, start_date, end_date, grade, description, current,
        );
    }
}

entry!(Education, "education", education);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CertificationPatch {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub credential_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub credential_url: Option<Option<String>>,
}

impl Merge for Certification {
    type Patch = CertificationPatch;

    fn merge(&mut self, patch: CertificationPatch) {
        merge_fields!(self, patch; name, issuer, date, credential_id, credential_url);
    }
}

entry!(Certification, "certifications", certifications);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub date: String,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AchievementPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
}

impl Merge for Achievement {
    type Patch = AchievementPatch;

    fn merge(&mut self, patch: AchievementPatch) {
        merge_fields!(self, patch; title, description, date, category);
    }
}

entry!(Achievement, "achievements", achievements);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub username: String,
    /// Name of the icon the renderer should use.
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLinkPatch {
    pub platform: Option<String>,
    pub url: Option<String>,
    pub username: Option<String>,
    pub icon: Option<String>,
}

impl Merge for SocialLink {
    type Patch = SocialLinkPatch;

    fn merge(&mut self, patch: SocialLinkPatch) {
        merge_fields!(self, patch; platform, url, username, icon);
    }
}

entry!(SocialLink, "socialLinks", social_links);
