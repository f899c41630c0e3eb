use super::render;
use super::setup::{AttachTarget, Cli, Collection, Commands, Section};
use anyhow::{Context, Result};
use clap::Parser;
use folioapp::avatar::{display_image, AvatarLookup};
use folioapp::files::{format_file_size, prepare_upload, UploadKind};
use folioapp::init::initialize;
use folioapp::model::{
    Achievement, Certification, Education, Entry, Experience, PersonalInfoPatch, ProfileDocument,
    Project, Skill, SocialLink,
};
use folioapp::store::StorageBackend;
use folioapp::ProfileStore;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = initialize(cli.data_dir.clone(), cli.config.as_deref())?;
    let output = execute(&mut ctx.store, ctx.avatar.as_ref(), cli.command)?;
    println!("{}", output);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run one command against the store and return what to print.
pub fn execute<B: StorageBackend>(
    store: &mut ProfileStore<B>,
    avatar: Option<&AvatarLookup>,
    command: Commands,
) -> Result<String> {
    match command {
        Commands::Show { section } => show(store.document(), section),
        Commands::Add { collection, json } => {
            let id = match collection {
                Collection::Skills => add::<Skill, B>(store, &json)?,
                Collection::Projects => add::<Project, B>(store, &json)?,
                Collection::Experience => add::<Experience, B>(store, &json)?,
                Collection::Education => add::<Education, B>(store, &json)?,
                Collection::Certifications => add::<Certification, B>(store, &json)?,
                Collection::Achievements => add::<Achievement, B>(store, &json)?,
                Collection::SocialLinks => add::<SocialLink, B>(store, &json)?,
            };
            Ok(render::added(collection, &id))
        }
        Commands::Update {
            collection,
            id,
            json,
        } => {
            let matched = match collection {
                Collection::Skills => update::<Skill, B>(store, &id, &json)?,
                Collection::Projects => update::<Project, B>(store, &id, &json)?,
                Collection::Experience => update::<Experience, B>(store, &id, &json)?,
                Collection::Education => update::<Education, B>(store, &id, &json)?,
                Collection::Certifications => update::<Certification, B>(store, &id, &json)?,
                Collection::Achievements => update::<Achievement, B>(store, &id, &json)?,
                Collection::SocialLinks => update::<SocialLink, B>(store, &id, &json)?,
            };
            Ok(render::updated(collection, &id, matched))
        }
        Commands::Remove { collection, id } => {
            let matched = match collection {
                Collection::Skills => store.remove_skill(&id),
                Collection::Projects => store.remove_project(&id),
                Collection::Experience => store.remove_experience(&id),
                Collection::Education => store.remove_education(&id),
                Collection::Certifications => store.remove_certification(&id),
                Collection::Achievements => store.remove_achievement(&id),
                Collection::SocialLinks => store.remove_social_link(&id),
            };
            Ok(render::removed(collection, &id, matched))
        }
        Commands::Personal { json } => {
            let patch: PersonalInfoPatch =
                serde_json::from_str(&json).context("invalid personal info")?;
            store.update_personal_info(patch);
            Ok("Personal info updated".to_string())
        }
        Commands::Attach { target, path } => attach(store, target, &path),
        Commands::Avatar => {
            let image = display_image(&store.document().personal_info, avatar);
            Ok(render::image(image.as_deref()))
        }
        Commands::Reset => {
            store.reset();
            Ok("Profile reset to defaults".to_string())
        }
        Commands::Path => Ok(store.storage().location().display().to_string()),
    }
}

fn add<T, B>(store: &mut ProfileStore<B>, json: &str) -> Result<String>
where
    T: Entry + DeserializeOwned,
    B: StorageBackend,
{
    let data: T = serde_json::from_str(json)
        .with_context(|| format!("invalid {} entry", T::COLLECTION))?;
    Ok(store.add(data))
}

fn update<T, B>(store: &mut ProfileStore<B>, id: &str, json: &str) -> Result<bool>
where
    T: Entry,
    T::Patch: DeserializeOwned,
    B: StorageBackend,
{
    let patch: T::Patch = serde_json::from_str(json)
        .with_context(|| format!("invalid {} update", T::COLLECTION))?;
    Ok(store.update::<T>(id, patch))
}

fn show(doc: &ProfileDocument, section: Option<Section>) -> Result<String> {
    let output = match section {
        None => render::json(doc),
        Some(Section::Personal) => render::json(&doc.personal_info),
        Some(Section::Skills) => render::json(&doc.skills),
        Some(Section::Projects) => render::json(&doc.projects),
        Some(Section::Experience) => render::json(&doc.experience),
        Some(Section::Education) => render::json(&doc.education),
        Some(Section::Certifications) => render::json(&doc.certifications),
        Some(Section::Achievements) => render::json(&doc.achievements),
        Some(Section::SocialLinks) => render::json(&doc.social_links),
    };
    Ok(output?)
}

fn attach<B: StorageBackend>(
    store: &mut ProfileStore<B>,
    target: AttachTarget,
    path: &Path,
) -> Result<String> {
    let (kind, label) = match target {
        AttachTarget::Image => (UploadKind::Image, "profile image"),
        AttachTarget::Resume => (UploadKind::Document, "resume"),
    };

    // Nothing reaches the store unless the whole file validated and encoded.
    let data_uri = prepare_upload(path, kind)
        .with_context(|| format!("could not attach {}", path.display()))?;
    let size = std::fs::metadata(path)
        .map(|meta| format_file_size(meta.len()))
        .unwrap_or_default();

    let patch = match target {
        AttachTarget::Image => PersonalInfoPatch {
            profile_image: Some(Some(data_uri)),
            ..Default::default()
        },
        AttachTarget::Resume => PersonalInfoPatch {
            resume_url: Some(Some(data_uri)),
            ..Default::default()
        },
    };
    store.update_personal_info(patch);

    Ok(format!("Attached {} ({}) as {}", path.display(), size, label))
}
