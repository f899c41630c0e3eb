use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio", bin_name = "folio", version, disable_help_subcommand = true)]
#[command(about = "Edit a locally stored portfolio profile", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the profile document
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file (default: folio.toml in the config directory)
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the profile, or one section of it, as JSON
    Show {
        section: Option<Section>,
    },

    /// Add an entry to a collection (JSON object without "id")
    Add {
        collection: Collection,
        json: String,
    },

    /// Change some fields of an entry (JSON object with the fields to change)
    Update {
        collection: Collection,
        id: String,
        json: String,
    },

    /// Remove an entry from a collection
    #[command(alias = "rm")]
    Remove {
        collection: Collection,
        id: String,
    },

    /// Change personal info fields (JSON object with the fields to change)
    Personal {
        json: String,
    },

    /// Upload a profile image or resume from a file
    Attach {
        target: AttachTarget,
        path: PathBuf,
    },

    /// Show which profile image would be displayed
    Avatar,

    /// Delete the stored profile; the next run starts from the defaults
    Reset,

    /// Print where the profile document is stored
    Path,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Collection {
    Skills,
    Projects,
    Experience,
    Education,
    Certifications,
    Achievements,
    SocialLinks,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Skills => "skills",
            Collection::Projects => "projects",
            Collection::Experience => "experience",
            Collection::Education => "education",
            Collection::Certifications => "certifications",
            Collection::Achievements => "achievements",
            Collection::SocialLinks => "social-links",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Personal,
    Skills,
    Projects,
    Experience,
    Education,
    Certifications,
    Achievements,
    SocialLinks,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AttachTarget {
    /// Profile photo (JPEG, PNG or WebP, up to 5MB)
    Image,
    /// Resume (PDF, up to 10MB)
    Resume,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_update() {
        let cli = parse(&["folio", "update", "skills", "3", r#"{"proficiency": 77}"#]);
        match cli.command {
            Commands::Update {
                collection,
                id,
                json,
            } => {
                assert_eq!(collection, Collection::Skills);
                assert_eq!(id, "3");
                assert_eq!(json, r#"{"proficiency": 77}"#);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_collection_names_are_kebab_case() {
        let cli = parse(&["folio", "rm", "social-links", "2"]);
        assert!(matches!(
            cli.command,
            Commands::Remove {
                collection: Collection::SocialLinks,
                ..
            }
        ));
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = parse(&["folio", "show", "personal", "--data-dir", "/tmp/x", "-v"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Show {
                section: Some(Section::Personal)
            }
        ));
    }

    #[test]
    fn test_unknown_collection_is_rejected() {
        assert!(Cli::try_parse_from(["folio", "add", "hobbies", "{}"]).is_err());
    }
}
