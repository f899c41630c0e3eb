#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn folio_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("folio"));
    cmd.env("FOLIO_AVATAR_LOOKUP", "false")
        .env_remove("FOLIO_STORAGE_KEY")
        .env_remove("FOLIO_DATA_DIR")
        .arg("--data-dir")
        .arg(data_dir);
    cmd
}

fn show(data_dir: &Path, section: &str) -> Value {
    let output = folio_cmd(data_dir)
        .args(["show", section])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

fn profile_file(data_dir: &Path) -> std::path::PathBuf {
    data_dir.join("portfolio-profile-data.json")
}

#[test]
fn test_fresh_directory_shows_defaults() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");

    let projects = show(&data, "projects");
    assert_eq!(projects.as_array().unwrap().len(), 3);
    assert_eq!(projects[0]["title"], "DevTinder");

    // Reading alone persists nothing.
    assert!(!profile_file(&data).exists());
}

#[test]
fn test_add_update_remove_workflow() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    let output = folio_cmd(data)
        .args([
            "add",
            "skills",
            r#"{"name": "Rust", "category": "languages", "proficiency": 300}"#,
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Added skills entry "));
    let id = stdout.trim().rsplit(' ').next().unwrap().to_string();

    let skills = show(data, "skills");
    let rust = skills
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["id"] == id.as_str())
        .unwrap();
    assert_eq!(rust["proficiency"], 100);
    assert_eq!(skills.as_array().unwrap().len(), 15);

    folio_cmd(data)
        .args(["update", "skills", &id, r#"{"proficiency": -5}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated skills entry"));

    let skills = show(data, "skills");
    let rust = skills
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["id"] == id.as_str())
        .unwrap();
    assert_eq!(rust["proficiency"], 0);

    folio_cmd(data)
        .args(["rm", "skills", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed skills entry"));

    assert_eq!(show(data, "skills").as_array().unwrap().len(), 14);
}

#[test]
fn test_unknown_id_is_reported_not_failed() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    folio_cmd(data)
        .args(["remove", "projects", "nonexistent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing changed"));

    assert_eq!(show(data, "projects").as_array().unwrap().len(), 3);
    assert!(!profile_file(data).exists());
}

#[test]
fn test_invalid_json_fails_without_saving() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    folio_cmd(data)
        .args(["update", "projects", "1", r#"{"titel": "typo"}"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid projects update"));

    assert!(!profile_file(data).exists());
}

#[test]
fn test_personal_info_update_persists() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    folio_cmd(data)
        .args(["personal", r#"{"title": "Systems Engineer"}"#])
        .assert()
        .success();

    let personal = show(data, "personal");
    assert_eq!(personal["title"], "Systems Engineer");
    assert_eq!(personal["name"], "Naveen Singh");

    let stored: Value = serde_json::from_str(&fs::read_to_string(profile_file(data)).unwrap())
        .unwrap();
    assert_eq!(stored["personalInfo"]["title"], "Systems Engineer");
    assert!(stored["lastUpdated"].is_string());
}

#[test]
fn test_attach_oversized_image_is_rejected() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    let image = temp.path().join("big.png");
    fs::write(&image, vec![0u8; 6 * 1024 * 1024]).unwrap();

    folio_cmd(&data)
        .args(["attach", "image"])
        .arg(&image)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Image size must be less than 5MB"));

    assert!(show(&data, "personal").get("profileImage").is_none());
}

#[test]
fn test_attach_resume_and_avatar() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    let resume = temp.path().join("cv.pdf");
    fs::write(&resume, b"%PDF-1.4").unwrap();

    folio_cmd(&data)
        .args(["attach", "resume"])
        .arg(&resume)
        .assert()
        .success()
        .stdout(predicate::str::contains("as resume"));

    let personal = show(&data, "personal");
    assert!(personal["resumeUrl"]
        .as_str()
        .unwrap()
        .starts_with("data:application/pdf;base64,"));

    folio_cmd(&data)
        .arg("avatar")
        .assert()
        .success()
        .stdout(predicate::str::contains("No profile image available"));
}

#[test]
fn test_hand_edited_file_is_backfilled() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();
    fs::write(
        profile_file(data),
        r#"{"projects": [], "theme": "dark"}"#,
    )
    .unwrap();

    assert_eq!(show(data, "projects").as_array().unwrap().len(), 0);
    assert_eq!(show(data, "skills").as_array().unwrap().len(), 14);
}

#[test]
fn test_reset_restores_defaults() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    folio_cmd(data)
        .args(["rm", "projects", "1"])
        .assert()
        .success();
    assert_eq!(show(data, "projects").as_array().unwrap().len(), 2);

    folio_cmd(data)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("reset to defaults"));

    assert!(!profile_file(data).exists());
    assert_eq!(show(data, "projects").as_array().unwrap().len(), 3);
}

#[test]
fn test_path_prints_profile_location() {
    let temp = TempDir::new().unwrap();
    let data = temp.path();

    folio_cmd(data)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("portfolio-profile-data.json"));
}
