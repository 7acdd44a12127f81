// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end seeding runs against scratch i18n directories

use i18n_seed::config::SeedConfig;
use i18n_seed::error::{ErrorKind, SeedError};
use i18n_seed::i18n;
use i18n_seed::seed;
use i18n_seed::types::{LanguageEntry, LanguageList};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TEMPLATE: &str = r#"{"title": "App", "languages": {"en": "English"}}"#;

fn i18n_dir(template: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("en.json"), template).unwrap();
    dir
}

fn languages(pairs: &[(&str, &str)]) -> LanguageList {
    LanguageList::new(
        pairs
            .iter()
            .map(|(code, name)| LanguageEntry::new(*code, *name))
            .collect(),
    )
    .unwrap()
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn json_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".json"))
        .collect();
    names.sort();
    names
}

#[test]
fn test_creates_marathi_from_template() {
    let dir = i18n_dir(TEMPLATE);
    let template = dir.path().join("en.json");

    let created = seed::seed(&template, dir.path(), &languages(&[("mr", "Marathi")])).unwrap();

    assert_eq!(created, 1);
    assert_eq!(
        read_json(&dir.path().join("mr.json")),
        json!({"title": "App", "languages": {"en": "English", "mr": "Marathi"}})
    );
}

#[test]
fn test_existing_file_is_left_untouched() {
    let dir = i18n_dir(TEMPLATE);
    let template = dir.path().join("en.json");
    let existing = dir.path().join("mr.json");
    fs::write(&existing, r#"{"foo": "bar"}"#).unwrap();

    let created = seed::seed(&template, dir.path(), &languages(&[("mr", "Marathi")])).unwrap();

    assert_eq!(created, 0);
    assert_eq!(fs::read_to_string(&existing).unwrap(), r#"{"foo": "bar"}"#);
}

#[test]
fn test_invalid_existing_file_is_left_untouched() {
    let dir = i18n_dir(TEMPLATE);
    let existing = dir.path().join("te.json");
    fs::write(&existing, b"not json at all \xff").unwrap();

    let created = seed::seed(
        &dir.path().join("en.json"),
        dir.path(),
        &languages(&[("mr", "Marathi"), ("te", "Telugu")]),
    )
    .unwrap();

    assert_eq!(created, 1);
    assert_eq!(fs::read(&existing).unwrap(), b"not json at all \xff");
}

#[test]
fn test_second_run_creates_nothing() {
    let dir = i18n_dir(TEMPLATE);
    let template = dir.path().join("en.json");
    let list = languages(&[("mr", "Marathi"), ("te", "Telugu"), ("ta", "Tamil")]);

    assert_eq!(seed::seed(&template, dir.path(), &list).unwrap(), 3);
    let first: Vec<Vec<u8>> = ["mr", "te", "ta"]
        .iter()
        .map(|c| fs::read(dir.path().join(format!("{c}.json"))).unwrap())
        .collect();

    assert_eq!(seed::seed(&template, dir.path(), &list).unwrap(), 0);
    let second: Vec<Vec<u8>> = ["mr", "te", "ta"]
        .iter()
        .map(|c| fs::read(dir.path().join(format!("{c}.json"))).unwrap())
        .collect();
    assert_eq!(first, second);
}

#[test]
fn test_builtin_list_seeds_every_language() {
    let dir = i18n_dir(TEMPLATE);
    let config = SeedConfig::for_directory(dir.path());

    let report = seed::run(&config).unwrap();

    assert_eq!(report.created_count(), i18n::BUILTIN_LANGUAGES.len());
    assert_eq!(report.skipped_count(), 0);
    // en.json plus one file per language
    assert_eq!(json_files(dir.path()).len(), i18n::BUILTIN_LANGUAGES.len() + 1);
    for (code, name) in i18n::BUILTIN_LANGUAGES {
        let value = read_json(&dir.path().join(format!("{code}.json")));
        assert_eq!(value["languages"][*code], *name);
        assert_eq!(value["languages"]["en"], "English");
        assert_eq!(value["languages"].as_object().unwrap().len(), 2);
    }
}

#[test]
fn test_each_file_only_gets_its_own_language() {
    let dir = i18n_dir(TEMPLATE);
    seed::seed(
        &dir.path().join("en.json"),
        dir.path(),
        &languages(&[("mr", "Marathi"), ("te", "Telugu")]),
    )
    .unwrap();

    let te = read_json(&dir.path().join("te.json"));
    assert_eq!(te["languages"], json!({"en": "English", "te": "Telugu"}));
    assert_eq!(
        read_json(&dir.path().join("en.json")),
        serde_json::from_str::<Value>(TEMPLATE).unwrap()
    );
}

#[test]
fn test_template_entry_is_overwritten_for_that_file() {
    let dir = i18n_dir(r#"{"languages": {"en": "English", "mr": "marathi (draft)"}}"#);
    seed::seed(
        &dir.path().join("en.json"),
        dir.path(),
        &languages(&[("mr", "Marathi"), ("te", "Telugu")]),
    )
    .unwrap();

    assert_eq!(
        read_json(&dir.path().join("mr.json"))["languages"]["mr"],
        "Marathi"
    );
    assert_eq!(
        read_json(&dir.path().join("te.json"))["languages"]["mr"],
        "marathi (draft)"
    );
}

#[test]
fn test_output_formatting_matches_template_layout() {
    let dir = i18n_dir(r#"{"nav": {"home": "Home"}, "title": "Café", "languages": {"en": "English"}}"#);
    seed::seed(
        &dir.path().join("en.json"),
        dir.path(),
        &languages(&[("ja", "日本語")]),
    )
    .unwrap();

    let text = fs::read_to_string(dir.path().join("ja.json")).unwrap();
    let expected = "{\n    \"nav\": {\n        \"home\": \"Home\"\n    },\n    \"title\": \"Café\",\n    \"languages\": {\n        \"en\": \"English\",\n        \"ja\": \"日本語\"\n    }\n}";
    assert_eq!(text, expected);
}

#[test]
fn test_missing_template_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let err = seed::seed(
        &dir.path().join("en.json"),
        dir.path(),
        &languages(&[("mr", "Marathi")]),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TemplateLoad);
    assert!(json_files(dir.path()).is_empty());
}

#[test]
fn test_malformed_template_writes_nothing() {
    let dir = i18n_dir(r#"{"title": "App", "languages": {"#);
    let err = seed::seed(
        &dir.path().join("en.json"),
        dir.path(),
        &languages(&[("mr", "Marathi")]),
    )
    .unwrap_err();

    assert!(matches!(err, SeedError::TemplateParse { .. }));
    assert_eq!(json_files(dir.path()), vec!["en.json"]);
}

#[test]
fn test_template_without_languages_writes_nothing() {
    let dir = i18n_dir(r#"{"title": "App"}"#);
    let err = seed::seed(
        &dir.path().join("en.json"),
        dir.path(),
        &languages(&[("mr", "Marathi")]),
    )
    .unwrap_err();

    assert!(matches!(err, SeedError::MissingLanguages { .. }));
    assert_eq!(json_files(dir.path()), vec!["en.json"]);
}

#[test]
fn test_template_outside_output_dir() {
    let templates = i18n_dir(TEMPLATE);
    let out = TempDir::new().unwrap();
    let config = SeedConfig::for_directory(out.path())
        .with_template(templates.path().join("en.json"))
        .with_languages(languages(&[("mr", "Marathi")]));

    let report = seed::run(&config).unwrap();

    assert_eq!(report.created, vec!["mr"]);
    assert_eq!(json_files(out.path()), vec!["mr.json"]);
}

#[test]
fn test_atomic_run_matches_direct_run() {
    let direct = i18n_dir(TEMPLATE);
    let atomic = i18n_dir(TEMPLATE);
    let list = languages(&[("mr", "Marathi"), ("ar", "Arabic")]);

    seed::seed(&direct.path().join("en.json"), direct.path(), &list).unwrap();
    let mut config = SeedConfig::for_directory(atomic.path()).with_languages(list);
    config.atomic = true;
    let report = seed::run(&config).unwrap();

    assert_eq!(report.created_count(), 2);
    for name in ["mr.json", "ar.json"] {
        assert_eq!(
            fs::read(direct.path().join(name)).unwrap(),
            fs::read(atomic.path().join(name)).unwrap()
        );
    }
    // no staging leftovers
    assert_eq!(fs::read_dir(atomic.path()).unwrap().count(), 3);
}

#[test]
fn test_atomic_run_skips_existing_files() {
    let dir = i18n_dir(TEMPLATE);
    fs::write(dir.path().join("mr.json"), "{}").unwrap();
    let mut config = SeedConfig::for_directory(dir.path())
        .with_languages(languages(&[("mr", "Marathi"), ("te", "Telugu")]));
    config.atomic = true;

    let report = seed::run(&config).unwrap();

    assert_eq!(report.created, vec!["te"]);
    assert_eq!(report.skipped, vec!["mr"]);
    assert_eq!(fs::read_to_string(dir.path().join("mr.json")).unwrap(), "{}");
}

#[cfg(unix)]
#[test]
fn test_atomic_run_leaves_no_files_when_staging_fails() {
    use std::os::unix::fs::PermissionsExt;

    let dir = i18n_dir(TEMPLATE);
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    fs::set_permissions(&out, fs::Permissions::from_mode(0o555)).unwrap();

    // root ignores directory permissions; nothing to assert then
    if tempfile::tempfile_in(&out).is_ok() {
        fs::set_permissions(&out, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let mut config = SeedConfig::for_directory(&out)
        .with_template(dir.path().join("en.json"))
        .with_languages(languages(&[("mr", "Marathi"), ("te", "Telugu")]));
    config.atomic = true;
    let err = seed::run(&config).unwrap_err();

    fs::set_permissions(&out, fs::Permissions::from_mode(0o755)).unwrap();
    assert_eq!(err.kind(), ErrorKind::FilesystemWrite);
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn test_dry_run_reports_without_writing() {
    let dir = i18n_dir(TEMPLATE);
    fs::write(dir.path().join("te.json"), "{}").unwrap();
    let mut config = SeedConfig::for_directory(dir.path())
        .with_languages(languages(&[("mr", "Marathi"), ("te", "Telugu")]));
    config.dry_run = true;

    let report = seed::run(&config).unwrap();

    assert!(report.dry_run);
    assert_eq!(report.created, vec!["mr"]);
    assert_eq!(report.skipped, vec!["te"]);
    assert!(!dir.path().join("mr.json").exists());
}

#[test]
fn test_empty_language_list_creates_nothing() {
    let dir = i18n_dir(TEMPLATE);
    let created = seed::seed(
        &dir.path().join("en.json"),
        dir.path(),
        &LanguageList::default(),
    )
    .unwrap();
    assert_eq!(created, 0);
    assert_eq!(json_files(dir.path()), vec!["en.json"]);
}

#[test]
fn test_template_numbers_are_copied_exactly() {
    let dir = i18n_dir(
        r#"{"id": 123456789012345678901234567890, "neg": -0, "ratio": 1.50, "languages": {}}"#,
    );
    seed::seed(
        &dir.path().join("en.json"),
        dir.path(),
        &languages(&[("mr", "Marathi")]),
    )
    .unwrap();

    let text = fs::read_to_string(dir.path().join("mr.json")).unwrap();
    assert!(text.contains("\"id\": 123456789012345678901234567890,"));
    assert!(text.contains("\"neg\": -0,"));
    assert!(text.contains("\"ratio\": 1.50,"));
}

#[test]
fn test_atomic_run_into_missing_dir_creates_nothing() {
    let dir = i18n_dir(TEMPLATE);
    let out = dir.path().join("absent");
    let mut config = SeedConfig::for_directory(&out)
        .with_template(dir.path().join("en.json"))
        .with_languages(languages(&[("mr", "Marathi"), ("te", "Telugu")]));
    config.atomic = true;

    let err = seed::run(&config).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FilesystemWrite);
    assert!(!out.exists());
    assert_eq!(json_files(dir.path()), vec!["en.json"]);
}

#[cfg(unix)]
#[test]
fn test_direct_run_keeps_files_written_before_a_failure() {
    let dir = i18n_dir(TEMPLATE);
    // dangling link: not "existing", and writing through it fails
    std::os::unix::fs::symlink(
        dir.path().join("missing").join("te.json"),
        dir.path().join("te.json"),
    )
    .unwrap();

    let err = seed::seed(
        &dir.path().join("en.json"),
        dir.path(),
        &languages(&[("mr", "Marathi"), ("te", "Telugu"), ("ta", "Tamil")]),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FilesystemWrite);
    assert!(dir.path().join("mr.json").is_file());
    assert!(!dir.path().join("ta.json").exists());
}

#[cfg(unix)]
#[test]
fn test_atomic_rename_failure_cleans_up_staged_files() {
    let dir = i18n_dir(TEMPLATE);
    std::os::unix::fs::symlink(
        dir.path().join("missing").join("te.json"),
        dir.path().join("te.json"),
    )
    .unwrap();
    let mut config = SeedConfig::for_directory(dir.path())
        .with_languages(languages(&[("mr", "Marathi"), ("te", "Telugu"), ("ta", "Tamil")]));
    config.atomic = true;

    let err = seed::run(&config).unwrap_err();

    assert!(matches!(err, SeedError::Persist { .. }));
    let leftovers: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with(".i18n-seed-") && name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "staged files left behind: {:?}", leftovers);
    assert!(dir.path().join("mr.json").is_file());
    assert!(!dir.path().join("ta.json").exists());
    // the dangling link itself is untouched
    assert!(fs::symlink_metadata(dir.path().join("te.json"))
        .unwrap()
        .file_type()
        .is_symlink());
}
