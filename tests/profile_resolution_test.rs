// Profile resolution against real registry files on disk
use ffprof::{list_profiles, remove_profile, resolve, resolve_file, Error, REGISTRY_FILE};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TWO_PROFILES: &str = "[General]
StartWithLastProfile=1
Version=2

[Profile0]
Name=default
IsRelative=1
Path=abc.default

[Profile1]
Name=work
IsRelative=1
Path=xyz.work
Default=1
";

// Helper to lay out a registry root with profiles.ini and profile directories
fn registry_root(ini: &str, profile_dirs: &[&str]) -> TempDir {
    let root = TempDir::new().expect("Failed to create temp dir");
    fs::write(root.path().join(REGISTRY_FILE), ini).expect("Failed to write profiles.ini");
    for dir in profile_dirs {
        fs::create_dir_all(root.path().join(dir)).expect("Failed to create profile dir");
    }
    root
}

#[test]
fn test_default_profile_and_explicit_name() {
    let root = registry_root(TWO_PROFILES, &["abc.default", "xyz.work"]);

    let active = resolve(root.path(), None).expect("Failed to resolve active profile");
    assert_eq!(active, root.path().join("xyz.work"));

    let named = resolve(root.path(), Some("default")).expect("Failed to resolve named profile");
    assert_eq!(named, root.path().join("abc.default"));
}

#[test]
fn test_single_install_wins_over_default_profile() {
    let ini = format!("{TWO_PROFILES}\n[Install308046B0AF4A39CB]\nDefault=abc.default\nLocked=1\n");
    let root = registry_root(&ini, &[]);

    let active = resolve(root.path(), None).unwrap();
    assert_eq!(active, root.path().join("abc.default"));
}

#[test]
fn test_two_installs_need_a_name() {
    let ini = format!(
        "{TWO_PROFILES}\n[InstallAAAA]\nDefault=abc.default\n\n[InstallBBBB]\nDefault=xyz.work\n"
    );
    let root = registry_root(&ini, &[]);

    assert!(matches!(
        resolve(root.path(), None),
        Err(Error::AmbiguousInstalls { count: 2 })
    ));
    assert_eq!(
        resolve(root.path(), Some("work")).unwrap(),
        root.path().join("xyz.work")
    );
}

#[test]
fn test_missing_registry() {
    let root = TempDir::new().unwrap();
    match resolve(root.path(), None) {
        Err(Error::RegistryMissing(path)) => assert_eq!(path, root.path().join(REGISTRY_FILE)),
        other => panic!("expected RegistryMissing, got {other:?}"),
    }
}

#[test]
fn test_unknown_profile_name() {
    let root = registry_root(TWO_PROFILES, &[]);
    let err = resolve(root.path(), Some("play")).unwrap_err();
    assert!(matches!(err, Error::ProfileNotFound { ref name, .. } if name == "play"));
    assert!(err.to_string().contains("play"));
}

#[test]
fn test_resolve_file_inside_profile() {
    let root = registry_root(TWO_PROFILES, &[]);

    let file = resolve_file(root.path(), None, Path::new("sessionstore.jsonlz4")).unwrap();
    assert_eq!(file, root.path().join("xyz.work").join("sessionstore.jsonlz4"));

    let dir = resolve_file(root.path(), None, Path::new("")).unwrap();
    assert_eq!(dir, root.path().join("xyz.work"));
}

#[test]
fn test_list_profiles_marks_install_lock() {
    let ini = format!("{TWO_PROFILES}\n[InstallAAAA]\nDefault=xyz.work\nLocked=1\n");
    let root = registry_root(&ini, &[]);

    let profiles = list_profiles(root.path()).unwrap();
    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0].name, "default");
    assert!(!profiles[0].is_default);
    assert_eq!(profiles[0].locked_to_install, None);
    assert_eq!(profiles[1].name, "work");
    assert!(profiles[1].is_default && profiles[1].is_relative);
    assert_eq!(profiles[1].path, Some(root.path().join("xyz.work")));
    assert_eq!(profiles[1].locked_to_install.as_deref(), Some("InstallAAAA"));
}

#[test]
fn test_remove_only_profile() {
    let ini = "[General]\nStartWithLastProfile=1\n\n[Profile0]\nName=solo\nIsRelative=1\nPath=s.solo\n";
    let root = registry_root(ini, &["s.solo"]);
    fs::write(root.path().join("s.solo").join("prefs.js"), "").unwrap();

    let removed = remove_profile(root.path(), None).unwrap();
    assert_eq!(removed, root.path().join("s.solo"));
    assert!(!removed.exists());

    let rewritten = fs::read_to_string(root.path().join(REGISTRY_FILE)).unwrap();
    assert_eq!(rewritten, "[General]\nStartWithLastProfile=1\n\n");
    assert!(matches!(resolve(root.path(), None), Err(Error::NoProfiles)));
}

#[test]
fn test_remove_drops_install_pointing_at_profile() {
    let ini = format!("{TWO_PROFILES}\n[InstallAAAA]\nDefault=xyz.work\nLocked=1\n");
    let root = registry_root(&ini, &["abc.default", "xyz.work"]);

    remove_profile(root.path(), Some("work")).unwrap();

    assert!(root.path().join("abc.default").is_dir());
    assert!(!root.path().join("xyz.work").exists());
    let rewritten = fs::read_to_string(root.path().join(REGISTRY_FILE)).unwrap();
    assert!(!rewritten.contains("xyz.work"));
    assert!(!rewritten.contains("[InstallAAAA]"));
    assert!(rewritten.contains("[Profile0]\nName=default\nIsRelative=1\nPath=abc.default\n"));

    // The remaining profile is now the only one
    assert_eq!(
        resolve(root.path(), None).unwrap(),
        root.path().join("abc.default")
    );
}

#[test]
fn test_remove_missing_directory_reports_io_error() {
    let root = registry_root(TWO_PROFILES, &[]);

    let err = remove_profile(root.path(), Some("default")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));

    // The registry rewrite already happened
    let rewritten = fs::read_to_string(root.path().join(REGISTRY_FILE)).unwrap();
    assert!(!rewritten.contains("abc.default"));
}

#[test]
fn test_names_and_paths_with_comment_characters() {
    let ini = "[Profile0]\nName=keep\nIsRelative=1\nPath=Profiles\n\n\
               [Profile1]\nName=C# dev\nIsRelative=1\nPath=Profiles#dev\nDefault=1\n";
    let root = registry_root(ini, &["Profiles", "Profiles#dev"]);

    assert_eq!(
        resolve(root.path(), Some("C# dev")).unwrap(),
        root.path().join("Profiles#dev")
    );

    let removed = remove_profile(root.path(), None).unwrap();
    assert_eq!(removed, root.path().join("Profiles#dev"));
    assert!(!removed.exists());
    assert!(root.path().join("Profiles").is_dir());

    let rewritten = fs::read_to_string(root.path().join(REGISTRY_FILE)).unwrap();
    assert_eq!(
        rewritten,
        "[Profile0]\nName=keep\nIsRelative=1\nPath=Profiles\n\n"
    );
}

#[test]
fn test_remove_keeps_other_sections_verbatim() {
    let kept = "[General]\r\nStartWithLastProfile=1\r\n\r\n\
                [Profile0]\r\nName=Work; personal = mixed\r\nIsRelative=0\r\n\
                Path=C:\\Users\\me\\AppData\\Roaming\\Mozilla\\Firefox\\Profiles\\x#1;2\r\n\r\n";
    let ini = format!(
        "{kept}[Profile1]\r\nName=old one\r\nIsRelative=1\r\nPath=Profiles/old one\r\nDefault=1\r\n"
    );
    let root = registry_root(&ini, &["Profiles/old one"]);

    remove_profile(root.path(), Some("old one")).unwrap();

    let rewritten = fs::read_to_string(root.path().join(REGISTRY_FILE)).unwrap();
    assert_eq!(rewritten, kept);
    assert!(!root.path().join("Profiles/old one").exists());
}

#[test]
fn test_registry_with_orphan_keys_is_rejected() {
    let root = registry_root("StartWithLastProfile=1\n[Profile0]\nName=a\nPath=a\n", &["a"]);

    assert!(matches!(resolve(root.path(), None), Err(Error::RegistryParse(_))));
    assert!(matches!(
        remove_profile(root.path(), None),
        Err(Error::RegistryParse(_))
    ));
    assert!(root.path().join("a").is_dir());
}
