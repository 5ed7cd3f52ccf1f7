use rootenv_platform::{MapEnv, program_path};
use std::path::PathBuf;
#[cfg(unix)]
use rootenv_platform::{ExecutableLocator, SearchPath, WhichLocator};
#[cfg(unix)]
use std::{fs, path::Path};
#[cfg(unix)]
use tempfile::tempdir;

#[cfg(unix)]
fn write_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "#!/bin/sh\n").unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
#[test]
fn test_which_locator_finds_in_search_path() {
    let dir = tempdir().unwrap();
    let sbin = dir.path().join("engine/sbin");
    write_executable(&sbin.join("mysqld"));

    let search = SearchPath::new().prepend(&sbin);
    let found = WhichLocator::new().locate("mysqld", &search).unwrap();

    assert_eq!(found, sbin.join("mysqld"));
}

#[cfg(unix)]
#[test]
fn test_which_locator_first_match_wins() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first");
    let second = dir.path().join("second");
    write_executable(&first.join("mysqld"));
    write_executable(&second.join("mysqld"));

    let search = SearchPath::new().prepend(&second).prepend(&first);
    let found = WhichLocator::new().locate("mysqld", &search).unwrap();

    assert_eq!(found, first.join("mysqld"));
}

#[cfg(unix)]
#[test]
fn test_which_locator_skips_directories_without_binary() {
    let dir = tempdir().unwrap();
    let empty = dir.path().join("empty");
    let bin = dir.path().join("bin");
    fs::create_dir_all(&empty).unwrap();
    write_executable(&bin.join("mysqld"));

    let search = SearchPath::new().prepend(&bin).prepend(&empty);
    let found = WhichLocator::new().locate("mysqld", &search);

    assert_eq!(found, Some(bin.join("mysqld")));
}

#[cfg(unix)]
#[test]
fn test_which_locator_relative_entry_uses_cwd() {
    let dir = tempdir().unwrap();
    write_executable(&dir.path().join("tools/mysqld"));

    let search = SearchPath::from_value("tools");
    let found = WhichLocator::new()
        .with_cwd(dir.path())
        .locate("mysqld", &search);

    assert_eq!(found, Some(dir.path().join("tools/mysqld")));
}

#[test]
fn test_program_path_from_captured_process() {
    let env = MapEnv::capture();
    let path: PathBuf = program_path(&env).unwrap();
    assert!(path.is_absolute());
}
