use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

use crate::common::{day_dir, daysort, set_mtime, snapshot, write_dated};

#[test]
fn default_run_files_a_txt_under_its_day() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    write_dated(src.path(), "a.txt", b"hello\n", (2024, 3, 5));

    daysort()
        .arg(src.path())
        .arg(dest.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(overwrite mode: skip)"))
        .stdout(predicate::str::contains("Copied:"))
        .stdout(predicate::str::contains("File organization completed successfully!"));

    let copied = dest.path().join(day_dir(2024, 3, 5)).join("a.txt");
    assert_eq!(fs::read(copied).unwrap(), b"hello\n");
}

#[test]
fn nested_files_are_flattened_into_buckets() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    write_dated(src.path(), "2019/trip/IMG_0001.jpg", b"jpeg-1", (2019, 7, 14));
    write_dated(src.path(), "misc/notes.md", b"# notes", (2024, 1, 1));
    write_dated(src.path(), "misc/deeper/still/more.bin", &[0, 1, 2, 255], (2024, 1, 1));

    daysort().arg(src.path()).arg(dest.path()).assert().success();

    let files = snapshot(dest.path());
    assert_eq!(files.len(), 3);
    assert_eq!(files[&day_dir(2019, 7, 14).join("IMG_0001.jpg")], b"jpeg-1");
    assert_eq!(files[&day_dir(2024, 1, 1).join("notes.md")], b"# notes");
    assert_eq!(files[&day_dir(2024, 1, 1).join("more.bin")], vec![0, 1, 2, 255]);
}

#[test]
fn destination_is_created_with_parents() {
    let src = tempdir().unwrap();
    let tmp = tempdir().unwrap();
    let dest = tmp.path().join("not/yet/there");
    write_dated(src.path(), "a.txt", b"a", (2022, 2, 22));

    daysort().arg(src.path()).arg(&dest).assert().success();

    assert!(dest.join(day_dir(2022, 2, 22)).join("a.txt").is_file());
}

#[test]
fn destination_inside_source_is_not_reprocessed() {
    let src = tempdir().unwrap();
    write_dated(src.path(), "a.txt", b"a", (2024, 3, 5));
    write_dated(src.path(), "z.txt", b"z", (2024, 3, 6));
    let dest = src.path().join("organized");

    daysort()
        .args(["--overwrite", "rename"])
        .arg(src.path())
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 copied, 0 overwritten, 0 renamed, 0 skipped"));

    let files = snapshot(&dest);
    assert_eq!(files.len(), 2);
}

#[test]
fn overwrite_replaces_contents() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    let a = write_dated(src.path(), "a.txt", b"first", (2024, 3, 5));
    daysort().arg(src.path()).arg(dest.path()).assert().success();

    fs::write(&a, b"second version").unwrap();
    set_mtime(&a, (2024, 3, 5));

    daysort()
        .arg("--overwrite=overwrite")
        .arg(src.path())
        .arg(dest.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Overwriting:"));

    let files = snapshot(dest.path());
    assert_eq!(files.len(), 1);
    assert_eq!(files[&day_dir(2024, 3, 5).join("a.txt")], b"second version");
}

#[test]
fn overwrite_onto_itself_keeps_the_bytes() {
    let dest = tempdir().unwrap();
    let bucket = dest.path().join(day_dir(2024, 3, 5));
    write_dated(&bucket, "a.txt", b"precious", (2024, 3, 5));

    daysort()
        .arg("--overwrite=overwrite")
        .arg(&bucket)
        .arg(dest.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped (file exists):"))
        .stdout(predicate::str::contains("0 copied, 0 overwritten, 0 renamed, 1 skipped"));

    assert_eq!(fs::read(bucket.join("a.txt")).unwrap(), b"precious");
}

#[cfg(unix)]
#[test]
fn overwrite_replaces_permission_bits() {
    use std::os::unix::fs::PermissionsExt;

    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    let script = write_dated(src.path(), "run.sh", b"#!/bin/sh\n", (2024, 3, 5));
    fs::set_permissions(&script, fs::Permissions::from_mode(0o644)).unwrap();
    daysort().arg(src.path()).arg(dest.path()).assert().success();

    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    daysort().arg("--overwrite=overwrite").arg(src.path()).arg(dest.path()).assert().success();

    let copied = dest.path().join(day_dir(2024, 3, 5)).join("run.sh");
    assert_eq!(fs::metadata(copied).unwrap().permissions().mode() & 0o777, 0o755);
}

#[test]
fn skip_is_idempotent() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    write_dated(src.path(), "a.txt", b"a", (2024, 3, 5));
    write_dated(src.path(), "sub/b.txt", b"b", (2021, 11, 30));

    daysort().arg(src.path()).arg(dest.path()).assert().success();
    let after_first = snapshot(dest.path());

    daysort()
        .arg(src.path())
        .arg(dest.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied:").not())
        .stdout(predicate::str::contains("Skipped (file exists):").count(2))
        .stdout(predicate::str::contains("0 copied, 0 overwritten, 0 renamed, 2 skipped"));

    assert_eq!(snapshot(dest.path()), after_first);
}

#[test]
fn rename_never_touches_the_earlier_copy() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    let a = write_dated(src.path(), "a.txt", b"original", (2024, 3, 5));
    daysort().arg(src.path()).arg(dest.path()).assert().success();

    fs::write(&a, b"edited").unwrap();
    set_mtime(&a, (2024, 3, 5));

    for _ in 0..2 {
        daysort()
            .arg("--overwrite=rename")
            .arg(src.path())
            .arg(dest.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Renamed and copied:"));
    }

    let bucket = day_dir(2024, 3, 5);
    let files = snapshot(dest.path());
    assert_eq!(files.len(), 3);
    assert_eq!(files[&bucket.join("a.txt")], b"original");
    assert_eq!(files[&bucket.join("a_1.txt")], b"edited");
    assert_eq!(files[&bucket.join("a_2.txt")], b"edited");
}

#[test]
fn same_name_in_different_folders_collides_in_one_bucket() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    write_dated(src.path(), "x/photo.jpg", b"from x", (2024, 3, 5));
    write_dated(src.path(), "y/photo.jpg", b"from y", (2024, 3, 5));

    daysort().arg("--overwrite=rename").arg(src.path()).arg(dest.path()).assert().success();

    let bucket = day_dir(2024, 3, 5);
    let files = snapshot(dest.path());
    assert_eq!(files[&bucket.join("photo.jpg")], b"from x");
    assert_eq!(files[&bucket.join("photo_1.jpg")], b"from y");
}

#[test]
fn rename_puts_counter_before_a_dotfile_name() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    write_dated(src.path(), ".bashrc", b"export A=1\n", (2024, 3, 5));
    write_dated(&dest.path().join(day_dir(2024, 3, 5)), ".bashrc", b"older", (2024, 3, 5));

    daysort().arg("--overwrite=rename").arg(src.path()).arg(dest.path()).assert().success();

    let bucket = day_dir(2024, 3, 5);
    let files = snapshot(dest.path());
    assert_eq!(files.len(), 2);
    assert_eq!(files[&bucket.join(".bashrc")], b"older");
    assert_eq!(files[&bucket.join("_1.bashrc")], b"export A=1\n");
}

#[cfg(unix)]
#[test]
fn permission_bits_follow_the_source() {
    use std::os::unix::fs::PermissionsExt;

    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    let script = write_dated(src.path(), "run.sh", b"#!/bin/sh\necho hi\n", (2024, 3, 5));
    let private = write_dated(src.path(), "secret.txt", b"s", (2024, 3, 5));
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    fs::set_permissions(&private, fs::Permissions::from_mode(0o600)).unwrap();

    daysort().arg(src.path()).arg(dest.path()).assert().success();

    let bucket = dest.path().join(day_dir(2024, 3, 5));
    let mode = |name: &str| fs::metadata(bucket.join(name)).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode("run.sh"), 0o755);
    assert_eq!(mode("secret.txt"), 0o600);
}

#[test]
fn blocked_day_directory_aborts_with_one() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    write_dated(src.path(), "a.txt", b"a", (2024, 3, 5));
    // A plain file where the year directory should go.
    fs::write(dest.path().join("2024"), b"in the way").unwrap();

    daysort()
        .arg(src.path())
        .arg(dest.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to create directory"));
}

#[cfg(unix)]
#[test]
fn unreadable_subdirectory_aborts_the_walk() {
    use std::os::unix::fs::PermissionsExt;

    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    write_dated(src.path(), "a.txt", b"a", (2024, 3, 5));
    write_dated(src.path(), "locked/inner.txt", b"i", (2024, 3, 5));
    write_dated(src.path(), "z.txt", b"z", (2024, 3, 5));
    let locked = src.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(&locked).is_ok() {
        // Privileged user; permissions are not enforced.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let assert = daysort().arg(src.path()).arg(dest.path()).assert();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert.code(1).stderr(predicate::str::contains("failed to walk"));
    let bucket = dest.path().join(day_dir(2024, 3, 5));
    assert!(bucket.join("a.txt").is_file());
    assert!(!bucket.join("z.txt").exists());
}
