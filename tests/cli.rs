use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn fanbrick(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fanbrick").unwrap();
    cmd.arg("--data-dir")
        .arg(data_dir)
        .env("NO_COLOR", "1")
        .env_remove("FANBRICK_DATA")
        .env_remove("RUST_LOG");
    cmd
}

/// A data dir whose config turns demo seeding off.
fn empty_wall() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"seed_demo": false}"#).unwrap();
    dir
}

#[test]
fn fresh_wall_shows_demo_bricks() {
    let dir = tempfile::tempdir().unwrap();

    fanbrick(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Watching Ronaldo"))
        .stdout(predicate::str::contains("You'll Never Walk Alone"))
        .stdout(predicate::str::contains("Messi's last dance"));

    assert!(dir.path().join("fanBricks.json").exists());
}

#[test]
fn add_then_list() {
    let dir = empty_wall();

    fanbrick(dir.path())
        .args(["add", "Derby day at San Siro", "--club", "AC Milan", "-t", "derby"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brick placed (1)"));

    fanbrick(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. "))
        .stdout(predicate::str::contains("Derby day at San Siro"));

    let stored = std::fs::read_to_string(dir.path().join("fanBricks.json")).unwrap();
    assert!(stored.contains("\"club\": \"AC Milan\""));
    assert!(stored.contains("\"userEmail\": \"fan@example.com\""));
}

#[test]
fn empty_memory_is_rejected() {
    let dir = empty_wall();

    fanbrick(dir.path())
        .args(["add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("memory required"))
        .stderr(predicate::str::contains("Please share your football memory."));

    assert!(!dir.path().join("fanBricks.json").exists());
}

#[test]
fn long_memory_is_rejected() {
    let dir = empty_wall();
    let memory = "a".repeat(201);

    fanbrick(dir.path())
        .args(["add", memory.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("memory too long"));

    fanbrick(dir.path())
        .args(["add", "a".repeat(200).as_str()])
        .assert()
        .success();
}

#[test]
fn oversized_image_is_rejected() {
    let dir = empty_wall();
    let image = dir.path().join("huge.jpg");
    std::fs::write(&image, vec![0u8; 5 * 1024 * 1024 + 1]).unwrap();

    fanbrick(dir.path())
        .args(["add", "Goal!", "--image"])
        .arg(&image)
        .assert()
        .failure()
        .stderr(predicate::str::contains("image too large"));
}

#[test]
fn fav_toggles_and_filters() {
    let dir = empty_wall();
    fanbrick(dir.path()).args(["add", "Opening day"]).assert().success();
    fanbrick(dir.path()).args(["add", "Cup final"]).assert().success();

    fanbrick(dir.path())
        .args(["fav", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Favorited brick 2: Cup final"));

    fanbrick(dir.path())
        .args(["list", "--favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Newest First · 1 filter"))
        .stdout(predicate::str::contains("Cup final"))
        .stdout(predicate::str::contains("Opening day").not());

    fanbrick(dir.path())
        .args(["fav", "2", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unfavorited brick 2"))
        .stdout(predicate::str::contains("No brick matches 7"));
}

#[test]
fn list_header_names_the_sort() {
    let dir = tempfile::tempdir().unwrap();

    fanbrick(dir.path())
        .args(["list", "--sort", "popularity", "-e", "joy", "-t", "ynwa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Most Popular · 2 filters"));
}

#[test]
fn unlisted_stored_club_keeps_the_wall_usable() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("fanBricks.json"),
        r#"[{"id": "w1", "userEmail": "red@wrexham.com", "memory": "Racecourse Ground roar", "color": "bg-card", "club": "Wrexham AFC", "x": 2, "y": 3, "createdAt": "2024-05-02T18:30:00Z"}]"#,
    )
    .unwrap();

    fanbrick(dir.path())
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrexham AFC"));

    fanbrick(dir.path())
        .args(["add", "x", "--club", "Wrexham AFC"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown club"));
}

#[test]
fn unsaved_demo_wall_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file").unwrap();

    fanbrick(&blocker)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("not saved"))
        .stdout(predicate::str::contains("Watching Ronaldo"));
}

#[test]
fn view_shows_details_and_unknown_index_fails() {
    let dir = tempfile::tempdir().unwrap();

    fanbrick(dir.path())
        .args(["view", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kop"))
        .stdout(predicate::str::contains("Liverpool FC"))
        .stdout(predicate::str::contains("#ynwa"));

    fanbrick(dir.path())
        .args(["view", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Brick not found: 9"));
}

#[test]
fn facets_lists_demo_emotions_and_tags() {
    let dir = tempfile::tempdir().unwrap();

    fanbrick(dir.path())
        .arg("facets")
        .assert()
        .success()
        .stdout(predicate::str::contains("nostalgia"))
        .stdout(predicate::str::contains("#champions-league"));
}

#[test]
fn calendar_shows_month_and_selected_day() {
    let dir = empty_wall();

    fanbrick(dir.path())
        .args(["calendar", "--month", "2024-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("February 2024"))
        .stdout(predicate::str::contains("29"));

    fanbrick(dir.path())
        .args(["cal", "--day", "2024-02-29"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thursday, February 29, 2024"))
        .stdout(predicate::str::contains("No memories on February 29, 2024"));

    fanbrick(dir.path())
        .args(["calendar", "--month", "2024-01", "--prev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("December 2023"));

    fanbrick(dir.path())
        .args(["calendar", "--month", "2024-12", "--next", "--next"])
        .assert()
        .success()
        .stdout(predicate::str::contains("February 2025"));
}

#[test]
fn config_round_trip() {
    let dir = empty_wall();

    fanbrick(dir.path())
        .args(["config", "author-email", "ultra@inter.it"])
        .assert()
        .success();

    fanbrick(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("author-email = ultra@inter.it"))
        .stdout(predicate::str::contains("seed-demo = false"));

    fanbrick(dir.path())
        .args(["config", "kit-color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn data_dir_env_is_used_without_flag() {
    let dir = empty_wall();

    Command::cargo_bin("fanbrick")
        .unwrap()
        .env("FANBRICK_DATA", dir.path())
        .env("NO_COLOR", "1")
        .args(["add", "From the env"])
        .assert()
        .success();

    assert!(dir.path().join("fanBricks.json").exists());
}
