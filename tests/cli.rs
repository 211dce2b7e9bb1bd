use assert_cmd::Command;
use predicates::prelude::predicate::str;
use std::env;
use std::fs;
use std::path::PathBuf;

use coinmaze::maze::path::Path;
use coinmaze::saver::solution::{SaverSolution, Solution};

const FOUR_PATH: &str = "0 -> 4 -> 8 -> 9 -> 5 -> 6 -> 7 -> 11 -> 10 -> 14 -> 15";

#[test]
fn prints_the_path() {
    let mut cmd = Command::cargo_bin("coinmaze").unwrap();
    cmd.arg("tests/mazes/small.txt");

    cmd.assert().success().stdout("0 -> 1 -> 4\n");
}

#[test]
fn recursive_and_iterative_searches_agree() {
    let mut cmd = Command::cargo_bin("coinmaze").unwrap();
    cmd.arg("tests/mazes/four.txt");
    cmd.assert().success().stdout(str::contains(FOUR_PATH));

    let mut cmd = Command::cargo_bin("coinmaze").unwrap();
    cmd.arg("--iterative").arg("tests/mazes/four.txt");
    cmd.assert().success().stdout(str::contains(FOUR_PATH));
}

#[test]
fn locked_door_means_no_path() {
    let mut cmd = Command::cargo_bin("coinmaze").unwrap();
    cmd.arg("tests/mazes/locked.txt");

    cmd.assert().success().stdout("No path\n");
}

#[test]
fn json_output() {
    let mut cmd = Command::cargo_bin("coinmaze").unwrap();
    cmd.args(["--format", "json", "tests/mazes/small.txt"]);
    cmd.assert()
        .success()
        .stdout(str::contains("\"coin_budget\": 4"))
        .stdout(str::contains("\"coins_spent\": 0"));

    let mut cmd = Command::cargo_bin("coinmaze").unwrap();
    cmd.args(["-f", "json", "tests/mazes/locked.txt"]);
    cmd.assert()
        .success()
        .stdout(str::contains("\"path\": null"));
}

#[test]
fn summary_and_reachable_rooms() {
    let mut cmd = Command::cargo_bin("coinmaze").unwrap();
    cmd.args(["--summary", "--reachable", "tests/mazes/four.txt"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Reachable rooms: 16"))
        .stdout(str::contains("rooms = 16"))
        .stdout(str::contains("connections = 18"))
        .stdout(str::contains("coins spent = 4"))
        .stdout(str::contains("iterations = 25"));
}

#[test]
fn saves_the_solution() {
    let mut file: PathBuf = env::temp_dir();
    file.push(format!("coinmaze-cli-{}.json", std::process::id()));

    let mut cmd = Command::cargo_bin("coinmaze").unwrap();
    cmd.arg("--output").arg(&file).arg("tests/mazes/four.txt");
    cmd.assert().success().stdout(str::contains(FOUR_PATH));

    let solution: Solution = SaverSolution::new(file.clone())
        .load_solution()
        .unwrap()
        .unwrap();
    fs::remove_file(&file).unwrap();

    assert_eq!(solution.maze, "tests/mazes/four.txt");
    assert_eq!((solution.width, solution.length), (4, 4));
    assert_eq!(solution.coin_budget, 4);
    assert_eq!(solution.coins_spent, Some(4));
    assert_eq!(
        solution.path,
        Some(Path::from_vec(&[0, 4, 8, 9, 5, 6, 7, 11, 10, 14, 15]))
    );
}

#[test]
fn missing_file() {
    let mut cmd = Command::cargo_bin("coinmaze").unwrap();
    cmd.arg("tests/mazes/does_not_exist.txt");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(str::contains("cannot read tests/mazes/does_not_exist.txt"));
}

#[test]
fn invalid_descriptions() {
    let mut cmd = Command::cargo_bin("coinmaze").unwrap();
    cmd.arg("tests/mazes/no_exit.txt");
    cmd.assert()
        .failure()
        .stderr(str::contains("no exit room"));

    let mut cmd = Command::cargo_bin("coinmaze").unwrap();
    cmd.arg("tests/mazes/bad_width.txt");
    cmd.assert()
        .failure()
        .stderr(str::contains("invalid width value: \"2x\""));
}
