use std::process::Command;

use assert_cmd::prelude::*;

fn run(args: &[&str]) -> (bool, String) {
    let output = Command::cargo_bin("sokoban-search")
        .unwrap()
        .args(args)
        .output()
        .unwrap();
    (output.status.success(), String::from_utf8(output.stdout).unwrap())
}

#[test]
fn run_xsb() {
    let (success, stdout) = run(&["puzzles/xsb/02-one-way.txt"]);
    assert!(success);
    assert!(stdout.starts_with("Solving puzzles/xsb/02-one-way.txt...\nStates created total: "));
    assert!(stdout.contains("Found solution:\n"));
    let last_step = r"Step 3 - Move North:
###
#*#
#@#
# #
# #
# #
###
";
    assert!(stdout.contains(last_step));
    assert!(stdout.ends_with("UUU\nMoves: 3\nPushes: 3\n"));
}

#[test]
fn run_native() {
    let (success, stdout) = run(&["--native", "-a", "astar", "puzzles/native/01-two-west.txt"]);
    assert!(success);
    let steps = r"Step 0 - Initial state:
OOOOOO
Oa ARO
OOOOOO
---------------------------------
Step 1 - Move West:
OOOOOO
OaAR O
OOOOOO
---------------------------------
Step 2 - Move West:
OOOOOO
OAR  O
OOOOOO
---------------------------------
LL
";
    assert!(stdout.contains(steps));
}

#[test]
fn run_no_solution() {
    let (success, stdout) = run(&["-a", "A*", "-H", "deadlock", "puzzles/native/no-solution-corner.txt"]);
    assert!(success);
    assert!(stdout.contains("Dead ends total: "));
    assert!(stdout.ends_with("No solution\n"));
}

#[test]
fn run_limited() {
    let (success, stdout) = run(&["--max-visited", "1", "puzzles/native/02-paired.txt"]);
    assert!(success);
    assert!(stdout.contains("Unique visited total: 1\n"));
    assert!(stdout.ends_with("Gave up without finding a solution\n"));
}

#[test]
fn run_with_status() {
    let (success, stdout) = run(&["--status", "puzzles/xsb/01-simplest.txt"]);
    assert!(success);
    assert!(stdout.contains("Visited new depth: 0\ntotal created / unique visited"));
    assert!(stdout.contains("Visited new depth: 1\n"));
    // bfs ignores the heuristic
    assert!(stdout.contains("\nFrontier: 0, heuristic score: 0\n"));
    assert!(stdout.ends_with("R\nMoves: 1\nPushes: 1\n"));

    // only pushing north is possible, the box gets one tile closer each step
    let (success, stdout) = run(&["-s", "-a", "greedy", "puzzles/xsb/02-one-way.txt"]);
    assert!(success);
    assert!(stdout.contains("Visited new depth: 0\n"));
    assert!(stdout.contains("\nFrontier: 0, heuristic score: 3\n"));
    assert!(stdout.contains("Visited new depth: 1\n"));
    assert!(stdout.contains("\nFrontier: 0, heuristic score: 2\n"));
}

#[test]
fn run_bad_formatting_args() {
    // doesn't check stderr - clap decides which of the two it complains about
    let (success, stdout) = run(&["--native", "--xsb", "puzzles/xsb/01-simplest.txt"]);
    assert!(!success);
    assert_eq!(stdout, "");
}

#[test]
fn run_bad_config() {
    let (success, stdout) = run(&["-a", "ida", "puzzles/xsb/01-simplest.txt"]);
    assert!(!success);
    assert_eq!(stdout, "Unknown algorithm: ida\n");

    let (success, stdout) = run(&["-H", "euclid", "puzzles/xsb/01-simplest.txt"]);
    assert!(!success);
    assert_eq!(stdout, "Unknown heuristic: euclid\n");

    let (success, stdout) = run(&["--max-visited", "lots", "puzzles/xsb/01-simplest.txt"]);
    assert!(!success);
    assert!(stdout.starts_with("Invalid max-visited lots"));
}

#[test]
fn run_bad_puzzle() {
    let (success, stdout) = run(&["puzzles/does-not-exist.txt"]);
    assert!(!success);
    assert!(stdout.starts_with("Can't load puzzle puzzles/does-not-exist.txt"));

    let (success, stdout) = run(&["puzzles/invalid/two-agents.txt"]);
    assert!(!success);
    assert!(stdout.ends_with("More than one agent\n"));
}
