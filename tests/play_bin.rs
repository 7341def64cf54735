use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

#[test]
fn play_binary_reaches_first_move() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_seabattle"))
        .args(["play", "--seed", "7"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to run seabattle binary");

    // Enter for the pause, then every cell once; the human cannot run dry.
    let mut script = String::from("\n");
    for r in 1..=6 {
        for c in 1..=6 {
            script.push_str(&format!("{} {}\n", r, c));
        }
    }
    let mut stdin = child.stdin.take().expect("stdin not piped");
    stdin.write_all(script.as_bytes()).unwrap();
    drop(stdin);

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(child.wait_with_output());
    });
    let output = rx
        .recv_timeout(Duration::from_secs(30))
        .expect("seabattle play did not finish")
        .expect("failed to wait for seabattle");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.contains("Welcome to Sea Battle."));
    assert!(stdout.contains("Your move - "));
    assert!(stdout.contains("You won!!!") || stdout.contains("luckier than you"));
}
