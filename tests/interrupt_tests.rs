#![cfg(unix)]

use std::net::TcpListener;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::sleep;
use std::time::{Duration, Instant};

fn spawn_client(addr: &str, player: &str, initiative: &str) -> Child {
    Command::new(env!("CARGO_BIN_EXE_seabattle"))
        .args([
            "client",
            "--connect",
            addr,
            "--player",
            player,
            "--initiative",
            initiative,
            "--seed",
            "1",
        ])
        .env("SEABATTLE_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to run seabattle binary")
}

fn interrupt(child: &Child) {
    let status = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("failed to run kill");
    assert!(status.success());
}

fn wait_with_deadline(child: &mut Child, deadline: Duration) -> ExitStatus {
    let start = Instant::now();
    loop {
        if let Some(status) = child.try_wait().expect("wait failed") {
            return status;
        }
        if start.elapsed() > deadline {
            let _ = child.kill();
            panic!("client still running {:?} after Ctrl-C", deadline);
        }
        sleep(Duration::from_millis(50));
    }
}

#[test]
fn ctrl_c_ends_blocked_console_prompt() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let mut child = spawn_client(&addr, "human", "first");
    // Stdin stays open, so the prompt blocks until the process is stopped.
    let _stdin = child.stdin.take();
    let (_peer, _) = listener.accept().unwrap();
    sleep(Duration::from_millis(500));

    interrupt(&child);
    let status = wait_with_deadline(&mut child, Duration::from_secs(10));
    assert_eq!(status.code(), Some(130));
}

#[test]
fn ctrl_c_stops_client_waiting_for_peer() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let mut child = spawn_client(&addr, "ai", "second");
    let (_peer, _) = listener.accept().unwrap();
    sleep(Duration::from_millis(500));

    interrupt(&child);
    let status = wait_with_deadline(&mut child, Duration::from_secs(10));
    assert!(!status.success());
}
