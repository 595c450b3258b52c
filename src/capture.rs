use std::io::Read;
use std::sync::mpsc;
use std::time::{Duration, Instant};

/// Default deadline for the bounded capture strategy, in milliseconds.
pub const DEFAULT_CAPTURE_DEADLINE_MS: u64 = 3000;

/// Environment variable overriding the capture deadline in milliseconds.
/// `0` selects the eager blocking drain.
pub const CAPTURE_DEADLINE_ENV: &str = "OMCM_CAPTURE_DEADLINE_MS";

const CHUNK_SIZE: usize = 8 * 1024;

/// Drain a stream to completion in one blocking pass.
///
/// A closed descriptor, a read error, or non-UTF-8 bytes all yield an
/// empty string. Absence of input is not an error.
pub fn capture<R: Read>(mut reader: R) -> String {
    let mut buffer = String::new();
    match reader.read_to_string(&mut buffer) {
        Ok(_) => buffer,
        Err(_) => String::new(),
    }
}

/// Drain a stream, resolving with whatever has accumulated when
/// end-of-stream or `deadline` fires, whichever is first.
///
/// The reader runs on its own thread and feeds chunks through a channel;
/// dropping the sender is the end-of-stream signal, so the race resolves
/// exactly once. A reader still blocked past the deadline is abandoned;
/// the process is about to exit anyway.
pub fn capture_with_deadline<R>(reader: R, deadline: Duration) -> String
where
    R: Read + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<Vec<u8>>();

    std::thread::spawn(move || {
        let mut reader = reader;
        let mut chunk = [0u8; CHUNK_SIZE];
        loop {
            match reader.read(&mut chunk) {
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    if tx.send(chunk[..n].to_vec()).is_err() {
                        break;
                    }
                }
            }
        }
    });

    let cutoff = Instant::now() + deadline;
    let mut buffer = Vec::new();
    loop {
        let remaining = cutoff.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            break;
        }
        match rx.recv_timeout(remaining) {
            Ok(chunk) => buffer.extend_from_slice(&chunk),
            Err(_) => break,
        }
    }

    String::from_utf8_lossy(&buffer).into_owned()
}

/// Capture the process's standard input with the strategy selected by
/// `deadline`: `None` drains eagerly, `Some` bounds the wait.
///
/// This must be the only reader of the descriptor; the result is handed to
/// the dispatcher as a plain string.
pub fn capture_stdin(deadline: Option<Duration>) -> String {
    match deadline {
        None => capture(std::io::stdin().lock()),
        Some(deadline) => capture_with_deadline(std::io::stdin(), deadline),
    }
}

/// Resolve the capture strategy from the environment. Unset or unparseable
/// values fall back to the default bounded deadline.
pub fn deadline_from_env() -> Option<Duration> {
    let default = Some(Duration::from_millis(DEFAULT_CAPTURE_DEADLINE_MS));
    let raw = match std::env::var(CAPTURE_DEADLINE_ENV) {
        Ok(value) => value,
        Err(_) => return default,
    };
    match raw.trim().parse::<u64>() {
        Ok(0) => None,
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(_) => default,
    }
}
