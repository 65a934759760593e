use std::io::{self, BufRead};

/// One event from the capture collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    /// Final transcript for one utterance. No streaming partials.
    Transcript(String),
    /// Recognition failed; the session returns to idle, ready to retry.
    Error(String),
    /// The source will produce nothing further.
    Closed,
}

/// Capability provider for speech capture. The interpreter only ever sees
/// the final transcript text, so anything that yields utterance strings
/// can stand in for a microphone.
pub trait TranscriptSource: Send {
    /// Whether this platform can capture at all.
    fn is_supported(&self) -> bool {
        true
    }

    /// Block until the next capture event.
    fn next_event(&mut self) -> CaptureEvent;
}

/// Reads one transcript per stdin line.
#[derive(Debug, Default)]
pub struct StdinTranscriptSource;

impl TranscriptSource for StdinTranscriptSource {
    fn next_event(&mut self) -> CaptureEvent {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => CaptureEvent::Closed,
            Ok(_) => CaptureEvent::Transcript(line.trim().to_string()),
            Err(err) => CaptureEvent::Error(err.to_string()),
        }
    }
}

/// Stand-in for platforms without any capture capability.
#[derive(Debug, Default)]
pub struct NullTranscriptSource;

impl TranscriptSource for NullTranscriptSource {
    fn is_supported(&self) -> bool {
        false
    }

    fn next_event(&mut self) -> CaptureEvent {
        CaptureEvent::Closed
    }
}

/// Exclusive listening flag: a new capture session cannot begin while one
/// is active, and stopping cancels delivery of further results.
#[derive(Debug, Default)]
pub struct ListenGate {
    active: bool,
}

impl ListenGate {
    pub fn try_start(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        true
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_listening(&self) -> bool {
        self.active
    }
}
