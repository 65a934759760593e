use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::warn;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

use voicecart_cli::app::App;
use voicecart_cli::capture::{
    CaptureEvent, NullTranscriptSource, StdinTranscriptSource, TranscriptSource,
};
use voicecart_cli::debounce::FlushDebouncer;
use voicecart_cli::remote::StateClient;

/// Quiescence window before dirty state is flushed to the backend.
const DEBOUNCE: Duration = Duration::from_millis(400);

#[derive(Parser)]
#[command(name = "voicecart")]
#[command(about = "Voice-driven shopping list assistant", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the persistence service
    #[arg(long, global = true, default_value = "http://127.0.0.1:4000")]
    server_url: String,

    /// User id the list state is keyed by
    #[arg(long, global = true, default_value = "default")]
    user: String,

    /// Skip the backend entirely and keep state in memory only
    #[arg(long, global = true)]
    offline: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log only warnings and errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpret one utterance and apply it to the list
    Say {
        /// The utterance, e.g. `voicecart say add 3 apples`
        text: Vec<String>,
    },

    /// Interactive session: each stdin line is one final transcript
    Repl {
        /// Treat speech capture as unavailable (no transcripts are read)
        #[arg(long, hide = true)]
        no_capture: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let client = if cli.offline {
        None
    } else {
        Some(StateClient::new(&cli.server_url, &cli.user))
    };
    let app = App::connect(client).await;

    match cli.command {
        Commands::Say { text } => run_say(app, &text.join(" ")).await,
        Commands::Repl { no_capture } => {
            let source: Box<dyn TranscriptSource> = if no_capture {
                Box::new(NullTranscriptSource)
            } else {
                Box::new(StdinTranscriptSource)
            };
            run_repl(app, source).await
        }
    }
}

async fn run_say(mut app: App, text: &str) -> Result<()> {
    app.handle_transcript(text);
    app.flush().await;
    Ok(())
}

/// Event loop over the capture source: process each final transcript
/// synchronously, flush dirty state after the debounce window.
async fn run_repl(mut app: App, source: Box<dyn TranscriptSource>) -> Result<()> {
    if !source.is_supported() {
        println!("Speech capture is not available on this platform.");
        return Ok(());
    }

    app.greet();

    let (tx, mut rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        let mut source = source;
        loop {
            let event = source.next_event();
            let closed = event == CaptureEvent::Closed;
            if tx.send(event).is_err() || closed {
                break;
            }
        }
    });

    let mut debounce = FlushDebouncer::new(DEBOUNCE);
    loop {
        tokio::select! {
            event = rx.recv() => match event {
                None | Some(CaptureEvent::Closed) => break,
                Some(CaptureEvent::Error(message)) => {
                    warn!("capture error: {message}");
                    println!("Could not understand. Please try again.");
                }
                Some(CaptureEvent::Transcript(text)) => {
                    if app.handle_transcript(&text) {
                        debounce.mark_dirty();
                    }
                }
            },
            () = sleep_until(debounce.deadline().unwrap_or_else(Instant::now)), if debounce.is_dirty() => {
                app.flush().await;
                debounce.reset();
            }
        }
    }

    // final flush for changes still inside the debounce window
    if debounce.is_dirty() {
        app.flush().await;
    }
    Ok(())
}
