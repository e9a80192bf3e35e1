use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use sugam_core::{Coordinator, Directory, DirectoryConfig, Feedback, Lang};
use sugam_voice::{
    HapticMotor, RecognitionEvent, Recognizer, RecognizerControl, UtteranceEvent,
    spawn_synthesizer,
};
use tokio::io::{AsyncBufReadExt, BufReader};

mod screen;
mod surface;

use crate::screen::ScreenLiveRegion;
use crate::surface::Command;

/// Command line arguments for the sugam kiosk
#[derive(Parser, Debug)]
#[command(name = "sugam-kiosk")]
#[command(about = "Sugam accessible transit-information kiosk")]
struct Args {
    /// Path to a station directory JSON file (defaults to the built-in list)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial display language: en, hi or mr
    #[arg(short, long)]
    lang: Option<String>,

    /// Run without speech synthesis
    #[arg(long)]
    no_speech: bool,

    /// Run without haptic feedback
    #[arg(long)]
    no_haptics: bool,

    /// Run without voice recognition
    #[arg(long)]
    no_voice: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt().pretty().init();

    let config = load_directory_config(args.config.as_deref()).await?;
    let directory = Directory::from_config(config).context("Invalid station directory")?;
    tracing::info!("Loaded directory with {} stations", directory.stations().len());

    let live_region = ScreenLiveRegion::new();

    let (recognizer, mut recognition_events) = Recognizer::new();
    let recognizer = Arc::new(Mutex::new(recognizer));

    let feedback = Feedback {
        speech: if args.no_speech {
            None
        } else {
            let (handle, events) = spawn_synthesizer();
            tokio::spawn(echo_utterances(events));
            Some(Box::new(handle))
        },
        haptics: if args.no_haptics {
            None
        } else {
            Some(Box::new(HapticMotor))
        },
        recognition: if args.no_voice {
            None
        } else {
            Some(Box::new(RecognizerControl::new(recognizer.clone())))
        },
        live_region: Box::new(live_region.clone()),
    };

    let mut coordinator = Coordinator::new(directory, feedback);
    if let Some(tag) = args.lang.as_deref() {
        coordinator.set_language(Lang::from_tag(tag));
    }

    println!("{}", screen::paint(&coordinator.view(), &live_region.text()));
    println!("Type 'help' for the command list.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };
                match Command::parse(&line) {
                    Some(Command::Quit) => break,
                    Some(Command::Help) => {
                        println!("{}", surface::HELP);
                        continue;
                    }
                    Some(command) => surface::apply(&mut coordinator, command),
                    None if coordinator.is_listening() => {
                        recognizer.lock().unwrap().submit_transcript(line.trim());
                        // Repainting waits for the recognition events.
                        continue;
                    }
                    None => {
                        if !line.trim().is_empty() {
                            println!("Unknown command. Type 'help' for the list.");
                        }
                        continue;
                    }
                }
            }
            event = recognition_events.recv() => {
                let Some(event) = event else { break };
                match event {
                    RecognitionEvent::Result { transcript, .. } => {
                        coordinator.voice_result(&transcript);
                    }
                    RecognitionEvent::Ended { .. } => coordinator.voice_ended(),
                }
            }
        }
        println!("{}", screen::paint(&coordinator.view(), &live_region.text()));
    }

    Ok(())
}

async fn load_directory_config(path: Option<&std::path::Path>) -> anyhow::Result<DirectoryConfig> {
    let Some(path) = path else {
        return Ok(DirectoryConfig::builtin());
    };
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    let config: DirectoryConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;
    tracing::info!("Loaded station config from {}", path.display());
    Ok(config)
}

/// Mirror started utterances onto the terminal; the kiosk's stand-in for an
/// audio device.
async fn echo_utterances(mut events: tokio::sync::mpsc::UnboundedReceiver<UtteranceEvent>) {
    while let Some(event) = events.recv().await {
        if let UtteranceEvent::Started { text } = event {
            println!("🔊 {text}");
        }
    }
}
