//! seqmorph CLI — replay a message script against one engine instance.
//!
//! Usage:
//!   sm-cli path/to/script.txt
//!   sm-cli path/to/script.txt --config engine.json
//!   cat script.txt | sm-cli

use std::io::Read;
use std::path::{Path, PathBuf};
use std::{fs, io};

use anyhow::{Context, Result};
use clap::Parser;
use sm_host::script::{parse_script, replay};
use sm_host::{Controller, EngineConfig};

#[derive(Debug, Parser)]
#[command(version, about = "Replay inlet messages through the seqmorph transform engine")]
struct Args {
    /// Message script; reads stdin when omitted
    script: Option<PathBuf>,

    /// JSON engine configuration applied before the first message
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut ctrl = match &args.config {
        Some(path) => Controller::with_config(load_config(path)?)?,
        None => Controller::new(),
    };

    let text = match &args.script {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).context("Failed to read stdin")?;
            text
        }
    };

    let messages = parse_script(&text)?;
    log::info!("replaying {} messages", messages.len());

    let (printed, errors) = replay(&mut ctrl, &messages);
    for line in printed {
        println!("{}", line);
    }
    if !errors.is_empty() {
        log::warn!("{} of {} messages failed", errors.len(), messages.len());
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<EngineConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: EngineConfig = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}
