//! Beast CLI.
//!
//! - `beast replay <packets.jsonl>` - run the agent over recorded packets, one decision per line
//! - `beast config` - print the effective configuration as YAML

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use beast_bot::{BotConfig, Brain};
use beast_core::{AgentId, ControlOutput, GamePacket};
use beast_tools::{LogTraceSink, TraceEvent, TraceSink};

#[derive(Parser)]
#[command(name = "beast")]
#[command(about = "Utility-driven car-ball agent", version)]
struct Cli {
    /// Configuration file (defaults are used when it does not exist)
    #[arg(short, long, global = true, default_value = "beast.yaml")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay recorded packets (one JSON `GamePacket` per line) through the agent
    Replay {
        /// Packet file; `-` reads stdin
        packets: PathBuf,

        /// Index of the controlled car in each packet
        #[arg(long, default_value_t = 0)]
        index: usize,

        /// Team of the controlled car (0 = blue, 1 = orange)
        #[arg(long, default_value_t = 0)]
        team: u8,

        /// Write decision trace events to this file as JSON lines
        #[arg(long)]
        trace: Option<PathBuf>,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = BotConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    match cli.command {
        Commands::Replay {
            packets,
            index,
            team,
            trace,
        } => replay(config, &packets, AgentId::new(index, team), trace.as_deref()),
        Commands::Config => {
            print!("{}", config.to_yaml()?);
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct DecisionLine {
    tick: u64,
    doing: String,
    output: ControlOutput,
}

fn replay(config: BotConfig, packets: &Path, agent: AgentId, trace: Option<&Path>) -> Result<()> {
    let input: Box<dyn BufRead> = if packets == Path::new("-") {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(packets)
            .with_context(|| format!("opening packets {}", packets.display()))?;
        Box::new(BufReader::new(file))
    };

    let sink: Box<dyn TraceSink> = match trace {
        Some(path) => Box::new(JsonLinesSink::create(path)?),
        None => Box::new(LogTraceSink),
    };
    let mut brain = Brain::standard(agent, config)?.with_trace_sink(sink);

    tracing::info!(agent = %agent, packets = %packets.display(), "replay starting");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut count = 0u64;

    for (line_no, line) in input.lines().enumerate() {
        let line = line.context("reading packets")?;
        if line.trim().is_empty() {
            continue;
        }
        let mut packet: GamePacket = serde_json::from_str(&line)
            .with_context(|| format!("packet on line {}", line_no + 1))?;

        // The recording has no idea what we would have pressed; feed our own last input back.
        if let Some(car) = packet.cars.get_mut(agent.index) {
            car.last_input = brain.last_input();
        }

        let output = brain.step(&packet);
        let decision = DecisionLine {
            tick: packet.tick,
            doing: brain.doing().to_string(),
            output,
        };
        serde_json::to_writer(&mut out, &decision)?;
        writeln!(out)?;
        count += 1;
    }

    out.flush()?;
    tracing::info!(agent = %agent, ticks = count, "replay finished");
    Ok(())
}

/// Writes each trace event as one JSON line.
struct JsonLinesSink {
    out: BufWriter<File>,
}

impl JsonLinesSink {
    fn create(path: &Path) -> Result<Self> {
        let file =
            File::create(path).with_context(|| format!("creating trace {}", path.display()))?;
        Ok(Self {
            out: BufWriter::new(file),
        })
    }
}

impl TraceSink for JsonLinesSink {
    fn emit(&mut self, event: TraceEvent) {
        let written = serde_json::to_writer(&mut self.out, &event)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(self.out));
        if let Err(error) = written {
            tracing::warn!(%error, "dropping trace event");
        }
    }
}

impl Drop for JsonLinesSink {
    fn drop(&mut self) {
        if let Err(error) = self.out.flush() {
            tracing::warn!(%error, "failed to flush trace");
        }
    }
}
