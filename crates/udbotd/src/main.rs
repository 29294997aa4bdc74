//! Udbot console adapter - runs the `!ud` handler outside a chat framework.
//!
//! Stands in for the hosting framework: reads invocations from argv or
//! stdin and delivers replies to stdout. The handler itself knows
//! nothing about this binary.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, Level};
use udbot_common::{command::UD_COMMAND, Reply, ReplySink};
use udbotd::{BotConfig, LookupHandler};

#[derive(Parser)]
#[command(name = "udbotd")]
#[command(about = UD_COMMAND.help, long_about = None)]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = udbotd::config::CONFIG_PATH)]
    config: PathBuf,

    /// Also print the HTML body of each reply
    #[arg(long)]
    html: bool,

    /// One-shot invocation; without it, lines from stdin are handled
    /// until EOF
    args: Vec<String>,
}

/// Sink that prints replies to stdout.
struct StdoutSink {
    html: bool,
}

impl ReplySink for StdoutSink {
    fn send(&mut self, reply: Reply) -> Result<()> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", reply.body)?;
        if self.html {
            if let Some(html) = reply.html_body {
                writeln!(stdout, "{}", html)?;
            }
        }
        stdout.flush()?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    info!("udbotd v{} starting", env!("CARGO_PKG_VERSION"));

    let config = BotConfig::load(&cli.config);
    let mut handler = LookupHandler::new(&config);
    let mut sink = StdoutSink { html: cli.html };

    if !cli.args.is_empty() {
        let raw = cli.args.join(" ");
        return handler.handle(&raw, &mut sink).await;
    }

    info!("Reading invocations from stdin (!{} <term> [index])", UD_COMMAND.name);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        handler.handle(&line, &mut sink).await?;
    }

    Ok(())
}
