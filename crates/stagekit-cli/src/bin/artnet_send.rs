use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use stagekit_cli::{CliError, LONG_VERSION, init_tracing};
use stagekit_core::{ARTNET_PORT, send_artnet};

#[derive(Parser, Debug)]
#[command(name = "artnet-send")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Send one ArtDMX packet with every channel of a universe set to the same value.",
    long_about = None,
    after_help = "Examples:\n  artnet-send --ip 192.168.1.50\n  artnet-send --ip 2.0.0.10 --universe 3 --value 0"
)]
struct Cli {
    /// Target IP address or hostname
    #[arg(long)]
    ip: String,

    /// Art-Net UDP port
    #[arg(long, default_value_t = ARTNET_PORT)]
    port: u16,

    /// DMX universe (15-bit port-address, sent little-endian)
    #[arg(long, default_value_t = 0)]
    universe: u16,

    /// Channel value 0-255; larger values wrap modulo 256
    #[arg(long, default_value_t = 255, allow_negative_numbers = true)]
    value: i64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => err.report(),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let value = cli.value as u8;
    let report = send_artnet(&cli.ip, cli.port, cli.universe, value)
        .with_context(|| format!("failed to send Art-Net to {}:{}", cli.ip, cli.port))?;
    println!(
        "Sent Art-Net to {}:{}, universe {}, all channels = {}",
        cli.ip, cli.port, report.universe, report.value
    );
    Ok(())
}
