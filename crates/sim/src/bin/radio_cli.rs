//! interactive ground station against an emulated satellite

use anyhow::Result;
use colored::Colorize;
use cubesat_link_core::LinkParameters;
use cubesat_link_radio::{GroundRadioDriver, RxRecord, SatelliteId, TxRecord};
use cubesat_link_sim::literal::parse_literal;
use cubesat_link_sim::SimulationPresets;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "NORBI".to_string());
    let identity = SatelliteId::from_name(&name);

    println!("{}", "CubeSat Radio Link Emulator".bright_blue().bold());
    println!("{}", "===========================".bright_blue());
    println!("satellite: {}", identity.to_string().bright_green());
    if identity == SatelliteId::Unknown {
        println!("{}", format!("no satellite named {:?}, it will never answer", name).bright_red());
    }

    let radio = GroundRadioDriver::with_defaults(identity);
    if let Some(config) = SimulationPresets::for_identity(identity) {
        radio.configure(config).await;
    }
    radio.transmitted().connect(|record: &TxRecord| {
        println!(
            "{} {} ({:.1} ms, {} Hz)",
            "tx".bright_yellow().bold(),
            hex::encode_upper(&record.data),
            record.time_on_air.total_ms(),
            record.frequency_error_hz
        );
    });
    radio.received().connect(|record: &RxRecord| {
        let tag = if record.crc_error {
            "rx crc error".bright_red().bold()
        } else {
            "rx".bright_green().bold()
        };
        println!(
            "{} {} (snr {} dB, rssi {} dBm, {} Hz)",
            tag,
            hex::encode_upper(&record.data),
            record.snr_db,
            record.rssi_dbm,
            record.frequency_error_hz
        );
    });

    radio.connect().await?;
    println!("connected: {}", radio.read_config().await.snapshot());
    println!("enter b'..' or [..] to send, :quit to leave");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == ":quit" {
            break;
        }
        match parse_literal(line) {
            Ok(data) => {
                if let Err(e) = radio.send_single(&data).await {
                    println!("{}", format!("send failed: {}", e).bright_red());
                }
            }
            Err(e) => println!("{}", format!("can't parse input: {}", e).bright_red()),
        }
    }

    radio.disconnect().await;
    println!("{}", "bye".bright_blue());
    Ok(())
}
