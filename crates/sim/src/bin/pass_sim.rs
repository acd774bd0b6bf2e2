//! scripted telemetry passes over each emulated satellite

use anyhow::Result;
use colored::Colorize;
use cubesat_link_radio::SatelliteId;
use cubesat_link_sim::scenarios::{run_pass, PassPlan, PassSummary};
use cubesat_link_sim::SimulationPresets;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    println!("{}", "CubeSat Pass Simulation".bright_blue().bold());
    println!("{}", "=======================".bright_blue());

    let names: Vec<String> = std::env::args().skip(1).collect();
    let identities: Vec<SatelliteId> = if names.is_empty() {
        vec![SatelliteId::Norbi, SatelliteId::Norbi2, SatelliteId::Stratosat]
    } else {
        names.iter().map(|n| SatelliteId::from_name(n)).collect()
    };

    let plan = PassPlan::default();
    let links = [
        ("clean", SimulationPresets::clean_link()),
        ("marginal", SimulationPresets::marginal_link()),
    ];

    let mut results = Vec::new();
    for identity in identities {
        for (link_name, settings) in links.iter().cloned() {
            println!(
                "{}",
                format!("\n>>> {} over a {} link", identity, link_name).bright_green().bold()
            );
            if identity.addresses().is_empty() {
                println!("no command set, listening for beacons for {:?}", plan.listen);
            } else {
                println!("polling TMI {:?}, up to {} tries each", plan.msg_ids, plan.max_retries);
            }
            let summary = run_pass(identity, &plan, settings).await?;
            print_summary(&summary);
            results.push((link_name, summary));
        }
    }

    println!("\n{}", "Summary".bright_yellow().bold());
    println!(
        "{:<24} {:<9} {:>7} {:>5} {:>8} {:>10} {:>4}",
        "satellite", "link", "uplinks", "heard", "answered", "unanswered", "crc"
    );
    for (link_name, s) in &results {
        println!(
            "{:<24} {:<9} {:>7} {:>5} {:>8} {:>10} {:>4}",
            s.identity.name(),
            link_name,
            s.uplinks,
            s.heard,
            s.answered,
            s.unanswered,
            s.crc_errors
        );
    }
    Ok(())
}

fn print_summary(summary: &PassSummary) {
    println!("uplinks: {}", summary.uplinks);
    println!("frames heard: {}", summary.heard);
    println!("answered: {}  unanswered: {}", summary.answered, summary.unanswered);
    if summary.crc_errors > 0 {
        println!("{}", format!("crc errors: {}", summary.crc_errors).bright_red());
    }
    if !summary.counters.is_empty() {
        println!("frame counters: {:?}", summary.counters);
    }
    if let Some((lo, hi)) = summary.doppler_hz {
        println!("doppler: {} .. {} Hz", lo, hi);
    }
}
