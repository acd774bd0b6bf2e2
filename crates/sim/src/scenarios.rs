//! Scripted satellite passes over the emulated link

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use cubesat_link_core::{build_command_frame, Address};
use cubesat_link_radio::telemetry::{self, TMI_COUNTER_OFFSET, TMI_FRAMES, TMI_REQUEST_IDS};
use cubesat_link_radio::{
    DriverSettings, EmulatorSettings, GroundRadioDriver, RadioError, RxRecord, SampledTrajectory, SatelliteId,
};
use log::{debug, info};
use tokio::time::Instant;

use crate::SimulationPresets;

pub const GROUND_ADDRESS: Address = Address::new(10, 6, 1, 4);

#[derive(Debug, Clone)]
pub struct PassPlan {
    /// Commands sent in order, each retried until answered.
    pub msg_ids: Vec<u16>,
    pub period: Duration,
    pub max_retries: u32,
    /// How long to listen when the satellite takes no commands.
    pub listen: Duration,
    /// Sweep range rate from -7 to +7 km/s over ten minutes.
    pub doppler: bool,
}

impl Default for PassPlan {
    fn default() -> Self {
        Self {
            msg_ids: TMI_REQUEST_IDS.to_vec(),
            period: Duration::from_secs(3),
            max_retries: 25,
            listen: Duration::from_secs(125),
            doppler: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PassSummary {
    pub identity: SatelliteId,
    pub uplinks: usize,
    pub heard: usize,
    pub answered: usize,
    pub unanswered: usize,
    pub crc_errors: usize,
    /// Frame counters of the telemetry answers, in arrival order.
    pub counters: Vec<u16>,
    pub doppler_hz: Option<(i64, i64)>,
}

impl PassSummary {
    fn new(identity: SatelliteId) -> Self {
        Self {
            identity,
            uplinks: 0,
            heard: 0,
            answered: 0,
            unanswered: 0,
            crc_errors: 0,
            counters: Vec::new(),
            doppler_hz: None,
        }
    }
}

fn answers_block(record: &RxRecord, block: usize) -> bool {
    record.data.get(..TMI_COUNTER_OFFSET) == Some(&TMI_FRAMES[block][..TMI_COUNTER_OFFSET])
}

fn counter(record: &RxRecord) -> Option<u16> {
    let bytes = record.data.get(TMI_COUNTER_OFFSET..TMI_COUNTER_OFFSET + 2)?;
    Some(u16::from_le_bytes([bytes[0], bytes[1]]))
}

pub async fn run_pass(
    identity: SatelliteId,
    plan: &PassPlan,
    settings: (DriverSettings, EmulatorSettings),
) -> Result<PassSummary, RadioError> {
    let (driver_settings, emulator_settings) = settings;
    let driver = GroundRadioDriver::new(identity, driver_settings, emulator_settings);
    driver
        .configure(SimulationPresets::for_identity(identity).unwrap_or_default())
        .await;
    if plan.doppler {
        let pass = SampledTrajectory::linear(SystemTime::now(), Duration::from_secs(1), 600, -7.0, 7.0);
        driver.attach_trajectory(Arc::new(pass)).await;
    }
    driver.connect().await?;

    let mut summary = PassSummary::new(identity);
    match identity.addresses().first() {
        Some(&rx) => {
            for (transaction_id, &msg_id) in plan.msg_ids.iter().enumerate() {
                poll(&driver, rx, transaction_id as u16, msg_id, plan, &mut summary).await?;
            }
        }
        None => {
            info!("{} takes no commands, listening for {:?}", identity, plan.listen);
            let deadline = Instant::now() + plan.listen;
            while Instant::now() < deadline {
                match driver.read(Some(deadline - Instant::now())).await {
                    Ok(record) => debug!("heard {} bytes", record.data.len()),
                    Err(RadioError::LinkTimeout) => break,
                    Err(e) => return Err(e),
                }
            }
        }
    }

    let heard = driver.rx_log().await;
    summary.uplinks = driver.tx_log().await.len();
    summary.heard = heard.len();
    summary.crc_errors = heard.iter().filter(|r| r.crc_error).count();
    summary.doppler_hz = heard.iter().map(|r| r.frequency_error_hz).fold(None, |range, hz| match range {
        None => Some((hz, hz)),
        Some((lo, hi)) => Some((lo.min(hz), hi.max(hz))),
    });

    driver.disconnect().await;
    Ok(summary)
}

async fn poll(
    driver: &GroundRadioDriver,
    rx: Address,
    transaction_id: u16,
    msg_id: u16,
    plan: &PassPlan,
    summary: &mut PassSummary,
) -> Result<(), RadioError> {
    let frame = build_command_frame(GROUND_ADDRESS, rx, transaction_id, msg_id, &[])?;

    let answer = match telemetry::tmi_index(msg_id) {
        Some(block) => {
            let expected = move |r: &RxRecord| answers_block(r, block);
            driver
                .send_repeat(&frame, plan.period, plan.max_retries, Some(&expected))
                .await?
                .filter(|r| !r.crc_error && answers_block(r, block))
        }
        None => driver
            .send_repeat(&frame, plan.period, plan.max_retries, None)
            .await?
            .filter(|r| !r.crc_error),
    };

    match answer {
        Some(record) => {
            debug!("msg {} answered: {}", msg_id, hex::encode(&record.data));
            summary.answered += 1;
            if telemetry::tmi_index(msg_id).is_some() {
                summary.counters.extend(counter(&record));
            }
        }
        None => {
            debug!("msg {} unanswered", msg_id);
            summary.unanswered += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> (DriverSettings, EmulatorSettings) {
        (
            DriverSettings {
                seed: Some(seed),
                ..Default::default()
            },
            EmulatorSettings {
                seed: Some(seed),
                ..Default::default()
            },
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_norbi_pass_collects_all_blocks() {
        let summary = run_pass(SatelliteId::Norbi, &PassPlan::default(), seeded(3)).await.unwrap();
        assert_eq!(summary.answered, 5);
        assert_eq!(summary.unanswered, 0);
        assert_eq!(summary.crc_errors, 0);
        assert_eq!(summary.counters.len(), 5);
        assert!(summary.counters.windows(2).all(|w| w[1] > w[0]));
        assert!(summary.uplinks >= 5);
        let (lo, hi) = summary.doppler_hz.unwrap();
        assert!(lo <= hi);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stratosat_pass_only_hears_beacons() {
        let plan = PassPlan {
            doppler: false,
            ..Default::default()
        };
        let summary = run_pass(SatelliteId::Stratosat, &plan, seeded(5)).await.unwrap();
        assert_eq!(summary.uplinks, 0);
        assert_eq!(summary.answered, 0);
        assert!(summary.heard >= 1);
        assert_eq!(summary.doppler_hz, Some((0, 0)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_norbi2_ignores_norbi_preset_commands() {
        let plan = PassPlan {
            msg_ids: vec![1],
            max_retries: 3,
            doppler: false,
            ..Default::default()
        };
        // Norbi2 is not bound to the Norbi addresses, so nothing answers
        let driver = GroundRadioDriver::new(SatelliteId::Norbi2, seeded(9).0, seeded(9).1);
        driver.configure(SimulationPresets::norbi2()).await;
        driver.connect().await.unwrap();
        let mut summary = PassSummary::new(SatelliteId::Norbi2);
        poll(&driver, Address::new(10, 6, 1, 201), 0, 1, &plan, &mut summary)
            .await
            .unwrap();
        assert_eq!(summary.answered, 0);
        assert_eq!(summary.unanswered, 1);
        assert_eq!(driver.tx_log().await.len(), 3);
        driver.disconnect().await;
    }
}
