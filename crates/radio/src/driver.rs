//! Simulated ground transceiver

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use cubesat_link_core::{doppler_shift_hz, time_on_air, AirTime, LinkParameters, LinkSnapshot, RadioLinkConfig};
use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::Rng;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout, timeout_at, Instant};

use crate::emulator::SatelliteEmulator;
use crate::events::EventChannel;
use crate::identity::SatelliteId;
use crate::mailbox::{AirFrame, Mailbox};
use crate::trajectory::TrajectoryProvider;
use crate::{make_rng, DriverSettings, EmulatorSettings, RadioError};

const RX_TIMEOUT_SECS: std::ops::RangeInclusive<u64> = 1..=9;

#[derive(Debug, Clone, PartialEq)]
pub struct TxRecord {
    pub data: Vec<u8>,
    pub time_on_air: AirTime,
    pub frequency_error_hz: i64,
    pub timestamp: SystemTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RxRecord {
    pub data: Vec<u8>,
    pub snr_db: i32,
    pub rssi_dbm: i32,
    pub crc_error: bool,
    pub frequency_error_hz: i64,
    pub timestamp: SystemTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RxTimeout {
    pub waited: Duration,
}

struct DriverShared {
    settings: DriverSettings,
    /// Edited by `configure`, used for timing and uplink snapshots.
    live: RwLock<RadioLinkConfig>,
    /// What the hardware was last initialised with.
    latched: RwLock<RadioLinkConfig>,
    trajectory: RwLock<Option<Arc<dyn TrajectoryProvider>>>,
    inbox: Mailbox<AirFrame>,
    rng: Mutex<StdRng>,
    tx_log: Mutex<Vec<TxRecord>>,
    rx_log: Mutex<Vec<RxRecord>>,
    received: EventChannel<RxRecord>,
    transmitted: EventChannel<TxRecord>,
    timeouts: EventChannel<RxTimeout>,
    listening: AtomicBool,
}

pub struct GroundRadioDriver {
    shared: Arc<DriverShared>,
    satellite: SatelliteEmulator,
    rx_task: Mutex<Option<JoinHandle<()>>>,
    rx_timeout: Mutex<Duration>,
    connected: AtomicBool,
}

impl GroundRadioDriver {
    pub fn new(identity: SatelliteId, settings: DriverSettings, satellite: EmulatorSettings) -> Self {
        let config = RadioLinkConfig::default();
        let rx_timeout = settings.rx_timeout;
        let rng = make_rng(settings.seed);

        Self {
            shared: Arc::new(DriverShared {
                settings,
                live: RwLock::new(config.clone()),
                latched: RwLock::new(config),
                trajectory: RwLock::new(None),
                inbox: Mailbox::new(),
                rng: Mutex::new(rng),
                tx_log: Mutex::new(Vec::new()),
                rx_log: Mutex::new(Vec::new()),
                received: EventChannel::new(),
                transmitted: EventChannel::new(),
                timeouts: EventChannel::new(),
                listening: AtomicBool::new(false),
            }),
            satellite: SatelliteEmulator::new(identity, satellite),
            rx_task: Mutex::new(None),
            rx_timeout: Mutex::new(rx_timeout),
            connected: AtomicBool::new(false),
        }
    }

    pub fn with_defaults(identity: SatelliteId) -> Self {
        Self::new(identity, DriverSettings::default(), EmulatorSettings::default())
    }

    pub async fn connect(&self) -> Result<(), RadioError> {
        if self.is_connected() {
            warn!("radio already connected");
            return Ok(());
        }
        self.init().await;
        self.satellite.attach_downlink(self.shared.inbox.clone()).await;
        self.satellite.power_on().await;
        self.start_rx_loop().await;
        self.connected.store(true, Ordering::Release);
        info!("radio connected to {}", self.satellite.identity().await);
        Ok(())
    }

    pub async fn disconnect(&self) {
        self.satellite.power_off().await;
        self.stop_rx_loop().await;
        self.connected.store(false, Ordering::Release);
        info!("radio disconnected");
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    pub fn satellite(&self) -> &SatelliteEmulator {
        &self.satellite
    }

    pub async fn configure(&self, config: RadioLinkConfig) {
        debug!("new ground config: {}", config.snapshot());
        *self.shared.live.write().await = config;
    }

    /// Config as edited, not yet applied to the hardware.
    pub async fn config(&self) -> RadioLinkConfig {
        self.shared.live.read().await.clone()
    }

    /// Applies the edited config after the re-tune latency.
    pub async fn init(&self) {
        sleep(self.shared.settings.init_delay).await;
        let live = self.shared.live.read().await.clone();
        *self.shared.latched.write().await = live;
        debug!("radio initialised");
    }

    pub async fn read_config(&self) -> RadioLinkConfig {
        self.shared.latched.read().await.clone()
    }

    pub async fn set_rx_timeout(&self, secs: u64) -> Result<(), RadioError> {
        if !RX_TIMEOUT_SECS.contains(&secs) {
            return Err(RadioError::InvalidRxTimeout(secs));
        }
        *self.rx_timeout.lock().await = Duration::from_secs(secs);
        Ok(())
    }

    pub async fn rx_timeout(&self) -> Duration {
        *self.rx_timeout.lock().await
    }

    pub async fn attach_trajectory(&self, trajectory: Arc<dyn TrajectoryProvider>) {
        *self.shared.trajectory.write().await = Some(trajectory);
    }

    pub async fn detach_trajectory(&self) {
        *self.shared.trajectory.write().await = None;
    }

    /// Doppler offset at the current instant for the live frequency.
    pub async fn frequency_error_hz(&self) -> i64 {
        let frequency = self.shared.live.read().await.frequency;
        self.shared.frequency_error_hz(frequency).await
    }

    pub fn received(&self) -> &EventChannel<RxRecord> {
        &self.shared.received
    }

    pub fn transmitted(&self) -> &EventChannel<TxRecord> {
        &self.shared.transmitted
    }

    pub fn rx_timeouts(&self) -> &EventChannel<RxTimeout> {
        &self.shared.timeouts
    }

    pub async fn tx_log(&self) -> Vec<TxRecord> {
        self.shared.tx_log.lock().await.clone()
    }

    pub async fn rx_log(&self) -> Vec<RxRecord> {
        self.shared.rx_log.lock().await.clone()
    }

    pub async fn clear_buffers(&self) {
        self.shared.tx_log.lock().await.clear();
        self.shared.rx_log.lock().await.clear();
    }

    /// Empties the logs, detaches the trajectory and drops every listener.
    pub async fn clear(&self) {
        self.clear_buffers().await;
        self.detach_trajectory().await;
        self.shared.received.clear();
        self.shared.transmitted.clear();
        self.shared.timeouts.clear();
    }

    /// Transmits `data` once. The receiver is off for the whole transmission.
    pub async fn send_single(&self, data: &[u8]) -> Result<TxRecord, RadioError> {
        if !self.is_connected() {
            return Err(RadioError::NotConnected);
        }

        self.stop_rx_loop().await;
        let record = self.transmit(data).await;
        self.start_rx_loop().await;

        self.shared.tx_log.lock().await.push(record.clone());
        self.shared.transmitted.emit(record.clone());
        Ok(record)
    }

    async fn transmit(&self, data: &[u8]) -> TxRecord {
        let config = self.shared.live.read().await.clone();
        let snapshot = config.snapshot();
        let air_time = time_on_air(&config, data.len());
        let frequency_error_hz = self.shared.frequency_error_hz(config.frequency).await;
        let fragment_size = self.shared.settings.fragment_size.max(1);

        if data.len() > fragment_size {
            for fragment in data.chunks(fragment_size) {
                let delay = time_on_air(&config, fragment.len()).as_duration() + self.shared.settings.fragment_gap;
                sleep(delay).await;
                self.deliver(fragment, &snapshot).await;
            }
        } else {
            sleep(air_time.as_duration()).await;
            self.deliver(data, &snapshot).await;
        }

        debug!(
            "sent {} bytes, {:.3} ms on air, {} Hz off: {}",
            data.len(),
            air_time.total_ms(),
            frequency_error_hz,
            hex::encode(data)
        );

        TxRecord {
            data: data.to_vec(),
            time_on_air: air_time,
            frequency_error_hz,
            timestamp: SystemTime::now(),
        }
    }

    async fn deliver(&self, data: &[u8], snapshot: &LinkSnapshot) {
        if let Err(e) = self.satellite.receive_data(data, Some(snapshot)).await {
            debug!("uplink of {} bytes not delivered: {}", data.len(), e);
        }
    }

    /// Next received frame, or `None` once `wait` (the rx timeout when not
    /// given) runs out, in which case a timeout event is published.
    pub async fn wait_read(&self, wait: Option<Duration>) -> Option<RxRecord> {
        let wait = match wait {
            Some(wait) => wait,
            None => self.rx_timeout().await,
        };
        let mut events = self.shared.received.subscribe();
        self.next_record(&mut events, Instant::now() + wait, wait).await
    }

    /// `wait_read` for callers that treat silence as a failure.
    pub async fn read(&self, wait: Option<Duration>) -> Result<RxRecord, RadioError> {
        self.wait_read(wait).await.ok_or(RadioError::LinkTimeout)
    }

    async fn next_record(
        &self,
        events: &mut tokio::sync::broadcast::Receiver<RxRecord>,
        deadline: Instant,
        waited: Duration,
    ) -> Option<RxRecord> {
        loop {
            match timeout_at(deadline, events.recv()).await {
                Ok(Ok(record)) => return Some(record),
                Ok(Err(RecvError::Lagged(skipped))) => {
                    trace!("rx listener lagged by {} frames", skipped);
                }
                Ok(Err(RecvError::Closed)) => return None,
                Err(_) => {
                    debug!("rx timeout after {:?}", waited);
                    self.shared.timeouts.emit(RxTimeout { waited });
                    return None;
                }
            }
        }
    }

    /// Retransmits `data` every `period` until an answer without a CRC error
    /// arrives (and `accept` agrees, when given) or `max_retries` attempts are
    /// spent. Returns the last frame heard, acceptable or not.
    pub async fn send_repeat(
        &self,
        data: &[u8],
        period: Duration,
        max_retries: u32,
        accept: Option<&(dyn Fn(&RxRecord) -> bool + Sync)>,
    ) -> Result<Option<RxRecord>, RadioError> {
        let mut last = None;

        for attempt in 1..=max_retries {
            let mut events = self.shared.received.subscribe();
            let sent = self.send_single(data).await?;
            let wait = period.saturating_sub(sent.time_on_air.as_duration());
            let deadline = Instant::now() + wait;

            while let Some(record) = self.next_record(&mut events, deadline, wait).await {
                last = Some(record.clone());
                if record.crc_error {
                    debug!("answer with crc error, ignoring");
                    continue;
                }
                match accept {
                    Some(accept) if !accept(&record) => continue,
                    _ => return Ok(last),
                }
            }
            debug!("attempt {}/{} got no acceptable answer", attempt, max_retries);
        }

        Ok(last)
    }

    async fn start_rx_loop(&self) {
        let mut task = self.rx_task.lock().await;
        if task.is_some() {
            return;
        }
        self.shared.listening.store(true, Ordering::Release);
        *task = Some(tokio::spawn(listen(Arc::clone(&self.shared))));
    }

    async fn stop_rx_loop(&self) {
        self.shared.listening.store(false, Ordering::Release);
        let handle = self.rx_task.lock().await.take();
        if let Some(mut handle) = handle {
            if timeout(self.shared.settings.join_timeout, &mut handle).await.is_err() {
                warn!("rx loop did not stop in time, aborting it");
                handle.abort();
            }
        }
    }
}

impl Drop for GroundRadioDriver {
    fn drop(&mut self) {
        self.shared.listening.store(false, Ordering::Release);
        if let Ok(mut task) = self.rx_task.try_lock() {
            if let Some(handle) = task.take() {
                handle.abort();
            }
        }
    }
}

async fn listen(shared: Arc<DriverShared>) {
    trace!("rx loop started");
    while shared.listening.load(Ordering::Acquire) {
        if let Some(frame) = shared.inbox.take(shared.settings.poll_timeout).await {
            shared.process(frame).await;
        }
        sleep(shared.settings.poll_interval).await;
    }
    trace!("rx loop stopped");
}

impl DriverShared {
    async fn frequency_error_hz(&self, frequency: u32) -> i64 {
        match self.trajectory.read().await.as_ref() {
            Some(trajectory) => doppler_shift_hz(frequency, trajectory.nearest_range_rate(SystemTime::now())),
            None => 0,
        }
    }

    async fn process(&self, frame: AirFrame) {
        let config = self.latched.read().await.clone();
        if let Some(theirs) = &frame.snapshot {
            let fields = theirs.mismatches(&config.snapshot());
            if !fields.is_empty() {
                warn!("gs got data from sat but radio config is incorrect, different attributes: {:?}", fields);
                return;
            }
        }

        sleep(self.settings.processing_delay).await;

        let (snr_db, rssi_dbm, crc_error) = {
            let mut rng = self.rng.lock().await;
            let snr = rng.random_range(self.settings.snr_range.clone());
            let rssi = rng.random_range(self.settings.rssi_range.clone());
            let interference = self.settings.interference_level.min(100) as f64 / 100.0;
            let crc_error = config.crc_enabled && rng.random_bool(interference);
            (snr, rssi, crc_error)
        };

        let record = RxRecord {
            frequency_error_hz: self.frequency_error_hz(config.frequency).await,
            data: frame.data,
            snr_db,
            rssi_dbm,
            crc_error,
            timestamp: SystemTime::now(),
        };
        if !record.data.is_empty() {
            debug!(
                "received {} bytes, snr {} rssi {} crc error {}: {}",
                record.data.len(),
                record.snr_db,
                record.rssi_dbm,
                record.crc_error,
                hex::encode(&record.data)
            );
            self.rx_log.lock().await.push(record.clone());
        }
        self.received.emit(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry;
    use crate::trajectory::SampledTrajectory;
    use cubesat_link_core::{build_command_frame, Address, Bandwidth, Modulation};
    use std::sync::Mutex as StdMutex;

    const GROUND: Address = Address::new(10, 6, 1, 4);
    const NORBI: Address = Address::new(10, 6, 1, 201);

    fn driver(settings: DriverSettings) -> GroundRadioDriver {
        GroundRadioDriver::new(
            SatelliteId::Norbi,
            DriverSettings {
                seed: Some(42),
                ..settings
            },
            EmulatorSettings {
                seed: Some(42),
                ..Default::default()
            },
        )
    }

    fn tmi_request(msg_id: u16) -> Vec<u8> {
        build_command_frame(GROUND, NORBI, 1, msg_id, &[]).unwrap()
    }

    /// Waits for the satellite to listen in LoRa with a quiet half minute
    /// ahead, and swallows the beacon it sends.
    async fn until_lora(driver: &GroundRadioDriver) {
        loop {
            let state = driver.satellite().state().await;
            let quiet = state.beacon_in().unwrap_or_default() > Duration::from_secs(30);
            if state.link.modulation == Modulation::Lora && quiet {
                break;
            }
            sleep(Duration::from_secs(1)).await;
        }
        sleep(Duration::from_secs(3)).await;
        driver.clear_buffers().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_config_applies_on_init() {
        let driver = driver(DriverSettings::default());
        let retuned = RadioLinkConfig {
            frequency: 436_500_000,
            ..Default::default()
        };
        driver.configure(retuned.clone()).await;
        assert_eq!(driver.config().await, retuned);
        assert_eq!(driver.read_config().await.frequency, 436_700_000);

        let start = Instant::now();
        driver.init().await;
        assert!(start.elapsed() >= Duration::from_secs(1));
        assert_eq!(driver.read_config().await, retuned);
    }

    #[tokio::test]
    async fn test_rx_timeout_bounds() {
        let driver = driver(DriverSettings::default());
        assert_eq!(driver.rx_timeout().await, Duration::from_secs(3));
        assert!(matches!(driver.set_rx_timeout(0).await, Err(RadioError::InvalidRxTimeout(0))));
        assert!(matches!(driver.set_rx_timeout(10).await, Err(RadioError::InvalidRxTimeout(10))));
        tokio_test::assert_ok!(driver.set_rx_timeout(9).await);
        assert_eq!(driver.rx_timeout().await, Duration::from_secs(9));
    }

    #[tokio::test]
    async fn test_send_requires_connection() {
        let driver = driver(DriverSettings::default());
        assert!(matches!(driver.send_single(&[1, 2, 3]).await, Err(RadioError::NotConnected)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_single_takes_time_on_air() {
        let driver = driver(DriverSettings::default());
        driver.connect().await.unwrap();
        let events = Arc::new(StdMutex::new(Vec::new()));
        let seen = events.clone();
        driver.transmitted().connect(move |record: &TxRecord| seen.lock().unwrap().push(record.clone()));

        let start = Instant::now();
        let record = driver.send_single(&[0u8; 10]).await.unwrap();
        assert!(start.elapsed() >= Duration::from_micros(123_904));
        assert!((record.time_on_air.total_ms() - 123.904).abs() < 1e-6);
        assert_eq!(record.frequency_error_hz, 0);

        assert_eq!(driver.tx_log().await, vec![record.clone()]);
        assert_eq!(*events.lock().unwrap(), vec![record]);
        driver.disconnect().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_long_payload_is_fragmented() {
        let driver = driver(DriverSettings::default());
        driver.connect().await.unwrap();
        let data = vec![0xA5u8; 600];
        let config = driver.config().await;
        let expected: Duration = data
            .chunks(255)
            .map(|c| time_on_air(&config, c.len()).as_duration() + Duration::from_millis(10))
            .sum();

        let before = driver.satellite().stats().await;
        let start = Instant::now();
        driver.send_single(&data).await.unwrap();
        assert!(start.elapsed() >= expected);

        let after = driver.satellite().stats().await;
        let attempts = (after.frames_accepted + after.frames_dropped) - (before.frames_accepted + before.frames_dropped);
        assert_eq!(attempts, 3);
        assert_eq!(driver.tx_log().await.len(), 1);
        driver.disconnect().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_telemetry_round_trip() {
        let driver = driver(DriverSettings::default());
        driver.connect().await.unwrap();
        until_lora(&driver).await;

        driver.send_single(&tmi_request(1)).await.unwrap();
        let record = driver.wait_read(Some(Duration::from_secs(5))).await.unwrap();

        assert_eq!(record.data.len(), telemetry::CANNED_FRAME_LEN);
        assert_eq!(&record.data[..19], &telemetry::TMI_FRAMES[0][..19]);
        assert!((42..=52).contains(&record.snr_db));
        assert!((-115..=-112).contains(&record.rssi_dbm));
        assert!(!record.crc_error);
        assert_eq!(driver.rx_log().await, vec![record]);
        driver.disconnect().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_read_timeout_publishes_event() {
        let driver = driver(DriverSettings::default());
        let timeouts = Arc::new(StdMutex::new(Vec::new()));
        let seen = timeouts.clone();
        driver.rx_timeouts().connect(move |t: &RxTimeout| seen.lock().unwrap().push(*t));

        assert!(driver.wait_read(Some(Duration::from_secs(2))).await.is_none());
        driver.set_rx_timeout(4).await.unwrap();
        assert!(driver.wait_read(None).await.is_none());

        assert!(matches!(driver.read(Some(Duration::from_secs(1))).await, Err(RadioError::LinkTimeout)));

        assert_eq!(
            *timeouts.lock().unwrap(),
            vec![
                RxTimeout { waited: Duration::from_secs(2) },
                RxTimeout { waited: Duration::from_secs(4) },
                RxTimeout { waited: Duration::from_secs(1) },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_repeat_against_silent_satellite() {
        let driver = driver(DriverSettings::default());
        driver.connect().await.unwrap();
        driver.satellite().set_loss_levels(100, 0).await;

        let answer = driver
            .send_repeat(&tmi_request(1), Duration::from_secs(2), 3, None)
            .await
            .unwrap();
        assert!(answer.is_none());
        assert_eq!(driver.tx_log().await.len(), 3);
        driver.disconnect().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_repeat_stops_on_first_answer() {
        let driver = driver(DriverSettings::default());
        driver.connect().await.unwrap();
        until_lora(&driver).await;

        let answer = driver
            .send_repeat(&tmi_request(3), Duration::from_secs(5), 5, None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(&answer.data[..19], &telemetry::TMI_FRAMES[1][..19]);
        assert_eq!(driver.tx_log().await.len(), 1);
        driver.disconnect().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_repeat_predicate_rejects() {
        let driver = driver(DriverSettings::default());
        driver.connect().await.unwrap();
        until_lora(&driver).await;

        let never = |_: &RxRecord| false;
        let answer = driver
            .send_repeat(&tmi_request(5), Duration::from_secs(5), 3, Some(&never))
            .await
            .unwrap();
        assert!(answer.is_some());
        assert_eq!(driver.tx_log().await.len(), 3);

        let wants_block_2 = |r: &RxRecord| r.data.get(..19) == Some(&telemetry::TMI_FRAMES[2][..19]);
        driver.clear_buffers().await;
        let answer = driver
            .send_repeat(&tmi_request(5), Duration::from_secs(5), 3, Some(&wants_block_2))
            .await
            .unwrap();
        assert!(answer.is_some());
        assert_eq!(driver.tx_log().await.len(), 1);
        driver.disconnect().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_repeat_zero_retries() {
        let driver = driver(DriverSettings::default());
        driver.connect().await.unwrap();
        let answer = driver.send_repeat(&[1], Duration::from_secs(1), 0, None).await.unwrap();
        assert!(answer.is_none());
        assert!(driver.tx_log().await.is_empty());
        driver.disconnect().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_interference_flags_crc_errors() {
        let driver = driver(DriverSettings {
            interference_level: 100,
            ..Default::default()
        });
        driver.shared.process(AirFrame::new(vec![1, 2, 3], None)).await;
        assert!(driver.rx_log().await[0].crc_error);

        driver
            .configure(RadioLinkConfig {
                crc_enabled: false,
                ..Default::default()
            })
            .await;
        driver.init().await;
        driver.shared.process(AirFrame::new(vec![1, 2, 3], None)).await;
        assert!(!driver.rx_log().await[1].crc_error);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mismatched_downlink_is_dropped() {
        let driver = driver(DriverSettings::default());
        let mut satellite = SatelliteId::Norbi.link_config();
        driver
            .shared
            .process(AirFrame::new(vec![9; 4], Some(satellite.snapshot())))
            .await;
        assert_eq!(driver.rx_log().await.len(), 1);

        satellite.bandwidth = Bandwidth::Bw125;
        driver
            .shared
            .process(AirFrame::new(vec![9; 4], Some(satellite.snapshot())))
            .await;
        assert_eq!(driver.rx_log().await.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_frame_is_published_but_not_logged() {
        let driver = driver(DriverSettings::default());
        let seen = Arc::new(StdMutex::new(Vec::new()));
        let sink = seen.clone();
        driver.received().connect(move |record: &RxRecord| sink.lock().unwrap().push(record.data.len()));

        driver.shared.process(AirFrame::new(Vec::new(), None)).await;
        assert_eq!(*seen.lock().unwrap(), vec![0]);
        assert!(driver.rx_log().await.is_empty());

        driver.shared.process(AirFrame::new(vec![7], None)).await;
        assert_eq!(*seen.lock().unwrap(), vec![0, 1]);
        assert_eq!(driver.rx_log().await.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_doppler_follows_trajectory() {
        let driver = driver(DriverSettings::default());
        assert_eq!(driver.frequency_error_hz().await, 0);

        let now = SystemTime::now();
        let pass = SampledTrajectory::new(vec![(now, 7.0), (now + Duration::from_secs(3600), 7.0)]);
        driver.attach_trajectory(Arc::new(pass)).await;
        assert_eq!(driver.frequency_error_hz().await, doppler_shift_hz(436_700_000, 7.0));
        assert_eq!(driver.frequency_error_hz().await, -10_197);

        driver.shared.process(AirFrame::new(vec![1], None)).await;
        assert_eq!(driver.rx_log().await[0].frequency_error_hz, -10_197);

        driver.clear().await;
        assert_eq!(driver.frequency_error_hz().await, 0);
        assert!(driver.rx_log().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_and_disconnect() {
        let driver = driver(DriverSettings::default());
        assert!(!driver.is_connected());
        driver.connect().await.unwrap();
        assert!(driver.is_connected());
        assert!(driver.satellite().is_powered());

        driver.disconnect().await;
        assert!(!driver.is_connected());
        assert!(!driver.satellite().is_powered());
    }
}
