//! Emulated spacecraft radio: beacons, command dispatch and canned telemetry

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use cubesat_link_core::{Address, LinkParameters, LinkSnapshot, Modulation, RadioFrame, SatelliteLinkConfig};
use log::{debug, error, info, trace, warn};
use rand::rngs::StdRng;
use rand::Rng;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout, Instant};

use crate::events::EventChannel;
use crate::identity::SatelliteId;
use crate::mailbox::{AirFrame, Mailbox};
use crate::telemetry::{self, TRAILER_MAX, TRAILER_MIN};
use crate::{make_rng, EmulatorSettings, RadioError};

/// CRC trailer the transceiver appends to uplinked frames; never computed here.
const CRC_PLACEHOLDER: [u8; 2] = [0xFF, 0xFF];

#[derive(Debug, Clone)]
pub struct SatelliteState {
    pub identity: SatelliteId,
    pub addresses: Vec<Address>,
    pub link: SatelliteLinkConfig,
    pub frame_counter: u64,
    pub transaction_id: u16,
    /// `None` while powered off.
    pub next_beacon: Option<Instant>,
    pub tx_loss_level: u8,
    pub rx_loss_level: u8,
}

impl SatelliteState {
    fn new(identity: SatelliteId, settings: &EmulatorSettings) -> Self {
        Self {
            identity,
            addresses: identity.addresses().to_vec(),
            link: identity.link_config(),
            frame_counter: *settings.frame_counter_range.start(),
            transaction_id: 0,
            next_beacon: None,
            tx_loss_level: settings.tx_loss_level.min(100),
            rx_loss_level: settings.rx_loss_level.min(100),
        }
    }

    /// Time left until the next beacon toggle.
    pub fn beacon_in(&self) -> Option<Duration> {
        self.next_beacon
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EmulatorStats {
    pub frames_accepted: u64,
    pub frames_dropped: u64,
    pub frames_handled: u64,
    pub responses_sent: u64,
    pub beacons_sent: u64,
    pub transmissions_lost: u64,
}

struct Shared {
    settings: EmulatorSettings,
    state: Mutex<SatelliteState>,
    rng: Mutex<StdRng>,
    stats: Mutex<EmulatorStats>,
    uplink: Mailbox<AirFrame>,
    downlink: RwLock<Option<Mailbox<AirFrame>>>,
    transmitted: EventChannel<Vec<u8>>,
    running: AtomicBool,
}

pub struct SatelliteEmulator {
    shared: Arc<Shared>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl SatelliteEmulator {
    pub fn new(identity: SatelliteId, settings: EmulatorSettings) -> Self {
        let state = SatelliteState::new(identity, &settings);
        let rng = make_rng(settings.seed);
        info!("emulator configured as {}: {:?}", identity, state.link);

        Self {
            shared: Arc::new(Shared {
                settings,
                state: Mutex::new(state),
                rng: Mutex::new(rng),
                stats: Mutex::new(EmulatorStats::default()),
                uplink: Mailbox::new(),
                downlink: RwLock::new(None),
                transmitted: EventChannel::new(),
                running: AtomicBool::new(false),
            }),
            task: Mutex::new(None),
        }
    }

    pub async fn power_on(&self) {
        let mut task = self.task.lock().await;
        if task.is_some() {
            warn!("emulator already powered on");
            return;
        }

        let settings = &self.shared.settings;
        {
            let mut state = self.shared.state.lock().await;
            let mut rng = self.shared.rng.lock().await;
            state.transaction_id = rng.random_range(settings.transaction_id_range.clone());
            state.frame_counter = rng.random_range(settings.frame_counter_range.clone());
            state.link.modulation = if rng.random_bool(0.5) {
                Modulation::Lora
            } else {
                Modulation::Fsk
            };
            let first = rng.random_range(settings.first_beacon_secs.clone());
            state.next_beacon = Some(Instant::now() + Duration::from_secs(first));
            debug!(
                "start emulator session with {} in {}, first beacon in {}s",
                state.identity,
                state.link.modulation.name(),
                first
            );
        }

        self.shared.running.store(true, Ordering::Release);
        *task = Some(tokio::spawn(run(Arc::clone(&self.shared))));
    }

    pub async fn power_off(&self) {
        self.shared.running.store(false, Ordering::Release);
        let handle = self.task.lock().await.take();
        if let Some(mut handle) = handle {
            if timeout(self.shared.settings.join_timeout, &mut handle).await.is_err() {
                warn!("emulator loop did not stop in time, aborting it");
                handle.abort();
            }
        }
        self.shared.state.lock().await.next_beacon = None;
        info!("emulator powered off");
    }

    pub fn is_powered(&self) -> bool {
        self.shared.running.load(Ordering::Acquire)
    }

    /// Delivers uplinked bytes into the inbound mailbox, subject to the rx
    /// loss level and, when the sender's settings are known, to every shared
    /// link parameter matching.
    pub async fn receive_data(&self, data: &[u8], sender: Option<&LinkSnapshot>) -> Result<(), RadioError> {
        self.shared.receive_data(data, sender).await
    }

    /// Where transmissions are put after they are published.
    pub async fn attach_downlink(&self, mailbox: Mailbox<AirFrame>) {
        *self.shared.downlink.write().await = Some(mailbox);
    }

    pub fn transmitted(&self) -> &EventChannel<Vec<u8>> {
        &self.shared.transmitted
    }

    pub fn uplink(&self) -> &Mailbox<AirFrame> {
        &self.shared.uplink
    }

    pub async fn set_identity(&self, identity: SatelliteId) {
        let mut state = self.shared.state.lock().await;
        let modulation = state.link.modulation;
        state.identity = identity;
        state.addresses = identity.addresses().to_vec();
        state.link = SatelliteLinkConfig {
            modulation,
            ..identity.link_config()
        };
        info!("config is updated: {}\n{:?}", identity, state.link);
    }

    pub async fn set_loss_levels(&self, tx_loss_level: u8, rx_loss_level: u8) {
        let mut state = self.shared.state.lock().await;
        state.tx_loss_level = tx_loss_level.min(100);
        state.rx_loss_level = rx_loss_level.min(100);
    }

    pub async fn identity(&self) -> SatelliteId {
        self.shared.state.lock().await.identity
    }

    pub async fn link_config(&self) -> SatelliteLinkConfig {
        self.shared.state.lock().await.link.clone()
    }

    pub async fn state(&self) -> SatelliteState {
        self.shared.state.lock().await.clone()
    }

    pub async fn stats(&self) -> EmulatorStats {
        self.shared.stats.lock().await.clone()
    }
}

impl Drop for SatelliteEmulator {
    fn drop(&mut self) {
        self.shared.running.store(false, Ordering::Release);
        if let Ok(mut task) = self.task.try_lock() {
            if let Some(handle) = task.take() {
                handle.abort();
            }
        }
    }
}

async fn run(shared: Arc<Shared>) {
    debug!("start sat process");
    while shared.running.load(Ordering::Acquire) {
        if shared.beacon_due().await {
            shared.toggle_beacon().await;
        } else if let Some(frame) = shared.uplink.take(shared.settings.poll_timeout).await {
            shared.handle_frame(frame.data).await;
        }
        sleep(shared.settings.tick).await;
    }
    debug!("sat process stopped");
}

impl Shared {
    async fn receive_data(&self, data: &[u8], sender: Option<&LinkSnapshot>) -> Result<(), RadioError> {
        let (rx_loss_level, ours) = {
            let state = self.state.lock().await;
            (state.rx_loss_level, state.link.snapshot())
        };

        let delivered = self.rng.lock().await.random_bool(1.0 - rx_loss_level as f64 / 100.0);
        if !delivered {
            self.stats.lock().await.frames_dropped += 1;
            trace!("uplink frame of {} bytes lost", data.len());
            return Err(RadioError::Lost);
        }

        if let Some(theirs) = sender {
            let fields = theirs.mismatches(&ours);
            if !fields.is_empty() {
                self.stats.lock().await.frames_dropped += 1;
                warn!("different attributes: {:?}", fields);
                return Err(RadioError::ConfigMismatch { fields });
            }
        }

        let mut framed = Vec::with_capacity(data.len() + CRC_PLACEHOLDER.len());
        framed.extend_from_slice(data);
        framed.extend_from_slice(&CRC_PLACEHOLDER);

        match self.uplink.put(AirFrame::new(framed, None), self.settings.put_timeout).await {
            Ok(()) => {
                self.stats.lock().await.frames_accepted += 1;
                Ok(())
            }
            Err(e) => {
                self.stats.lock().await.frames_dropped += 1;
                warn!("uplink frame dropped: {}", e);
                Err(e)
            }
        }
    }

    async fn beacon_due(&self) -> bool {
        let state = self.state.lock().await;
        state.next_beacon.is_some_and(|deadline| Instant::now() >= deadline)
    }

    fn refresh_beacon_timer(&self, state: &mut SatelliteState) {
        state.next_beacon = Some(Instant::now() + self.settings.beacon_period);
    }

    async fn toggle_beacon(&self) {
        let beacon = {
            let mut state = self.state.lock().await;
            self.refresh_beacon_timer(&mut state);
            state.link.modulation = state.link.modulation.toggled();
            match state.link.modulation {
                Modulation::Fsk => {
                    debug!("fsk beacon");
                    None
                }
                Modulation::Lora => {
                    debug!("lora beacon");
                    let trailer = self.trailer().await;
                    Some(beacon_frame(state.identity, trailer, SystemTime::now()))
                }
            }
        };

        if let Some(frame) = beacon {
            self.stats.lock().await.beacons_sent += 1;
            self.send_data(frame).await;
        }
    }

    async fn trailer(&self) -> u16 {
        self.rng.lock().await.random_range(TRAILER_MIN..=TRAILER_MAX)
    }

    async fn handle_frame(&self, data: Vec<u8>) {
        self.stats.lock().await.frames_handled += 1;
        match self.dispatch(&data).await {
            Ok(Some(response)) => {
                self.stats.lock().await.responses_sent += 1;
                self.send_data(response).await;
            }
            Ok(None) => {}
            Err(RadioError::UnknownCommand(msg_id)) => {
                error!("got unknown cmd {}: {}", msg_id, hex::encode(&data));
            }
            Err(e) => {
                error!("got incorrect message ({}): {}", e, hex::encode(&data));
            }
        }
    }

    async fn dispatch(&self, data: &[u8]) -> Result<Option<Vec<u8>>, RadioError> {
        let frame = RadioFrame::decode(data)?;

        let mut state = self.state.lock().await;
        if !state.addresses.contains(&frame.rx_addr()) {
            return Err(RadioError::AddressMismatch(frame.rx_addr().to_string()));
        }
        self.refresh_beacon_timer(&mut state);
        debug!("command {} from {}", frame.msg_id(), frame.tx_addr());

        let now = SystemTime::now();
        if let Some(index) = telemetry::tmi_index(frame.msg_id()) {
            let trailer = self.trailer().await;
            return Ok(Some(tmi_frame(&state, index, trailer, now)));
        }
        if state.identity == SatelliteId::Norbi2 {
            if let Some(index) = telemetry::pss_index(frame.payload()) {
                let trailer = self.trailer().await;
                return Ok(Some(pss_frame(&state, index, trailer, now)));
            }
        }
        Err(RadioError::UnknownCommand(frame.msg_id()))
    }

    async fn send_data(&self, data: Vec<u8>) {
        let (tx_loss_level, snapshot) = {
            let mut state = self.state.lock().await;
            state.frame_counter += 1;
            (state.tx_loss_level, state.link.snapshot())
        };

        let sent = self.rng.lock().await.random_bool(1.0 - tx_loss_level as f64 / 100.0);
        if !sent {
            self.stats.lock().await.transmissions_lost += 1;
            trace!("downlink frame of {} bytes lost", data.len());
            return;
        }

        sleep(self.settings.transmit_delay).await;
        self.transmitted.emit(data.clone());

        let downlink = self.downlink.read().await.clone();
        if let Some(mailbox) = downlink {
            if let Err(e) = mailbox.put(AirFrame::new(data, Some(snapshot)), self.settings.put_timeout).await {
                warn!("downlink frame dropped: {}", e);
            }
        }
    }
}

fn tmi_frame(state: &SatelliteState, index: usize, trailer: u16, now: SystemTime) -> Vec<u8> {
    let mut frame = telemetry::TMI_FRAMES[index].to_vec();
    telemetry::patch_trailer(&mut frame, trailer);
    telemetry::patch_counter(&mut frame, state.frame_counter as u16);
    // both Norbi identities stamp TMI with the Norbi clock
    if let Some(clock) = SatelliteId::Norbi.onboard_clock(now) {
        telemetry::patch_clock(&mut frame, telemetry::TMI_CLOCK_OFFSET, clock);
    }
    frame
}

fn pss_frame(state: &SatelliteState, index: usize, trailer: u16, now: SystemTime) -> Vec<u8> {
    let mut frame = telemetry::PSS_FRAMES[index].to_vec();
    telemetry::patch_trailer(&mut frame, trailer);
    if let Some(clock) = state.identity.onboard_clock(now) {
        telemetry::patch_clock(&mut frame, telemetry::PSS_CLOCK_OFFSET, clock);
    }
    frame
}

fn beacon_frame(identity: SatelliteId, trailer: u16, now: SystemTime) -> Vec<u8> {
    let mut frame = match identity {
        SatelliteId::Stratosat => telemetry::STRATOSAT_BEACON.to_vec(),
        _ => telemetry::NORBI_BEACON.to_vec(),
    };
    telemetry::patch_trailer(&mut frame, trailer);
    if identity != SatelliteId::Stratosat {
        if let Some(clock) = identity.onboard_clock(now) {
            telemetry::patch_clock(&mut frame, telemetry::BEACON_CLOCK_OFFSET, clock);
        }
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubesat_link_core::{build_command_frame, Bandwidth};
    use std::sync::Mutex as StdMutex;

    const GROUND: Address = Address::new(10, 6, 1, 4);
    const NORBI: Address = Address::new(10, 6, 1, 201);

    fn settings(seed: u64) -> EmulatorSettings {
        EmulatorSettings {
            seed: Some(seed),
            ..Default::default()
        }
    }

    async fn emulator(identity: SatelliteId, seed: u64) -> (SatelliteEmulator, Mailbox<AirFrame>) {
        let emulator = SatelliteEmulator::new(identity, settings(seed));
        let downlink = Mailbox::new();
        emulator.attach_downlink(downlink.clone()).await;
        (emulator, downlink)
    }

    fn command(rx: Address, msg_id: u16, data: &[u8]) -> Vec<u8> {
        build_command_frame(GROUND, rx, 1, msg_id, data).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_beacon_window() {
        for seed in 0..20 {
            let (emulator, _) = emulator(SatelliteId::Norbi, seed).await;
            let before = Instant::now();
            emulator.power_on().await;
            let deadline = emulator.state().await.next_beacon.unwrap();
            let wait = deadline - before;
            assert!(wait >= Duration::from_secs(10) && wait <= Duration::from_secs(60), "{:?}", wait);
            emulator.power_off().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_beacon_toggles_every_period() {
        let (emulator, downlink) = emulator(SatelliteId::Norbi, 7).await;
        let beacons = Arc::new(StdMutex::new(Vec::new()));
        let seen = beacons.clone();
        emulator.transmitted().connect(move |frame| seen.lock().unwrap().push(frame.clone()));

        emulator.power_on().await;
        let initial = emulator.state().await;
        let first = initial.next_beacon.unwrap();

        tokio::time::sleep_until(first + Duration::from_secs(2)).await;
        let after_first = emulator.state().await;
        assert_eq!(after_first.link.modulation, initial.link.modulation.toggled());
        let second = after_first.next_beacon.unwrap();
        let gap = second - first;
        assert!(gap >= Duration::from_secs(60) && gap < Duration::from_secs(61), "{:?}", gap);

        tokio::time::sleep_until(second + Duration::from_secs(2)).await;
        let after_second = emulator.state().await;
        assert_eq!(after_second.link.modulation, initial.link.modulation);
        let gap = after_second.next_beacon.unwrap() - second;
        assert!(gap >= Duration::from_secs(60) && gap < Duration::from_secs(61), "{:?}", gap);

        // exactly one of the two toggles was FSK -> LORA
        assert_eq!(emulator.stats().await.beacons_sent, 1);
        let beacons = beacons.lock().unwrap();
        assert_eq!(beacons.len(), 1);
        assert_eq!(&beacons[0][..21], &telemetry::NORBI_BEACON[..21]);
        assert!(downlink.try_take().is_some());
        emulator.power_off().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_telemetry_request() {
        let (emulator, downlink) = emulator(SatelliteId::Norbi, 11).await;
        emulator.power_on().await;

        emulator.receive_data(&command(NORBI, 3, &[]), None).await.unwrap();
        let first = downlink.take(Duration::from_secs(5)).await.unwrap();
        emulator.receive_data(&command(NORBI, 3, &[]), None).await.unwrap();
        let second = downlink.take(Duration::from_secs(5)).await.unwrap();

        let template = &telemetry::TMI_FRAMES[1];
        for frame in [&first.data, &second.data] {
            assert_eq!(frame.len(), template.len());
            assert_eq!(&frame[..19], &template[..19]);
            assert_eq!(&frame[25..141], &template[25..141]);
            let trailer = u16::from_le_bytes([frame[141], frame[142]]);
            assert!((TRAILER_MIN..=TRAILER_MAX).contains(&trailer));
        }
        assert_ne!(&first.data[141..], &second.data[141..]);

        let c1 = u16::from_le_bytes([first.data[19], first.data[20]]);
        let c2 = u16::from_le_bytes([second.data[19], second.data[20]]);
        assert_eq!(c2, c1.wrapping_add(1));

        let snapshot = first.snapshot.unwrap();
        assert_eq!(snapshot, emulator.link_config().await.snapshot());

        let stats = emulator.stats().await;
        assert_eq!(stats.frames_handled, 2);
        assert_eq!(stats.responses_sent, 2);
        emulator.power_off().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_odd_id_selects_its_block() {
        let (emulator, downlink) = emulator(SatelliteId::Norbi, 5).await;
        emulator.power_on().await;
        for msg_id in [1u16, 3, 5, 7, 9] {
            emulator.receive_data(&command(NORBI, msg_id, &[]), None).await.unwrap();
            let response = downlink.take(Duration::from_secs(5)).await.unwrap();
            let block = &telemetry::TMI_FRAMES[(msg_id as usize - 1) / 2];
            assert_eq!(&response.data[..19], &block[..19]);
        }
        emulator.power_off().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_pss_request_for_norbi2() {
        let (emulator, downlink) = emulator(SatelliteId::Norbi2, 3).await;
        emulator.power_on().await;

        let mut payload = telemetry::PSS_SELECTORS[1].to_vec();
        payload.extend_from_slice(&[0x00, 0x01]);
        let rx = Address::new(10, 6, 1, 204);
        emulator.receive_data(&command(rx, 40, &payload), None).await.unwrap();

        let response = downlink.take(Duration::from_secs(5)).await.unwrap();
        let template = &telemetry::PSS_FRAMES[1];
        assert_eq!(&response.data[..23], &template[..23]);
        let clock = SatelliteId::Norbi2.onboard_clock(SystemTime::now()).unwrap();
        let patched = u32::from_le_bytes([
            response.data[23],
            response.data[24],
            response.data[25],
            response.data[26],
        ]);
        assert!(clock - patched <= 1);
        emulator.power_off().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_frames_get_no_response() {
        let (emulator, downlink) = emulator(SatelliteId::Norbi, 9).await;
        emulator.power_on().await;

        // not bound here
        let foreign = command(Address::new(10, 6, 1, 203), 1, &[]);
        emulator.receive_data(&foreign, None).await.unwrap();
        // unknown command
        emulator.receive_data(&command(NORBI, 2, &[]), None).await.unwrap();
        // length field off by one
        let mut broken = command(NORBI, 1, &[]);
        broken[0] += 1;
        emulator.receive_data(&broken, None).await.unwrap();
        // too short
        emulator.receive_data(&[0x0C, 1, 2], None).await.unwrap();

        assert!(downlink.take(Duration::from_secs(5)).await.is_none());
        let stats = emulator.stats().await;
        assert_eq!(stats.frames_handled, 4);
        assert_eq!(stats.responses_sent, 0);
        emulator.power_off().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_traffic_refreshes_beacon_timer() {
        let (emulator, downlink) = emulator(SatelliteId::Norbi, 21).await;
        emulator.power_on().await;
        let before = emulator.state().await.next_beacon.unwrap();

        tokio::time::sleep(Duration::from_secs(5)).await;
        let sent_at = Instant::now();
        emulator.receive_data(&command(NORBI, 1, &[]), None).await.unwrap();
        downlink.take(Duration::from_secs(5)).await.unwrap();

        let refreshed = emulator.state().await.next_beacon.unwrap();
        assert!(refreshed > before);
        let from_send = refreshed - sent_at;
        assert!(from_send >= Duration::from_secs(60) && from_send < Duration::from_secs(61));
        emulator.power_off().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_config_mismatch_dropped_before_handler() {
        let (emulator, _) = emulator(SatelliteId::Norbi, 13).await;
        emulator.power_on().await;

        let mut link = emulator.link_config().await;
        link.bandwidth = Bandwidth::Bw125;
        let result = emulator.receive_data(&command(NORBI, 1, &[]), Some(&link.snapshot())).await;
        match result {
            Err(RadioError::ConfigMismatch { fields }) => assert_eq!(fields, vec!["bandwidth"]),
            other => panic!("unexpected {:?}", other),
        }

        tokio::time::sleep(Duration::from_secs(3)).await;
        let stats = emulator.stats().await;
        assert_eq!(stats.frames_handled, 0);
        assert_eq!(stats.frames_dropped, 1);

        // matching snapshot goes through
        let link = emulator.link_config().await;
        emulator.receive_data(&command(NORBI, 1, &[]), Some(&link.snapshot())).await.unwrap();
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(emulator.stats().await.frames_handled, 1);
        emulator.power_off().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_rx_loss_blocks_every_frame() {
        let emulator = SatelliteEmulator::new(
            SatelliteId::Norbi,
            EmulatorSettings {
                rx_loss_level: 100,
                seed: Some(1),
                ..Default::default()
            },
        );
        let frame = command(NORBI, 1, &[]);
        for _ in 0..10_000 {
            assert!(matches!(emulator.receive_data(&frame, None).await, Err(RadioError::Lost)));
        }
        assert!(emulator.uplink().try_take().is_none());

        emulator.set_loss_levels(0, 0).await;
        for _ in 0..10_000 {
            tokio_test::assert_ok!(emulator.receive_data(&frame, None).await);
            let delivered = emulator.uplink().try_take().unwrap();
            assert_eq!(delivered.data.len(), frame.len() + 2);
            assert_eq!(&delivered.data[frame.len()..], &CRC_PLACEHOLDER);
        }
        let stats = emulator.stats().await;
        assert_eq!(stats.frames_accepted, 10_000);
        assert_eq!(stats.frames_dropped, 10_000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tx_loss_still_counts_frames() {
        let (emulator, downlink) = emulator(SatelliteId::Norbi, 17).await;
        emulator.power_on().await;
        emulator.set_loss_levels(100, 0).await;
        let before = emulator.state().await.frame_counter;

        emulator.receive_data(&command(NORBI, 5, &[]), None).await.unwrap();
        assert!(downlink.take(Duration::from_secs(5)).await.is_none());

        assert_eq!(emulator.state().await.frame_counter, before + 1);
        let stats = emulator.stats().await;
        assert_eq!(stats.responses_sent, 1);
        assert_eq!(stats.transmissions_lost, 1);
        emulator.power_off().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_stratosat_has_no_command_set() {
        let (emulator, _) = emulator(SatelliteId::Stratosat, 2).await;
        assert!(emulator.state().await.addresses.is_empty());
        let beacon = beacon_frame(SatelliteId::Stratosat, 0x4242, SystemTime::now());
        assert_eq!(beacon.len(), telemetry::STRATOSAT_BEACON_LEN);
        assert_eq!(&beacon[..100], &telemetry::STRATOSAT_BEACON[..100]);
        assert_eq!(&beacon[100..], &[0x42, 0x42]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stratosat_ignores_addressed_commands() {
        let (emulator, _) = emulator(SatelliteId::Stratosat, 12).await;
        emulator.power_on().await;
        let before = emulator.state().await.next_beacon.unwrap();

        emulator.receive_data(&command(NORBI, 1, &[]), None).await.unwrap();
        tokio::time::sleep(Duration::from_secs(2)).await;

        let stats = emulator.stats().await;
        assert_eq!(stats.frames_handled, 1);
        assert_eq!(stats.responses_sent, 0);
        assert_eq!(emulator.state().await.next_beacon, Some(before));
        emulator.power_off().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_identity_keeps_modulation() {
        let (emulator, _) = emulator(SatelliteId::Norbi, 4).await;
        emulator.power_on().await;
        let modulation = emulator.link_config().await.modulation;
        emulator.set_identity(SatelliteId::Norbi2).await;
        let state = emulator.state().await;
        assert_eq!(state.identity, SatelliteId::Norbi2);
        assert_eq!(state.link.frequency, 436_500_000);
        assert_eq!(state.link.modulation, modulation);
        assert_eq!(state.addresses, SatelliteId::Norbi2.addresses().to_vec());
        emulator.power_off().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_power_off_is_bounded() {
        let (emulator, _) = emulator(SatelliteId::Norbi, 8).await;
        emulator.power_on().await;
        assert!(emulator.is_powered());
        tokio::time::sleep(Duration::from_millis(300)).await;

        let start = Instant::now();
        emulator.power_off().await;
        assert!(start.elapsed() <= Duration::from_millis(600));
        assert!(!emulator.is_powered());
        assert!(emulator.state().await.next_beacon.is_none());
    }
}
