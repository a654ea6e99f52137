//! Device activity simulation
//!
//! Independent periodic generators that synthesize obstacle detections,
//! navigation updates, distance increments and battery warnings. Each
//! generator runs as its own background task and draws a uniform random
//! value per tick; there is no physical model behind any of it.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

use log::{debug, info};
use rand::Rng;
use tokio::sync::RwLock;

use super::battery::BatteryWatcher;
use crate::config::SimulationConfig;
use crate::notifications::SharedEventSink;
use crate::domain::{TimelineEntry, TimelineKind};
use crate::shared::ShutdownSignal;

/// Streets the navigation generator walks the user along
pub const STREETS: [&str; 4] = [
    "Corrales Avenue",
    "Hayes Street",
    "Chavez Street",
    "Limketkai Drive",
];

/// Initial displayed battery level
const START_BATTERY_PERCENT: u8 = 78;

/// Runs the periodic device simulation and owns its accumulated state.
///
/// All generators stop together when the shutdown signal fires; no event
/// reaches the sink after teardown.
pub struct SimulationClock {
    sink: SharedEventSink,
    config: SimulationConfig,
    distance_km: Arc<RwLock<f64>>,
    battery_percent: Arc<AtomicU8>,
    battery: Arc<BatteryWatcher>,
    auto_announce: Arc<AtomicBool>,
    street_names: Arc<AtomicBool>,
    running: Arc<RwLock<bool>>,
}

impl SimulationClock {
    pub fn new(sink: SharedEventSink, config: SimulationConfig) -> Self {
        let battery = Arc::new(BatteryWatcher::new(config.low_battery_percent));
        Self {
            sink,
            distance_km: Arc::new(RwLock::new(config.start_distance_km)),
            battery_percent: Arc::new(AtomicU8::new(START_BATTERY_PERCENT)),
            battery,
            auto_announce: Arc::new(AtomicBool::new(true)),
            street_names: Arc::new(AtomicBool::new(true)),
            running: Arc::new(RwLock::new(false)),
            config,
        }
    }

    /// Spawn the three generator tasks. Each waits out a full interval
    /// before its first tick and stops on the shutdown signal.
    pub fn start(&self, shutdown: ShutdownSignal) {
        info!(
            "Device simulation started (activity: {}ms, distance: {}ms, battery: {}ms)",
            self.config.activity_interval_ms,
            self.config.distance_interval_ms,
            self.config.battery_interval_ms
        );
        self.spawn_activity_task(shutdown.clone());
        self.spawn_distance_task(shutdown.clone());
        self.spawn_battery_task(shutdown.clone());

        let running = self.running.clone();
        tokio::spawn(async move {
            *running.write().await = true;
            shutdown.notified().wait().await;
            *running.write().await = false;
            info!("Device simulation stopped");
        });
    }

    pub async fn is_running(&self) -> bool {
        *self.running.read().await
    }

    /// Distance walked so far, in kilometres
    pub async fn distance_km(&self) -> f64 {
        *self.distance_km.read().await
    }

    pub fn battery_percent(&self) -> u8 {
        self.battery_percent.load(Ordering::SeqCst)
    }

    /// Update the displayed battery level; the battery task picks it up
    /// on its next tick.
    pub fn set_battery_percent(&self, level: u8) {
        self.battery_percent.store(level, Ordering::SeqCst);
    }

    pub fn auto_announce(&self) -> bool {
        self.auto_announce.load(Ordering::SeqCst)
    }

    pub fn set_auto_announce(&self, enabled: bool) {
        self.auto_announce.store(enabled, Ordering::SeqCst);
    }

    pub fn street_names(&self) -> bool {
        self.street_names.load(Ordering::SeqCst)
    }

    pub fn set_street_names(&self, enabled: bool) {
        self.street_names.store(enabled, Ordering::SeqCst);
    }

    fn spawn_activity_task(&self, shutdown: ShutdownSignal) {
        let sink = self.sink.clone();
        let config = self.config.clone();
        let auto_announce = self.auto_announce.clone();
        let street_names = self.street_names.clone();

        tokio::spawn(async move {
            let period = config.activity_interval();
            let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        // One draw feeds both thresholds, so a navigation
                        // tick always implies an obstacle tick
                        let (roll, obstacle_cm, street_idx) = {
                            let mut rng = rand::thread_rng();
                            (
                                rng.gen::<f64>(),
                                rng.gen_range(20..100u32),
                                rng.gen_range(0..STREETS.len()),
                            )
                        };

                        if roll > config.obstacle_threshold {
                            sink.timeline_insert(obstacle_entry(obstacle_cm)).await;
                            if auto_announce.load(Ordering::SeqCst) {
                                sink.speak(&format!(
                                    "Obstacle detected {} centimeters ahead",
                                    obstacle_cm
                                ))
                                .await;
                            }
                        }
                        if roll > config.navigation_threshold {
                            let street = STREETS[street_idx];
                            sink.timeline_insert(navigation_entry(street)).await;
                            if street_names.load(Ordering::SeqCst) {
                                sink.speak(&format!("You are now on {}", street)).await;
                            }
                        }
                    }
                    _ = shutdown.notified().wait() => break,
                }
            }
        });
    }

    fn spawn_distance_task(&self, shutdown: ShutdownSignal) {
        let config = self.config.clone();
        let distance_km = self.distance_km.clone();

        tokio::spawn(async move {
            let period = config.distance_interval();
            let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let roll: f64 = { rand::thread_rng().gen() };
                        if roll > config.distance_threshold {
                            let mut distance = distance_km.write().await;
                            *distance += config.distance_step_km;
                            debug!("Distance walked: {:.2} km", *distance);
                        }
                    }
                    _ = shutdown.notified().wait() => break,
                }
            }
        });
    }

    fn spawn_battery_task(&self, shutdown: ShutdownSignal) {
        let sink = self.sink.clone();
        let config = self.config.clone();
        let battery_percent = self.battery_percent.clone();
        let battery = self.battery.clone();

        tokio::spawn(async move {
            let period = config.battery_interval();
            let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let level = battery_percent.load(Ordering::SeqCst);
                        if battery.observe(level) {
                            sink.announce(
                                "🔋 Low Battery Warning",
                                &format!(
                                    "Your SmartGuide battery is at {}%. Please charge soon to ensure continuous assistance.",
                                    level
                                ),
                            )
                            .await;
                            sink.speak("Low battery warning. Please charge your device").await;
                            sink.timeline_insert(low_battery_entry()).await;
                        }
                    }
                    _ = shutdown.notified().wait() => break,
                }
            }
        });
    }
}

pub fn obstacle_entry(distance_cm: u32) -> TimelineEntry {
    TimelineEntry::new(
        TimelineKind::Obstacle,
        "Obstacle Detected",
        format!(
            "Object detected {}cm ahead - successfully avoided",
            distance_cm
        ),
    )
}

pub fn navigation_entry(street: &str) -> TimelineEntry {
    TimelineEntry::new(
        TimelineKind::Navigation,
        "Navigation Update",
        format!("Now on {}", street),
    )
}

pub fn low_battery_entry() -> TimelineEntry {
    TimelineEntry::new(
        TimelineKind::Alert,
        "Low Battery",
        "Battery level critical - charge required",
    )
}
