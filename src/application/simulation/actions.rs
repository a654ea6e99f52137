//! Dashboard device actions
//!
//! Direct user-triggered behaviors: emergency alert, location sharing,
//! voice controls and announcement settings. Everything here is a thin
//! orchestration over the event sink plus a little cycling state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tracing::info;

use super::SimulationClock;
use crate::domain::{TimelineEntry, TimelineKind};
use crate::notifications::SharedEventSink;

const VOLUME_STEPS: [u8; 5] = [60, 70, 80, 90, 100];
const SPEED_STEPS: [(f64, &str); 3] = [(0.8, "Slow"), (1.0, "Normal"), (1.2, "Fast")];

/// How long the emergency status stays active in the demo
const EMERGENCY_RESET: Duration = Duration::from_secs(10);

const VOICE_TEST_MESSAGES: [&str; 5] = [
    "Voice assistant is working correctly",
    "Obstacle detected 30 centimeters ahead",
    "Turn right in 10 meters",
    "You are on Corrales Avenue",
    "Battery at 78 percent",
];

/// User-facing device actions on the dashboard
pub struct DeviceActions {
    sink: SharedEventSink,
    clock: Arc<SimulationClock>,
    volume_idx: AtomicUsize,
    speed_idx: AtomicUsize,
    emergency_active: Arc<AtomicBool>,
}

impl DeviceActions {
    pub fn new(sink: SharedEventSink, clock: Arc<SimulationClock>) -> Self {
        Self {
            sink,
            clock,
            volume_idx: AtomicUsize::new(2), // 80%
            speed_idx: AtomicUsize::new(1),  // Normal
            emergency_active: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn emergency_active(&self) -> bool {
        self.emergency_active.load(Ordering::SeqCst)
    }

    pub fn volume_percent(&self) -> u8 {
        VOLUME_STEPS[self.volume_idx.load(Ordering::SeqCst)]
    }

    pub fn speed(&self) -> (f64, &'static str) {
        SPEED_STEPS[self.speed_idx.load(Ordering::SeqCst)]
    }

    /// Emergency button: alert all contacts and flag the status as active.
    /// The flag resets itself after the demo window.
    pub async fn trigger_emergency(&self) {
        self.emergency_active.store(true, Ordering::SeqCst);
        info!("Emergency alert triggered");

        self.sink
            .announce(
                "🚨 EMERGENCY ALERT SENT!",
                "Emergency notification has been sent to all your contacts:\n\n\
                 • Pedro Dela Cruz (Primary)\n\
                 • Maria Santos (Secondary)\n\
                 • Emergency Services (911)\n\n\
                 Help is on the way!",
            )
            .await;
        self.sink
            .speak("Emergency alert sent to all contacts. Help is on the way.")
            .await;
        self.sink
            .timeline_insert(TimelineEntry::new(
                TimelineKind::Alert,
                "Emergency Alert",
                "Emergency button pressed",
            ))
            .await;

        let active = self.emergency_active.clone();
        tokio::spawn(async move {
            tokio::time::sleep(EMERGENCY_RESET).await;
            active.store(false, Ordering::SeqCst);
        });
    }

    /// Share the current location with the emergency contacts
    pub async fn share_location(&self, location: &str) {
        self.sink
            .announce(
                "📤 Location Shared",
                &format!(
                    "Your current location has been shared:\n\n{}\n\nSent to all emergency contacts.",
                    location
                ),
            )
            .await;
        self.sink.speak("Location shared successfully").await;
        self.sink
            .timeline_insert(TimelineEntry::new(
                TimelineKind::Navigation,
                "Location Shared",
                format!("Shared location: {}", location),
            ))
            .await;
    }

    /// Play one random canned message; returns what was spoken
    pub async fn test_voice(&self) -> &'static str {
        let message = {
            let idx = rand::thread_rng().gen_range(0..VOICE_TEST_MESSAGES.len());
            VOICE_TEST_MESSAGES[idx]
        };

        self.sink.speak(message).await;
        self.sink
            .announce("🔊 Voice Test", &format!("Playing: \"{}\"", message))
            .await;
        self.sink
            .timeline_insert(TimelineEntry::new(
                TimelineKind::Success,
                "Voice Test",
                "Voice system tested successfully",
            ))
            .await;
        message
    }

    /// Cycle the voice volume one step; returns the new level
    pub async fn adjust_volume(&self) -> u8 {
        let idx = self.cycle(&self.volume_idx, VOLUME_STEPS.len());
        let volume = VOLUME_STEPS[idx];

        self.sink
            .announce(
                "🔈 Volume Adjusted",
                &format!("Voice volume set to {}%", volume),
            )
            .await;
        self.sink
            .speak(&format!("Volume set to {} percent", volume))
            .await;
        volume
    }

    /// Cycle the voice speed one step; returns the new (rate, label)
    pub async fn change_speed(&self) -> (f64, &'static str) {
        let idx = self.cycle(&self.speed_idx, SPEED_STEPS.len());
        let (rate, label) = SPEED_STEPS[idx];

        self.sink
            .announce("⚡ Speed Adjusted", &format!("Voice speed set to {}", label))
            .await;
        self.sink.speak(&format!("Speed set to {}", label)).await;
        (rate, label)
    }

    /// Start a call to an emergency contact
    pub async fn call_contact(&self, name: &str) {
        self.sink
            .announce(
                "📞 Calling...",
                &format!("Connecting to {}...\n\nPlease wait.", name),
            )
            .await;
        self.sink.speak(&format!("Calling {}", name)).await;
        self.sink
            .timeline_insert(TimelineEntry::new(
                TimelineKind::Navigation,
                "Call Initiated",
                format!("Calling {}", name),
            ))
            .await;
    }

    /// Toggle automatic obstacle announcements on the clock
    pub async fn set_auto_announce(&self, enabled: bool) {
        self.clock.set_auto_announce(enabled);
        self.settings_changed("Auto-announce", enabled).await;
    }

    /// Toggle street-name announcements on the clock
    pub async fn set_street_names(&self, enabled: bool) {
        self.clock.set_street_names(enabled);
        self.settings_changed("Street names", enabled).await;
    }

    async fn settings_changed(&self, setting: &str, enabled: bool) {
        let status = if enabled { "enabled" } else { "disabled" };
        self.sink
            .announce("⚙️ Setting Updated", &format!("{} {}", setting, status))
            .await;
        self.sink
            .timeline_insert(TimelineEntry::new(
                TimelineKind::Success,
                "Settings Changed",
                format!("{} {}", setting, status),
            ))
            .await;
    }

    fn cycle(&self, idx: &AtomicUsize, len: usize) -> usize {
        let next = (idx.load(Ordering::SeqCst) + 1) % len;
        idx.store(next, Ordering::SeqCst);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::notifications::{RecordingSink, SinkEvent};

    fn actions() -> (DeviceActions, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let clock = Arc::new(SimulationClock::new(
            sink.clone(),
            SimulationConfig::default(),
        ));
        (DeviceActions::new(sink.clone(), clock), sink)
    }

    #[tokio::test]
    async fn emergency_announces_speaks_and_logs() {
        let (actions, sink) = actions();
        actions.trigger_emergency().await;

        assert!(actions.emergency_active());

        let timeline = sink.timeline_snapshot().await;
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].kind, TimelineKind::Alert);
        assert_eq!(timeline[0].title, "Emergency Alert");

        let spoken = sink.spoken().await;
        assert_eq!(spoken.len(), 1);
        assert!(spoken[0].starts_with("Emergency alert sent"));
    }

    #[tokio::test]
    async fn volume_cycles_through_the_steps_and_wraps() {
        let (actions, _sink) = actions();
        assert_eq!(actions.volume_percent(), 80);
        assert_eq!(actions.adjust_volume().await, 90);
        assert_eq!(actions.adjust_volume().await, 100);
        assert_eq!(actions.adjust_volume().await, 60);
    }

    #[tokio::test]
    async fn speed_cycles_through_the_labels() {
        let (actions, _sink) = actions();
        assert_eq!(actions.speed().1, "Normal");
        assert_eq!(actions.change_speed().await.1, "Fast");
        assert_eq!(actions.change_speed().await.1, "Slow");
        assert_eq!(actions.change_speed().await.1, "Normal");
    }

    #[tokio::test]
    async fn voice_test_speaks_a_canned_message() {
        let (actions, sink) = actions();
        let message = actions.test_voice().await;
        assert!(VOICE_TEST_MESSAGES.contains(&message));
        assert_eq!(sink.spoken().await, vec![message.to_string()]);
    }

    #[tokio::test]
    async fn settings_toggle_reaches_the_clock_and_the_timeline() {
        let (actions, sink) = actions();
        assert!(actions.clock.auto_announce());

        actions.set_auto_announce(false).await;
        assert!(!actions.clock.auto_announce());

        actions.set_street_names(false).await;
        assert!(!actions.clock.street_names());

        let events = sink.events().await;
        let announced: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, SinkEvent::Announce { .. }))
            .collect();
        assert_eq!(announced.len(), 2);

        let timeline = sink.timeline_snapshot().await;
        assert_eq!(timeline.len(), 2);
        assert!(timeline.iter().all(|e| e.title == "Settings Changed"));
    }

    #[tokio::test]
    async fn share_location_and_call_contact_log_navigation_entries() {
        let (actions, sink) = actions();
        actions.share_location("Corrales Avenue, CDO").await;
        actions.call_contact("Pedro Dela Cruz").await;

        let timeline = sink.timeline_snapshot().await;
        assert_eq!(timeline.len(), 2);
        assert!(timeline.iter().all(|e| e.kind == TimelineKind::Navigation));
        // newest first
        assert_eq!(timeline[0].title, "Call Initiated");
        assert_eq!(timeline[1].title, "Location Shared");
    }
}
