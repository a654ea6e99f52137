//! Battery threshold watcher

use std::sync::atomic::{AtomicBool, Ordering};

/// Fires once per downward crossing of the configured battery level.
///
/// Not a random generator: it observes whatever level the display shows
/// and re-arms once the level climbs back above the threshold (a charge).
pub struct BatteryWatcher {
    threshold: u8,
    warned: AtomicBool,
}

impl BatteryWatcher {
    pub fn new(threshold: u8) -> Self {
        Self {
            threshold,
            warned: AtomicBool::new(false),
        }
    }

    /// Observe the current displayed level; returns true exactly when the
    /// low-battery warning should fire.
    pub fn observe(&self, level: u8) -> bool {
        if level == self.threshold {
            return !self.warned.swap(true, Ordering::SeqCst);
        }
        if level > self.threshold {
            self.warned.store(false, Ordering::SeqCst);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_the_threshold() {
        let watcher = BatteryWatcher::new(20);
        assert!(!watcher.observe(78));
        assert!(watcher.observe(20));
        // repeated checks at the threshold stay quiet
        assert!(!watcher.observe(20));
        assert!(!watcher.observe(20));
    }

    #[test]
    fn rearms_after_charging_above_the_threshold() {
        let watcher = BatteryWatcher::new(20);
        assert!(watcher.observe(20));
        assert!(!watcher.observe(20));

        // charged back up, then drained again
        assert!(!watcher.observe(80));
        assert!(watcher.observe(20));
    }

    #[test]
    fn below_threshold_does_not_rearm() {
        let watcher = BatteryWatcher::new(20);
        assert!(watcher.observe(20));
        assert!(!watcher.observe(15));
        assert!(!watcher.observe(20));
    }
}
