use std::time::Duration;

use weathernow_core::NotificationConfig;
use weathernow_store::{PreferenceStore, RecencyList, RecentStore, StorageError};
use weathernow_weather::{AlertSpec, TemperatureUnit, WeatherSnapshot};

/// Identifies a network request. Only the latest issued one is honoured.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeDurations {
    pub default: Duration,
    pub fetching: Duration,
    pub alert: Duration,
}

impl Default for NoticeDurations {
    fn default() -> Self {
        Self {
            default: Duration::from_millis(4000),
            fetching: Duration::from_millis(2000),
            alert: Duration::from_millis(7000),
        }
    }
}

impl From<&NotificationConfig> for NoticeDurations {
    fn from(config: &NotificationConfig) -> Self {
        Self {
            default: Duration::from_millis(config.default_ms),
            fetching: Duration::from_millis(config.fetching_ms),
            alert: Duration::from_millis(config.alert_ms),
        }
    }
}

/// The weather currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Displayed {
    pub place_name: String,
    pub snapshot: WeatherSnapshot,
}

/// In-memory mirror of the persisted preferences plus what is on screen.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub unit: TemperatureUnit,
    pub alert: Option<AlertSpec>,
    pub recent: RecencyList,
    pub displayed: Option<Displayed>,
    pub durations: NoticeDurations,
    last_request: RequestId,
}

impl AppState {
    pub fn new(
        unit: TemperatureUnit,
        alert: Option<AlertSpec>,
        recent: RecencyList,
        durations: NoticeDurations,
    ) -> Self {
        Self {
            unit,
            alert,
            recent,
            durations,
            ..Self::default()
        }
    }

    /// Read the persisted preferences and history.
    ///
    /// Each value that cannot be read falls back to its default; the
    /// failures are returned alongside the state.
    pub fn load(
        preferences: &PreferenceStore,
        recent: &RecentStore,
        durations: NoticeDurations,
    ) -> (Self, Vec<StorageError>) {
        let mut failures = Vec::new();
        let unit = or_default(preferences.unit(), &mut failures);
        let alert = or_default(preferences.alert(), &mut failures);
        let places = or_default(recent.list(), &mut failures);

        let state = Self::new(unit, alert, places, durations);
        tracing::debug!(
            "Loaded state: unit {}, alert {:?}, {} recent places",
            state.unit.label(),
            state.alert,
            state.recent.len()
        );
        (state, failures)
    }

    /// Issue a new request id, making every earlier one stale
    pub fn issue_request(&mut self) -> RequestId {
        self.last_request += 1;
        self.last_request
    }

    pub fn is_current(&self, request: RequestId) -> bool {
        request == self.last_request
    }

    pub fn last_request(&self) -> RequestId {
        self.last_request
    }
}

fn or_default<T: Default>(result: Result<T, StorageError>, failures: &mut Vec<StorageError>) -> T {
    result.unwrap_or_else(|e| {
        tracing::error!("Failed to load {}: {}", e.key(), e);
        failures.push(e);
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use weathernow_store::{KeyValueStore, MemoryStore};
    use weathernow_weather::Place;

    #[test]
    fn test_request_ids_supersede() {
        let mut state = AppState::default();
        let first = state.issue_request();
        let second = state.issue_request();
        assert!(second > first);
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }

    #[test]
    fn test_load_reads_stores() {
        let backing: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let prefs = PreferenceStore::new(backing.clone());
        let recent = RecentStore::new(backing);
        prefs.set_unit(TemperatureUnit::Fahrenheit).unwrap();
        recent.add(Place::new("Paris", 48.85, 2.35)).unwrap();

        let (state, failures) = AppState::load(&prefs, &recent, NoticeDurations::default());
        assert!(failures.is_empty());
        assert_eq!(state.unit, TemperatureUnit::Fahrenheit);
        assert_eq!(state.alert, None);
        assert_eq!(state.recent.first().unwrap().name, "Paris");
        assert!(state.displayed.is_none());
    }

    /// Every read fails with an I/O error
    struct UnreadableStore;

    impl KeyValueStore for UnreadableStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Io {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            self.get(key).map(|_| ())
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.get(key).map(|_| ())
        }
    }

    #[test]
    fn test_load_falls_back_when_unreadable() {
        let backing: Arc<dyn KeyValueStore> = Arc::new(UnreadableStore);
        let prefs = PreferenceStore::new(backing.clone());
        let recent = RecentStore::new(backing);

        let (state, failures) = AppState::load(&prefs, &recent, NoticeDurations::default());
        assert_eq!(state.unit, TemperatureUnit::Celsius);
        assert_eq!(state.alert, None);
        assert!(state.recent.is_empty());
        let keys: Vec<&str> = failures.iter().map(|e| e.key()).collect();
        assert_eq!(keys, ["unit", "alert", "recent"]);
    }

    #[test]
    fn test_durations_from_config() {
        let config = NotificationConfig {
            default_ms: 100,
            fetching_ms: 50,
            alert_ms: 300,
        };
        let durations = NoticeDurations::from(&config);
        assert_eq!(durations.alert, Duration::from_millis(300));
    }
}
