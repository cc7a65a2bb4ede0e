use std::sync::Arc;

use weathernow_weather::{AlertSpec, TemperatureUnit};

use crate::error::StorageError;
use crate::kv::KeyValueStore;

pub const UNIT_KEY: &str = "unit";
pub const ALERT_KEY: &str = "alert";

/// Unit preference and active alert.
///
/// Malformed stored values read as unset; only failures of the underlying
/// store are returned as errors.
#[derive(Clone)]
pub struct PreferenceStore {
    store: Arc<dyn KeyValueStore>,
}

impl PreferenceStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored unit, Celsius when unset or malformed
    pub fn unit(&self) -> Result<TemperatureUnit, StorageError> {
        Ok(self.read(UNIT_KEY)?.unwrap_or_default())
    }

    pub fn set_unit(&self, unit: TemperatureUnit) -> Result<(), StorageError> {
        self.write(UNIT_KEY, &unit)?;
        tracing::info!("Unit preference set to {}", unit.label());
        Ok(())
    }

    /// Active alert, `None` when unset or malformed
    pub fn alert(&self) -> Result<Option<AlertSpec>, StorageError> {
        let alert: Option<AlertSpec> = self.read(ALERT_KEY)?;
        Ok(alert.filter(|spec| {
            let usable = spec.threshold.is_finite();
            if !usable {
                tracing::warn!("Ignoring stored alert with non-finite threshold");
            }
            usable
        }))
    }

    pub fn set_alert(&self, spec: &AlertSpec) -> Result<(), StorageError> {
        self.write(ALERT_KEY, spec)?;
        tracing::info!("Alert set at {}°{}", spec.threshold, spec.unit.symbol());
        Ok(())
    }

    pub fn clear_alert(&self) -> Result<(), StorageError> {
        self.store.remove(ALERT_KEY)?;
        tracing::info!("Alert cleared");
        Ok(())
    }

    fn read<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!("Ignoring malformed stored {}: {}", key, e);
                Ok(None)
            }
        }
    }

    fn write<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    fn prefs() -> (Arc<MemoryStore>, PreferenceStore) {
        let backing = Arc::new(MemoryStore::new());
        let prefs = PreferenceStore::new(backing.clone());
        (backing, prefs)
    }

    #[test]
    fn test_unit_defaults_to_celsius() {
        let (_, prefs) = prefs();
        assert_eq!(prefs.unit().unwrap(), TemperatureUnit::Celsius);
    }

    #[test]
    fn test_unit_persists() {
        let (backing, prefs) = prefs();
        prefs.set_unit(TemperatureUnit::Fahrenheit).unwrap();
        assert_eq!(prefs.unit().unwrap(), TemperatureUnit::Fahrenheit);
        assert_eq!(backing.get(UNIT_KEY).unwrap().as_deref(), Some("\"F\""));
    }

    #[test]
    fn test_malformed_unit_defaults() {
        let (backing, prefs) = prefs();
        backing.set(UNIT_KEY, "kelvin").unwrap();
        assert_eq!(prefs.unit().unwrap(), TemperatureUnit::Celsius);
    }

    #[test]
    fn test_alert_set_and_clear() {
        let (_, prefs) = prefs();
        assert_eq!(prefs.alert().unwrap(), None);

        let spec = AlertSpec {
            threshold: 30.0,
            unit: TemperatureUnit::Celsius,
        };
        prefs.set_alert(&spec).unwrap();
        assert_eq!(prefs.alert().unwrap(), Some(spec));

        prefs.clear_alert().unwrap();
        assert_eq!(prefs.alert().unwrap(), None);
    }

    #[test]
    fn test_malformed_alert_is_absent() {
        let (backing, prefs) = prefs();
        for raw in ["{not json", r#"{"value":"hot","unit":"C"}"#, r#"{"value":30,"unit":"K"}"#, "null"] {
            backing.set(ALERT_KEY, raw).unwrap();
            assert_eq!(prefs.alert().unwrap(), None, "raw {:?}", raw);
        }
    }

    #[test]
    fn test_alert_reads_integer_value() {
        let (backing, prefs) = prefs();
        backing.set(ALERT_KEY, r#"{"value":86,"unit":"F"}"#).unwrap();
        let spec = prefs.alert().unwrap().unwrap();
        assert_eq!(spec.threshold, 86.0);
        assert_eq!(spec.unit, TemperatureUnit::Fahrenheit);
    }
}
