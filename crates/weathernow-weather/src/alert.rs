//! Temperature threshold alerts.
//!
//! Evaluated fresh on every fetch. No trigger history is kept, so the same
//! alert fires again on the next fetch while the threshold is still met.

use crate::types::{AlertSpec, TemperatureUnit};
use crate::units;

/// A met threshold, with the current temperature in the alert's unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertTrigger {
    pub value: f64,
    pub unit: TemperatureUnit,
}

impl AlertTrigger {
    /// Value to one decimal place, e.g. `30.0`
    pub fn display_value(&self) -> String {
        format!("{:.1}", self.value)
    }

    pub fn message(&self) -> String {
        format!(
            "🔥 {}°{} exceeds your alert!",
            self.display_value(),
            self.unit.symbol()
        )
    }
}

/// Check `temp_c` against the active alert. The boundary is inclusive;
/// no alert means no trigger.
pub fn evaluate(temp_c: f64, alert: Option<&AlertSpec>) -> Option<AlertTrigger> {
    let spec = alert?;
    let value = units::convert(temp_c, spec.unit);

    (value >= spec.threshold).then_some(AlertTrigger {
        value,
        unit: spec.unit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn celsius(threshold: f64) -> AlertSpec {
        AlertSpec {
            threshold,
            unit: TemperatureUnit::Celsius,
        }
    }

    #[test]
    fn test_below_threshold() {
        assert_eq!(evaluate(29.9, Some(&celsius(30.0))), None);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let trigger = evaluate(30.0, Some(&celsius(30.0))).unwrap();
        assert_eq!(trigger.display_value(), "30.0");
        assert_eq!(trigger.message(), "🔥 30.0°C exceeds your alert!");
    }

    #[test]
    fn test_no_alert_never_triggers() {
        for temp in [-50.0, 0.0, 30.0, 1000.0] {
            assert!(evaluate(temp, None).is_none());
        }
    }

    #[test]
    fn test_fahrenheit_alert_converts_first() {
        let spec = AlertSpec {
            threshold: 86.0,
            unit: TemperatureUnit::Fahrenheit,
        };
        // 29.9°C = 85.82°F
        assert!(evaluate(29.9, Some(&spec)).is_none());

        let trigger = evaluate(30.0, Some(&spec)).unwrap();
        assert_eq!(trigger.unit, TemperatureUnit::Fahrenheit);
        assert_eq!(trigger.display_value(), "86.0");
    }

    #[test]
    fn test_comparison_uses_unrounded_value() {
        // 29.98°C = 85.964°F, which would display as 86.0
        let spec = AlertSpec {
            threshold: 85.99,
            unit: TemperatureUnit::Fahrenheit,
        };
        assert!(evaluate(29.98, Some(&spec)).is_none());
    }
}
