//! JSON records served by the backend.
//!
//! Field names on the wire are fixed: `temperatureC`, `temperatureF`,
//! `photores` and `ts` (epoch milliseconds).

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Current wall-clock time in epoch milliseconds.
///
/// A clock set before 1970 yields 0 rather than an error.
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// One sensor sample.
///
/// Celsius and Fahrenheit are independent fields; nothing here keeps them
/// consistent with each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub humidity: f64,
    #[serde(rename = "temperatureC")]
    pub temperature_c: f64,
    #[serde(rename = "temperatureF")]
    pub temperature_f: f64,
    #[serde(rename = "photores")]
    pub photoresistance: f64,
    #[serde(rename = "ts")]
    pub timestamp_ms: u64,
}

impl Reading {
    /// All measurement fields zeroed, stamped with `ts`.
    pub fn zeroed(ts: u64) -> Self {
        Self {
            humidity: 0.0,
            temperature_c: 0.0,
            temperature_f: 0.0,
            photoresistance: 0.0,
            timestamp_ms: ts,
        }
    }
}

/// Liveness payload for `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub ok: bool,
    pub service: String,
    pub ts: u64,
}

impl Health {
    pub fn now(service: impl Into<String>) -> Self {
        Self {
            ok: true,
            service: service.into(),
            ts: now_ms(),
        }
    }
}

/// Celsius to Fahrenheit, as the board firmware computes it.
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_reading_uses_wire_names() {
        let v = serde_json::to_value(Reading::zeroed(42)).unwrap();
        assert_eq!(v["humidity"], 0.0);
        assert_eq!(v["temperatureC"], 0.0);
        assert_eq!(v["temperatureF"], 0.0);
        assert_eq!(v["photores"], 0.0);
        assert_eq!(v["ts"], 42);
        assert_eq!(v.as_object().unwrap().len(), 5);
    }

    #[test]
    fn fahrenheit_fixed_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn health_is_ok() {
        let h = Health::now("backend");
        assert!(h.ok);
        assert_eq!(h.service, "backend");
        assert!(h.ts > 0);
    }
}
