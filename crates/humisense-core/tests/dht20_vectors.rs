//! DHT20 frame vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;
use std::sync::Mutex;

use serde::Deserialize;

use humisense_core::device::dht20::{decode_frame, Dht20, DEFAULT_ADDR, TRIGGER_CMD};
use humisense_core::device::I2cBus;
use humisense_core::{Result, SensorError};

#[derive(Debug, Deserialize)]
struct Vector {
    description: String,
    frame: String,
    #[serde(default)]
    expect: Option<Expect>,
    #[serde(default)]
    expect_error: Option<ExpectError>,
}

#[derive(Debug, Deserialize)]
struct Expect {
    humidity: f64,
    temperature_c: f64,
}

#[derive(Debug, Deserialize)]
struct ExpectError {
    code: String,
}

fn load() -> Vec<Vector> {
    let s = fs::read_to_string("tests/vectors/dht20_frames.json").unwrap();
    serde_json::from_str(&s).unwrap()
}

#[test]
fn frame_vectors() {
    for v in load() {
        let bytes = hex::decode(&v.frame).expect("invalid hex in test vector");
        let got = decode_frame(&bytes);
        match (&v.expect, &v.expect_error) {
            (Some(want), None) => {
                let s = got.unwrap_or_else(|e| panic!("{}: {e}", v.description));
                assert!((s.humidity - want.humidity).abs() < 0.001, "{}", v.description);
                assert!(
                    (s.temperature_c - want.temperature_c).abs() < 0.001,
                    "{}",
                    v.description
                );
            }
            (None, Some(want)) => {
                let e = got.expect_err(&v.description);
                assert_eq!(e.client_code().as_str(), want.code, "{}", v.description);
            }
            _ => panic!("{}: vector needs exactly one of expect/expect_error", v.description),
        }
    }
}

/// Records writes and answers reads with a canned frame.
struct ScriptedBus {
    writes: Mutex<Vec<(u8, Vec<u8>)>>,
    answer: Vec<u8>,
}

impl I2cBus for ScriptedBus {
    fn write(&self, addr: u8, bytes: &[u8]) -> Result<()> {
        self.writes.lock().unwrap().push((addr, bytes.to_vec()));
        Ok(())
    }

    fn read(&self, _addr: u8, len: usize) -> Result<Vec<u8>> {
        Ok(self.answer.iter().copied().take(len).collect())
    }
}

#[test]
fn measure_sends_trigger_then_decodes() {
    let bus = ScriptedBus {
        writes: Mutex::new(Vec::new()),
        answer: hex::decode("1c80000600004e").unwrap(),
    };
    let sensor = Dht20::new(&bus, DEFAULT_ADDR);
    let s = sensor.measure().unwrap();
    assert!((s.humidity - 50.0).abs() < 0.001);

    let writes = bus.writes.lock().unwrap();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0], (DEFAULT_ADDR, TRIGGER_CMD.to_vec()));
}

struct DeadBus;

impl I2cBus for DeadBus {
    fn write(&self, addr: u8, _bytes: &[u8]) -> Result<()> {
        Err(SensorError::SensorUnavailable(format!("no ack from 0x{addr:02X}")))
    }

    fn read(&self, _addr: u8, _len: usize) -> Result<Vec<u8>> {
        unreachable!("read after failed write")
    }
}

#[test]
fn bus_failure_is_unavailable() {
    let err = Dht20::new(DeadBus, DEFAULT_ADDR).measure().unwrap_err();
    assert_eq!(err.client_code().as_str(), "SENSOR_UNAVAILABLE");
}
