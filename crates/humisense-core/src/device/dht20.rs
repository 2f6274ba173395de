//! DHT20 frame decoding.
//!
//! A measurement is triggered by writing `[0xAC, 0x33, 0x00]` and then reading
//! back 7 bytes:
//!
//! ```text
//! [status, h19..h12, h11..h4, h3..h0|t19..t16, t15..t8, t7..t0, crc8]
//! ```
//!
//! Humidity and temperature are 20-bit fractions of full scale.

use crate::device::I2cBus;
use crate::error::{Result, SensorError};

pub const DEFAULT_ADDR: u8 = 0x38;
pub const TRIGGER_CMD: [u8; 3] = [0xAC, 0x33, 0x00];
pub const FRAME_LEN: usize = 7;

const STATUS_BUSY: u8 = 0x80;
const STATUS_CALIBRATED: u8 = 0x08;
const FULL_SCALE: f64 = (1u32 << 20) as f64;

/// Decoded temperature/humidity pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dht20Sample {
    pub humidity: f64,
    pub temperature_c: f64,
}

/// CRC-8, polynomial 0x31, init 0xFF.
pub fn crc8(data: &[u8]) -> u8 {
    let mut crc: u8 = 0xFF;
    for &b in data {
        crc ^= b;
        for _ in 0..8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ 0x31
            } else {
                crc << 1
            };
        }
    }
    crc
}

/// Decode one 7-byte measurement frame.
pub fn decode_frame(frame: &[u8]) -> Result<Dht20Sample> {
    if frame.len() < FRAME_LEN {
        return Err(SensorError::MalformedPayload(format!(
            "dht20 frame too short: {} bytes",
            frame.len()
        )));
    }
    let frame = &frame[..FRAME_LEN];

    let status = frame[0];
    if status & STATUS_BUSY != 0 {
        return Err(SensorError::SensorUnavailable(
            "dht20 busy, measurement not ready".into(),
        ));
    }
    if status & STATUS_CALIBRATED == 0 {
        return Err(SensorError::SensorUnavailable(
            "dht20 not calibrated".into(),
        ));
    }

    let expected = crc8(&frame[..6]);
    if expected != frame[6] {
        return Err(SensorError::MalformedPayload(format!(
            "dht20 crc mismatch: got 0x{:02X}, expected 0x{:02X}",
            frame[6], expected
        )));
    }

    let raw_h = ((frame[1] as u32) << 12) | ((frame[2] as u32) << 4) | ((frame[3] as u32) >> 4);
    let raw_t = (((frame[3] as u32) & 0x0F) << 16) | ((frame[4] as u32) << 8) | frame[5] as u32;

    Ok(Dht20Sample {
        humidity: raw_h as f64 / FULL_SCALE * 100.0,
        temperature_c: raw_t as f64 / FULL_SCALE * 200.0 - 50.0,
    })
}

/// Inverse of [`decode_frame`] for a ready, calibrated sensor.
///
/// Values are clamped to the sensor range (0..=100 %RH, -50..=150 °C).
pub fn encode_frame(humidity: f64, temperature_c: f64) -> [u8; FRAME_LEN] {
    let max = (1u32 << 20) - 1;
    let raw_h = ((humidity.clamp(0.0, 100.0) / 100.0 * FULL_SCALE).round() as u32).min(max);
    let raw_t =
        (((temperature_c.clamp(-50.0, 150.0) + 50.0) / 200.0 * FULL_SCALE).round() as u32).min(max);

    let mut f = [0u8; FRAME_LEN];
    f[0] = 0x1C;
    f[1] = (raw_h >> 12) as u8;
    f[2] = (raw_h >> 4) as u8;
    f[3] = (((raw_h & 0x0F) << 4) as u8) | ((raw_t >> 16) & 0x0F) as u8;
    f[4] = (raw_t >> 8) as u8;
    f[5] = raw_t as u8;
    f[6] = crc8(&f[..6]);
    f
}

/// A DHT20 attached to an I2C bus.
pub struct Dht20<B> {
    bus: B,
    addr: u8,
}

impl<B: I2cBus> Dht20<B> {
    pub fn new(bus: B, addr: u8) -> Self {
        Self { bus, addr }
    }

    /// Trigger a measurement and decode the answer.
    pub fn measure(&self) -> Result<Dht20Sample> {
        self.bus.write(self.addr, &TRIGGER_CMD)?;
        let frame = self.bus.read(self.addr, FRAME_LEN)?;
        let sample = decode_frame(&frame)?;
        tracing::trace!(
            addr = self.addr,
            humidity = sample.humidity,
            temperature_c = sample.temperature_c,
            "dht20 sample"
        );
        Ok(sample)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn crc8_reference_vector() {
        assert_eq!(crc8(&[0xBE, 0xEF]), 0x92);
    }

    #[test]
    fn encode_then_decode_is_close() {
        let s = decode_frame(&encode_frame(42.5, 21.0)).unwrap();
        assert!((s.humidity - 42.5).abs() < 0.001);
        assert!((s.temperature_c - 21.0).abs() < 0.001);
    }

    #[test]
    fn encode_clamps_out_of_range() {
        let s = decode_frame(&encode_frame(250.0, 400.0)).unwrap();
        assert!(s.humidity < 100.0 && s.humidity > 99.99);
        assert!(s.temperature_c < 150.0 && s.temperature_c > 149.99);
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut v = encode_frame(50.0, 25.0).to_vec();
        v.push(0xFF);
        assert!(decode_frame(&v).is_ok());
    }
}
