//! Device-backed source and the simulated board it runs against off-target.

use async_trait::async_trait;

use humisense_core::device::dht20::{self, Dht20, TRIGGER_CMD};
use humisense_core::device::photores::{self, Photoresistor};
use humisense_core::device::{AdcChannel, I2cBus};
use humisense_core::error::{Result, SensorError};
use humisense_core::reading::celsius_to_fahrenheit;
use humisense_core::{now_ms, Reading};

use crate::config::SimulatedSection;
use crate::source::ReadingSource;

/// Samples a DHT20 and a photoresistor on every call.
pub struct DeviceSource<B, A> {
    kind: &'static str,
    dht20: Dht20<B>,
    light: Photoresistor<A>,
}

impl<B: I2cBus, A: AdcChannel> DeviceSource<B, A> {
    pub fn new(bus: B, adc: A, dht20_addr: u8, photores_gpio: u8) -> Self {
        Self {
            kind: "device",
            dht20: Dht20::new(bus, dht20_addr),
            light: Photoresistor::new(adc, photores_gpio),
        }
    }

    /// Label reported in logs and metrics.
    pub fn with_kind(mut self, kind: &'static str) -> Self {
        self.kind = kind;
        self
    }
}

#[async_trait]
impl<B, A> ReadingSource for DeviceSource<B, A>
where
    B: I2cBus + 'static,
    A: AdcChannel + 'static,
{
    fn kind(&self) -> &'static str {
        self.kind
    }

    async fn latest(&self) -> Result<Reading> {
        let sample = self.dht20.measure()?;
        let light = self.light.read()?;
        Ok(Reading {
            humidity: sample.humidity,
            temperature_c: sample.temperature_c,
            temperature_f: celsius_to_fahrenheit(sample.temperature_c),
            photoresistance: light as f64,
            timestamp_ms: now_ms(),
        })
    }
}

/// A board that answers like a ready DHT20 and a steady ADC.
///
/// Immutable after construction, so one instance can serve any number of
/// concurrent requests.
#[derive(Debug)]
pub struct SimulatedBoard {
    dht20_addr: u8,
    frame: [u8; dht20::FRAME_LEN],
    light_raw: u16,
}

impl SimulatedBoard {
    pub fn new(dht20_addr: u8, ambient: &SimulatedSection) -> Self {
        Self {
            dht20_addr,
            frame: dht20::encode_frame(ambient.humidity, ambient.temperature_c),
            light_raw: ambient.light_raw.min(photores::ADC_MAX_RAW),
        }
    }

    fn nack(addr: u8) -> SensorError {
        SensorError::SensorUnavailable(format!("no device at i2c address 0x{addr:02X}"))
    }
}

impl I2cBus for SimulatedBoard {
    fn write(&self, addr: u8, bytes: &[u8]) -> Result<()> {
        if addr != self.dht20_addr {
            return Err(Self::nack(addr));
        }
        if bytes != TRIGGER_CMD.as_slice() {
            return Err(SensorError::Internal(format!(
                "simulated dht20 only understands the trigger command, got {bytes:02X?}"
            )));
        }
        Ok(())
    }

    fn read(&self, addr: u8, len: usize) -> Result<Vec<u8>> {
        if addr != self.dht20_addr {
            return Err(Self::nack(addr));
        }
        Ok(self.frame.iter().copied().take(len).collect())
    }
}

impl AdcChannel for SimulatedBoard {
    fn read_raw(&self, _gpio_pin: u8) -> Result<u16> {
        Ok(self.light_raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ambient() -> SimulatedSection {
        SimulatedSection {
            humidity: 60.0,
            temperature_c: 30.0,
            light_raw: 1500,
        }
    }

    #[tokio::test]
    async fn device_source_reads_board() {
        let board = std::sync::Arc::new(SimulatedBoard::new(0x38, &ambient()));
        let src = DeviceSource::new(board.clone(), board, 0x38, 26);
        let r = src.latest().await.unwrap();
        assert!((r.humidity - 60.0).abs() < 0.001);
        assert!((r.temperature_c - 30.0).abs() < 0.001);
        assert!((r.temperature_f - 86.0).abs() < 0.01);
        assert_eq!(r.photoresistance, 1500.0);
        assert!(r.timestamp_ms > 0);
    }

    #[tokio::test]
    async fn wrong_address_is_unavailable() {
        let board = std::sync::Arc::new(SimulatedBoard::new(0x38, &ambient()));
        let src = DeviceSource::new(board.clone(), board, 0x40, 26);
        let err = src.latest().await.unwrap_err();
        assert_eq!(err.client_code().as_str(), "SENSOR_UNAVAILABLE");
    }
}
