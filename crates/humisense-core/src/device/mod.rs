//! Raw sensor access and frame decoding.
//!
//! The board carries a DHT20 temperature/humidity sensor on I2C and a
//! photoresistor on one of the RP2040 ADC pins. The bus traits below are the
//! seam between decoding (pure, in this crate) and whatever actually moves the
//! bytes: real hardware, a simulator, or a test double.

pub mod dht20;
pub mod photores;

use crate::error::Result;

/// Minimal I2C master.
pub trait I2cBus: Send + Sync {
    fn write(&self, addr: u8, bytes: &[u8]) -> Result<()>;
    fn read(&self, addr: u8, len: usize) -> Result<Vec<u8>>;
}

/// 12-bit ADC indexed by GPIO pin.
pub trait AdcChannel: Send + Sync {
    fn read_raw(&self, gpio_pin: u8) -> Result<u16>;
}

impl<T: I2cBus + ?Sized> I2cBus for &T {
    fn write(&self, addr: u8, bytes: &[u8]) -> Result<()> {
        (**self).write(addr, bytes)
    }
    fn read(&self, addr: u8, len: usize) -> Result<Vec<u8>> {
        (**self).read(addr, len)
    }
}

impl<T: I2cBus + ?Sized> I2cBus for std::sync::Arc<T> {
    fn write(&self, addr: u8, bytes: &[u8]) -> Result<()> {
        (**self).write(addr, bytes)
    }
    fn read(&self, addr: u8, len: usize) -> Result<Vec<u8>> {
        (**self).read(addr, len)
    }
}

impl<T: AdcChannel + ?Sized> AdcChannel for std::sync::Arc<T> {
    fn read_raw(&self, gpio_pin: u8) -> Result<u16> {
        (**self).read_raw(gpio_pin)
    }
}

pub use dht20::{Dht20, Dht20Sample};
pub use photores::Photoresistor;
