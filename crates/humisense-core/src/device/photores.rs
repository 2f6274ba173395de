//! Photoresistor on the RP2040 ADC.
//!
//! GPIO 26..=29 map to ADC inputs 0..=3. Any other pin reads as 0 without
//! touching the ADC.

use crate::device::AdcChannel;
use crate::error::{Result, SensorError};

pub const DEFAULT_GPIO: u8 = 26;
pub const ADC_GPIO_FIRST: u8 = 26;
pub const ADC_GPIO_LAST: u8 = 29;
pub const ADC_MAX_RAW: u16 = 0x0FFF;

/// ADC input index for a GPIO pin, if the pin is ADC capable.
pub fn adc_input(gpio_pin: u8) -> Option<u8> {
    (ADC_GPIO_FIRST..=ADC_GPIO_LAST)
        .contains(&gpio_pin)
        .then(|| gpio_pin - ADC_GPIO_FIRST)
}

pub struct Photoresistor<A> {
    adc: A,
    gpio_pin: u8,
}

impl<A: AdcChannel> Photoresistor<A> {
    pub fn new(adc: A, gpio_pin: u8) -> Self {
        Self { adc, gpio_pin }
    }

    /// Current raw 12-bit sample.
    pub fn read(&self) -> Result<u16> {
        if adc_input(self.gpio_pin).is_none() {
            return Ok(0);
        }
        let raw = self.adc.read_raw(self.gpio_pin)?;
        if raw > ADC_MAX_RAW {
            return Err(SensorError::MalformedPayload(format!(
                "adc sample {raw} exceeds 12 bits"
            )));
        }
        Ok(raw)
    }
}
