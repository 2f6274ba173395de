use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;
use humisense_core::device::{dht20, photores};
use humisense_core::error::{Result, SensorError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub source: SourceSection,

    #[serde(default)]
    pub ui: UiSection,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            server: ServerSection::default(),
            source: SourceSection::default(),
            ui: UiSection::default(),
        }
    }
}

impl BackendConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SensorError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        self.server.validate()?;
        self.source.validate()?;
        Ok(())
    }
}

fn default_version() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_service_name")]
    pub service_name: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            service_name: default_service_name(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.host
            .parse::<IpAddr>()
            .map_err(|e| SensorError::BadRequest(format!("server.host must be an IP address: {e}")))?;
        if self.service_name.trim().is_empty() {
            return Err(SensorError::BadRequest(
                "server.service_name must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// `PORT` wins over the file. Unset leaves the configured port alone.
    pub fn apply_port_override(&mut self, port: Option<&str>) -> Result<()> {
        if let Some(raw) = port {
            if raw.trim().is_empty() {
                return Err(SensorError::BadRequest(
                    "PORT is set but empty; unset it to use the configured port (default 3001)".into(),
                ));
            }
            self.port = raw
                .trim()
                .parse::<u16>()
                .map_err(|e| SensorError::BadRequest(format!("PORT={raw:?} is not a valid port: {e}")))?;
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| SensorError::BadRequest(format!("server.host must be an IP address: {e}")))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    3001
}
fn default_service_name() -> String {
    "backend".into()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Zeroed readings stamped with the request time.
    #[default]
    Stub,
    /// Full DHT20 + ADC acquisition path against a simulated board.
    Simulated,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Stub => "stub",
            SourceKind::Simulated => "simulated",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceSection {
    #[serde(default)]
    pub kind: SourceKind,

    #[serde(default = "default_dht20_addr")]
    pub dht20_addr: u8,

    #[serde(default = "default_photores_gpio")]
    pub photores_gpio: u8,

    #[serde(default)]
    pub simulated: SimulatedSection,
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            dht20_addr: default_dht20_addr(),
            photores_gpio: default_photores_gpio(),
            simulated: SimulatedSection::default(),
        }
    }
}

impl SourceSection {
    pub fn validate(&self) -> Result<()> {
        if self.dht20_addr > 0x7F {
            return Err(SensorError::BadRequest(
                "source.dht20_addr must be a 7-bit I2C address".into(),
            ));
        }
        self.simulated.validate()
    }
}

fn default_dht20_addr() -> u8 {
    dht20::DEFAULT_ADDR
}
fn default_photores_gpio() -> u8 {
    photores::DEFAULT_GPIO
}

/// Ambient conditions the simulated board reports.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulatedSection {
    #[serde(default = "default_sim_humidity")]
    pub humidity: f64,

    #[serde(default = "default_sim_temperature_c")]
    pub temperature_c: f64,

    #[serde(default = "default_sim_light_raw")]
    pub light_raw: u16,
}

impl Default for SimulatedSection {
    fn default() -> Self {
        Self {
            humidity: default_sim_humidity(),
            temperature_c: default_sim_temperature_c(),
            light_raw: default_sim_light_raw(),
        }
    }
}

impl SimulatedSection {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.humidity) {
            return Err(SensorError::BadRequest(
                "source.simulated.humidity must be between 0 and 100".into(),
            ));
        }
        if !(-50.0..=150.0).contains(&self.temperature_c) {
            return Err(SensorError::BadRequest(
                "source.simulated.temperature_c must be between -50 and 150".into(),
            ));
        }
        if self.light_raw > photores::ADC_MAX_RAW {
            return Err(SensorError::BadRequest(
                "source.simulated.light_raw must fit in 12 bits".into(),
            ));
        }
        Ok(())
    }
}

fn default_sim_humidity() -> f64 {
    45.0
}
fn default_sim_temperature_c() -> f64 {
    22.0
}
fn default_sim_light_raw() -> u16 {
    2048
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiSection {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_caption")]
    pub caption: String,

    #[serde(default = "default_button_label")]
    pub button_label: String,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            caption: default_caption(),
            button_label: default_button_label(),
        }
    }
}

fn default_title() -> String {
    "Humidity Sensor UI".into()
}
fn default_caption() -> String {
    "Static placeholder panel".into()
}
fn default_button_label() -> String {
    "Test Button".into()
}
