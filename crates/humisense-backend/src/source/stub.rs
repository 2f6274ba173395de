use async_trait::async_trait;

use humisense_core::{now_ms, Reading, Result};

use crate::source::ReadingSource;

/// Placeholder source: every measurement is 0, `ts` is the call time.
#[derive(Default)]
pub struct StubSource;

impl StubSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReadingSource for StubSource {
    fn kind(&self) -> &'static str {
        "stub"
    }

    async fn latest(&self) -> Result<Reading> {
        Ok(Reading::zeroed(now_ms()))
    }
}
