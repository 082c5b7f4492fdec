// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};

#[derive(Clone, Default)]
pub struct DummyClock;

impl solblog::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}
