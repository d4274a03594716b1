use log::warn;
use std::thread::sleep;

use crate::config::RetrySettings;
use crate::errors::Result;

/// Re-runs store calls that failed for a transient reason
#[derive(Debug, Clone)]
pub struct Retry {
    settings: RetrySettings,
}

impl Retry {
    pub fn new(settings: RetrySettings) -> Self {
        Self { settings }
    }

    pub fn run<T, F>(&self, operation: &str, mut call: F) -> Result<T>
    where
        F: FnMut() -> Result<T>,
    {
        let mut attempt = 1;
        loop {
            match call() {
                Err(e) if self.should_retry(attempt, e.is_transient()) => {
                    warn!(
                        "{} failed (attempt {}/{}): {}",
                        operation, attempt, self.settings.max_attempts, e
                    );
                    self.apply_delay();
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    fn should_retry(&self, attempt: u32, transient: bool) -> bool {
        transient && attempt < self.settings.max_attempts
    }

    fn apply_delay(&self) {
        if !self.settings.backoff().is_zero() {
            sleep(self.settings.backoff());
        }
    }
}
