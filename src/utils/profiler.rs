use std::time::Instant;

/// Guard that logs how long a scope took when it is dropped.
pub struct ScopeTimer {
    name: &'static str,
    start: Instant,
}

impl ScopeTimer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }
}

impl Drop for ScopeTimer {
    fn drop(&mut self) {
        log::debug!("[TIMER] {} took {:?}", self.name, self.start.elapsed());
    }
}
