use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Simple scoped profiler recording cumulative time per section.
#[derive(Default)]
pub struct Profiler {
    pub timings: HashMap<&'static str, Duration>,
}

impl Profiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(&mut self, guard: &ProfilerGuard) {
        self.record(guard.name, guard.start.elapsed());
    }

    pub fn record(&mut self, name: &'static str, elapsed: Duration) {
        *self.timings.entry(name).or_default() += elapsed;
    }

    pub fn report_sorted(&self) -> Vec<(&'static str, Duration)> {
        let mut v: Vec<_> = self.timings.iter().map(|(n, d)| (*n, *d)).collect();
        v.sort_by(|a, b| b.1.cmp(&a.1));
        v
    }

    pub fn clear(&mut self) {
        self.timings.clear();
    }

    /// Log the collected timings at debug level and reset
    pub fn log_and_clear(&mut self) {
        for (name, dur) in self.report_sorted() {
            log::debug!("{:<20} {:?}", name, dur);
        }
        self.clear();
    }
}

pub struct ProfilerGuard {
    name: &'static str,
    start: Instant,
}

/// Start a profiling section. Returns a guard that will update the global
/// profiler when dropped.
pub fn start(name: &'static str) -> ProfilerGuard {
    ProfilerGuard { name, start: Instant::now() }
}

#[cfg(feature = "profiling")]
impl Drop for ProfilerGuard {
    fn drop(&mut self) {
        crate::PROFILER.lock().finish(self);
    }
}

/// Flush the global profiler to the log. No-op without the `profiling` feature.
pub fn report() {
    #[cfg(feature = "profiling")]
    crate::PROFILER.lock().log_and_clear();
}

/// Macro helper to profile a scope only when the `profiling` feature is enabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _guard = $crate::profiler::start($name);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_sections_by_total_time() {
        let mut p = Profiler::new();
        p.record("export", Duration::from_millis(2));
        p.record("sweep", Duration::from_millis(5));
        p.record("export", Duration::from_millis(1));
        let report = p.report_sorted();
        assert_eq!(report[0], ("sweep", Duration::from_millis(5)));
        assert_eq!(report[1], ("export", Duration::from_millis(3)));
        p.clear();
        assert!(p.report_sorted().is_empty());
    }
}
