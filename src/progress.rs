//! Coarse progress reporting for long sample loops.
//!
//! A reporter wraps an optional caller-supplied callback and forwards the
//! completion percentage at every 10% boundary. The callback only observes;
//! nothing it does can change the transform being reported on.

/// Callback receiving a completion percentage in `10..=100`
pub type ProgressFn<'a> = &'a mut dyn FnMut(u8);

const GRANULARITY: u8 = 10;

pub struct ProgressReporter<'a> {
    callback: Option<ProgressFn<'a>>,
    total: usize,
    last: u8,
}

impl<'a> ProgressReporter<'a> {
    /// Create a reporter for `total` units of work
    pub fn new(callback: Option<ProgressFn<'a>>, total: usize) -> Self {
        Self {
            callback,
            total,
            last: 0,
        }
    }

    /// Record that `done` units are complete.
    /// Fires the callback only when a new 10% boundary is crossed.
    pub fn update(&mut self, done: usize) {
        if self.callback.is_none() || self.total == 0 {
            return;
        }
        let percent = (done.min(self.total) * 100 / self.total) as u8;
        let bucket = percent - percent % GRANULARITY;
        if bucket > self.last {
            self.last = bucket;
            self.notify(bucket);
        }
    }

    /// Report 100% unless it was already reported
    pub fn finish(&mut self) {
        if self.last < 100 {
            self.last = 100;
            self.notify(100);
        }
    }

    fn notify(&mut self, percent: u8) {
        if let Some(callback) = self.callback.as_mut() {
            callback(percent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(total: usize) -> Vec<u8> {
        let mut seen = Vec::new();
        let mut cb = |p: u8| seen.push(p);
        let mut reporter = ProgressReporter::new(Some(&mut cb), total);
        for done in 1..=total {
            reporter.update(done);
        }
        reporter.finish();
        seen
    }

    #[test]
    fn test_reports_every_ten_percent() {
        assert_eq!(collect(1000), vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    }

    #[test]
    fn test_small_totals_skip_boundaries() {
        assert_eq!(collect(5), vec![20, 40, 60, 80, 100]);
        assert_eq!(collect(1), vec![100]);
    }

    #[test]
    fn test_empty_work_reports_completion_once() {
        assert_eq!(collect(0), vec![100]);
    }

    #[test]
    fn test_without_callback() {
        let mut reporter = ProgressReporter::new(None, 10);
        reporter.update(5);
        reporter.finish();
    }
}
