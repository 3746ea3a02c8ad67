use parking_lot::Mutex;

/// The shared 64-bit reduction total.
///
/// One accumulator lives for exactly one Reduce stage. Workers sum their
/// rows locally and call [`merge`](Self::merge) once each, so the lock is
/// taken `T` times per run rather than once per element.
#[derive(Debug, Default)]
pub struct ReductionAccumulator {
    total: Mutex<i64>,
}

impl ReductionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a worker's local sum under the lock. Overflow wraps.
    pub fn merge(&self, local: i64) {
        let mut total = self.total.lock();
        *total = total.wrapping_add(local);
    }

    /// Consume the accumulator, returning the final total.
    pub fn into_inner(self) -> i64 {
        self.total.into_inner()
    }
}
