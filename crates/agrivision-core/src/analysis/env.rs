/// Injectable sources of randomness, time and delay for the simulated analysis.
///
/// Production code uses [`AnalysisEnv::system`]; tests swap in a scripted
/// picker, a fixed clock and [`NoDelay`] so analyses finish synchronously
/// and deterministically.
use chrono::{DateTime, Local, Timelike, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Simulated inference latency.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1200);

/// Chooses an index into the findings table.
pub trait FindingPicker: Send + Sync {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick_index(&self, len: usize) -> usize;
}

/// Uniform random picker over a `StdRng`.
pub struct RandomPicker {
    rng: Mutex<StdRng>,
}

impl RandomPicker {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl FindingPicker for RandomPicker {
    fn pick_index(&self, len: usize) -> usize {
        self.rng.lock().gen_range(0..len)
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
pub struct SequencePicker {
    indices: Vec<usize>,
    cursor: AtomicUsize,
}

impl SequencePicker {
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl FindingPicker for SequencePicker {
    fn pick_index(&self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let i = self.cursor.fetch_add(1, Ordering::Relaxed) % self.indices.len();
        self.indices[i] % len
    }
}

/// Wall-clock source.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Hour of day (0–23) in the local time zone.
    fn local_hour(&self) -> u32 {
        self.now().with_timezone(&Local).hour()
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Suspends the analysis worker for the simulated latency.
pub trait Delay: Send + Sync {
    fn wait(&self, duration: Duration);
}

/// Real `thread::sleep`.
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn wait(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Returns immediately.
pub struct NoDelay;

impl Delay for NoDelay {
    fn wait(&self, _duration: Duration) {}
}

/// Everything the analysis needs from the outside world.
#[derive(Clone)]
pub struct AnalysisEnv {
    pub picker: Arc<dyn FindingPicker>,
    pub clock: Arc<dyn Clock>,
    pub delay: Arc<dyn Delay>,
    pub latency: Duration,
}

impl AnalysisEnv {
    /// Entropy-seeded picker, system clock, real sleep.
    pub fn system(latency: Duration) -> Self {
        Self {
            picker: Arc::new(RandomPicker::from_entropy()),
            clock: Arc::new(SystemClock),
            delay: Arc::new(ThreadDelay),
            latency,
        }
    }

    /// Seeded picker, system clock and no delay.
    pub fn instant(seed: u64) -> Self {
        Self {
            picker: Arc::new(RandomPicker::seeded(seed)),
            clock: Arc::new(SystemClock),
            delay: Arc::new(NoDelay),
            latency: Duration::ZERO,
        }
    }

    pub fn with_picker(mut self, picker: impl FindingPicker + 'static) -> Self {
        self.picker = Arc::new(picker);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }
}

impl Default for AnalysisEnv {
    fn default() -> Self {
        Self::system(DEFAULT_LATENCY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_picker_is_reproducible() {
        let a = RandomPicker::seeded(7);
        let b = RandomPicker::seeded(7);
        let xs: Vec<usize> = (0..32).map(|_| a.pick_index(4)).collect();
        let ys: Vec<usize> = (0..32).map(|_| b.pick_index(4)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|&i| i < 4));
    }

    #[test]
    fn test_random_picker_covers_table() {
        let p = RandomPicker::seeded(1);
        let mut seen = [false; 4];
        for _ in 0..500 {
            seen[p.pick_index(4)] = true;
        }
        assert!(seen.iter().all(|&s| s), "500 draws must hit every finding");
    }

    #[test]
    fn test_sequence_picker_cycles_and_wraps() {
        let p = SequencePicker::new(vec![3, 1, 6]);
        assert_eq!(p.pick_index(4), 3);
        assert_eq!(p.pick_index(4), 1);
        assert_eq!(p.pick_index(4), 2); // 6 % 4
        assert_eq!(p.pick_index(4), 3);
    }

    #[test]
    fn test_empty_sequence_picks_first() {
        assert_eq!(SequencePicker::new(Vec::new()).pick_index(4), 0);
    }
}
