//! Random index sources for password sampling.

mod hw;
mod primes;

use zeroize::Zeroize;

use primes::PRIMES;

/// Uniform random integer provider used by the sampler.
pub trait IndexSource {
    /// Return a value in `[0, bound)`. `bound` is never zero.
    fn index(&mut self, bound: usize) -> usize;
}

pub fn entropy_source() -> &'static str {
    hw::source_name()
}

// =============================================================================
// Hardware-seeded RNG
// =============================================================================

/// Cycle-counter seeded generator with a SplitMix64 output finalizer.
///
/// Not cryptographic. Fresh counter entropy is mixed in on every step, so two
/// instances created back to back still diverge.
pub struct HwRng {
    state: u64,
}

impl HwRng {
    #[inline]
    pub fn new() -> Self {
        Self {
            state: hw::entropy(),
        }
    }

    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        let ent = hw::entropy();

        // Mix entropy into prime selection
        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % PRIMES.len() as u64) as usize;

        // State transition: rotate, multiply by prime, XOR entropy
        self.state = self.state.rotate_left(17).wrapping_mul(PRIMES[idx]) ^ ent;

        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

impl Default for HwRng {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexSource for HwRng {
    #[inline]
    fn index(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

impl Drop for HwRng {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

// =============================================================================
// Scripted source (tests)
// =============================================================================

/// Replays a fixed sequence of raw values, reduced modulo `bound`.
#[cfg(test)]
pub struct Scripted {
    values: Vec<usize>,
    pos: usize,
}

#[cfg(test)]
impl Scripted {
    pub fn new(values: &[usize]) -> Self {
        Self {
            values: values.to_vec(),
            pos: 0,
        }
    }
}

#[cfg(test)]
impl IndexSource for Scripted {
    fn index(&mut self, bound: usize) -> usize {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hw_index_stays_in_bound() {
        let mut rng = HwRng::new();
        for bound in [1, 2, 10, 62, 74] {
            for _ in 0..1_000 {
                assert!(rng.index(bound) < bound);
            }
        }
    }

    #[test]
    fn hw_covers_small_range() {
        let mut rng = HwRng::new();
        let mut seen = [false; 10];
        for _ in 0..10_000 {
            seen[rng.index(10)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn scripted_replays_and_wraps() {
        let mut src = Scripted::new(&[3, 7, 12]);
        assert_eq!(src.index(10), 3);
        assert_eq!(src.index(10), 7);
        assert_eq!(src.index(10), 2);
        assert_eq!(src.index(10), 3);
    }
}
