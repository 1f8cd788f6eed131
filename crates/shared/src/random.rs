//! Random domains
//!
//! Draws that every networked participant must agree on come from a
//! [`SyncedRng`]; one-off local decisions (like rolling hire candidates, which
//! end up in the campaign save anyway) come from an [`UnsyncedRng`]. They are
//! separate types so an API can demand one domain at compile time.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::SyncedRng {}
    impl Sealed for super::UnsyncedRng {}
}

/// A random source belonging to one of the two domains
pub trait RandomDomain: RngCore + sealed::Sealed {
    /// Whether draws must agree across participants
    const SYNCED: bool;

    /// Uniform integer in `[min, max)`; returns `min` for an empty range
    fn range(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            min
        } else {
            self.gen_range(min..max)
        }
    }

    /// Uniform pick from a slice
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            let index = self.range(0, items.len());
            items.get(index)
        }
    }
}

/// Deterministic random source shared by all participants of a session
#[derive(Debug, Clone)]
pub struct SyncedRng(ChaCha8Rng);

impl SyncedRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Local-only random source
#[derive(Debug, Clone)]
pub struct UnsyncedRng(ChaCha8Rng);

impl UnsyncedRng {
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }

    /// Fixed seed, for tests and reproducible previews
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for UnsyncedRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

macro_rules! delegate_rng_core {
    ($ty:ty) => {
        impl RngCore for $ty {
            fn next_u32(&mut self) -> u32 {
                self.0.next_u32()
            }

            fn next_u64(&mut self) -> u64 {
                self.0.next_u64()
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                self.0.fill_bytes(dest)
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
                self.0.try_fill_bytes(dest)
            }
        }
    };
}

delegate_rng_core!(SyncedRng);
delegate_rng_core!(UnsyncedRng);

impl RandomDomain for SyncedRng {
    const SYNCED: bool = true;
}

impl RandomDomain for UnsyncedRng {
    const SYNCED: bool = false;
}

/// Pick an item with probability proportional to its weight.
///
/// Items with a non-positive or non-finite weight are never picked. Returns
/// `None` when no item is eligible or the weights overflow.
pub fn select_weighted<'a, T, R: RandomDomain>(
    items: &'a [T],
    weight: impl Fn(&T) -> f32,
    rng: &mut R,
) -> Option<&'a T> {
    let total: f32 = items.iter().map(|i| usable_weight(weight(i))).sum();
    if !total.is_finite() || total <= 0.0 {
        return None;
    }

    let mut roll = rng.gen_range(0.0..total);
    let mut last_positive = None;
    for item in items {
        let w = usable_weight(weight(item));
        if w <= 0.0 {
            continue;
        }
        if roll < w {
            return Some(item);
        }
        roll -= w;
        last_positive = Some(item);
    }
    // float drift on the final subtraction
    last_positive
}

fn usable_weight(w: f32) -> f32 {
    if w.is_finite() && w > 0.0 {
        w
    } else {
        0.0
    }
}
