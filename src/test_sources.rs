//! Deterministic `RandomByteSource`s for unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rand::{rngs::StdRng, RngCore, SeedableRng};

use crate::byte_source::{RandomByteSource, Result};

/// Counts `fill` calls and requested bytes before delegating to `inner`
pub struct CountingSource<S> {
    inner: S,
    calls: AtomicUsize,
    bytes: AtomicUsize,
}

impl<S: RandomByteSource> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
            bytes: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn bytes(&self) -> usize {
        self.bytes.load(Ordering::SeqCst)
    }
}

impl<S: RandomByteSource> RandomByteSource for CountingSource<S> {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.bytes.fetch_add(dest.len(), Ordering::SeqCst);
        self.inner.fill(dest)
    }
}

pub struct FailingSource;

impl RandomByteSource for FailingSource {
    fn fill(&self, _dest: &mut [u8]) -> Result<()> {
        Err("entropy unavailable".into())
    }
}

/// Fills every byte with the same value
pub struct ConstSource(pub u8);

impl RandomByteSource for ConstSource {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        dest.fill(self.0);
        Ok(())
    }
}

/// Hands out a fixed byte sequence, then fails once it runs dry
pub struct ScriptedSource(Mutex<VecDeque<u8>>);

impl ScriptedSource {
    pub fn new(bytes: &[u8]) -> Self {
        Self(Mutex::new(bytes.iter().copied().collect()))
    }
}

impl RandomByteSource for ScriptedSource {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        let mut queue = self.0.lock().unwrap();
        if queue.len() < dest.len() {
            return Err("script exhausted".into());
        }
        for b in dest.iter_mut() {
            *b = queue.pop_front().unwrap();
        }
        Ok(())
    }
}

/// Seeded `StdRng`, for statistical tests that must not flake
pub struct SeededSource(Mutex<StdRng>);

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self(Mutex::new(StdRng::seed_from_u64(seed)))
    }
}

impl RandomByteSource for SeededSource {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        self.0.lock().unwrap().fill_bytes(dest);
        Ok(())
    }
}
