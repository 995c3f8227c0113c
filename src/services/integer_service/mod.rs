pub mod error;

use std::sync::Arc;

use derive_more::Constructor;
use log::{debug, error, trace};

use crate::byte_source::RandomByteSource;

use self::error::{IntegerServiceError, Result};

/// Rejections allowed before the byte source is declared broken. Each
/// attempt is rejected with probability at most 0.5, so a working source
/// reaches this with probability 2^-128.
pub const MAX_ATTEMPTS: u32 = 128;

const INT_SIZE: usize = std::mem::size_of::<i64>();

pub trait IntegerService: Send + Sync {
    ///
    /// Returns a uniformly distributed integer in `[min, max]` inclusive.
    ///
    fn generate(&self, min: i64, max: i64) -> Result<i64>;
}

#[derive(Clone, Constructor)]
pub struct CoreIntegerService {
    source: Arc<dyn RandomByteSource>,
}

impl IntegerService for CoreIntegerService {
    fn generate(&self, min: i64, max: i64) -> Result<i64> {
        generate(min, max, self.source.as_ref())
    }
}

///
/// Draws a uniformly distributed integer in `[min, max]` from `source`,
/// by rejection sampling over the smallest bitmask covering `max - min`.
///
/// `min == max` returns immediately without touching `source`. Every
/// rejected attempt discards its bytes and requests fresh ones.
///
pub fn generate(min: i64, max: i64, source: &dyn RandomByteSource) -> Result<i64> {
    if min > max {
        return Err(IntegerServiceError::InvalidRange { min, max });
    }
    if min == max {
        return Ok(min);
    }

    let sampling = Sampling::for_range(min, max);
    debug!("Sampling [{min}, {max}] with {:?}", sampling);

    // High bytes past `sampling.bytes()` stay zero for every attempt
    let mut buf = [0u8; INT_SIZE];

    for attempt in 1..=MAX_ATTEMPTS {
        if let Err(e) = source.fill(&mut buf[..sampling.bytes()]) {
            error!("Random byte source failed on attempt {attempt}: {e}");
            return Err(e.into());
        }

        let raw = u64::from_le_bytes(buf);
        if let Some(val) = sampling.accept(raw, min, max) {
            return Ok(val);
        }
        trace!("Rejected candidate on attempt {attempt}");
    }

    error!("Random byte source is broken - {MAX_ATTEMPTS} rejections for [{min}, {max}]");
    Err(IntegerServiceError::EntropyExhausted {
        attempts: MAX_ATTEMPTS,
    })
}

///
/// Parses a textual bound. Only plain base-10 integers that fit an `i64`
/// are accepted.
///
pub fn parse_bound(text: &str) -> Result<i64> {
    text.trim().parse::<i64>().map_err(|e| {
        IntegerServiceError::InvalidArgument(format!("`{text}` is not an integer: {e}"))
    })
}

#[derive(Debug, PartialEq, Eq)]
enum Sampling {
    /// `max - min` fits an `i64`: keep the low bits under `mask` and
    /// offset the result by `min`
    Shifted { bytes: usize, mask: u64 },
    /// `max - min` overflows an `i64`: take all eight bytes as a signed
    /// value and test it against the bounds directly
    Wide,
}

impl Sampling {
    fn for_range(min: i64, max: i64) -> Self {
        match max.checked_sub(min) {
            Some(range) => {
                let bits = u64::BITS - (range as u64).leading_zeros();
                Sampling::Shifted {
                    bytes: ((bits + 7) / 8) as usize,
                    mask: u64::MAX >> (u64::BITS - bits),
                }
            }
            None => Sampling::Wide,
        }
    }

    fn bytes(&self) -> usize {
        match self {
            Sampling::Shifted { bytes, .. } => *bytes,
            Sampling::Wide => INT_SIZE,
        }
    }

    ///
    /// Maps `raw` into a candidate and returns it if it lands in
    /// `[min, max]`. A shift that would overflow is a rejection.
    ///
    fn accept(&self, raw: u64, min: i64, max: i64) -> Option<i64> {
        let val = match self {
            Sampling::Shifted { mask, .. } => i64::try_from(raw & mask).ok()?.checked_add(min)?,
            Sampling::Wide => raw as i64,
        };
        (min..=max).contains(&val).then_some(val)
    }
}
