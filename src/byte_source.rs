use std::error::Error;

use rand::{rngs::OsRng, RngCore};

///
/// Error type for `RandomByteSource`s. Boxed so that any source
/// implementation can report its own failure.
///
pub type ByteSourceError = Box<dyn Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, ByteSourceError>;

///
/// A supplier of cryptographically secure random bytes. Implementations
/// hold no state the caller can observe between calls.
///
pub trait RandomByteSource: Send + Sync {
    ///
    /// Fills all of `dest` with random bytes, or returns an error if the
    /// source could not supply them.
    ///
    fn fill(&self, dest: &mut [u8]) -> Result<()>;
}

///
/// `RandomByteSource` backed by the operating system's CSPRNG.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct OsByteSource;

impl RandomByteSource for OsByteSource {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        let mut rng = OsRng::default();
        rng.try_fill_bytes(dest).map_err(|e| e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_source_fills_buffer() {
        let src = OsByteSource;
        let mut bytes = [0u8; 64];
        assert!(src.fill(&mut bytes).is_ok());

        // 64 zero bytes from a working OS source is not a realistic outcome
        assert!(bytes.iter().any(|b| *b != 0));
    }

    #[test]
    fn test_os_source_empty_buffer() {
        let mut bytes = [0u8; 0];
        assert!(OsByteSource.fill(&mut bytes).is_ok());
    }
}
