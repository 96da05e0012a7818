//! In-memory sound clips.

use std::sync::Arc;

/// A sound clip held in memory, ready to be decoded on each playback.
///
/// The bytes are shared, so cloning a source is cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundSource {
    name: String,
    data: Arc<[u8]>,
}

impl SoundSource {
    /// Creates a source from encoded audio bytes (WAV, MP3, FLAC, ...).
    #[must_use]
    pub fn from_bytes(name: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Returns the name of the sound source.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a shared handle to the encoded bytes.
    #[must_use]
    pub fn data(&self) -> Arc<[u8]> {
        Arc::clone(&self.data)
    }

    /// Returns the size of the encoded clip in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes() {
        let source = SoundSource::from_bytes("alarm", vec![1u8, 2, 3]);
        assert_eq!(source.name(), "alarm");
        assert_eq!(source.len(), 3);
        assert!(!source.is_empty());
        assert_eq!(&*source.data(), &[1, 2, 3]);
    }

    #[test]
    fn test_clone_shares_data() {
        let source = SoundSource::from_bytes("alarm", vec![0u8; 16]);
        let cloned = source.clone();
        assert_eq!(source, cloned);
        assert!(Arc::ptr_eq(&source.data(), &cloned.data()));
    }

    #[test]
    fn test_empty() {
        let source = SoundSource::from_bytes("silence", Vec::<u8>::new());
        assert!(source.is_empty());
    }
}
