//! Fully materialized model payloads.

use std::ops::Deref;

/// The complete payload of one model, read to end-of-stream.
///
/// There is no partial state: a value either holds every byte the source
/// produced or it does not exist. Emptiness is not judged here.
#[derive(Clone, PartialEq, Eq)]
pub struct ModelBytes {
    data: Vec<u8>,
}

impl ModelBytes {
    pub(crate) fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Give up the buffer, e.g. when handing it to the engine.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl Deref for ModelBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for ModelBytes {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl std::fmt::Debug for ModelBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelBytes")
            .field("len", &self.data.len())
            .finish()
    }
}
