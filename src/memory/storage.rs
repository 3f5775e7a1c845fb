use crate::memory::Addressable;
use serde::{Deserialize, Serialize};

/// Flat byte store addressed by the index bits of a pointer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StorageArray {
    #[serde(with = "serde_bytes")]
    data: Vec<u8>,
}

impl StorageArray {
    /// `capacity` must already be a power of two.
    pub fn new(capacity: usize) -> Self {
        StorageArray {
            data: vec![0; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    fn slot(&self, index: usize) -> usize {
        index & (self.data.len() - 1)
    }
}

impl Addressable for StorageArray {
    fn read(&self, index: usize) -> u8 {
        self.data[self.slot(index)]
    }

    fn write(&mut self, index: usize, value: u8) {
        let slot = self.slot(index);
        self.data[slot] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::StorageArray;
    use crate::memory::Addressable;

    #[test]
    fn indices_alias_modulo_capacity() {
        let mut storage = StorageArray::new(16);
        storage.write(3, 0xAB);
        assert_eq!(storage.read(3), 0xAB);
        assert_eq!(storage.read(19), 0xAB);

        storage.write(35, 0xCD);
        assert_eq!(storage.read(3), 0xCD);
    }

    #[test]
    fn reads_are_non_destructive() {
        let mut storage = StorageArray::new(4);
        storage.write(1, 7);
        assert_eq!(storage.read(1), 7);
        assert_eq!(storage.read(1), 7);
        assert_eq!(storage.read(0), 0);
    }
}
