use serde::{Deserialize, Serialize};

/// Address cursor with one extra wrap bit above the index bits.
///
/// With `address_bits = 4` the pointer is five bits wide: bits 0-3 select one
/// of 16 slots and bit 4 toggles on every full traversal.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pointer {
    raw: u32,
    address_bits: u32,
}

impl Pointer {
    pub fn new(address_bits: u32) -> Self {
        Pointer { raw: 0, address_bits }
    }

    pub fn address_bits(&self) -> u32 {
        self.address_bits
    }

    /// Full (N+1)-bit value.
    pub fn raw(&self) -> u32 {
        self.raw
    }

    pub fn index(&self) -> usize {
        (self.raw & self.index_mask()) as usize
    }

    pub fn wrap_bit(&self) -> bool {
        (self.raw >> self.address_bits) & 1 != 0
    }

    /// Increment by one modulo 2^(N+1). This is the only way a pointer moves.
    pub fn advance(self) -> Self {
        Pointer {
            raw: self.raw.wrapping_add(1) & self.full_mask(),
            address_bits: self.address_bits,
        }
    }

    /// False for a raw value wider than N+1 bits, which `advance` would
    /// truncate instead of incrementing.
    pub fn is_in_range(&self) -> bool {
        self.address_bits < 31 && self.raw & !self.full_mask() == 0
    }

    pub fn cleared(self) -> Self {
        Pointer::new(self.address_bits)
    }

    /// `(self - other) mod 2^(N+1)`, i.e. occupancy when `self` is the write
    /// pointer and `other` the read pointer.
    pub fn distance_from(&self, other: &Pointer) -> usize {
        (self.raw.wrapping_sub(other.raw) & self.full_mask()) as usize
    }

    fn index_mask(&self) -> u32 {
        (1 << self.address_bits) - 1
    }

    fn full_mask(&self) -> u32 {
        (1 << (self.address_bits + 1)) - 1
    }
}
