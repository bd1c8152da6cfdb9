// Position table shared by the four context hashes.
//
// One flat array of back-pointers into the input.  There is no chaining:
// the most recent write to a slot wins and older positions are dropped.
// Stored values carry HASH_OFFSET so that 0 means "empty".

use std::collections::TryReserveError;

/// Offset added to stored positions so 0 means "empty slot".
pub const HASH_OFFSET: u32 = 1;

/// Largest input position the table can record.
pub const MAX_POSITION: usize = (u32::MAX - HASH_OFFSET) as usize;

/// Power-of-two table of the latest input position seen per hash slot.
pub struct HashTable {
    slots: Vec<u32>,
    mask: u32,
}

impl HashTable {
    /// Allocate a table of `size` empty slots.
    ///
    /// `size` must be a non-zero power of two no larger than 2^32.
    pub fn try_new(size: usize) -> Result<Self, TryReserveError> {
        debug_assert!(size.is_power_of_two());
        let mut slots = Vec::new();
        slots.try_reserve_exact(size)?;
        slots.resize(size, 0);
        Ok(Self {
            slots,
            mask: (size - 1) as u32,
        })
    }

    /// Slot mask (`size - 1`).
    #[inline]
    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// Slot count.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Position stored in `slot`, if any.
    #[inline(always)]
    pub fn get(&self, slot: usize) -> Option<usize> {
        match self.slots[slot] {
            0 => None,
            v => Some((v - HASH_OFFSET) as usize),
        }
    }

    /// Record `pos` in `slot`, replacing whatever was there.
    #[inline(always)]
    pub fn set(&mut self, slot: usize, pos: usize) {
        debug_assert!(pos <= MAX_POSITION);
        self.slots[slot] = pos as u32 + HASH_OFFSET;
    }
}
