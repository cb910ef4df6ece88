use crate::error::{ProcessingError, Result};
use crate::models::{ByteSpan, ScaledTemperature, StationStats};
use crate::utils::constants::{FNV_PRIME, FNV_SEED};

/// FNV-1a over raw name bytes.
#[inline]
pub fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_SEED;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

#[derive(Debug, Clone, Copy)]
pub struct Slot {
    pub key: ByteSpan,
    pub hash: u64,
    pub stats: StationStats,
}

/// Fixed-capacity open-addressed table of station statistics.
///
/// Keys are spans into `buffer`. Lookups scan linearly from
/// `hash % capacity` and compare the referenced bytes, so distinct names
/// never share a slot. The capacity never changes; running out of slots is
/// reported as [`ProcessingError::TableFull`].
#[derive(Debug)]
pub struct AggregateTable<'a> {
    buffer: &'a [u8],
    slots: Vec<Option<Slot>>,
    len: usize,
}

impl<'a> AggregateTable<'a> {
    pub fn new(buffer: &'a [u8], capacity: usize) -> Self {
        Self {
            buffer,
            slots: vec![None; capacity.max(1)],
            len: 0,
        }
    }

    pub fn buffer(&self) -> &'a [u8] {
        self.buffer
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Record one observation for the station named by `name`.
    #[inline]
    pub fn lookup_or_insert(&mut self, name: ByteSpan, temperature: ScaledTemperature) -> Result<()> {
        let buffer = self.buffer;
        let hash = fnv1a(name.resolve(buffer));
        let index = self.find_slot(hash, |slot| slot.key.bytes_eq(buffer, &name, buffer))?;

        match &mut self.slots[index] {
            Some(slot) => slot.stats.record(temperature),
            empty => {
                *empty = Some(Slot {
                    key: name,
                    hash,
                    stats: StationStats::new(temperature),
                });
                self.len += 1;
            }
        }

        Ok(())
    }

    /// Fold a slot taken from another table over the same buffer.
    pub fn merge_slot(&mut self, incoming: &Slot) -> Result<()> {
        let buffer = self.buffer;
        let index = self.find_slot(incoming.hash, |slot| {
            slot.key.bytes_eq(buffer, &incoming.key, buffer)
        })?;

        match &mut self.slots[index] {
            Some(slot) => slot.stats.merge(&incoming.stats),
            empty => {
                *empty = Some(*incoming);
                self.len += 1;
            }
        }

        Ok(())
    }

    pub fn get(&self, name: &[u8]) -> Option<&StationStats> {
        let buffer = self.buffer;
        let index = self
            .find_slot(fnv1a(name), |slot| slot.key.resolve(buffer) == name)
            .ok()?;
        self.slots[index].as_ref().map(|slot| &slot.stats)
    }

    /// Occupied slots in slot order.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> + '_ {
        self.slots.iter().flatten()
    }

    /// Station names and statistics in slot order.
    pub fn entries(&self) -> impl Iterator<Item = (&'a [u8], &StationStats)> + '_ {
        let buffer = self.buffer;
        self.slots()
            .map(move |slot| (slot.key.resolve(buffer), &slot.stats))
    }

    pub fn total_count(&self) -> u64 {
        self.slots().map(|slot| slot.stats.count).sum()
    }

    /// Index of the slot whose key `matches`, or of the empty slot where it belongs.
    fn find_slot(&self, hash: u64, matches: impl Fn(&Slot) -> bool) -> Result<usize> {
        let capacity = self.slots.len();
        let mut index = (hash % capacity as u64) as usize;

        for _ in 0..capacity {
            match &self.slots[index] {
                None => return Ok(index),
                Some(slot) if slot.hash == hash && matches(slot) => {
                    return Ok(index)
                }
                Some(_) => {
                    index += 1;
                    if index == capacity {
                        index = 0;
                    }
                }
            }
        }

        Err(ProcessingError::TableFull { capacity })
    }
}
