// src/circular/ring.rs
//! Fixed-capacity ring of [`Sample`]s with overwrite-oldest semantics.
//!
//! # Memory
//!
//! - Storage is only allocated when the first sample is pushed
//! - Samples are wiped with `zeroize` on drop, `free()` and `burn_free()`
//! - `clear()` only resets positions and keeps the allocation for reuse
//!
//! # Performance
//!
//! - Power-of-2 capacities use fast bitwise modulo
//! - Other capacities use standard modulo

use crate::error::{BufferError, Result};
use crate::sample::Sample;
use zeroize::Zeroize;

/// Maximum ring capacity in samples (10 million, 320MB of storage)
pub const MAX_CAPACITY: usize = 10_000_000;

/// Iterator over the samples of a ring, oldest first.
pub type Iter<'a> = std::iter::Chain<std::slice::Iter<'a, Sample>, std::slice::Iter<'a, Sample>>;

/// A circular store of samples holding at most `capacity` entries.
///
/// Pushing into a full ring overwrites the oldest sample and hands it back.
///
/// # Example
///
/// ```rust
/// use tsbuf::{Sample, SampleRing};
///
/// let mut ring = SampleRing::new(2);
/// assert!(ring.push(Sample::exact(0.0, 1.0)).is_none());
/// assert!(ring.push(Sample::exact(1.0, 2.0)).is_none());
///
/// let evicted = ring.push(Sample::exact(2.0, 3.0));
/// assert_eq!(evicted, Some(Sample::exact(0.0, 1.0)));
/// assert_eq!(ring.front(), Some(&Sample::exact(1.0, 2.0)));
/// ```
pub struct SampleRing {
    /// Internal storage (lazily allocated, wiped on drop)
    data: Option<Box<[Sample]>>,
    /// Maximum number of samples
    capacity: usize,
    /// Number of samples currently stored
    len: usize,
    /// Slot of the oldest sample
    head: usize,
    /// Whether capacity is power-of-2 (enables fast modulo)
    is_pow2: bool,
}

impl SampleRing {
    /// Creates a new ring holding at most `capacity` samples.
    ///
    /// Memory is not allocated until the first push.
    ///
    /// # Panics
    ///
    /// Panics if capacity exceeds [`MAX_CAPACITY`].
    pub fn new(capacity: usize) -> Self {
        assert!(
            capacity <= MAX_CAPACITY,
            "Sample ring capacity {} exceeds maximum {}",
            capacity,
            MAX_CAPACITY
        );
        Self::new_unchecked(capacity)
    }

    /// Fallible counterpart of [`SampleRing::new`].
    pub fn try_new(capacity: usize) -> Result<Self> {
        if capacity > MAX_CAPACITY {
            return Err(BufferError::CapacityTooLarge {
                requested: capacity,
                max: MAX_CAPACITY,
            });
        }
        Ok(Self::new_unchecked(capacity))
    }

    fn new_unchecked(capacity: usize) -> Self {
        Self {
            data: None,
            capacity,
            len: 0,
            head: 0,
            is_pow2: capacity.is_power_of_two(),
        }
    }

    /// Returns the number of stored samples.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the maximum number of samples.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns how many samples fit before the oldest get overwritten.
    #[inline(always)]
    pub fn available(&self) -> usize {
        self.capacity - self.len
    }

    /// Returns `true` if the ring holds no samples.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the next push will overwrite the oldest sample.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Wraps a slot index around the capacity.
    ///
    /// Must not be called on a zero-capacity ring.
    #[inline(always)]
    fn wrap_pos(&self, pos: usize, delta: usize) -> usize {
        debug_assert!(self.capacity > 0);
        let new_pos = pos + delta;
        if self.is_pow2 {
            new_pos & (self.capacity - 1)
        } else {
            new_pos % self.capacity
        }
    }

    /// Storage slice, allocated on first use.
    fn storage_mut(&mut self) -> &mut [Sample] {
        let capacity = self.capacity;
        self.data
            .get_or_insert_with(|| vec![Sample::default(); capacity].into_boxed_slice())
    }

    /// Appends a sample at the back.
    ///
    /// Returns the evicted oldest sample if the ring was full. A zero-capacity
    /// ring stores nothing and returns the pushed sample itself.
    pub fn push(&mut self, sample: Sample) -> Option<Sample> {
        if self.capacity == 0 {
            return Some(sample);
        }

        if self.len == self.capacity {
            let slot = self.head;
            self.head = self.wrap_pos(self.head, 1);
            let evicted = std::mem::replace(&mut self.storage_mut()[slot], sample);
            Some(evicted)
        } else {
            let slot = self.wrap_pos(self.head, self.len);
            self.storage_mut()[slot] = sample;
            self.len += 1;
            None
        }
    }

    /// Removes and returns the oldest sample.
    pub fn pop_front(&mut self) -> Option<Sample> {
        if self.len == 0 {
            return None;
        }
        let sample = self.data.as_ref()?[self.head];
        self.head = self.wrap_pos(self.head, 1);
        self.len -= 1;
        Some(sample)
    }

    /// Returns the sample at `index`, counted from the oldest (0).
    pub fn get(&self, index: usize) -> Option<&Sample> {
        if index >= self.len {
            return None;
        }
        let slot = self.wrap_pos(self.head, index);
        self.data.as_ref().map(|d| &d[slot])
    }

    /// Returns the oldest sample.
    #[inline]
    pub fn front(&self) -> Option<&Sample> {
        self.get(0)
    }

    /// Returns the newest sample.
    #[inline]
    pub fn back(&self) -> Option<&Sample> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Returns the stored samples as two slices, oldest first (zero-copy).
    ///
    /// The second slice is empty if the samples are contiguous.
    pub fn as_slices(&self) -> (&[Sample], &[Sample]) {
        let data = match &self.data {
            Some(d) if self.len > 0 => d,
            _ => return (&[], &[]),
        };

        let len1 = self.len.min(self.capacity - self.head);
        let p1 = &data[self.head..self.head + len1];
        let p2 = &data[..self.len - len1];
        (p1, p2)
    }

    /// Iterates over the samples, oldest first.
    pub fn iter(&self) -> Iter<'_> {
        let (a, b) = self.as_slices();
        a.iter().chain(b.iter())
    }

    /// Removes up to `n` of the oldest samples and returns them in order.
    pub fn drain_front(&mut self, n: usize) -> Vec<Sample> {
        let count = n.min(self.len);
        if count == 0 {
            return Vec::new();
        }

        let out: Vec<Sample> = self.iter().take(count).copied().collect();
        self.head = self.wrap_pos(self.head, count);
        self.len -= count;
        out
    }

    /// Copies up to `n` of the newest samples, in chronological order.
    pub fn newest(&self, n: usize) -> Vec<Sample> {
        let count = n.min(self.len);
        self.iter().skip(self.len - count).copied().collect()
    }

    /// Clears the ring without freeing memory.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
        self.head = 0;
    }

    /// Wipes and frees the storage.
    ///
    /// The ring stays usable and allocates again on the next push.
    pub fn free(&mut self) {
        if let Some(data) = self.data.take() {
            let mut vec = data.into_vec();
            vec.zeroize();
        }
        self.clear();
    }

    /// Consumes the ring, wiping its storage.
    pub fn burn_free(mut self) {
        self.free();
    }
}

impl Drop for SampleRing {
    fn drop(&mut self) {
        if let Some(data) = self.data.take() {
            let mut vec = data.into_vec();
            vec.zeroize();
        }
    }
}

impl std::fmt::Debug for SampleRing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a SampleRing {
    type Item = &'a Sample;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
