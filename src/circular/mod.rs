//! Circular sample storage.

mod ring;

pub use ring::{Iter, MAX_CAPACITY, SampleRing};
