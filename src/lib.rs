//! Fixed-capacity ring buffer with explicit overwrite control.
//!
//! [`RingBuffer`] allocates its backing store once at construction and never
//! resizes. Inserting into a full buffer either drops the new value or
//! overwrites the oldest one, chosen per call site; reading from an empty
//! buffer yields a caller-supplied default instead of an error. Both are
//! ordinary outcomes in bounded-buffer use, so neither goes through a
//! `Result`.
//!
//! ```
//! use cirque::RingBuffer;
//!
//! let mut window: RingBuffer<u32> = RingBuffer::new(3);
//! window.push(1, false);
//! window.push(2, false);
//! window.push(3, false);
//! window.push(4, true); // full: overwrite the oldest
//! assert_eq!(window.pop_or(0), 2);
//! ```
//!
//! The buffer is single-threaded; for concurrent producers and consumers,
//! wrap it in a mutex.
//!
//! With the `serde` feature enabled, `RingBuffer` serializes its capacity
//! and occupied elements in oldest-to-newest order.

mod ringbuf;

pub use ringbuf::RingBuffer;
