/// A fixed-capacity ring buffer over a backing store allocated once at
/// construction.
///
/// When full, [`push`](RingBuffer::push) either drops the incoming value or
/// overwrites the oldest one, chosen per call site. Reading from an empty
/// buffer yields a caller-supplied default instead of an error. All
/// operations are O(1). The buffer holds no synchronization; wrap it in a
/// mutex to share it across threads.
#[derive(Debug)]
pub struct RingBuffer<T> {
    buf: Box<[T]>,
    /// Oldest unread element. Meaningful only while the buffer is non-empty.
    front: usize,
    /// Next slot to write.
    back: usize,
    /// Disambiguates `front == back`: empty without it, full with it.
    full: bool,
}

impl<T: Default> RingBuffer<T> {
    /// Creates a buffer with exactly `capacity` slots, filled with default
    /// values. The capacity never changes for the buffer's lifetime.
    ///
    /// `capacity` must be at least 1.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= 1, "RingBuffer capacity must be at least 1");
        Self {
            buf: (0..capacity).map(|_| T::default()).collect(),
            front: 0,
            back: 0,
            full: false,
        }
    }
}

impl<T> RingBuffer<T> {
    /// Inserts `value` at the back of the buffer.
    ///
    /// When the buffer is full, `overwrite` picks the policy: `false`
    /// silently drops `value` (bounded queue that rejects on overflow),
    /// `true` replaces the oldest element and the buffer stays full
    /// (sliding lookback window). To copy-insert from borrowed data, pass a
    /// clone.
    pub fn push(&mut self, value: T, overwrite: bool) {
        if !self.full {
            self.buf[self.back] = value;
            self.back = (self.back + 1) % self.capacity();
            self.full = self.back == self.front;
        } else if overwrite {
            self.buf[self.back] = value;
            self.back = (self.back + 1) % self.capacity();
            self.front = self.back;
        }
    }

    /// Removes and returns the oldest element, or `default` if the buffer
    /// is empty.
    ///
    /// `default` is consumed either way: when the buffer has elements it
    /// parks in the vacated slot, which sits outside the readable range.
    pub fn pop_or(&mut self, default: T) -> T {
        if self.is_empty() {
            return default;
        }
        let value = std::mem::replace(&mut self.buf[self.front], default);
        self.front = (self.front + 1) % self.capacity();
        self.full = false;
        value
    }

    /// Number of slots, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Number of elements currently held.
    pub fn len(&self) -> usize {
        if self.full {
            self.capacity()
        } else {
            // `back` wraps below `front` once writes lap the end of the
            // store; bias by capacity so the subtraction stays in range.
            (self.back + self.capacity() - self.front) % self.capacity()
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.full && self.front == self.back
    }

    pub fn is_full(&self) -> bool {
        self.full
    }
}

impl<T: Clone + Default> Clone for RingBuffer<T> {
    /// Clones the occupied range only. Slots outside it hold default
    /// values in the copy; stale elements are not cloned.
    fn clone(&self) -> Self {
        let mut buf: Box<[T]> = (0..self.capacity()).map(|_| T::default()).collect();
        let mut i = self.front;
        for _ in 0..self.len() {
            buf[i] = self.buf[i].clone();
            i = (i + 1) % self.capacity();
        }
        Self {
            buf,
            front: self.front,
            back: self.back,
            full: self.full,
        }
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use serde::de::Error as _;
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::RingBuffer;

    /// Serializes as `{ capacity, elements }` with the occupied elements in
    /// oldest-to-newest order. Stale slots are not written out.
    impl<T: Serialize> Serialize for RingBuffer<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut elements = Vec::with_capacity(self.len());
            let mut i = self.front;
            for _ in 0..self.len() {
                elements.push(&self.buf[i]);
                i = (i + 1) % self.capacity();
            }
            let mut state = serializer.serialize_struct("RingBuffer", 2)?;
            state.serialize_field("capacity", &self.capacity())?;
            state.serialize_field("elements", &elements)?;
            state.end()
        }
    }

    #[derive(Deserialize)]
    struct Repr<T> {
        capacity: usize,
        elements: Vec<T>,
    }

    impl<'de, T: Deserialize<'de> + Default> Deserialize<'de> for RingBuffer<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = Repr::<T>::deserialize(deserializer)?;
            if repr.capacity == 0 {
                return Err(D::Error::custom("RingBuffer capacity must be at least 1"));
            }
            if repr.elements.len() > repr.capacity {
                return Err(D::Error::custom(format!(
                    "payload holds {} elements but capacity is {}",
                    repr.elements.len(),
                    repr.capacity
                )));
            }
            let mut rb = RingBuffer::new(repr.capacity);
            for value in repr.elements {
                rb.push(value, false);
            }
            Ok(rb)
        }
    }
}
