use alloc::{boxed::Box, vec::Vec};

/// A fixed-capacity circular buffer holding the trailing window of a series.
///
/// Once full, every push evicts the oldest sample.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    /// Backing storage, allocated once with the window capacity.
    data: Box<[T]>,
    /// Index of the oldest sample.
    head: usize,
    /// Number of samples currently held, never above `data.len()`.
    len: usize,
}

impl<T: Default + Copy> RingBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        let mut vec = Vec::with_capacity(capacity);
        vec.resize_with(capacity, T::default);
        Self {
            data: vec.into_boxed_slice(),
            head: 0,
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Pushes a sample, returning the evicted one when the buffer was full
    pub fn push(&mut self, value: T) -> Option<T> {
        let cap = self.capacity();

        if self.is_full() {
            let evicted = core::mem::replace(&mut self.data[self.head], value);
            self.head = (self.head + 1) % cap;
            Some(evicted)
        } else {
            let tail = (self.head + self.len) % cap;
            self.data[tail] = value;
            self.len += 1;
            None
        }
    }

    pub fn reset(&mut self) {
        self.head = 0;
        self.len = 0;
        self.data.fill(T::default());
    }

    /// Iterates the held samples from newest to oldest
    pub fn iter_newest(&self) -> impl Iterator<Item = &T> {
        let cap = self.capacity();
        (0..self.len)
            .rev()
            .map(move |i| &self.data[(self.head + i) % cap])
    }
}
