use crate::{
    storage::SharedStorage,
    sync::{Condvar, Mutex},
    utils::TimeoutIterator,
};
use crossbeam_utils::CachePadded;
use core::num::NonZeroUsize;
use std::time::Duration;

/// Write and read positions into the slot store.
///
/// The store has one more slot than the buffer capacity, so `head == tail`
/// always means empty and a full buffer is still distinguishable without a
/// separate counter.
struct Indices {
    /// Next slot to be written.
    head: usize,
    /// Next slot to be read.
    tail: usize,
}

impl Indices {
    #[inline]
    fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    #[inline]
    fn occupied(&self, slots: NonZeroUsize) -> usize {
        (slots.get() + self.head - self.tail) % slots
    }
}

#[inline]
fn advance(index: usize, slots: NonZeroUsize) -> usize {
    (index + 1) % slots
}

/// Thread-safe ring buffer that overwrites the oldest element when full and
/// blocks consumers while empty.
///
/// The buffer behaves as a sliding window over the latest `capacity` values:
/// [`push`](Self::push) always succeeds, evicting the oldest unread element
/// if it has to, and [`pop`](Self::pop) waits until a value is available.
/// Any number of producers and consumers may share one instance.
///
/// ```
/// use slidebuf::SlideRb;
/// use std::{sync::Arc, thread};
///
/// let rb = Arc::new(SlideRb::<i32>::new(256));
/// thread::spawn({
///     let rb = rb.clone();
///     move || {
///         rb.push(123);
///     }
/// });
/// assert_eq!(rb.pop(), 123);
/// ```
pub struct SlideRb<T> {
    storage: SharedStorage<T>,
    indices: CachePadded<Mutex<Indices>>,
    not_empty: Condvar,
}

impl<T> SlideRb<T> {
    /// Creates a buffer holding at most `capacity` elements.
    ///
    /// One extra slot is allocated internally to tell a full buffer from an
    /// empty one.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be non-zero");
        Self {
            storage: SharedStorage::new(capacity + 1),
            indices: CachePadded::new(Mutex::new(Indices { head: 0, tail: 0 })),
            not_empty: Condvar::new(),
        }
    }

    /// Maximum number of stored elements.
    ///
    /// Constant during the whole buffer lifetime.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len().get() - 1
    }

    /// Appends `item`, evicting the oldest unread element if the buffer is
    /// full.
    ///
    /// Never blocks and never fails: a full buffer makes room by discarding
    /// its oldest element, which is returned as `Some(evicted)`. Slow
    /// consumers therefore lose data instead of stalling producers.
    ///
    /// Wakes at most one consumer waiting in [`pop`](Self::pop) or
    /// [`pop_wait`](Self::pop_wait).
    pub fn push(&self, item: T) -> Option<T> {
        let evicted = {
            let mut indices = self.indices.lock().unwrap();
            let slots = unsafe { self.storage.as_slice() };
            let len = self.storage.len();

            slots[indices.head].write(item);
            indices.head = advance(indices.head, len);
            if indices.is_empty() {
                // The write wrapped onto the read position: the buffer was
                // full and the slot at `tail` holds the oldest unread
                // element. Move it out before the next push lands on it.
                let oldest = unsafe { slots[indices.tail].assume_init_read() };
                indices.tail = advance(indices.tail, len);
                Some(oldest)
            } else {
                None
            }
        };
        // Unlock before notifying so the woken consumer finds the lock free.
        self.not_empty.notify_one();
        evicted
    }

    /// Appends every item from `iter`, overwriting as needed.
    ///
    /// Consumes the iterator until its end; if it yields more than
    /// `capacity` items, only the last `capacity` of them remain stored.
    pub fn push_iter<I: IntoIterator<Item = T>>(&self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }

    /// Removes and returns the oldest element, waiting while the buffer is
    /// empty.
    ///
    /// Returns once some producer pushes; there is no upper bound on the
    /// wait. See [`pop_wait`](Self::pop_wait) for a deadline-bounded variant
    /// and [`try_pop`](Self::try_pop) for a non-blocking one.
    pub fn pop(&self) -> T {
        let mut indices = self.indices.lock().unwrap();
        while indices.is_empty() {
            indices = self.not_empty.wait(indices).unwrap();
        }
        unsafe { self.take(&mut indices) }
    }

    /// Removes and returns the oldest element, or `None` if the buffer is
    /// empty.
    pub fn try_pop(&self) -> Option<T> {
        let mut indices = self.indices.lock().unwrap();
        if indices.is_empty() {
            None
        } else {
            Some(unsafe { self.take(&mut indices) })
        }
    }

    /// Like [`pop`](Self::pop), but gives up once `timeout` has elapsed.
    ///
    /// A `None` timeout waits indefinitely. Returns `None` only on timeout;
    /// spurious wakeups are re-checked against the remaining time.
    pub fn pop_wait(&self, timeout: Option<Duration>) -> Option<T> {
        let mut indices = self.indices.lock().unwrap();
        for remaining in TimeoutIterator::new(timeout) {
            if !indices.is_empty() {
                return Some(unsafe { self.take(&mut indices) });
            }
            indices = match remaining {
                Some(t) => self.not_empty.wait_timeout(indices, t).unwrap().0,
                None => self.not_empty.wait(indices).unwrap(),
            };
        }
        if indices.is_empty() {
            None
        } else {
            Some(unsafe { self.take(&mut indices) })
        }
    }

    /// Number of currently stored elements, between `0` and `capacity`.
    pub fn len(&self) -> usize {
        self.indices.lock().unwrap().occupied(self.storage.len())
    }

    /// Checks whether the buffer holds no elements.
    ///
    /// The result may be outdated as soon as it is returned because of
    /// concurrent producer activity.
    pub fn is_empty(&self) -> bool {
        self.indices.lock().unwrap().is_empty()
    }

    /// Checks whether the next push will evict an element.
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Drops every stored element and resets the buffer to empty.
    ///
    /// Elements are released immediately, not when their slots are later
    /// overwritten.
    pub fn clear(&self) {
        let mut indices = self.indices.lock().unwrap();
        unsafe { self.drop_occupied(&indices) };
        indices.head = 0;
        indices.tail = 0;
    }

    /// Moves the element at `tail` out and advances the read position.
    ///
    /// # Safety
    ///
    /// `indices` must be the contents of the held lock guard and the buffer
    /// must be non-empty.
    unsafe fn take(&self, indices: &mut Indices) -> T {
        debug_assert!(!indices.is_empty());
        let slots = self.storage.as_slice();
        let item = slots[indices.tail].assume_init_read();
        indices.tail = advance(indices.tail, self.storage.len());
        item
    }

    /// Drops every element in the occupied `tail..head` range in place.
    ///
    /// # Safety
    ///
    /// `indices` must be the contents of the held lock guard; the caller
    /// must reset the indices afterwards so the dropped slots count as
    /// vacant again.
    unsafe fn drop_occupied(&self, indices: &Indices) {
        let slots = self.storage.as_slice();
        let len = self.storage.len();
        let mut index = indices.tail;
        while index != indices.head {
            slots[index].assume_init_drop();
            index = advance(index, len);
        }
    }
}

impl<T> Drop for SlideRb<T> {
    fn drop(&mut self) {
        let indices = self.indices.lock().unwrap();
        unsafe { self.drop_occupied(&indices) };
    }
}
