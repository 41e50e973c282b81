//! Receive ring buffer
//!
//! A fixed-capacity byte queue between exactly two execution contexts: the
//! UART receive interrupt (producer) and the foreground line editor
//! (consumer). No lock is taken on either side.
//!
//! Each index has a single writer:
//! - `write_index` is stored only by [`RxRing::push`]
//! - `read_index` is stored only by [`RxRing::pop`]
//!
//! The other side only loads it for comparison. One slot always stays empty
//! so `write_index == read_index` means empty, which leaves `N - 1` usable
//! bytes.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicUsize, Ordering};

pub struct RxRing<const N: usize> {
    slots: UnsafeCell<[u8; N]>,

    /// Next slot to fill (producer side)
    write_index: AtomicUsize,

    /// Next slot to consume (consumer side)
    read_index: AtomicUsize,
}

// SAFETY: a slot is written by the producer only while it lies outside
// read_index..write_index, and read by the consumer only while inside it.
// The Release store of an index publishes the slot access that preceded it
// to the Acquire load on the other side. Callers keep to one producer and
// one consumer.
unsafe impl<const N: usize> Sync for RxRing<N> {}

impl<const N: usize> RxRing<N> {
    /// Create an empty ring; usable from a `static` initializer
    pub const fn new() -> Self {
        assert!(N > 1, "ring needs at least two slots");
        RxRing {
            slots: UnsafeCell::new([0; N]),
            write_index: AtomicUsize::new(0),
            read_index: AtomicUsize::new(0),
        }
    }

    /// Store a byte. Producer side only.
    ///
    /// When the ring is full the new byte is dropped and handed back in
    /// `Err`; bytes already queued are untouched.
    pub fn push(&self, byte: u8) -> Result<(), u8> {
        let write = self.write_index.load(Ordering::Relaxed);
        let next = (write + 1) % N;

        if next == self.read_index.load(Ordering::Acquire) {
            return Err(byte);
        }

        // SAFETY: write < N, and the slot is not visible to the consumer
        // until write_index moves past it below.
        unsafe {
            self.slots.get().cast::<u8>().add(write).write(byte);
        }

        self.write_index.store(next, Ordering::Release);
        Ok(())
    }

    /// Take the oldest byte. Consumer side only.
    pub fn pop(&self) -> Option<u8> {
        let read = self.read_index.load(Ordering::Relaxed);

        if read == self.write_index.load(Ordering::Acquire) {
            return None;
        }

        // SAFETY: read < N, and the producer will not reuse the slot until
        // read_index moves past it below.
        let byte = unsafe { self.slots.get().cast::<u8>().add(read).read() };

        self.read_index.store((read + 1) % N, Ordering::Release);
        Some(byte)
    }

    /// Check if the ring is empty (a snapshot, the producer may be running)
    pub fn is_empty(&self) -> bool {
        self.read_index.load(Ordering::Acquire) == self.write_index.load(Ordering::Acquire)
    }

    /// Number of queued bytes (a snapshot)
    pub fn len(&self) -> usize {
        let write = self.write_index.load(Ordering::Acquire);
        let read = self.read_index.load(Ordering::Acquire);
        (write + N - read) % N
    }

    /// Usable capacity, one less than the slot count
    pub const fn capacity(&self) -> usize {
        N - 1
    }
}

impl<const N: usize> Default for RxRing<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_fifo_order() {
        let ring: RxRing<8> = RxRing::new();
        for b in b"console" {
            assert!(ring.push(*b).is_ok());
        }
        assert_eq!(ring.len(), 7);

        let drained: Vec<u8> = core::iter::from_fn(|| ring.pop()).collect();
        assert_eq!(drained, b"console");
        assert!(ring.is_empty());
        assert_eq!(ring.pop(), None);
    }

    #[test]
    fn test_overrun_drops_newest() {
        let ring: RxRing<4> = RxRing::new();
        assert_eq!(ring.capacity(), 3);
        assert_eq!(ring.push(b'a'), Ok(()));
        assert_eq!(ring.push(b'b'), Ok(()));
        assert_eq!(ring.push(b'c'), Ok(()));
        assert_eq!(ring.push(b'd'), Err(b'd'));
        assert_eq!(ring.len(), 3);

        assert_eq!(ring.pop(), Some(b'a'));
        assert_eq!(ring.pop(), Some(b'b'));
        assert_eq!(ring.pop(), Some(b'c'));
        assert_eq!(ring.pop(), None);
    }

    #[test]
    fn test_wraparound() {
        let ring: RxRing<4> = RxRing::new();
        for round in 0..10u8 {
            assert!(ring.push(round).is_ok());
            assert!(ring.push(round.wrapping_add(100)).is_ok());
            assert_eq!(ring.pop(), Some(round));
            assert_eq!(ring.pop(), Some(round.wrapping_add(100)));
        }
        assert!(ring.is_empty());
    }

    #[test]
    fn test_interleaved_producer_consumer() {
        static RING: RxRing<16> = RxRing::new();
        const COUNT: usize = 20_000;

        let producer = thread::spawn(|| {
            for i in 0..COUNT {
                let byte = (i % 251) as u8;
                while RING.push(byte).is_err() {
                    core::hint::spin_loop();
                }
            }
        });

        let mut expected = 0;
        while expected < COUNT {
            if let Some(byte) = RING.pop() {
                assert_eq!(byte, (expected % 251) as u8);
                expected += 1;
            }
        }

        producer.join().unwrap();
        assert!(RING.is_empty());
    }
}
