//! Thread-safe ring buffer that keeps the latest `capacity` elements:
//! a full buffer overwrites its oldest entry instead of blocking the
//! producer, while consumers block until an element is available.

mod rb;
mod storage;
mod sync;
mod utils;

pub use rb::SlideRb;

#[cfg(test)]
mod tests;
