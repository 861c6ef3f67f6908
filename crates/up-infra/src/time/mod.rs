//! System time adapters.

mod system_clock;

pub use system_clock::SystemClock;
