//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     trigger() → broadcast → subscribers stop accepting → drain → exit
//!
//! Signals (signals.rs):
//!     Ctrl+C or programmatic trigger → graceful shutdown
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
