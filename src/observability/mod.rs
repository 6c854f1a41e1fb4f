//! Crash reporting for contract violations.
//!
//! The solver panics if a non-finite coefficient ever reaches it. When that
//! happens the panic hook prints a structured report instead of the default
//! one-line message.
//!
//! ```ignore
//! use square_solver::observability::install_panic_hook;
//!
//! fn main() {
//!     install_panic_hook();
//!     // ... rest of application
//! }
//! ```

pub mod panic_hook;

pub use panic_hook::install_panic_hook;
