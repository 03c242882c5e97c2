//! Platform helpers — the few places the app talks to the host OS.
//!
//! Both helpers are best-effort: a missing tool or an unexpected answer is
//! reported as "unknown" / `false` and never as an error.

pub mod appearance;
pub mod launch;
