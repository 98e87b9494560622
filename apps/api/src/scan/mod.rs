// Scan API: request validation, payment gate, and rendering around the pure engine.
// The engine itself lives in crate::engine and never sees HTTP or storage.

pub mod handlers;
pub mod session;
