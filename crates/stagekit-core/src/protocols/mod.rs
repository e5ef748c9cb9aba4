//! Protocol encoding and decoding.
//!
//! Each protocol follows a layered structure:
//! - `layout`: byte offsets and ranges (source of truth)
//! - `writer` / `reader`: bounds-checked byte access
//! - `packet` / `parser`: domain-level encoding and decoding
//! - `error`: explicit, actionable errors
//!
//! Nothing here performs I/O; `net` owns the socket.

pub mod artnet;
