// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Fixed-tick simulation time.
//!
//! 1 `WorldTime` = 1/60 s. For a 60 Hz host a frame advances `WorldTime`
//! by one; for a 30 Hz host, by two. Keeping simulation time in integer
//! ticks keeps motivator evolution deterministic regardless of host
//! frame-rate jitter; the engine never touches wall-clock seconds.

/// Discrete simulation time, in ticks of 1/60 s.
///
/// Zero and negative deltas are passed through to processors unmodified;
/// their interpretation is processor-specific.
pub type WorldTime = i32;
