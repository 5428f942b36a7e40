// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration constants for simulation timing.

/// Fixed simulation rate, in ticks per second.
///
/// One `WorldTime` tick is 1/60 s regardless of how fast the host renders
/// frames; hosts running slower than 60 Hz advance by more than one tick
/// per frame.
pub const SIMULATION_RATE_HZ: u32 = 60;

/// Host frame rate assumed when the configuration does not specify one.
pub const DEFAULT_HOST_RATE_HZ: u32 = 60;
