//! Five-stage pipeline implementation.
//!
//! 1. **Latches:** Inter-stage payload types; a latch is `Option<entry>`,
//!    `None` being the bubble.
//! 2. **Signals:** Control-signal derivation (the control unit).
//! 3. **Hazards:** Stall detection and operand forwarding.
//! 4. **Stages:** Fetch, Decode, Execute, Memory, and Writeback functions.
//! 5. **Engine:** The clocked driver that sequences the stages each cycle.

/// Pipeline driver.
pub mod engine;
/// Hazard detection and operand forwarding.
pub mod hazards;
/// Inter-stage latch payload types.
pub mod latches;
/// Control signals and their derivation.
pub mod signals;
/// The five stage functions.
pub mod stages;
