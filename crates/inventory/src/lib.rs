//! Inventory movement domain.
//!
//! This crate contains the movement side of the forecasting unit,
//! implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage): the movement-type vocabulary, validated movement
//! records, best-effort wire parsing, and the daily demand aggregate.

pub mod demand;
pub mod movement;

pub use demand::DailyDemand;
pub use movement::{
    Movement, MovementBatch, MovementType, RawMovement, RawQuantity, parse_movements,
};
