//! Recurring schedule arithmetic
//!
//! Pure functions over already-validated models: whether a recurring entry is
//! active in a month, which schedule is in force, and what that schedule is
//! worth per month. Nothing here performs I/O.

pub mod normalize;
pub mod overrides;
pub mod window;

pub use normalize::{monthly_equivalent, normalize, weekdays_in_month};
pub use overrides::{effective_schedule, EffectiveSchedule};
pub use window::{contributes_to_month, is_active_in_month};
