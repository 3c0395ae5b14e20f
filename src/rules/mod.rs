//! Game rules.
//!
//! - [`BoardQuery`]: line counts, distances and Queen lookups
//! - [`Arbiter`]: legality, push execution, turn and game end
//! - [`RulesEngine`]: the driver-facing trait the arbiter implements

pub mod arbiter;
pub mod engine;
pub mod query;

pub use arbiter::{Arbiter, PushOutcome};
pub use engine::{GameResult, RulesEngine};
pub use query::BoardQuery;
