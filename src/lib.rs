// Trivia Grid - Core Library
// Label compilation, predicate evaluation, and daily session state

pub mod entities;
pub mod normalize;
pub mod predicate;
pub mod compiler;
pub mod session;
pub mod loader;

// Re-export commonly used types
pub use compiler::compile;
pub use entities::{
    country::{Country, CountryInit},
    office_holder::{OfficeHolder, OfficeHolderInit},
    Domain, FlagField, GridEntity, NumericField, TextField,
};
pub use loader::{
    country_launch_date, current_day, load_countries, load_office_holders, load_schedule,
    president_launch_date, GridSchedule,
};
pub use normalize::{is_negated, normalize_label};
pub use predicate::{evaluate, CmpOp, Predicate, YearBound};
pub use session::{Cell, DailyGrid, GridSession, GuessOutcome, GRID_SIZE, STARTING_GUESSES};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
