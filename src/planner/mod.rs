pub mod balance;
pub mod constants;
pub mod generate;
pub mod shuffle;

pub use balance::{balance_day, seed_day};
pub use constants::*;
pub use generate::{generate_plan, PlanRequest};
pub use shuffle::shuffle;
