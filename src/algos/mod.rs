pub use self::scoring::Cost;
pub use self::search::{Outcome, Search, SearchStats};
pub use self::selector::{DEFAULT_SEED, pick};

mod scoring;
mod search;
mod selector;
