pub use self::assignment::{ScoredAssignment, Team};
pub use self::project::{Project, ProjectId, capacity};
pub use self::ranks::{RankMap, RankTable, UNRANKED};
pub use self::student::{Student, StudentId};

mod assignment;
mod project;
mod ranks;
mod student;
