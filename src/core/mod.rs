pub mod aggregate;
pub mod pipeline;
pub mod roster;

pub use aggregate::{Aggregation, FileSummary};
pub use pipeline::{RunReport, RunRequest, generate};
pub use roster::EmployeeMap;
