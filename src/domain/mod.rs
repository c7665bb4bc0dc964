pub mod context;
pub mod error;
pub mod plan;
pub mod report;
