pub mod analyze;
pub mod batch;
pub mod criteria;
pub mod dispatch;
pub mod rank;
pub mod report;
pub mod shared;
