pub mod counties;
pub mod dashboard;
pub mod export;
pub mod predict;
