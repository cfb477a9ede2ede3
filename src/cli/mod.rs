pub mod analyze;
pub mod clients;
pub mod report;
pub mod ui;
