pub mod logger;
pub mod ui;
