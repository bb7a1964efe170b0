pub mod config;
pub mod day;
pub mod export;
pub mod legend;
pub mod month;
pub mod next;
