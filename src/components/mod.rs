pub mod schedule;
pub mod selector;
