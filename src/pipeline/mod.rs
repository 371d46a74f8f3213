pub mod interval;
pub mod totals;
