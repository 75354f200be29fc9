pub mod break_even;
pub mod returns;
