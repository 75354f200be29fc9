pub mod amortization;
pub mod variants;
