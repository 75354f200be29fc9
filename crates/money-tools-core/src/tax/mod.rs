pub mod brackets;
pub mod salary;

pub use brackets::{TaxBracket, TaxBracketTable};
pub use salary::{estimate_salary_tax, BracketSlice, SalaryTaxInput, SalaryTaxResult};
