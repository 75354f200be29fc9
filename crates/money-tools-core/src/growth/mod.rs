pub mod compound;
pub mod investment;
pub mod savings;
pub mod series;
