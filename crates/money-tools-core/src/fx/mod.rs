pub mod rates;

pub use rates::{convert_currency, Conversion, ConversionInput, CurrencyRateTable};
