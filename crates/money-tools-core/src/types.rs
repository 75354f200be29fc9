use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::MoneyToolsError;
use crate::MoneyToolsResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Used by configuration tables.
pub type Rate = Decimal;

/// User-facing rates expressed as percentages (5 = 5%).
pub type Percent = Decimal;

/// Number of months, or an explicit marker that the target is never reached
/// under the given inputs (savings goal-seek, break-even style horizons).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Horizon {
    Months(u64),
    Unreachable,
}

impl Horizon {
    pub fn months(&self) -> Option<u64> {
        match self {
            Horizon::Months(m) => Some(*m),
            Horizon::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Horizon::Months(_))
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Horizon::Months(m) => write!(f, "{m}"),
            Horizon::Unreachable => f.write_str("∞"),
        }
    }
}

/// Months until a balance is retired, or `Never` when the payment does not
/// outpace the interest accruing on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoffHorizon {
    Months(u64),
    Never,
}

impl PayoffHorizon {
    pub fn months(&self) -> Option<u64> {
        match self {
            PayoffHorizon::Months(m) => Some(*m),
            PayoffHorizon::Never => None,
        }
    }
}

impl fmt::Display for PayoffHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoffHorizon::Months(m) => write!(f, "{m}"),
            PayoffHorizon::Never => f.write_str("∞"),
        }
    }
}

/// A percentage ratio, `Undefined` when its denominator is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ratio {
    Percent(Percent),
    Undefined,
}

impl Ratio {
    /// `numerator / denominator * 100`, or `Undefined` for a zero denominator.
    /// A quotient outside the Decimal range is an `Overflow` error.
    pub fn percent_of(
        numerator: Decimal,
        denominator: Decimal,
        context: &str,
    ) -> MoneyToolsResult<Ratio> {
        if denominator.is_zero() {
            return Ok(Ratio::Undefined);
        }
        numerator
            .checked_div(denominator)
            .and_then(|q| q.checked_mul(dec!(100)))
            .map(Ratio::Percent)
            .ok_or_else(|| MoneyToolsError::overflow(context))
    }

    pub fn value(&self) -> Option<Percent> {
        match self {
            Ratio::Percent(p) => Some(*p),
            Ratio::Undefined => None,
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ratio::Percent(p) => write!(f, "{:.2}%", p),
            Ratio::Undefined => f.write_str("—"),
        }
    }
}

/// One point of a monthly balance series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub month: u32,
    pub balance: Money,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// Input validation
// ---------------------------------------------------------------------------

/// Reject negative magnitudes. Every public formula calls this on the fields
/// its contract requires to be `>= 0`.
pub(crate) fn ensure_non_negative(field: &str, value: Decimal) -> MoneyToolsResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(MoneyToolsError::invalid(field, "must be >= 0"));
    }
    Ok(())
}

/// Convert an annual percentage into a monthly decimal rate.
pub(crate) fn monthly_rate(annual_rate_percent: Percent) -> Rate {
    annual_rate_percent / dec!(1200)
}
