use std::iter::FusedIterator;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::types::{Money, Rate, SeriesPoint};

/// Monthly balance path of `balance = balance * (1 + r) + contribution`.
///
/// The series is a lazy, finite description: nothing is computed until it is
/// iterated, and every call to [`BalanceSeries::iter`] restarts from the
/// opening balance. Month numbering starts at 1; the opening balance itself is
/// not emitted. Serializes as a list of [`SeriesPoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceSeries {
    opening_balance: Money,
    contribution: Money,
    monthly_rate: Rate,
    months: u32,
}

impl BalanceSeries {
    pub fn new(opening_balance: Money, contribution: Money, monthly_rate: Rate, months: u32) -> Self {
        Self {
            opening_balance,
            contribution,
            monthly_rate,
            months,
        }
    }

    pub fn iter(&self) -> BalanceIter {
        BalanceIter {
            growth: Decimal::ONE + self.monthly_rate,
            contribution: self.contribution,
            balance: self.opening_balance,
            month: 0,
            months: self.months,
            halted: false,
        }
    }

    /// Number of points the series describes.
    pub fn len(&self) -> usize {
        self.months as usize
    }

    pub fn is_empty(&self) -> bool {
        self.months == 0
    }

    pub fn opening_balance(&self) -> Money {
        self.opening_balance
    }

    /// Balance after the last month, or the opening balance for an empty
    /// series.
    pub fn closing_balance(&self) -> Money {
        self.iter()
            .last()
            .map(|p| p.balance)
            .unwrap_or(self.opening_balance)
    }
}

impl<'a> IntoIterator for &'a BalanceSeries {
    type Item = SeriesPoint;
    type IntoIter = BalanceIter;

    fn into_iter(self) -> BalanceIter {
        self.iter()
    }
}

impl Serialize for BalanceSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Iterator over a [`BalanceSeries`]. Stops early rather than panic if a
/// balance would leave the Decimal range.
#[derive(Debug, Clone)]
pub struct BalanceIter {
    growth: Decimal,
    contribution: Money,
    balance: Money,
    month: u32,
    months: u32,
    halted: bool,
}

impl Iterator for BalanceIter {
    type Item = SeriesPoint;

    fn next(&mut self) -> Option<SeriesPoint> {
        if self.halted || self.month >= self.months {
            return None;
        }
        let next = self
            .balance
            .checked_mul(self.growth)
            .and_then(|b| b.checked_add(self.contribution));
        match next {
            Some(balance) => {
                self.balance = balance;
                self.month += 1;
                Some(SeriesPoint {
                    month: self.month,
                    balance,
                })
            }
            None => {
                self.halted = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.halted {
            return (0, Some(0));
        }
        let remaining = (self.months - self.month) as usize;
        (0, Some(remaining))
    }
}

impl FusedIterator for BalanceIter {}
