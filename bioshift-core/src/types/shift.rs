//! The trinary shift value and its consensus rule.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Directional change observed for one element: -1, 0, or 1 on the wire.
///
/// `Neutral` doubles as the resolved value when redundant observations
/// disagree, at both the replicate and the combination layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Shift {
    Decrease,
    Neutral,
    Increase,
}

impl Shift {
    /// Integer wire value: -1 / 0 / 1.
    pub fn as_i8(self) -> i8 {
        match self {
            Shift::Decrease => -1,
            Shift::Neutral => 0,
            Shift::Increase => 1,
        }
    }

    pub fn from_i8(value: i8) -> Option<Self> {
        match value {
            -1 => Some(Shift::Decrease),
            0 => Some(Shift::Neutral),
            1 => Some(Shift::Increase),
            _ => None,
        }
    }

    /// Parse a cell value from a replicate file.
    ///
    /// Accepts the integer spellings and their float equivalents
    /// ("-1", "0", "1", "-1.0", "1.000"), with surrounding whitespace.
    /// Anything outside {-1, 0, 1} is rejected.
    pub fn parse(cell: &str) -> Option<Self> {
        let value: f64 = cell.trim().parse().ok()?;
        if value == -1.0 {
            Some(Shift::Decrease)
        } else if value == 0.0 {
            Some(Shift::Neutral)
        } else if value == 1.0 {
            Some(Shift::Increase)
        } else {
            None
        }
    }

    /// Resolve a set of redundant observations to one value.
    ///
    /// All observations identical resolves to that value; any disagreement
    /// collapses to `Neutral`. Returns `None` when there is nothing to
    /// resolve (the element was observed nowhere).
    pub fn consensus<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Shift>,
    {
        let mut iter = values.into_iter();
        let first = iter.next()?;
        if iter.all(|v| v == first) {
            Some(first)
        } else {
            Some(Shift::Neutral)
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}

impl From<Shift> for i8 {
    fn from(shift: Shift) -> Self {
        shift.as_i8()
    }
}

impl TryFrom<i8> for Shift {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Shift::from_i8(value).ok_or_else(|| format!("shift out of range: {value}"))
    }
}
