//! The flavor calendar. Dates carry no rules weight.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Last day of every month on the game calendar.
pub const DAYS_PER_MONTH: u32 = 31;

/// Months the investigation can run through, May to December, wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    /// May, when the investigation opens.
    May,
    /// June.
    June,
    /// July.
    July,
    /// August.
    August,
    /// September.
    September,
    /// October.
    October,
    /// November.
    November,
    /// December; followed by May again.
    December,
}

impl Month {
    /// The following month, wrapping December back to May.
    pub fn next(self) -> Self {
        match self {
            Self::May => Self::June,
            Self::June => Self::July,
            Self::July => Self::August,
            Self::August => Self::September,
            Self::September => Self::October,
            Self::October => Self::November,
            Self::November => Self::December,
            Self::December => Self::May,
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        };
        f.write_str(name)
    }
}

/// The day after `day` of `month`.
pub fn next_day(day: u32, month: Month) -> (u32, Month) {
    if day >= DAYS_PER_MONTH {
        (1, month.next())
    } else {
        (day + 1, month)
    }
}
