//! Year token computation

use std::fmt;

/// The text substituted for `{year}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearToken {
    /// A single year, e.g. `2026`
    Single(i32),
    /// A hyphenated range, e.g. `2020-2026`
    Range { start: i32, end: i32 },
}

impl YearToken {
    /// Build the token from an optional start year and the effective end year.
    ///
    /// Any start year different from `end` yields a range, including one after
    /// `end`; the reversed range is rendered as given.
    ///
    /// # Examples
    /// ```
    /// use copyfmt::YearToken;
    ///
    /// assert_eq!(YearToken::resolve(Some(2020), 2026).to_string(), "2020-2026");
    /// assert_eq!(YearToken::resolve(Some(2026), 2026).to_string(), "2026");
    /// assert_eq!(YearToken::resolve(None, 2026).to_string(), "2026");
    /// ```
    pub fn resolve(start: Option<i32>, end: i32) -> Self {
        match start {
            Some(start) if start != end => YearToken::Range { start, end },
            _ => YearToken::Single(end),
        }
    }

    /// Returns the last year covered.
    pub fn end(&self) -> i32 {
        match *self {
            YearToken::Single(year) => year,
            YearToken::Range { end, .. } => end,
        }
    }

    /// Returns true if this token is a range.
    pub fn is_range(&self) -> bool {
        matches!(self, YearToken::Range { .. })
    }
}

impl fmt::Display for YearToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearToken::Single(year) => write!(f, "{}", year),
            YearToken::Range { start, end } => write!(f, "{}-{}", start, end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_range_is_kept() {
        let token = YearToken::resolve(Some(2030), 2026);
        assert_eq!(token, YearToken::Range { start: 2030, end: 2026 });
        assert_eq!(token.to_string(), "2030-2026");
    }

    #[test]
    fn test_negative_years_pass_through() {
        assert_eq!(YearToken::resolve(Some(-5), 10).to_string(), "-5-10");
    }

    #[test]
    fn test_end() {
        assert_eq!(YearToken::Single(2026).end(), 2026);
        assert_eq!(YearToken::resolve(Some(2020), 2026).end(), 2026);
        assert!(!YearToken::resolve(Some(2026), 2026).is_range());
    }
}
