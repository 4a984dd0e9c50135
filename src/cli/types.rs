//! Value types shared between the CLI and the library.

use crate::error::{Result, RetroError};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Retrosheet season years.
///
/// Drives the remote archive URL, the local archive filename, and the
/// filename patterns matched during cleanup.
///
/// # Examples
///
/// ```rust
/// use retro_events::Year;
///
/// let year = Year::new(2017);
/// assert_eq!(year.as_u16(), 2017);
/// assert_eq!(year.to_string(), "2017");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Year(pub u16);

impl Year {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = RetroError;

    fn from_str(s: &str) -> Result<Self> {
        let year: u16 = s.parse().map_err(|_| RetroError::InvalidYear {
            value: s.to_string(),
        })?;
        if year == 0 {
            return Err(RetroError::InvalidYear {
                value: s.to_string(),
            });
        }
        Ok(Self(year))
    }
}

/// One computed column of a derived stats table, parsed from a
/// `name=SQL-expression` argument (e.g. `ab=SUM(ab_flag)`).
///
/// The expression is passed through to SQL verbatim; the name must be a
/// plain identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatColumn {
    pub name: String,
    pub expression: String,
}

impl fmt::Display for StatColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.expression)
    }
}

impl FromStr for StatColumn {
    type Err = RetroError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, expression) = s.split_once('=').ok_or_else(|| RetroError::InvalidStatSpec {
            spec: s.to_string(),
        })?;
        let name = name.trim();
        let expression = expression.trim();
        if name.is_empty() || expression.is_empty() {
            return Err(RetroError::InvalidStatSpec {
                spec: s.to_string(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            expression: expression.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_parse_and_display() {
        let year: Year = "2017".parse().unwrap();
        assert_eq!(year, Year::new(2017));
        assert_eq!(year.to_string(), "2017");
    }

    #[test]
    fn test_year_rejects_zero() {
        assert!("0".parse::<Year>().is_err());
    }

    #[test]
    fn test_year_rejects_garbage() {
        assert!("20x7".parse::<Year>().is_err());
        assert!("".parse::<Year>().is_err());
        assert!("-5".parse::<Year>().is_err());
    }

    #[test]
    fn test_stat_column_parse() {
        let stat: StatColumn = "ab=SUM(ab_flag)".parse().unwrap();
        assert_eq!(stat.name, "ab");
        assert_eq!(stat.expression, "SUM(ab_flag)");
    }

    #[test]
    fn test_stat_column_trims_whitespace() {
        let stat: StatColumn = " rbi = SUM(rbi_on_play) ".parse().unwrap();
        assert_eq!(stat.name, "rbi");
        assert_eq!(stat.expression, "SUM(rbi_on_play)");
    }

    #[test]
    fn test_stat_column_keeps_equals_in_expression() {
        let stat: StatColumn = "singles=SUM(CASE WHEN hit_value = 1 THEN 1 ELSE 0 END)"
            .parse()
            .unwrap();
        assert_eq!(
            stat.expression,
            "SUM(CASE WHEN hit_value = 1 THEN 1 ELSE 0 END)"
        );
    }

    #[test]
    fn test_stat_column_rejects_missing_parts() {
        assert!("ab".parse::<StatColumn>().is_err());
        assert!("=SUM(ab_flag)".parse::<StatColumn>().is_err());
        assert!("ab=".parse::<StatColumn>().is_err());
    }
}
