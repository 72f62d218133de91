use std::fmt;
use std::str::FromStr;

use crate::car::Car;

/// View-selection mode over the full collection. Selecting a filter never
/// mutates the underlying records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Available,
    Sold,
}

impl Filter {
    /// Whether a record is visible under this filter.
    pub fn matches(&self, car: &Car) -> bool {
        match self {
            Filter::All => true,
            Filter::Available => !car.sold,
            Filter::Sold => car.sold,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Filter::All => "All",
            Filter::Available => "Available",
            Filter::Sold => "Sold",
        };
        write!(f, "{}", name)
    }
}

/// Error returned when parsing an unknown filter name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseFilterError(String);

impl fmt::Display for ParseFilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown filter: {}", self.0)
    }
}

impl std::error::Error for ParseFilterError {}

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "available" => Ok(Filter::Available),
            "sold" => Ok(Filter::Sold),
            _ => Err(ParseFilterError(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(sold: bool) -> Car {
        Car {
            id: 1,
            brand: "Toyota".into(),
            model: "Corolla".into(),
            year: 2020,
            color: "Blue".into(),
            sold,
        }
    }

    #[test]
    fn all_matches_everything() {
        assert!(Filter::All.matches(&car(false)));
        assert!(Filter::All.matches(&car(true)));
    }

    #[test]
    fn available_matches_unsold_only() {
        assert!(Filter::Available.matches(&car(false)));
        assert!(!Filter::Available.matches(&car(true)));
    }

    #[test]
    fn sold_matches_sold_only() {
        assert!(!Filter::Sold.matches(&car(false)));
        assert!(Filter::Sold.matches(&car(true)));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!(" Available ".parse::<Filter>().unwrap(), Filter::Available);
        assert_eq!("SOLD".parse::<Filter>().unwrap(), Filter::Sold);
    }

    #[test]
    fn parse_unknown_fails() {
        let err = "junk".parse::<Filter>().unwrap_err();
        assert_eq!(err.to_string(), "unknown filter: junk");
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for filter in [Filter::All, Filter::Available, Filter::Sold] {
            assert_eq!(filter.to_string().parse::<Filter>().unwrap(), filter);
        }
    }
}
