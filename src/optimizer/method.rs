//! Optimization method selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Strategy used to build a tour.
///
/// # Examples
///
/// ```
/// use u_georoute::optimizer::Method;
///
/// assert_eq!("2opt".parse::<Method>().unwrap(), Method::TwoOpt);
/// assert_eq!("brute_force".parse::<Method>().unwrap(), Method::Exact);
/// assert!("bogus".parse::<Method>().is_err());
/// assert_eq!(Method::NearestNeighbor.to_string(), "nearest_neighbor");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Exact for small inputs, 2-opt otherwise.
    #[default]
    Auto,
    /// Exhaustive permutation search.
    Exact,
    /// Greedy nearest-neighbor construction only.
    NearestNeighbor,
    /// Nearest neighbor followed by 2-opt improvement.
    TwoOpt,
}

impl Method {
    /// All methods, in the order they are listed to users.
    pub const ALL: [Method; 4] = [
        Method::Auto,
        Method::Exact,
        Method::NearestNeighbor,
        Method::TwoOpt,
    ];

    /// Canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Auto => "auto",
            Method::Exact => "exact",
            Method::NearestNeighbor => "nearest_neighbor",
            Method::TwoOpt => "two_opt",
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    /// Parses canonical names plus the aliases `brute_force`, `nn`,
    /// `nearestNeighbor`, `2opt` and `twoOpt`. Case-insensitive; `-` and `_`
    /// are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "auto" => Ok(Method::Auto),
            "exact" | "brute_force" | "bruteforce" => Ok(Method::Exact),
            "nearest_neighbor" | "nearestneighbor" | "nn" => Ok(Method::NearestNeighbor),
            "two_opt" | "twoopt" | "2opt" | "2_opt" => Ok(Method::TwoOpt),
            _ => Err(Error::invalid_method(s)),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical() {
        for m in Method::ALL {
            assert_eq!(m.as_str().parse::<Method>().expect("canonical"), m);
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("brute_force".parse::<Method>().expect("alias"), Method::Exact);
        assert_eq!("nearestNeighbor".parse::<Method>().expect("alias"), Method::NearestNeighbor);
        assert_eq!("nearest-neighbor".parse::<Method>().expect("alias"), Method::NearestNeighbor);
        assert_eq!("nn".parse::<Method>().expect("alias"), Method::NearestNeighbor);
        assert_eq!("twoOpt".parse::<Method>().expect("alias"), Method::TwoOpt);
        assert_eq!("2opt".parse::<Method>().expect("alias"), Method::TwoOpt);
        assert_eq!(" AUTO ".parse::<Method>().expect("alias"), Method::Auto);
    }

    #[test]
    fn test_parse_invalid() {
        let err = "bogus".parse::<Method>().unwrap_err();
        assert!(matches!(err, Error::InvalidMethod(ref name) if name == "bogus"));
        assert!("".parse::<Method>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Method::NearestNeighbor).expect("serialize");
        assert_eq!(json, "\"nearest_neighbor\"");
        let m: Method = serde_json::from_str("\"two_opt\"").expect("deserialize");
        assert_eq!(m, Method::TwoOpt);
    }

    #[test]
    fn test_default_is_auto() {
        assert_eq!(Method::default(), Method::Auto);
    }
}
