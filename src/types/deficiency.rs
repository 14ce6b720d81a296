//! Colour-vision deficiency categories and their simulation matrices.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, VeilError};

use super::Mat3;

/// A colour-vision deficiency to simulate.
///
/// `None` is the identity: the filter pipeline runs but channels are only
/// truncated, never remapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deficiency {
    /// Red deficiency (protanopia).
    Red,
    /// Green deficiency (deuteranopia).
    Green,
    /// Blue deficiency (tritanopia).
    Blue,
    /// No deficiency; identity matrix.
    None,
}

impl Deficiency {
    /// All categories, in canonical order.
    pub const ALL: [Deficiency; 4] = [
        Deficiency::Red,
        Deficiency::Green,
        Deficiency::Blue,
        Deficiency::None,
    ];

    /// The simulation matrix for this category.
    ///
    /// Coefficient tables are fixed empirical constants; each row sums to 1.
    pub const fn matrix(self) -> Mat3 {
        match self {
            Deficiency::Red => Mat3::from_rows([
                [0.567, 0.433, 0.0],
                [0.558, 0.442, 0.0],
                [0.0, 0.242, 0.758],
            ]),
            Deficiency::Green => Mat3::from_rows([
                [0.625, 0.375, 0.0],
                [0.7, 0.3, 0.0],
                [0.0, 0.142, 0.858],
            ]),
            Deficiency::Blue => Mat3::from_rows([
                [0.95, 0.05, 0.0],
                [0.0, 0.433, 0.567],
                [0.0, 0.475, 0.525],
            ]),
            Deficiency::None => Mat3::IDENTITY,
        }
    }

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Deficiency::Red => "red",
            Deficiency::Green => "green",
            Deficiency::Blue => "blue",
            Deficiency::None => "none",
        }
    }
}

impl FromStr for Deficiency {
    type Err = VeilError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "red" => Ok(Deficiency::Red),
            "green" => Ok(Deficiency::Green),
            "blue" => Ok(Deficiency::Blue),
            "none" => Ok(Deficiency::None),
            other => Err(VeilError::Parse {
                message: format!("Unknown deficiency: {}", other),
                help: Some("Use red, green, blue, or none".to_string()),
            }),
        }
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_matrix_exact() {
        let m = Deficiency::Red.matrix();
        assert_eq!(m.row(0), [0.567, 0.433, 0.0]);
        assert_eq!(m.row(1), [0.558, 0.442, 0.0]);
        assert_eq!(m.row(2), [0.0, 0.242, 0.758]);
    }

    #[test]
    fn test_green_matrix_exact() {
        let m = Deficiency::Green.matrix();
        assert_eq!(m.row(0), [0.625, 0.375, 0.0]);
        assert_eq!(m.row(1), [0.7, 0.3, 0.0]);
        assert_eq!(m.row(2), [0.0, 0.142, 0.858]);
    }

    #[test]
    fn test_blue_matrix_exact() {
        let m = Deficiency::Blue.matrix();
        assert_eq!(m.row(0), [0.95, 0.05, 0.0]);
        assert_eq!(m.row(1), [0.0, 0.433, 0.567]);
        assert_eq!(m.row(2), [0.0, 0.475, 0.525]);
    }

    #[test]
    fn test_none_matrix_is_identity() {
        assert_eq!(Deficiency::None.matrix(), Mat3::IDENTITY);
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!("red".parse::<Deficiency>().unwrap(), Deficiency::Red);
        assert_eq!("green".parse::<Deficiency>().unwrap(), Deficiency::Green);
        assert_eq!("blue".parse::<Deficiency>().unwrap(), Deficiency::Blue);
        assert_eq!("none".parse::<Deficiency>().unwrap(), Deficiency::None);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("purple".parse::<Deficiency>().is_err());
        assert!("RED".parse::<Deficiency>().is_err());
        assert!("".parse::<Deficiency>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for d in Deficiency::ALL {
            assert_eq!(d.to_string().parse::<Deficiency>().unwrap(), d);
        }
    }
}
