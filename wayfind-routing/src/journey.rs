//! Tentative and final labels kept per node during a run.

use std::fmt;

use serde::Serialize;

use crate::graph::Weight;

/// Best known total cost from the start node.
///
/// `Infinite` orders after every finite distance and marks nodes not reached yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    Finite(Weight),
    Infinite,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn finite(self) -> Option<Weight> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Extend a finite distance by one edge. `None` on overflow or from infinity.
    pub fn checked_add(self, weight: Weight) -> Option<Distance> {
        match self {
            Distance::Finite(d) => d.checked_add(weight).map(Distance::Finite),
            Distance::Infinite => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Infinite => f.write_str("inf"),
        }
    }
}

/// Distance of a node together with the node it was last improved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey<N> {
    pub distance: Distance,
    pub previous: Option<N>,
}

impl<N> Journey<N> {
    pub fn origin() -> Self {
        Journey {
            distance: Distance::ZERO,
            previous: None,
        }
    }

    pub fn unreached() -> Self {
        Journey {
            distance: Distance::Infinite,
            previous: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinite_orders_last() {
        assert!(Distance::Finite(Weight::MAX) < Distance::Infinite);
        assert!(Distance::Finite(3) < Distance::Finite(4));
        assert_eq!(
            [Distance::Infinite, Distance::Finite(9), Distance::ZERO]
                .into_iter()
                .min(),
            Some(Distance::ZERO)
        );
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(Distance::Finite(2).checked_add(3), Some(Distance::Finite(5)));
        assert_eq!(Distance::Finite(Weight::MAX).checked_add(1), None);
        assert_eq!(Distance::Infinite.checked_add(0), None);
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(Distance::Finite(5).to_string(), "5");
        assert_eq!(Distance::Infinite.to_string(), "inf");
        assert_eq!(
            serde_json::to_string(&Distance::Finite(5)).unwrap(),
            r#"{"finite":5}"#
        );
        assert_eq!(
            serde_json::to_string(&Distance::Infinite).unwrap(),
            r#""infinite""#
        );
    }

    #[test]
    fn test_journey_constructors() {
        let start: Journey<&str> = Journey::origin();
        assert_eq!(start.distance, Distance::ZERO);
        assert!(start.previous.is_none());
        assert!(!Journey::<&str>::unreached().distance.is_finite());
    }
}
