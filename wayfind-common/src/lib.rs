//! Common utilities for the wayfind toolkit

pub mod error;

pub use error::{suggest_correction, Error, Result};

#[cfg(test)]
mod tests {
    use crate::error::suggest_correction;

    #[test]
    fn suggest_correction_returns_expected_node() {
        let nodes = ["depot", "harbour", "market"];
        assert_eq!(
            suggest_correction("harbor", nodes.iter().copied()),
            Some("harbour".to_string())
        );
    }
}
