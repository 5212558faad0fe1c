//! # Defuzzificação por Centróide
//!
//! Reduz o conjunto agregado a um único valor crisp — o centro de gravidade
//! das amostras:
//!
//! ```text
//!        Σ yᵢ · μ(yᵢ)
//! y* = ──────────────
//!          Σ μ(yᵢ)
//! ```
//!
//! Se `Σ μ(yᵢ) = 0` o centróide é indefinido e o resultado é
//! [`FuzzyError::NoMatchingRule`]. Um resultado não finito vira
//! [`FuzzyError::NonFiniteOutput`].

use super::FuzzySet;
use crate::core::{FuzzyError, Result};

/// Centróide discreto do conjunto.
pub fn centroid(set: &FuzzySet<'_>) -> Result<f64> {
    let (weighted, area) = set
        .samples()
        .fold((0.0, 0.0), |(weighted, area), (y, mu)| (weighted + y * mu, area + mu));

    if area <= 0.0 {
        return Err(FuzzyError::NoMatchingRule);
    }

    let value = weighted / area;
    if !value.is_finite() {
        return Err(FuzzyError::NonFiniteOutput(value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MembershipFunction, Universe};

    fn universe() -> Universe {
        Universe::new(0.0, 100.0, 1.0).unwrap()
    }

    #[test]
    fn symmetric_triangle_centroid_is_peak() {
        let u = universe();
        for (a, b, c) in [(15.0, 30.0, 45.0), (40.0, 55.0, 70.0), (0.0, 50.0, 100.0)] {
            let mf = MembershipFunction::triangular(a, b, c).unwrap();
            let set = FuzzySet::implied(&u, &mf, 1.0);
            assert!((centroid(&set).unwrap() - b).abs() < 1e-9, "peak {b}");
        }
    }

    #[test]
    fn clipped_symmetric_triangle_keeps_centroid() {
        let u = universe();
        let mf = MembershipFunction::triangular(15.0, 30.0, 45.0).unwrap();
        let set = FuzzySet::implied(&u, &mf, 0.5);
        assert!((centroid(&set).unwrap() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn asymmetric_triangle_leans_to_longer_side() {
        let u = universe();
        let mf = MembershipFunction::triangular(85.0, 95.0, 100.0).unwrap();
        let set = FuzzySet::implied(&u, &mf, 1.0);
        let y = centroid(&set).unwrap();
        assert!(y > 85.0 && y < 95.0, "got {y}");
    }

    #[test]
    fn zero_set_signals_no_matching_rule() {
        let u = universe();
        let set = FuzzySet::empty(&u);
        assert_eq!(centroid(&set).unwrap_err(), FuzzyError::NoMatchingRule);
    }

    #[test]
    fn centroid_stays_inside_universe() {
        let u = universe();
        let left = MembershipFunction::triangular(0.0, 0.0, 10.0).unwrap();
        let right = MembershipFunction::triangular(90.0, 100.0, 100.0).unwrap();
        let mut set = FuzzySet::implied(&u, &left, 0.3);
        set.union_with(&FuzzySet::implied(&u, &right, 0.9));
        let y = centroid(&set).unwrap();
        assert!((0.0..=100.0).contains(&y));
    }
}
