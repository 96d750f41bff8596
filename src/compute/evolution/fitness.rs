//! Objective function for the search.

/// Rosenbrock banana function, `(1 - x)^2 + 100 (y - x^2)^2`.
///
/// Lower is better. The global minimum is `0` at `(1, 1)`.
#[inline]
pub fn rosenbrock(x: f64, y: f64) -> f64 {
    let a = 1.0 - x;
    let b = y - x * x;
    a * a + 100.0 * b * b
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_global_minimum() {
        assert_eq!(rosenbrock(1.0, 1.0), 0.0);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(rosenbrock(0.0, 0.0), 1.0);
        // (1 - 2)^2 + 100 (2 - 4)^2
        assert_eq!(rosenbrock(2.0, 2.0), 401.0);
        assert_eq!(rosenbrock(-1.0, 1.0), 4.0);
    }

    proptest! {
        #[test]
        fn test_non_negative(x in -1e3f64..1e3, y in -1e3f64..1e3) {
            prop_assert!(rosenbrock(x, y) >= 0.0);
        }

        #[test]
        fn test_deterministic(x in -10.0f64..10.0, y in -10.0f64..10.0) {
            prop_assert_eq!(rosenbrock(x, y), rosenbrock(x, y));
        }
    }
}
