//! Uniform sampling grids over a closed interval.

use chute_core::error::{ChuteError, Result};

/// `n` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let span = end - start;
            let last = (n - 1) as f64;
            (0..n).map(|i| start + span * (i as f64 / last)).collect()
        }
    }
}

/// Right endpoints of `steps` equal subintervals of `[start, end]`.
///
/// The first node is `start + dx`, so a singular integrand at `start`
/// is never evaluated. Returns the nodes together with `dx`.
pub fn right_nodes(start: f64, end: f64, steps: usize) -> Result<(Vec<f64>, f64)> {
    if steps == 0 {
        return Err(ChuteError::InvalidParameter(
            "quadrature needs at least one step".into(),
        ));
    }
    let span = end - start;
    let n = steps as f64;
    let nodes = (1..=steps).map(|i| start + span * (i as f64 / n)).collect();
    Ok((nodes, span / n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let xs = linspace(0.0, 2.0, 5);
        assert_eq!(xs.len(), 5);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[4], 2.0);
        assert!((xs[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
    }

    #[test]
    fn test_right_nodes_skip_start() {
        let (nodes, dx) = right_nodes(0.0, 1.0, 4).unwrap();
        assert_eq!(nodes.len(), 4);
        assert!((dx - 0.25).abs() < 1e-12);
        assert!((nodes[0] - 0.25).abs() < 1e-12);
        assert_eq!(nodes[3], 1.0);
    }

    #[test]
    fn test_right_nodes_zero_steps() {
        assert!(matches!(
            right_nodes(0.0, 1.0, 0),
            Err(ChuteError::InvalidParameter(_))
        ));
    }
}
