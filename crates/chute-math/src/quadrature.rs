/// Right-endpoint Riemann sum of integrand `values` sampled on a uniform grid.
pub fn right_riemann(values: &[f64], dx: f64) -> f64 {
    values.iter().sum::<f64>() * dx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::right_nodes;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_integrand_is_exact() {
        let (nodes, dx) = right_nodes(0.0, 3.0, 10).unwrap();
        let values = vec![2.0; nodes.len()];
        assert_relative_eq!(right_riemann(&values, dx), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_sqrt_singularity_converges() {
        // integral of 1/sqrt(x) over [0, 1] is 2
        let (nodes, dx) = right_nodes(0.0, 1.0, 10_000).unwrap();
        let values: Vec<f64> = nodes.iter().map(|x| 1.0 / x.sqrt()).collect();
        let sum = right_riemann(&values, dx);
        assert!((sum - 2.0).abs() < 0.02, "sum={}", sum);
    }
}
