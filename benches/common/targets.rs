//! Target functions shared by the benchmarks and the integration tests.

use polywalk::target::TargetFunction;

/// `sin(x)`: odd, bounded. The historical target.
pub fn sine() -> TargetFunction {
    TargetFunction::sine()
}

/// `cos(x)`: even, bounded. Odd-power coefficients should shrink toward zero.
pub fn cosine() -> TargetFunction {
    TargetFunction::new("cos", f64::cos)
}

/// `e^x`: convex and unbounded; large values at the right end of the interval.
pub fn exponential() -> TargetFunction {
    TargetFunction::new("exp", f64::exp)
}

/// `e^(-x²)`: a smooth bump that low-degree polynomials fit poorly.
pub fn gaussian() -> TargetFunction {
    TargetFunction::new("gaussian", |x| (-x * x).exp())
}

/// `|x|`: continuous but not differentiable at zero.
pub fn absolute() -> TargetFunction {
    TargetFunction::new("abs", f64::abs)
}

/// `1 - 2x + 3x²`: exactly representable with three coefficients.
pub fn quadratic() -> TargetFunction {
    TargetFunction::new("quadratic", |x| 1.0 - 2.0 * x + 3.0 * x * x)
}
