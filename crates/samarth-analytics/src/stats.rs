//! Least-squares regression, Pearson correlation and Student-t tail
//! probabilities.
//!
//! Degenerate inputs follow the usual scientific-library conventions:
//!
//! - fewer than two points, or all `x` equal: no regression;
//! - constant `y`: `r = 0`, slope 0, `p = 1`;
//! - exactly two points: `p = 0` (or 1 if both `y` are equal), standard error 0;
//! - correlation is `None` below two points or when either series is constant.
//!
//! Nothing here returns NaN for finite input.

use std::f64::consts::PI;

use samarth_core::results::TrendStatistics;

/// Guards the t statistic against division by zero when `|r| == 1`.
const TINY: f64 = 1.0e-20;

/// Ordinary least-squares fit of `ys` against `xs`.
///
/// Returns `None` when the slices differ in length, hold fewer than two
/// points, or all `xs` are equal.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linear_regression(xs: &[f64], ys: &[f64]) -> Option<TrendStatistics> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let n = xs.len() as f64;
    let moments = Moments::of(xs, ys);
    if moments.sxx == 0.0 {
        return None;
    }

    let r = moments.r().unwrap_or(0.0);
    let slope = moments.sxy / moments.sxx;
    let intercept = moments.y_mean - slope * moments.x_mean;

    let (p_value, std_err) = if xs.len() == 2 {
        let p = if ys[0] == ys[1] { 1.0 } else { 0.0 };
        (p, 0.0)
    } else {
        let df = n - 2.0;
        let t = r * (df / ((1.0 - r) * (1.0 + r) + TINY)).sqrt();
        let std_err = ((1.0 - r * r) * moments.syy / moments.sxx / df).max(0.0).sqrt();
        (student_t_two_sided(t, df), std_err)
    };

    Some(TrendStatistics {
        slope,
        intercept,
        r_squared: r * r,
        p_value,
        std_err,
    })
}

/// Pearson correlation of two aligned series.
///
/// `None` means undefined: mismatched lengths, fewer than two points, or a
/// series with zero variance.
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    Moments::of(xs, ys).r()
}

/// Centered sums of squares and cross-products.
struct Moments {
    x_mean: f64,
    y_mean: f64,
    sxx: f64,
    syy: f64,
    sxy: f64,
}

impl Moments {
    #[allow(clippy::cast_precision_loss)]
    fn of(xs: &[f64], ys: &[f64]) -> Self {
        let n = xs.len() as f64;
        let x_mean = xs.iter().sum::<f64>() / n;
        let y_mean = ys.iter().sum::<f64>() / n;
        let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
        for (x, y) in xs.iter().zip(ys) {
            let dx = x - x_mean;
            let dy = y - y_mean;
            sxx += dx * dx;
            syy += dy * dy;
            sxy += dx * dy;
        }
        Self {
            x_mean,
            y_mean,
            sxx,
            syy,
            sxy,
        }
    }

    fn r(&self) -> Option<f64> {
        let denominator = (self.sxx * self.syy).sqrt();
        (denominator > 0.0).then(|| (self.sxy / denominator).clamp(-1.0, 1.0))
    }
}

/// Two-sided tail probability `P(|T| >= |t|)` for Student's t with `df`
/// degrees of freedom.
#[must_use]
pub fn student_t_two_sided(t: f64, df: f64) -> f64 {
    if !t.is_finite() {
        return 0.0;
    }
    regularized_incomplete_beta(df / 2.0, 0.5, df / (t * t + df)).clamp(0.0, 1.0)
}

/// `I_x(a, b)` for `a, b > 0`.
fn regularized_incomplete_beta(a: f64, b: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let ln_front =
        ln_gamma(a + b) - ln_gamma(a) - ln_gamma(b) + a * x.ln() + b * (-x).ln_1p();
    if x < (a + 1.0) / (a + b + 2.0) {
        ln_front.exp() * beta_continued_fraction(a, b, x) / a
    } else {
        1.0 - ln_front.exp() * beta_continued_fraction(b, a, 1.0 - x) / b
    }
}

/// Modified Lentz evaluation of the incomplete beta continued fraction.
fn beta_continued_fraction(a: f64, b: f64, x: f64) -> f64 {
    const MAX_ITERATIONS: u32 = 300;
    const EPSILON: f64 = 1.0e-15;
    const FLOOR: f64 = 1.0e-300;

    let floor = |v: f64| if v.abs() < FLOOR { FLOOR } else { v };

    let (qab, qap, qam) = (a + b, a + 1.0, a - 1.0);
    let mut c = 1.0;
    let mut d = 1.0 / floor(1.0 - qab * x / qap);
    let mut h = d;

    for m in 1..=MAX_ITERATIONS {
        let m = f64::from(m);
        let m2 = 2.0 * m;

        let even = m * (b - m) * x / ((qam + m2) * (a + m2));
        d = 1.0 / floor(1.0 + even * d);
        c = floor(1.0 + even / c);
        h *= d * c;

        let odd = -(a + m) * (qab + m) * x / ((a + m2) * (qap + m2));
        d = 1.0 / floor(1.0 + odd * d);
        c = floor(1.0 + odd / c);
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < EPSILON {
            break;
        }
    }
    h
}

/// Lanczos approximation (g = 7, n = 9).
#[allow(clippy::excessive_precision, clippy::unreadable_literal)]
const LANCZOS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// Natural log of the gamma function for `x > 0`.
fn ln_gamma(x: f64) -> f64 {
    if x < 0.5 {
        // Reflection.
        return (PI / (PI * x).sin().abs()).ln() - ln_gamma(1.0 - x);
    }
    let x = x - 1.0;
    let mut sum = LANCZOS[0];
    for (k, coefficient) in (1_u8..).zip(&LANCZOS[1..]) {
        sum += coefficient / (x + f64::from(k));
    }
    let t = x + 7.5;
    0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + sum.ln()
}
