/// Number of box passes used to approximate a Gaussian.
pub const GAUSS_PASSES: usize = 3;

/// Odd box widths whose stacked variance approximates a Gaussian of standard deviation `sigma`.
///
/// The ideal width `sqrt(12σ²/n + 1)` is bracketed by the two nearest odd integers `w_lo` and
/// `w_lo + 2`; the first `m` boxes use `w_lo` and the rest `w_lo + 2`, with `m` picked so that
/// `Σ (w² - 1) / 12` lands as close to `σ²` as the two widths allow.
pub fn box_sizes_for_gauss(sigma: f64, n: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    let sigma = if sigma.is_finite() { sigma.max(0.0) } else { 0.0 };
    let nf = n as f64;
    let var12 = 12.0 * sigma * sigma;

    let w_ideal = (var12 / nf + 1.0).sqrt();
    let mut w_lo = w_ideal.floor() as usize;
    if w_lo % 2 == 0 {
        w_lo -= 1;
    }
    let w_up = w_lo + 2;

    let wl = w_lo as f64;
    let m_ideal = (var12 - nf * (wl * wl + 4.0 * wl + 3.0)) / (-4.0 * wl - 4.0);
    // Round half up; the result is only compared against box indices.
    let m = (m_ideal + 0.5).floor();

    (0..n)
        .map(|i| if (i as f64) < m { w_lo } else { w_up })
        .collect()
}

/// The three box radii (half-width, excluding the centre) for a blur of standard deviation
/// `sigma` pixels.
pub fn box_radii(sigma: u32) -> [usize; GAUSS_PASSES] {
    let widths = box_sizes_for_gauss(f64::from(sigma), GAUSS_PASSES);
    [
        (widths[0] - 1) / 2,
        (widths[1] - 1) / 2,
        (widths[2] - 1) / 2,
    ]
}
