/// Escape-time result for a single plane point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeData {
    /// Completed z-updates before the continuation check failed, or the cap.
    pub iterations: u32,
    /// Cap the point was computed against.
    pub max_iterations: u32,
    /// False when the point is treated as inside the set.
    pub escaped: bool,
}

impl EscapeData {
    /// True when the count reached the cap; such points color black.
    pub fn at_cap(&self) -> bool {
        self.iterations >= self.max_iterations
    }
}

/// Escape-time iteration of `z <- z^2 + c` from `z = 0` with f64 arithmetic.
///
/// The loop continues while `|z|^2 <= 4.0`, checked before each update, and
/// the cap check uses the pre-increment count after the update. That exact
/// order is load-bearing for counts at the escape boundary: `c = 2 + 0i`
/// reaches `z = 2` after one update (`|z|^2 = 4`, which continues the loop)
/// and diverges only on the second, so it reports 2, not 1. Points that hit
/// the cap report `iterations == max_iterations` whether or not the final z
/// also happened to diverge.
pub fn escape_time(c_re: f64, c_im: f64, max_iterations: u32) -> EscapeData {
    let mut z_re = 0.0_f64;
    let mut z_im = 0.0_f64;
    let mut count = 0_u32;

    while z_re * z_re + z_im * z_im <= 4.0 {
        // z = z^2 + c, both components from the pre-update pair
        let z_re_sq = z_re * z_re;
        let z_im_sq = z_im * z_im;
        let new_im = 2.0 * z_re * z_im + c_im;
        z_re = z_re_sq - z_im_sq + c_re;
        z_im = new_im;

        if count >= max_iterations {
            return EscapeData {
                iterations: max_iterations,
                max_iterations,
                escaped: false,
            };
        }
        count += 1;
    }

    EscapeData {
        iterations: count,
        max_iterations,
        escaped: true,
    }
}
