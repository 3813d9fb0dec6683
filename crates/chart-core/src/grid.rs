// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Step between "nice" ticks (1, 2 or 5 times a power of ten) so that
/// `[min, max]` holds at most about `max_ticks` of them.
pub fn nice_step(min: f64, max: f64, max_ticks: usize) -> f64 {
    let span = (max - min).abs();
    if !span.is_finite() || span <= 0.0 || max_ticks < 2 {
        return 1.0;
    }
    let raw = span / (max_ticks - 1) as f64;
    let mag = 10f64.powi(raw.log10().floor() as i32);
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick values inside `[min, max]` placed on multiples of `nice_step`.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return Vec::new();
    }
    let step = nice_step(min, max, max_ticks);
    let eps = step * 1e-9;
    let first = (min / step).ceil();
    let mut out = Vec::new();
    for i in 0.. {
        let mut v = (first + i as f64) * step;
        if v > max + eps {
            break;
        }
        if v.abs() < eps {
            v = 0.0; // avoid "-0"
        }
        out.push(v);
    }
    out
}

/// Decimal places needed to tell apart ticks spaced `step` apart.
pub fn tick_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    (-step.log10().floor()).clamp(0.0, 6.0) as usize
}

pub fn format_tick(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}
