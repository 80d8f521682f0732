use crate::time_series::TimeSeriesPoint;

/// X (seconds) and Y (wpm) upper bounds for the results chart.
/// `fallback_secs` sizes the x axis when no sample was recorded.
pub fn compute_chart_bounds(samples: &[TimeSeriesPoint], fallback_secs: f64) -> (f64, f64) {
    let highest_wpm = samples.iter().map(|p| p.wpm).fold(0.0_f64, f64::max);
    let duration = samples.last().map_or(fallback_secs, |p| p.t).max(1.0);

    let top = if highest_wpm > 0.0 {
        // 10% headroom above the fastest sample
        highest_wpm.round() + (highest_wpm / 10.0).ceil()
    } else {
        10.0
    };
    (duration, top)
}

pub fn format_label(val: f64) -> String {
    if (val - val.round()).abs() < f64::EPSILON {
        format!("{}", val.round())
    } else {
        format!("{val:.1}")
    }
}
