/// One live-WPM reading, `t` seconds after the first keystroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSeriesPoint {
    pub t: f64,
    pub wpm: f64,
}

impl TimeSeriesPoint {
    pub fn new(t: f64, wpm: f64) -> Self {
        Self { t, wpm }
    }
}

impl From<TimeSeriesPoint> for (f64, f64) {
    fn from(p: TimeSeriesPoint) -> Self {
        (p.t, p.wpm)
    }
}

/// Chart-ready `(seconds, wpm)` pairs
pub fn to_chart_data(points: &[TimeSeriesPoint]) -> Vec<(f64, f64)> {
    points.iter().copied().map(Into::into).collect()
}
