use serde::Serialize;

/// Single-pass least-squares line fit.
///
/// The dashboard feeds it the seconds-of-minute of each reading as `x`,
/// which makes the slope run over a cyclic 0..=59 domain rather than over
/// real time.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Trendline {
    pub slope: f64,
    pub intercept: f64,
    pub count: u64,
    pub x_start: f64,
    pub y_start: f64,
    pub x_end: f64,
    pub y_end: f64,
    #[serde(skip)]
    sum_x: f64,
    #[serde(skip)]
    sum_x2: f64,
    #[serde(skip)]
    sum_y: f64,
    #[serde(skip)]
    sum_xy: f64,
}

impl Trendline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, x: f64, y: f64) {
        if self.count == 0 {
            self.x_start = x;
        }
        self.x_end = x;
        self.count += 1;
        self.sum_x += x;
        self.sum_x2 += x * x;
        self.sum_y += y;
        self.sum_xy += x * y;
    }

    /// Computes slope, intercept and the rounded endpoint values. With no
    /// readings or a constant `x` the results are not finite.
    pub fn calc(&mut self) {
        let n = self.count as f64;
        self.slope = (self.sum_xy - self.sum_x * self.sum_y / n)
            / (self.sum_x2 - self.sum_x * self.sum_x / n);
        self.intercept = self.sum_y / n - self.slope * self.sum_x / n;
        self.y_start = round2(self.slope * self.x_start + self.intercept);
        self.y_end = round2(self.slope * self.x_end + self.intercept);
    }

    pub fn start(&self) -> (f64, f64) {
        (self.x_start, self.y_start)
    }

    pub fn end(&self) -> (f64, f64) {
        (self.x_end, self.y_end)
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
