use chrono::NaiveDateTime;
use serde::Serialize;

/// Extremes of one calendar day and the readings they came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinMax {
    pub min: f64,
    pub min_ts: Option<NaiveDateTime>,
    pub max: f64,
    pub max_ts: Option<NaiveDateTime>,
    #[serde(skip)]
    seen: usize,
}

impl Default for MinMax {
    fn default() -> Self {
        Self {
            min: f64::INFINITY,
            min_ts: None,
            max: 0.0,
            max_ts: None,
            seen: 0,
        }
    }
}

/// Which side of a [`MinMax`] a projection reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Min,
    Max,
}

impl MinMax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one reading.
    ///
    /// Equal values overwrite the stored timestamp, so with readings arriving
    /// newest first the oldest occurrence of an extreme wins. A value that
    /// lowers the minimum never touches the maximum in the same call.
    pub fn update(&mut self, value: f64, ts: NaiveDateTime) {
        if self.seen == 0 {
            self.max = value;
            self.max_ts = Some(ts);
        }
        self.seen += 1;

        if value <= self.min {
            self.min = value;
            self.min_ts = Some(ts);
        } else if value >= self.max {
            self.max = value;
            self.max_ts = Some(ts);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.seen == 0
    }

    pub fn get(&self, side: Extremum) -> (Option<NaiveDateTime>, f64) {
        match side {
            Extremum::Min => (self.min_ts, self.min),
            Extremum::Max => (self.max_ts, self.max),
        }
    }
}
