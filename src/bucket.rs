use chrono::{DateTime, Duration, NaiveDateTime};
use serde::Serialize;

/// Averages readings into fixed-width buckets over a window anchored to the
/// first (newest) reading it admits.
///
/// Readings must arrive newest first. Output is built in that order too; call
/// [`BucketedWindow::into_chronological`] once the pass is over. The bucket
/// still being filled when the pass ends is never emitted.
#[derive(Debug, Clone, Serialize)]
pub struct BucketedWindow {
    pub timestamps: Vec<NaiveDateTime>,
    pub temperatures: Vec<String>,
    pub humidities: Vec<String>,
    #[serde(skip)]
    span: Duration,
    #[serde(skip)]
    granularity: i64,
    #[serde(skip)]
    cutoff: Option<NaiveDateTime>,
    #[serde(skip)]
    bucket: i64,
    #[serde(skip)]
    sum_temperature: f64,
    #[serde(skip)]
    sum_humidity: f64,
    #[serde(skip)]
    count: u32,
}

impl BucketedWindow {
    /// `granularity` is the bucket width in whole seconds, at least one.
    pub fn new(span: Duration, granularity: i64) -> Self {
        Self {
            timestamps: Vec::new(),
            temperatures: Vec::new(),
            humidities: Vec::new(),
            span,
            granularity: granularity.max(1),
            cutoff: None,
            bucket: 0,
            sum_temperature: 0.0,
            sum_humidity: 0.0,
            count: 0,
        }
    }

    pub fn add(&mut self, ts: NaiveDateTime, temperature: f64, humidity: f64) {
        let cutoff = *self.cutoff.get_or_insert(ts - self.span);
        if ts <= cutoff {
            return;
        }

        let bucket = ts.and_utc().timestamp().div_euclid(self.granularity);
        if bucket != self.bucket {
            self.flush();
            self.bucket = bucket;
        }
        self.sum_temperature += temperature;
        self.sum_humidity += humidity;
        self.count += 1;
    }

    fn flush(&mut self) {
        if self.count == 0 {
            return;
        }
        let count = f64::from(self.count);
        if let Some(start) = DateTime::from_timestamp(self.bucket * self.granularity, 0) {
            self.timestamps.push(start.naive_utc());
            self.temperatures
                .push(format!("{:.2}", self.sum_temperature / count));
            self.humidities.push(format!("{:.2}", self.sum_humidity / count));
        }
        self.sum_temperature = 0.0;
        self.sum_humidity = 0.0;
        self.count = 0;
    }

    /// Reverses the emitted buckets into oldest-first order.
    pub fn into_chronological(mut self) -> Self {
        self.timestamps.reverse();
        self.temperatures.reverse();
        self.humidities.reverse();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}
