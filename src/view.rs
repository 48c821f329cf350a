use crate::bucket::BucketedWindow;
use crate::errors::PipelineError;
use crate::minmax::MinMax;
use crate::models::{format_timestamp, Reading};
use crate::reverse::ReverseLines;
use crate::trendline::Trendline;
use chrono::{Datelike, Duration, Timelike};
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use tracing::{debug, warn};

pub const UNAVAILABLE: &str = "N/A";

/// Everything the dashboard renders, in chronological order.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub last_timestamp: String,
    pub last_temperature: String,
    pub last_humidity: String,
    pub first_timestamp: String,
    pub last_day: BucketedWindow,
    pub last_week: BucketedWindow,
    pub last_month: BucketedWindow,
    pub daily_temperature: Vec<MinMax>,
    pub daily_humidity: Vec<MinMax>,
    pub temperature_trend: Trendline,
    pub humidity_trend: Trendline,
    pub current_humidity: String,
    pub readings: usize,
    pub skipped: usize,
}

impl DashboardView {
    pub fn with_current_humidity(mut self, humidity: Option<String>) -> Self {
        self.current_humidity = humidity.unwrap_or_else(|| UNAVAILABLE.to_string());
        self
    }
}

/// Runs the reverse pass over the log at `path`. The file is closed when
/// this returns, whichever way it returns.
pub fn build_view_from_path(path: &Path, retain_days: u32) -> Result<DashboardView, PipelineError> {
    let file = File::open(path)?;
    let lines = ReverseLines::new(file)?;
    build_view(lines, retain_days)
}

/// Feeds every reading, newest first, to all accumulators until
/// `retain_days` calendar days have been consumed.
pub fn build_view<R: Read + Seek>(
    lines: ReverseLines<R>,
    retain_days: u32,
) -> Result<DashboardView, PipelineError> {
    let mut last: Option<Reading> = None;
    let mut first_timestamp = None;
    let mut current_day = 0;
    let mut remaining = retain_days;

    let mut last_day = BucketedWindow::new(Duration::hours(24), 1);
    let mut last_week = BucketedWindow::new(Duration::days(7), 1);
    let mut last_month = BucketedWindow::new(Duration::days(30), 3600);
    let mut daily_temperature: Vec<MinMax> = Vec::new();
    let mut daily_humidity: Vec<MinMax> = Vec::new();
    let mut temperature_trend = Trendline::new();
    let mut humidity_trend = Trendline::new();
    let mut readings = 0;
    let mut skipped = 0;

    for line in lines {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let reading = match Reading::parse(&line) {
            Ok(reading) => reading,
            Err(err) => {
                warn!(line = %line, "skipping malformed reading: {err}");
                skipped += 1;
                continue;
            }
        };

        let ts = reading.timestamp;
        let day = ts.day();
        if last.is_none() {
            current_day = day;
            daily_temperature.push(MinMax::new());
            daily_humidity.push(MinMax::new());
            last = Some(reading.clone());
        } else if day != current_day {
            remaining = remaining.saturating_sub(1);
            if remaining == 0 {
                break;
            }
            current_day = day;
            daily_temperature.push(MinMax::new());
            daily_humidity.push(MinMax::new());
        }
        first_timestamp = Some(ts);
        readings += 1;

        let t = reading.temperature_value;
        let h = reading.humidity_value;
        let x = f64::from(ts.second());
        temperature_trend.add(x, t);
        humidity_trend.add(x, h);
        last_day.add(ts, t, h);
        last_week.add(ts, t, h);
        last_month.add(ts, t, h);
        if let Some(mm) = daily_temperature.last_mut() {
            mm.update(t, ts);
        }
        if let Some(mm) = daily_humidity.last_mut() {
            mm.update(h, ts);
        }
    }

    daily_temperature.reverse();
    daily_humidity.reverse();
    temperature_trend.calc();
    humidity_trend.calc();

    debug!(
        readings,
        skipped,
        days = daily_temperature.len(),
        "finished reverse pass"
    );

    let (last_timestamp, last_temperature, last_humidity) = match last {
        Some(r) => (format_timestamp(&r.timestamp), r.temperature, r.humidity),
        None => Default::default(),
    };

    Ok(DashboardView {
        last_timestamp,
        last_temperature,
        last_humidity,
        first_timestamp: first_timestamp
            .map(|ts| format_timestamp(&ts))
            .unwrap_or_default(),
        last_day: last_day.into_chronological(),
        last_week: last_week.into_chronological(),
        last_month: last_month.into_chronological(),
        daily_temperature,
        daily_humidity,
        temperature_trend,
        humidity_trend,
        current_humidity: UNAVAILABLE.to_string(),
        readings,
        skipped,
    })
}
