//! Shapes view-model sequences into JavaScript array bodies for the charts.

use crate::minmax::{Extremum, MinMax};
use crate::models::format_timestamp;
use crate::trendline::Trendline;
use chrono::NaiveDateTime;

/// `'2024-03-10 08:00:00','2024-03-10 08:00:01'`
pub fn quoted_timestamps(timestamps: &[NaiveDateTime]) -> String {
    timestamps
        .iter()
        .map(|ts| format!("'{}'", format_timestamp(ts)))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn joined(values: &[String]) -> String {
    values.join(",")
}

/// One entry per axis timestamp: the day's extreme where its timestamp lands
/// on the axis, `null` everywhere else.
///
/// Days whose extreme falls before the first axis timestamp cannot appear on
/// the axis and are skipped up front.
pub fn aligned_extrema(axis: &[NaiveDateTime], days: &[MinMax], side: Extremum) -> String {
    let days = match axis.first() {
        Some(start) => {
            let skip = days
                .iter()
                .take_while(|mm| mm.get(side).0.is_none_or(|ts| ts < *start))
                .count();
            &days[skip..]
        }
        None => days,
    };

    let mut p = 0;
    let mut out = Vec::with_capacity(axis.len());
    for ts in axis {
        match days.get(p).map(|mm| mm.get(side)) {
            Some((Some(at), value)) if at == *ts => {
                out.push(format!("{value:.2}"));
                p += 1;
            }
            _ => out.push("null".to_string()),
        }
    }
    out.join(",")
}

/// `['<ts>',<v>]` for every day, in order.
pub fn extrema_scatter(days: &[MinMax], side: Extremum) -> String {
    days.iter()
        .map(|mm| {
            let (ts, value) = mm.get(side);
            let ts = ts.as_ref().map(format_timestamp).unwrap_or_default();
            format!("['{ts}',{value:.2}]")
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// `(xStart, yStart), (xEnd, yEnd)` as two JS pairs.
pub fn trend_points(trend: &Trendline) -> String {
    let (xs, ys) = trend.start();
    let (xe, ye) = trend.end();
    format!(
        "[{},{}],[{},{}]",
        js_number(xs),
        js_number(ys),
        js_number(xe),
        js_number(ye)
    )
}

/// The fitted endpoints laid over a chronological time axis. The first
/// reading fed to the trendline is the newest one, so its value belongs at
/// the right-hand end.
pub fn trend_overlay(trend: &Trendline, axis: &[NaiveDateTime]) -> String {
    match (axis.first(), axis.last()) {
        (Some(oldest), Some(newest)) => format!(
            "['{}',{}],['{}',{}]",
            format_timestamp(oldest),
            js_number(trend.y_end),
            format_timestamp(newest),
            js_number(trend.y_start)
        ),
        _ => String::new(),
    }
}

fn js_number(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "null".to_string()
    }
}
