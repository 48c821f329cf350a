use crate::minmax::Extremum;
use crate::projection::{
    aligned_extrema, extrema_scatter, joined, quoted_timestamps, trend_overlay, trend_points,
};
use crate::view::DashboardView;

pub fn render_dashboard(view: &DashboardView) -> String {
    let week_axis = &view.last_week.timestamps;
    let replacements = [
        ("{{LAST_TIMESTAMP}}", escape_html(&view.last_timestamp)),
        ("{{LAST_TEMPERATURE}}", escape_html(&view.last_temperature)),
        ("{{LAST_HUMIDITY}}", escape_html(&view.last_humidity)),
        ("{{FIRST_TIMESTAMP}}", escape_html(&view.first_timestamp)),
        ("{{CURRENT_HUMIDITY}}", escape_html(&view.current_humidity)),
        ("{{DAYS}}", view.daily_temperature.len().to_string()),
        ("{{DAY_TS}}", quoted_timestamps(&view.last_day.timestamps)),
        ("{{DAY_T}}", joined(&view.last_day.temperatures)),
        ("{{DAY_H}}", joined(&view.last_day.humidities)),
        ("{{WEEK_TS}}", quoted_timestamps(week_axis)),
        ("{{WEEK_T}}", joined(&view.last_week.temperatures)),
        ("{{WEEK_H}}", joined(&view.last_week.humidities)),
        ("{{MONTH_TS}}", quoted_timestamps(&view.last_month.timestamps)),
        ("{{MONTH_T}}", joined(&view.last_month.temperatures)),
        ("{{MONTH_H}}", joined(&view.last_month.humidities)),
        (
            "{{T_MINS}}",
            aligned_extrema(week_axis, &view.daily_temperature, Extremum::Min),
        ),
        (
            "{{T_MAXS}}",
            aligned_extrema(week_axis, &view.daily_temperature, Extremum::Max),
        ),
        (
            "{{H_MINS}}",
            aligned_extrema(week_axis, &view.daily_humidity, Extremum::Min),
        ),
        (
            "{{H_MAXS}}",
            aligned_extrema(week_axis, &view.daily_humidity, Extremum::Max),
        ),
        (
            "{{T_MIN_SCATTER}}",
            extrema_scatter(&view.daily_temperature, Extremum::Min),
        ),
        (
            "{{T_MAX_SCATTER}}",
            extrema_scatter(&view.daily_temperature, Extremum::Max),
        ),
        (
            "{{H_MIN_SCATTER}}",
            extrema_scatter(&view.daily_humidity, Extremum::Min),
        ),
        (
            "{{H_MAX_SCATTER}}",
            extrema_scatter(&view.daily_humidity, Extremum::Max),
        ),
        ("{{T_TREND}}", trend_overlay(&view.temperature_trend, week_axis)),
        ("{{H_TREND}}", trend_overlay(&view.humidity_trend, week_axis)),
        ("{{T_TREND_POINTS}}", trend_points(&view.temperature_trend)),
        ("{{H_TREND_POINTS}}", trend_points(&view.humidity_trend)),
    ];

    replacements
        .iter()
        .fold(DASHBOARD_HTML.to_string(), |html, (key, value)| {
            html.replace(*key, value)
        })
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Temperature &amp; Humidity</title>
  <link rel="stylesheet" href="/static/dashboard.css" />
  <script src="https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js"></script>
</head>
<body>
  <main class="app">
    <header>
      <h1>Temperature &amp; Humidity</h1>
      <p class="subtitle">Readings since <span id="first-ts">{{FIRST_TIMESTAMP}}</span> across {{DAYS}} day(s).</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Temperature</span>
        <span id="last-temperature" class="value">{{LAST_TEMPERATURE}}</span>
      </div>
      <div class="stat">
        <span class="label">Humidity</span>
        <span id="last-humidity" class="value">{{LAST_HUMIDITY}}</span>
      </div>
      <div class="stat">
        <span class="label">Outdoor humidity</span>
        <span id="current-humidity" class="value accent">{{CURRENT_HUMIDITY}}</span>
      </div>
      <div class="stat">
        <span class="label">Last reading</span>
        <span id="last-ts" class="value small">{{LAST_TIMESTAMP}}</span>
      </div>
    </section>

    <section class="chart-card">
      <h2>Last 24 hours</h2>
      <div id="chart-day" class="chart"></div>
    </section>

    <section class="chart-card">
      <h2>Last 7 days</h2>
      <p class="hint">Daily minimum and maximum marked, with trendlines.</p>
      <div id="chart-week" class="chart"></div>
    </section>

    <section class="chart-card">
      <h2>Trend fit</h2>
      <p class="hint">Least-squares endpoints by second of the minute.</p>
      <div id="chart-trend" class="chart"></div>
    </section>

    <section class="chart-card">
      <h2>Last 30 days</h2>
      <p class="hint">Hourly averages.</p>
      <div id="chart-month" class="chart"></div>
    </section>
  </main>

  <script>
    window.DASHBOARD = {
      day: { ts: [{{DAY_TS}}], t: [{{DAY_T}}], h: [{{DAY_H}}] },
      week: {
        ts: [{{WEEK_TS}}],
        t: [{{WEEK_T}}],
        h: [{{WEEK_H}}],
        tMin: [{{T_MINS}}],
        tMax: [{{T_MAXS}}],
        hMin: [{{H_MINS}}],
        hMax: [{{H_MAXS}}],
        tTrend: [{{T_TREND}}],
        hTrend: [{{H_TREND}}],
        tTrendPoints: [{{T_TREND_POINTS}}],
        hTrendPoints: [{{H_TREND_POINTS}}]
      },
      daily: {
        tMin: [{{T_MIN_SCATTER}}],
        tMax: [{{T_MAX_SCATTER}}],
        hMin: [{{H_MIN_SCATTER}}],
        hMax: [{{H_MAX_SCATTER}}]
      },
      month: { ts: [{{MONTH_TS}}], t: [{{MONTH_T}}], h: [{{MONTH_H}}] }
    };
  </script>
  <script src="/static/dashboard.js"></script>
</body>
</html>
"#;
