use crate::config::HumidityConfig;
use tracing::warn;

const HUMIDITY_LABEL: &str = "humidity: ";

/// Best-effort lookup of the current outdoor humidity. Every failure is
/// logged and reported as `None`.
pub async fn fetch_current_humidity(client: &reqwest::Client, config: &HumidityConfig) -> Option<String> {
    let response = match client
        .get(&config.url)
        .timeout(config.timeout)
        .send()
        .await
        .and_then(|resp| resp.error_for_status())
    {
        Ok(resp) => resp,
        Err(err) => {
            warn!("current humidity download failed: {err}");
            return None;
        }
    };

    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            warn!("current humidity download failed: {err}");
            return None;
        }
    };

    let humidity = extract_humidity(&body, &config.marker);
    if humidity.is_none() {
        warn!(
            marker = %config.marker,
            "current humidity not found in weather page"
        );
    }
    humidity
}

/// Finds `marker`, then the first `humidity: ` after it, and returns the
/// text up to the next `<`.
pub fn extract_humidity(body: &str, marker: &str) -> Option<String> {
    let after_marker = &body[body.find(marker)? + marker.len()..];
    let value = &after_marker[after_marker.find(HUMIDITY_LABEL)? + HUMIDITY_LABEL.len()..];
    let end = value.find('<')?;
    Some(value[..end].trim().to_string())
}
