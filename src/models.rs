use crate::errors::PipelineError;
use chrono::NaiveDateTime;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One parsed log record. The numeric fields keep their original text for
/// display next to the parsed value used for arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub timestamp: NaiveDateTime,
    pub temperature: String,
    pub humidity: String,
    pub temperature_value: f64,
    pub humidity_value: f64,
}

impl Reading {
    /// Parses `YYYY-MM-DD HH:MM:SS,<temperature>,<humidity>`. Fields past the
    /// third are ignored.
    pub fn parse(line: &str) -> Result<Self, PipelineError> {
        let mut fields = line.split(',');
        let raw_ts = fields
            .next()
            .ok_or(PipelineError::MissingField { field: "timestamp" })?;
        let temperature = fields
            .next()
            .ok_or(PipelineError::MissingField {
                field: "temperature",
            })?
            .trim();
        let humidity = fields
            .next()
            .ok_or(PipelineError::MissingField { field: "humidity" })?
            .trim();

        let timestamp = NaiveDateTime::parse_from_str(raw_ts, TIMESTAMP_FORMAT).map_err(|source| {
            PipelineError::Timestamp {
                value: raw_ts.to_string(),
                source,
            }
        })?;

        Ok(Self {
            timestamp,
            temperature_value: parse_number("temperature", temperature)?,
            humidity_value: parse_number("humidity", humidity)?,
            temperature: temperature.to_string(),
            humidity: humidity.to_string(),
        })
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, PipelineError> {
    let number = value.parse::<f64>().map_err(|source| PipelineError::Number {
        field,
        value: value.to_string(),
        source,
    })?;
    if !number.is_finite() {
        return Err(PipelineError::NonFinite {
            field,
            value: value.to_string(),
        });
    }
    Ok(number)
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_record_and_trims_numbers() {
        let reading = Reading::parse("2024-03-10 08:00:00, 20.5 ,  40.25").unwrap();
        assert_eq!(format_timestamp(&reading.timestamp), "2024-03-10 08:00:00");
        assert_eq!(reading.temperature, "20.5");
        assert_eq!(reading.humidity, "40.25");
        assert_eq!(reading.temperature_value, 20.5);
        assert_eq!(reading.humidity_value, 40.25);
    }

    #[test]
    fn ignores_extra_fields() {
        let reading = Reading::parse("2024-03-10 08:00:00,20,40,extra").unwrap();
        assert_eq!(reading.humidity, "40");
    }

    #[test]
    fn rejects_missing_fields() {
        let err = Reading::parse("2024-03-10 08:00:00,20").unwrap_err();
        assert!(matches!(err, PipelineError::MissingField { field: "humidity" }));
    }

    #[test]
    fn rejects_bad_timestamps() {
        let err = Reading::parse("2024/03/10 08:00,20,40").unwrap_err();
        assert!(matches!(err, PipelineError::Timestamp { .. }));
    }

    #[test]
    fn rejects_non_finite_numbers() {
        for (line, field) in [
            ("2024-03-10 08:00:00,inf,40", "temperature"),
            ("2024-03-10 08:00:00,-Infinity,40", "temperature"),
            ("2024-03-10 08:00:00,21,NaN", "humidity"),
        ] {
            match Reading::parse(line).unwrap_err() {
                PipelineError::NonFinite { field: got, .. } => assert_eq!(got, field),
                other => panic!("unexpected error for {line}: {other}"),
            }
        }
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = Reading::parse("2024-03-10 08:00:00,warm,40").unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Number {
                field: "temperature",
                ..
            }
        ));
    }
}
