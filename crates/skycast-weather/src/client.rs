//! Open-Meteo forecast API client.

use std::time::Duration;

use tracing::instrument;

use crate::error::WeatherError;
use crate::types::{Coordinate, Forecast};
use skycast_core::TemperatureUnit;

const OPEN_METEO_BASE: &str = "https://api.open-meteo.com/v1";
const REQUEST_TIMEOUT_SECS: u64 = 10;

const CURRENT_FIELDS: &str = "temperature_2m,weather_code,is_day";
const HOURLY_FIELDS: &str =
    "temperature_2m,weather_code,wind_speed_10m,wind_direction_10m,is_day";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";

/// Stateless forecast fetcher. One HTTPS round-trip per call, no retries,
/// no side effects beyond the network request.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenMeteoClient {
    pub fn new() -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: OPEN_METEO_BASE.to_string(),
        })
    }

    #[cfg(test)]
    pub fn new_with_base_url(base_url: &str) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Fetch current, hourly, and daily forecast data for a coordinate.
    ///
    /// Timezone resolution is delegated to the server (`timezone=auto`), so
    /// all returned timestamps are local to the coordinate.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(
        &self,
        coordinate: Coordinate,
        unit: TemperatureUnit,
    ) -> Result<Forecast, WeatherError> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&current={}&hourly={}&daily={}&timezone=auto&temperature_unit={}",
            self.base_url,
            coordinate.latitude,
            coordinate.longitude,
            CURRENT_FIELDS,
            HOURLY_FIELDS,
            DAILY_FIELDS,
            unit.as_str(),
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::Network(format!(
                "server returned {status}: {body}"
            )));
        }

        let forecast: Forecast = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        if !forecast.hourly.is_aligned() || !forecast.daily.is_aligned() {
            return Err(WeatherError::Parse(
                "forecast series arrays have mismatched lengths".to_string(),
            ));
        }

        tracing::debug!(
            hours = forecast.hourly.len(),
            days = forecast.daily.len(),
            "fetched forecast"
        );
        Ok(forecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_body() -> serde_json::Value {
        serde_json::json!({
            "latitude": 52.52,
            "longitude": 13.41,
            "current": {
                "time": "2024-01-01T10:00",
                "temperature_2m": 4.2,
                "weather_code": 3,
                "is_day": 1
            },
            "hourly": {
                "time": ["2024-01-01T09:00", "2024-01-01T10:00"],
                "temperature_2m": [3.8, 4.2],
                "weather_code": [3, 61],
                "wind_speed_10m": [2.5, 3.1],
                "wind_direction_10m": [180.0, 190.0],
                "is_day": [1, 1]
            },
            "daily": {
                "time": ["2024-01-01"],
                "weather_code": [61],
                "temperature_2m_max": [5.5],
                "temperature_2m_min": [-1.5]
            }
        })
    }

    const BERLIN: Coordinate = Coordinate {
        latitude: 52.52,
        longitude: 13.41,
    };

    #[tokio::test]
    async fn test_fetch_parses_forecast() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("latitude", "52.52"))
            .and(query_param("longitude", "13.41"))
            .and(query_param("timezone", "auto"))
            .and(query_param("temperature_unit", "celsius"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
            .mount(&server)
            .await;

        let client = OpenMeteoClient::new_with_base_url(&server.uri()).unwrap();
        let forecast = client.fetch(BERLIN, TemperatureUnit::Celsius).await.unwrap();

        assert_eq!(forecast.hourly.len(), 2);
        assert_eq!(forecast.daily.len(), 1);
        assert_eq!(forecast.current.weather_code, 3);
        assert_eq!(forecast.hourly.weather_code[1], 61);
    }

    #[tokio::test]
    async fn test_fetch_sends_unit_preference() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("temperature_unit", "fahrenheit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenMeteoClient::new_with_base_url(&server.uri()).unwrap();
        client
            .fetch(BERLIN, TemperatureUnit::Fahrenheit)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_server_error_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = OpenMeteoClient::new_with_base_url(&server.uri()).unwrap();
        let err = client
            .fetch(BERLIN, TemperatureUnit::Celsius)
            .await
            .unwrap_err();
        assert!(matches!(err, WeatherError::Network(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"oops": true})),
            )
            .mount(&server)
            .await;

        let client = OpenMeteoClient::new_with_base_url(&server.uri()).unwrap();
        let err = client
            .fetch(BERLIN, TemperatureUnit::Celsius)
            .await
            .unwrap_err();
        assert!(matches!(err, WeatherError::Parse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_misaligned_series_is_parse_error() {
        let mut body = sample_body();
        body["hourly"]["temperature_2m"] = serde_json::json!([3.8]);

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = OpenMeteoClient::new_with_base_url(&server.uri()).unwrap();
        let err = client
            .fetch(BERLIN, TemperatureUnit::Celsius)
            .await
            .unwrap_err();
        assert!(matches!(err, WeatherError::Parse(_)), "got {err:?}");
    }
}
