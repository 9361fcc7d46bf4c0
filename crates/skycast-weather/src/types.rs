use serde::{Deserialize, Serialize};

/// Geographic coordinate supplied by the location collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Parsed forecast response from the Open-Meteo API.
///
/// `hourly` and `daily` are parallel ordered sequences: index `i` in any
/// hourly array describes the same hour across all arrays, and likewise for
/// daily. The client validates this invariant on parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    pub latitude: f64,
    pub longitude: f64,
    pub current: CurrentConditions,
    pub hourly: HourlySeries,
    pub daily: DailySeries,
}

/// Current conditions at the queried location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub time: String,
    #[serde(rename = "temperature_2m")]
    pub temperature: f64,
    pub weather_code: i32,
    pub is_day: u8,
}

/// Hourly forecast series (index-aligned parallel arrays).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m")]
    pub temperature: Vec<f64>,
    pub weather_code: Vec<i32>,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: Vec<f64>,
    #[serde(rename = "wind_direction_10m")]
    pub wind_direction: Vec<f64>,
    pub is_day: Vec<u8>,
}

/// One hour taken across all hourly arrays at the same index.
#[derive(Debug, Clone, Copy)]
pub struct HourlySample<'a> {
    pub time: &'a str,
    pub temperature: f64,
    pub weather_code: i32,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub is_day: u8,
}

impl HourlySeries {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// All arrays share one length.
    pub fn is_aligned(&self) -> bool {
        let len = self.time.len();
        self.temperature.len() == len
            && self.weather_code.len() == len
            && self.wind_speed.len() == len
            && self.wind_direction.len() == len
            && self.is_day.len() == len
    }

    fn sample(&self, index: usize) -> Option<HourlySample<'_>> {
        Some(HourlySample {
            time: self.time.get(index)?,
            temperature: *self.temperature.get(index)?,
            weather_code: *self.weather_code.get(index)?,
            wind_speed: *self.wind_speed.get(index)?,
            wind_direction: *self.wind_direction.get(index)?,
            is_day: *self.is_day.get(index)?,
        })
    }

    /// Iterate the series hour by hour, in the API's ascending order.
    pub fn iter(&self) -> impl Iterator<Item = HourlySample<'_>> {
        (0..self.len()).filter_map(|i| self.sample(i))
    }
}

/// Daily forecast series (index-aligned parallel arrays, date-only times).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub weather_code: Vec<i32>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Vec<f64>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Vec<f64>,
}

/// One day taken across all daily arrays at the same index.
#[derive(Debug, Clone, Copy)]
pub struct DailySample<'a> {
    pub time: &'a str,
    pub weather_code: i32,
    pub temperature_max: f64,
    pub temperature_min: f64,
}

impl DailySeries {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// All arrays share one length.
    pub fn is_aligned(&self) -> bool {
        let len = self.time.len();
        self.weather_code.len() == len
            && self.temperature_max.len() == len
            && self.temperature_min.len() == len
    }

    fn sample(&self, index: usize) -> Option<DailySample<'_>> {
        Some(DailySample {
            time: self.time.get(index)?,
            weather_code: *self.weather_code.get(index)?,
            temperature_max: *self.temperature_max.get(index)?,
            temperature_min: *self.temperature_min.get(index)?,
        })
    }

    /// Iterate the series day by day, in the API's chronological order.
    pub fn iter(&self) -> impl Iterator<Item = DailySample<'_>> {
        (0..self.len()).filter_map(|i| self.sample(i))
    }
}

/// One forecast day, ready for display. Rebuilt in full on every new forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayView {
    /// "Today" or an abbreviated weekday/date label like "Mon 05.02."
    pub day: String,
    pub min_temperature: i32,
    pub max_temperature: i32,
    pub weather_code: i32,
    /// Remaining hours of this day, ascending. Empty lists are valid.
    pub hours: Vec<HourView>,
}

/// One forecast hour within a day, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourView {
    /// "HH:mm" label
    pub hour: String,
    pub temperature: i32,
    pub weather_code: i32,
    pub wind_direction_deg: i32,
    pub wind_speed_ms: i32,
    pub is_day: u8,
}

/// Current conditions, ready for display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CurrentView {
    pub temperature: i32,
    pub weather_code: i32,
    pub is_day: u8,
}

impl From<&CurrentConditions> for CurrentView {
    fn from(current: &CurrentConditions) -> Self {
        Self {
            temperature: current.temperature.round() as i32,
            weather_code: current.weather_code,
            is_day: current.is_day,
        }
    }
}

/// Read-only snapshot handed to UI consumers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub current: Option<CurrentView>,
    pub days: Vec<DayView>,
    pub active_day: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hourly(len: usize) -> HourlySeries {
        HourlySeries {
            time: (0..len).map(|i| format!("2024-01-01T{i:02}:00")).collect(),
            temperature: vec![1.0; len],
            weather_code: vec![0; len],
            wind_speed: vec![2.0; len],
            wind_direction: vec![180.0; len],
            is_day: vec![1; len],
        }
    }

    #[test]
    fn test_hourly_alignment() {
        let mut series = hourly(3);
        assert!(series.is_aligned());

        series.temperature.pop();
        assert!(!series.is_aligned());
    }

    #[test]
    fn test_hourly_iter_yields_every_index() {
        let series = hourly(4);
        let samples: Vec<_> = series.iter().collect();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[2].time, "2024-01-01T02:00");
    }

    #[test]
    fn test_daily_alignment() {
        let series = DailySeries {
            time: vec!["2024-01-01".into(), "2024-01-02".into()],
            weather_code: vec![0, 3],
            temperature_max: vec![5.0, 6.0],
            temperature_min: vec![-1.0],
        };
        assert!(!series.is_aligned());
    }

    #[test]
    fn test_current_view_rounds_to_nearest() {
        let current = CurrentConditions {
            time: "2024-01-01T10:00".into(),
            temperature: 3.6,
            weather_code: 61,
            is_day: 1,
        };
        let view = CurrentView::from(&current);
        assert_eq!(view.temperature, 4);

        let cold = CurrentConditions {
            temperature: -0.5,
            ..current
        };
        assert_eq!(CurrentView::from(&cold).temperature, -1);
    }
}
