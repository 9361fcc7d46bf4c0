//! Weather pipeline for Skycast
//!
//! Fetches multi-resolution forecasts (current/hourly/daily) from the
//! Open-Meteo API, partitions them into a day/hour view model, and drives
//! refreshes from device location updates.

pub mod client;
pub mod condition;
pub mod error;
pub mod location;
pub mod normalize;
pub mod notify;
pub mod session;
pub mod types;

pub use client::OpenMeteoClient;
pub use condition::Condition;
pub use error::WeatherError;
pub use normalize::build_day_views;
pub use notify::Notifier;
pub use session::{Phase, SessionEvent, SessionHandle, WeatherSession};
pub use skycast_core::TemperatureUnit;
pub use types::*;
