//! Terminal front-end for the weather session.
//!
//! Consumes the view model: prints the current conditions, one card per
//! forecast day, and the active day's remaining hours.

use std::time::Duration;

use anyhow::{bail, Context, Result};

use skycast_core::{Config, TemperatureUnit};
use skycast_weather::{
    location, Condition, Coordinate, Notifier, OpenMeteoClient, ViewState, WeatherSession,
};

#[tokio::main]
async fn main() -> Result<()> {
    skycast_core::init()?;
    let mut config = Config::load()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        bail!("usage: skycast <latitude> <longitude> [celsius|fahrenheit] [theme]");
    }
    let latitude: f64 = args[0].parse().context("latitude must be a number")?;
    let longitude: f64 = args[1].parse().context("longitude must be a number")?;

    // Preferences given on the command line become the stored settings. A
    // theme change is persisted but never reaches the weather session.
    let unit: TemperatureUnit = match args.get(2) {
        Some(arg) => arg.parse()?,
        None => config.weather.temperature_unit,
    };
    let theme = args
        .get(3)
        .cloned()
        .unwrap_or_else(|| config.ui.theme.clone());
    if config.apply_settings(unit, &theme).any() {
        config.save()?;
    }

    let validation = config.validate();
    if !validation.is_valid() {
        bail!("invalid configuration: {}", validation.error_summary());
    }
    for warning in validation.warnings {
        tracing::warn!("Config warning: {}", warning);
    }

    let (notifier, mut notifications) = Notifier::channel();
    let client = OpenMeteoClient::new()?;
    let (session, handle) =
        WeatherSession::new(client, config.weather.temperature_unit, notifier);
    tokio::spawn(session.run());

    let refresh = Duration::from_secs(u64::from(config.weather.refresh_minutes.max(1)) * 60);
    location::spawn_fixed_interval(
        Coordinate {
            latitude,
            longitude,
        },
        refresh,
        handle.clone(),
    );

    println!("Fetching weather data...");

    let mut view = handle.view();
    loop {
        tokio::select! {
            changed = view.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = view.borrow_and_update().clone();
                render(&snapshot);
            }
            message = notifications.recv() => {
                match message {
                    Some(text) => eprintln!("{text}"),
                    None => break,
                }
            }
        }
    }

    Ok(())
}

fn render(view: &ViewState) {
    if let Some(current) = view.current {
        let condition = Condition::from_weather_code(current.weather_code);
        println!(
            "\nNow: {}°  {} {}",
            current.temperature,
            condition.emoji(current.is_day == 1),
            condition.description()
        );
    }

    for (index, day) in view.days.iter().enumerate() {
        let marker = if index == view.active_day { '>' } else { ' ' };
        println!(
            "{marker} {:<12} ↑{}°  ↓{}°  {}",
            day.day,
            day.max_temperature,
            day.min_temperature,
            Condition::from_weather_code(day.weather_code).emoji(true)
        );
    }

    if let Some(day) = view.days.get(view.active_day) {
        for hour in &day.hours {
            let condition = Condition::from_weather_code(hour.weather_code);
            println!(
                "    {}  {:>3}°  {}  {} m/s",
                hour.hour,
                hour.temperature,
                condition.emoji(hour.is_day == 1),
                hour.wind_speed_ms
            );
        }
    }
}
