//! Turning a snapshot into something a person can read.

use std::fmt;

use tracing::debug;

use crate::model::{ConditionRecord, WeatherSnapshot};

const MISSING: &str = "n/a";

/// Consumer of snapshots. Each render replaces whatever was shown before.
pub trait PresentationSink {
    fn render(&mut self, snapshot: &WeatherSnapshot);
}

/// A block of output lines that is cleared and refilled on each render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    lines: Vec<String>,
}

impl Region {
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn append(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Plain-text rendering with separate regions for forecast information,
/// current conditions and the forecast list.
#[derive(Debug, Clone, Default)]
pub struct TextSink {
    pub forecast_information: Region,
    pub current_conditions: Region,
    pub forecast_conditions: Region,
}

impl TextSink {
    fn empty_content(&mut self) {
        debug!("removing old data");
        self.forecast_information.clear();
        self.current_conditions.clear();
        self.forecast_conditions.clear();
    }
}

impl PresentationSink for TextSink {
    fn render(&mut self, snapshot: &WeatherSnapshot) {
        self.empty_content();

        let info = snapshot.forecast_info();
        self.forecast_information.append(format!(
            "{} (forecast for {})",
            info.city().unwrap_or(MISSING),
            info.forecast_date().unwrap_or(MISSING),
        ));

        let now = snapshot.current_conditions();
        self.current_conditions.append(format!(
            "Now: {}, {}°F",
            field(now, "condition"),
            field(now, "temp_f"),
        ));
        self.current_conditions.append(field(now, "humidity"));
        self.current_conditions.append(field(now, "wind_condition"));
        self.current_conditions.append(format!("Icon: {}", field(now, "icon")));

        for day in snapshot.forecast_conditions() {
            self.forecast_conditions.append(format!(
                "{:<4} {:<20} low {:>3}  high {:>3}  [{}]",
                field(day, "day_of_week"),
                field(day, "condition"),
                field(day, "low"),
                field(day, "high"),
                field(day, "icon"),
            ));
        }

        debug!("finished populating weather conditions");
    }
}

impl fmt::Display for TextSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let regions = [&self.forecast_information, &self.current_conditions, &self.forecast_conditions];
        let mut first = true;

        for region in regions.into_iter().filter(|r| !r.lines().is_empty()) {
            if !first {
                writeln!(f)?;
            }
            first = false;
            for line in region.lines() {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

fn field<'a>(record: &'a ConditionRecord, name: &str) -> &'a str {
    record.get(name).unwrap_or(MISSING)
}
