//! Horizontal bar chart of finishing times.

use serde::Serialize;

use crate::{core::format::format_duration, models::DriverResult};

const BAR_WIDTH: usize = 40;
const BAR_CHAR: char = '█';

/// One bar: who, how long, and the clock string for the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub millis: u64,
    pub formatted_time: String,
}

/// Drivers with a usable finishing time, in result order. Non-finishers and
/// malformed times are left out.
pub fn chart_points(results: &[DriverResult]) -> Vec<ChartPoint> {
    results
        .iter()
        .filter_map(|r| {
            let millis = r.time.as_ref()?.millis.trim().parse::<u64>().ok()?;
            Some(ChartPoint {
                name: r.driver.full_name(),
                millis,
                formatted_time: format_duration(millis),
            })
        })
        .collect()
}

/// Render points as text bars scaled to the slowest time.
pub fn render_chart(points: &[ChartPoint]) -> String {
    let Some(max) = points.iter().map(|p| p.millis).max() else {
        return "No finishing times to chart.\n".to_string();
    };
    let name_width = points
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for p in points {
        let len = if max == 0 {
            0
        } else {
            ((p.millis as u128 * BAR_WIDTH as u128) / max as u128) as usize
        };
        let bar: String = std::iter::repeat(BAR_CHAR).take(len.max(1)).collect();
        out.push_str(&format!(
            "{:<name_width$}  {:<BAR_WIDTH$}  {}\n",
            p.name, bar, p.formatted_time
        ));
    }
    out
}
