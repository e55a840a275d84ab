//! SVG output for duty timelines.
//!
//! `svg_path_d` stringifies drawing instructions into a `path` `d`
//! attribute; `log_sheet_svg` wraps one day's path in a complete sheet
//! with lane labels and grid lines.

use crate::core::calculator::timeline::{PathCommand, TimelineDomain, timeline_path};
use crate::errors::AppResult;
use crate::models::daily_log::DailyLog;
use crate::models::duty_status::DutyStatus;
use crate::models::status_change::StatusChange;
use std::fmt;

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo { x, y } => write!(f, "M {},{}", x, y),
            PathCommand::LineTo { x, y } => write!(f, "L {},{}", x, y),
        }
    }
}

pub fn svg_path_d(commands: &[PathCommand]) -> String {
    commands
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `d` attribute for one day of status changes; empty when there are none.
pub fn generate_timeline_path(
    events: &[StatusChange],
    domain: &TimelineDomain,
) -> AppResult<String> {
    Ok(svg_path_d(&timeline_path(events, domain)?))
}

/// Geometry of a full log sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetLayout {
    pub viewbox_width: f64,
    pub label_width: f64,
    pub row_height: f64,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            viewbox_width: 1000.0,
            label_width: 80.0,
            row_height: 50.0,
        }
    }
}

impl SheetLayout {
    pub fn height(&self) -> f64 {
        self.row_height * 4.0 + 20.0
    }

    /// Domain the duty path is drawn in (right of the labels).
    pub fn domain(&self) -> TimelineDomain {
        TimelineDomain::new(self.viewbox_width - self.label_width, self.row_height)
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn log_sheet_svg(log: &DailyLog, layout: &SheetLayout) -> AppResult<String> {
    let d = generate_timeline_path(&log.status_changes, &layout.domain())?;
    let height = layout.height();

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100%\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        height, layout.viewbox_width, height
    ));
    out.push_str(&format!(
        "  <title>Day log #{} on {}</title>\n",
        xml_escape(&log.id.to_string()),
        log.date_str()
    ));

    // Labels
    for status in DutyStatus::LANES {
        let y = status.lane_center(layout.row_height);
        out.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"end\" font-size=\"14\" fill=\"#333\">{}</text>\n",
            layout.label_width - 10.0,
            y + 5.0,
            status.code()
        ));
    }

    // Grid
    for status in DutyStatus::LANES {
        let y = status.lane_center(layout.row_height);
        out.push_str(&format!(
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#ccc\" stroke-dasharray=\"5,5\"/>\n",
            layout.label_width, y, layout.viewbox_width, y
        ));
    }

    // Duty path
    out.push_str(&format!(
        "  <path d=\"{}\" fill=\"none\" stroke=\"black\" stroke-width=\"4\" stroke-linecap=\"butt\" stroke-linejoin=\"miter\" transform=\"translate({},0)\"/>\n",
        d, layout.label_width
    ));
    out.push_str("</svg>\n");

    Ok(out)
}
