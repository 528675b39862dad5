//! Rendering of exceptions for people and tools.
//!
//! Text output follows the usual diagnostic header shape:
//!
//! ```text
//! -- exception: WrongType [2]
//!   --> app::parser::parse
//! ```
//!
//! JSON output is the serialized [`Exception`], with the origin shortened when
//! [`OriginStyle::Short`] is selected.

mod colors;
mod config;

pub use colors::Colors;
pub use config::{FORMAT_ENV, ORIGIN_ENV, OriginStyle, ReportConfig, ReportFormat};

use crate::exception::{Exception, origin};

pub fn render(exception: &Exception, config: &ReportConfig) -> String {
    match config.format {
        ReportFormat::Text => render_text(exception, config),
        ReportFormat::Json => render_json(exception, config),
    }
}

fn display_origin(exception: &Exception, style: OriginStyle) -> Option<&'static str> {
    let path = exception.origin()?;
    Some(match style {
        OriginStyle::Full => path,
        OriginStyle::Short => origin::last_segment(path),
    })
}

fn render_text(exception: &Exception, config: &ReportConfig) -> String {
    let colors = Colors::new(config.color);
    let mut out = String::new();

    // Header: -- exception: WrongType [2]
    out.push_str(colors.yellow);
    out.push_str(&format!(
        "-- exception: {} [{}]",
        exception.message().unwrap_or("<unset>"),
        exception.code()
    ));
    out.push_str(colors.reset);

    if let Some(origin) = display_origin(exception, config.origin) {
        out.push('\n');
        out.push_str(&format!("  {}-->{} {}", colors.blue, colors.reset, origin));
    }

    out
}

fn render_json(exception: &Exception, config: &ReportConfig) -> String {
    let mut value = match serde_json::to_value(exception) {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(%err, "failed to serialize exception");
            return String::new();
        }
    };

    if config.origin == OriginStyle::Short {
        value["origin"] = display_origin(exception, config.origin).into();
    }

    value.to_string()
}
