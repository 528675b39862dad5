use std::env;

/// Selects how the origin is printed: `full` or `short`.
pub const ORIGIN_ENV: &str = "ENUMSTR_ORIGIN";
/// Selects the output format: `text` or `json`.
pub const FORMAT_ENV: &str = "ENUMSTR_REPORT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OriginStyle {
    /// Full path of the raising function.
    #[default]
    Full,
    /// Last path segment only.
    Short,
}

impl OriginStyle {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "full" => Some(Self::Full),
            "short" => Some(Self::Short),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// How [`render`](super::render) prints an exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    pub color: bool,
    pub origin: OriginStyle,
    pub format: ReportFormat,
}

impl ReportConfig {
    /// Reads `NO_COLOR`, `ENUMSTR_ORIGIN` and `ENUMSTR_REPORT`.
    pub fn from_env() -> Self {
        Self {
            color: env::var_os("NO_COLOR").is_none(),
            origin: read_choice(ORIGIN_ENV, OriginStyle::parse),
            format: read_choice(FORMAT_ENV, ReportFormat::parse),
        }
    }

    /// Uncolored text with full origins, independent of the environment.
    pub fn plain() -> Self {
        Self {
            color: false,
            origin: OriginStyle::default(),
            format: ReportFormat::default(),
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_origin(mut self, origin: OriginStyle) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn read_choice<T: Default>(variable: &str, parse: fn(&str) -> Option<T>) -> T {
    let Ok(value) = env::var(variable) else {
        return T::default();
    };

    parse(value.trim()).unwrap_or_else(|| {
        tracing::warn!(variable, value = %value, "unrecognized report setting, using default");
        T::default()
    })
}
