use std::str::FromStr;

use crate::ranking::RankedEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "yaml"];
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            x => Err(format!("output format `{}` does not exist", x)),
        }
    }
}

/// Renders a ranked list; text output is one `stem (frequency)` line per entry.
pub fn render(entries: &[RankedEntry], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(entries.iter()
            .map(|entry| format!("{} ({})\n", entry.stem, entry.frequency))
            .collect()),
        OutputFormat::Json => serde_json::to_string_pretty(entries)
            .map(|mut s| { s.push('\n'); s })
            .map_err(|err| err.to_string()),
        OutputFormat::Yaml => serde_yaml::to_string(entries)
            .map_err(|err| err.to_string()),
    }
}
