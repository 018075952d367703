use crate::{Conversion, ConversionOutput};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum JsonOutput {
    Text(String),
    Words(Vec<String>),
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonConversion {
    input: String,
    output: JsonOutput,
}

/// Render conversions in the requested format.
pub fn render(conversions: &[Conversion], colored_output: bool, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(conversions, colored_output),
        OutputFormat::Json => render_json(conversions),
    }
}

pub fn print_conversions(conversions: &[Conversion], colored_output: bool, format: &OutputFormat) {
    let rendered = render(conversions, colored_output, format);
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
}

fn render_text(conversions: &[Conversion], colored_output: bool) -> String {
    conversions
        .iter()
        .map(|conversion| {
            let output = match &conversion.output {
                ConversionOutput::Text(text) => text.clone(),
                ConversionOutput::Words(words) => words.join(" "),
            };

            if colored_output {
                format!(
                    "{} {} {}",
                    conversion.input.dimmed(),
                    "→".dimmed(),
                    output.green().bold()
                )
            } else {
                output
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_json(conversions: &[Conversion]) -> String {
    let json: Vec<JsonConversion> = conversions
        .iter()
        .map(|c| JsonConversion {
            input: c.input.clone(),
            output: match &c.output {
                ConversionOutput::Text(text) => JsonOutput::Text(text.clone()),
                ConversionOutput::Words(words) => JsonOutput::Words(words.clone()),
            },
        })
        .collect();

    // Plain strings and vectors always serialize
    serde_json::to_string_pretty(&json).unwrap_or_default()
}
