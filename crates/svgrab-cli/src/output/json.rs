//! JSON output formatter for machine-readable results.

use super::formatter::ExtractSummary;
use super::formatter::ImageEntry;
use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_extract_result(&self, summary: &ExtractSummary) -> Result<()> {
        let output = JsonOutput::success("extract", summary);
        Self::output(&output)
    }

    fn format_list_result(&self, entries: &[ImageEntry], _human_readable: bool) -> Result<()> {
        #[derive(Serialize)]
        struct ListOutput<'a> {
            count: usize,
            images: &'a [ImageEntry],
        }

        let data = ListOutput {
            count: entries.len(),
            images: entries,
        };

        let output = JsonOutput::success("list", data);
        Self::output(&output)
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_json_envelope_structure() {
        let entries = vec![ImageEntry {
            index: 0,
            format: "image/png".to_string(),
            size: 70,
            filename: "image-1.png".to_string(),
            id: "test".to_string(),
        }];

        let output = JsonOutput::success("list", &entries);
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"operation\":\"list\""));
        assert!(json.contains("\"status\":\"success\""));
        assert!(json.contains("\"image/png\""));
    }
}
