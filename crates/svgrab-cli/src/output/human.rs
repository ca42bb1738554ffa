//! Human-readable output formatter with colors and styling.

use super::formatter::ExtractSummary;
use super::formatter::ImageEntry;
use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_extract_result(&self, summary: &ExtractSummary) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let headline = if summary.archive {
            format!("Archive created: {}", summary.output.display())
        } else {
            format!("Image written: {}", summary.output.display())
        };
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {headline}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(&headline);
        }

        let _ = self
            .term
            .write_line(&format!("  Images written: {}", summary.images_written));
        let _ = self.term.write_line(&format!(
            "  Output size:    {}",
            Self::format_size(summary.bytes_written)
        ));

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Input:          {}", summary.input));
        }

        Ok(())
    }

    fn format_list_result(&self, entries: &[ImageEntry], human_readable: bool) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if entries.is_empty() {
            let _ = self.term.write_line("No embedded images found");
            return Ok(());
        }

        let _ = self
            .term
            .write_line(&format!("{:<6} {:<16} {:>10}  FILENAME", "INDEX", "FORMAT", "SIZE"));
        for entry in entries {
            let size = if human_readable {
                Self::format_size(entry.size)
            } else {
                entry.size.to_string()
            };
            let _ = self.term.write_line(&format!(
                "{:<6} {:<16} {:>10}  {}",
                entry.index, entry.format, size, entry.filename
            ));
            if self.verbose {
                let _ = self.term.write_line(&format!("       id: {}", entry.id));
            }
        }

        let _ = self
            .term
            .write_line(&format!("\n{} embedded image(s)", entries.len()));

        Ok(())
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("warning:").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("warning: {message}"));
        }
    }
}
