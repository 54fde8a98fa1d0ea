//! Renderer module
//!
//! Renders a ResultSet to jsonl, json or markdown

use crate::core::model::{Kind, ResultSet};
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for result sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a result set to a string
    pub fn render(&self, result_set: &ResultSet) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(result_set),
            OutputFormat::Json => self.render_json(result_set),
            OutputFormat::Markdown => self.render_markdown(result_set),
        }
    }

    /// Render to a writer, followed by a newline when there is output
    pub fn render_to<W: Write>(
        &self,
        result_set: &ResultSet,
        mut writer: W,
    ) -> std::io::Result<()> {
        let output = self.render(result_set);
        if output.is_empty() {
            return Ok(());
        }
        writer.write_all(output.as_bytes())?;
        writer.write_all(b"\n")
    }

    /// One JSON object per line
    fn render_jsonl(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    fn render_json(&self, result_set: &ResultSet) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    fn render_markdown(&self, result_set: &ResultSet) -> String {
        let mut output = String::new();

        let (errors, files): (Vec<_>, Vec<_>) = result_set
            .items
            .iter()
            .partition(|item| item.kind == Kind::Error);

        if !errors.is_empty() {
            output.push_str("## Errors\n\n");
            for item in errors {
                for error in &item.errors {
                    match &item.path {
                        Some(path) => output.push_str(&format!(
                            "- `{}` **{}**: {}\n",
                            path, error.code, error.message
                        )),
                        None => {
                            output.push_str(&format!("- **{}**: {}\n", error.code, error.message))
                        }
                    }
                }
            }
            output.push('\n');
        }

        if !files.is_empty() {
            output.push_str("## Files\n\n");
            for item in files {
                let Some(path) = &item.path else { continue };
                output.push_str(&format!("- `{}`", path));
                match (&item.range, item.meta.truncated) {
                    (Some(range), true) => output.push_str(&format!(
                        " truncated at byte {} ({} bytes removed)",
                        range.start,
                        range.len()
                    )),
                    _ => output.push_str(" unchanged"),
                }
                if let Some(size) = item.meta.size {
                    output.push_str(&format!(", {} bytes", size));
                }
                output.push('\n');
            }
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{ByteRange, Meta, ResultItem, StubtrimError};

    fn truncated_item() -> ResultItem {
        ResultItem::file("foo_grpc.pb.go")
            .with_range(ByteRange::new(4, 34))
            .with_meta(Meta {
                size: Some(4),
                hash: None,
                truncated: true,
            })
    }

    #[test]
    fn test_render_jsonl() {
        let mut result_set = ResultSet::new();
        result_set.push(truncated_item());
        result_set.push(ResultItem::file("bar_grpc.pb.go"));

        let renderer = Renderer::new(OutputFormat::Jsonl);
        let output = renderer.render(&result_set);

        assert!(output.contains("foo_grpc.pb.go"));
        assert!(output.contains("bar_grpc.pb.go"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_render_json() {
        let mut result_set = ResultSet::new();
        result_set.push(truncated_item());

        let renderer = Renderer::new(OutputFormat::Json);
        let output = renderer.render(&result_set);

        assert!(output.starts_with('['));
        assert!(output.ends_with(']'));
    }

    #[test]
    fn test_render_json_pretty() {
        let mut result_set = ResultSet::new();
        result_set.push(truncated_item());

        let renderer = Renderer::with_config(RenderConfig::with_pretty(OutputFormat::Json, true));
        let output = renderer.render(&result_set);

        assert!(output.contains("  "));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!(
            "markdown".parse::<OutputFormat>().unwrap(),
            OutputFormat::Markdown
        );
        let result = "raw".parse::<OutputFormat>();
        assert!(result.unwrap_err().contains("Unknown format"));
    }

    #[test]
    fn test_render_markdown() {
        let mut result_set = ResultSet::new();
        result_set.push(truncated_item());
        result_set.push(ResultItem::file("baz_grpc.pb.go"));
        result_set.push(
            ResultItem::error(StubtrimError::new("IO_ERROR", "permission denied"))
                .with_path("qux_grpc.pb.go"),
        );

        let renderer = Renderer::new(OutputFormat::Markdown);
        let output = renderer.render(&result_set);

        assert!(output.contains("## Errors"));
        assert!(output.contains("`qux_grpc.pb.go` **IO_ERROR**: permission denied"));
        assert!(output.contains("## Files"));
        assert!(output.contains("`foo_grpc.pb.go` truncated at byte 4 (30 bytes removed), 4 bytes"));
        assert!(output.contains("`baz_grpc.pb.go` unchanged"));
    }

    #[test]
    fn test_render_empty() {
        let result_set = ResultSet::new();
        assert!(Renderer::new(OutputFormat::Jsonl).render(&result_set).is_empty());
        assert!(Renderer::new(OutputFormat::Markdown).render(&result_set).is_empty());
        assert_eq!(Renderer::new(OutputFormat::Json).render(&result_set), "[]");

        let mut buffer = Vec::new();
        Renderer::new(OutputFormat::Jsonl)
            .render_to(&result_set, &mut buffer)
            .unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_render_to_writer() {
        let mut result_set = ResultSet::new();
        result_set.push(ResultItem::file("a_grpc.pb.go"));

        let mut buffer = Vec::new();
        Renderer::new(OutputFormat::Jsonl)
            .render_to(&result_set, &mut buffer)
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("a_grpc.pb.go"));
        assert!(output.ends_with('\n'));
    }
}
