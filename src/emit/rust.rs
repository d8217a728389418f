use crate::data::{LabelingFunction, MatchMode};
use crate::emit::SourceEmitter;

/// Renders functions over the attribute text, built on the `regex` crate.
#[derive(Clone, Debug, Default)]
pub struct RustEmitter;

impl RustEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl SourceEmitter for RustEmitter {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn language_version(&self) -> &'static str {
        "2024"
    }

    fn render(&self, function: &LabelingFunction) -> String {
        let pattern = match function.mode {
            MatchMode::Regex => format!("{:?}", function.pattern),
            MatchMode::Literal => format!("&regex::escape({:?})", function.pattern),
        };
        let mut lines: Vec<String> = function
            .description
            .lines()
            .map(|line| format!("/// {line}"))
            .collect();
        lines.push(format!(
            "/// Reads attribute `{}`.",
            function.attribute.replace('`', "'")
        ));
        lines.extend([
            format!("pub fn {}(text: &str) -> Option<&'static str> {{", function.name),
            format!("    let pattern = regex::RegexBuilder::new({pattern})"),
            "        .case_insensitive(true)".to_string(),
            "        .build()".to_string(),
            "        .ok()?;".to_string(),
            format!(
                "    pattern.is_match(&text.to_lowercase()).then_some({:?})",
                function.prediction
            ),
            "}".to_string(),
        ]);
        lines.join("\n")
    }
}
