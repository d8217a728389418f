use crate::constants::emit::PYTHON_INDENT;
use crate::data::{LabelingFunction, MatchMode};
use crate::emit::SourceEmitter;

/// Renders functions taking a record mapping and returning the label or `None`.
#[derive(Clone, Debug, Default)]
pub struct PythonEmitter {
    register_client: Option<String>,
}

impl PythonEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `<client>.register_lf(<name>)` after each function.
    pub fn with_register_client(mut self, client: impl Into<String>) -> Self {
        self.register_client = Some(client.into());
        self
    }
}

impl SourceEmitter for PythonEmitter {
    fn language(&self) -> &'static str {
        "python"
    }

    fn language_version(&self) -> &'static str {
        "3"
    }

    fn render(&self, function: &LabelingFunction) -> String {
        let i1 = PYTHON_INDENT;
        let i2 = PYTHON_INDENT.repeat(2);
        let mut lines = vec![
            format!("def {}(record):", function.name),
            format!("{i1}\"\"\"{}\"\"\"", docstring_body(&function.description)),
            format!("{i1}import re"),
            format!(
                "{i1}if re.search({}, record[{}].lower()):",
                search_expression(&function.pattern, function.mode),
                string_literal(&function.attribute)
            ),
            format!("{i2}return {}", string_literal(&function.prediction)),
        ];
        if let Some(client) = &self.register_client {
            lines.push(String::new());
            lines.push(format!("{client}.register_lf({})", function.name));
        }
        lines.join("\n")
    }
}

fn search_expression(pattern: &str, mode: MatchMode) -> String {
    match mode {
        MatchMode::Literal => format!("re.escape({})", string_literal(pattern)),
        MatchMode::Regex if is_raw_safe(pattern) => format!("r'{pattern}'"),
        MatchMode::Regex => string_literal(pattern),
    }
}

fn is_raw_safe(pattern: &str) -> bool {
    !pattern.contains(['\'', '\n', '\r']) && !pattern.ends_with('\\')
}

/// Single-quoted Python string literal.
fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}

fn docstring_body(description: &str) -> String {
    description.replace('\\', "\\\\").replace("\"\"\"", "\\\"\\\"\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn function(pattern: &str, mode: MatchMode) -> LabelingFunction {
        LabelingFunction {
            name: "regex_2".into(),
            attribute: "text".into(),
            pattern: pattern.into(),
            prediction: "A".into(),
            mode,
            description: "attribute 'text' somewhere contains term 'order'.".into(),
        }
    }

    #[test]
    fn renders_raw_regex_search() {
        let source = PythonEmitter::new().render(&function(" order ", MatchMode::Regex));
        assert_eq!(
            source,
            [
                "def regex_2(record):",
                "    \"\"\"attribute 'text' somewhere contains term 'order'.\"\"\"",
                "    import re",
                "    if re.search(r' order ', record['text'].lower()):",
                "        return 'A'",
            ]
            .join("\n")
        );
    }

    #[test]
    fn literal_mode_escapes_at_runtime() {
        let source = PythonEmitter::new().render(&function("refund (", MatchMode::Literal));
        assert!(source.contains("re.search(re.escape('refund ('), record['text'].lower())"));
    }

    #[test]
    fn quotes_fall_back_to_escaped_literal() {
        let source = PythonEmitter::new().render(&function("don't", MatchMode::Regex));
        assert!(source.contains("re.search('don\\'t',"));
    }

    #[test]
    fn register_client_appends_registration() {
        let source = PythonEmitter::new()
            .with_register_client("client")
            .render(&function("order", MatchMode::Regex));
        assert!(source.ends_with("\n\nclient.register_lf(regex_2)"));
    }
}
