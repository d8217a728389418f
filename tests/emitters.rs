use std::sync::Arc;

use autolf::{
    AutoLabeler, ExtractorConfig, LabelingFunction, MatchMode, PythonEmitter, Record,
    ScorerConfig, SimpleTokenizer, SourceEmitter, SynthesisConfig, TargetLanguage,
};

fn records() -> Vec<Record> {
    let mut records = Vec::new();
    for idx in 0..30 {
        records.push(Record::new(format!("invoice overdue {idx}"), "billing"));
        records.push(Record::new(format!("reset password now {idx}"), "account"));
    }
    records
}

fn config(language: TargetLanguage) -> SynthesisConfig {
    SynthesisConfig {
        extractor: ExtractorConfig::default().with_min_records(1),
        scorer: ScorerConfig::default()
            .with_attribute("message")
            .with_language(language),
    }
}

#[test]
fn python_source_reads_the_configured_attribute() {
    let labeler = AutoLabeler::new(SimpleTokenizer::new(), config(TargetLanguage::Python)).unwrap();
    let report = labeler.run(&records());
    assert!(!report.functions.is_empty());
    for function in &report.functions {
        assert!(
            function
                .generated_source
                .contains(&format!("def {}(record):", function.name()))
        );
        assert!(function.generated_source.contains("record['message'].lower()"));
        assert!(function.explanation.starts_with("attribute 'message'"));
    }
    let payloads = labeler.registration_payloads(&report);
    assert_eq!(payloads[0].programming_language_name, "python");
    assert_eq!(payloads[0].programming_language_version, "3");
    assert_eq!(payloads[0].source_code, report.functions[0].generated_source);
}

#[test]
fn rust_source_is_rendered_when_requested() {
    let labeler = AutoLabeler::new(SimpleTokenizer::new(), config(TargetLanguage::Rust)).unwrap();
    let report = labeler.run(&records());
    let first = &report.functions[0];
    assert!(
        first
            .generated_source
            .contains(&format!("pub fn {}(text: &str)", first.name()))
    );
    assert!(first.generated_source.contains("/// Reads attribute `message`."));
    assert_eq!(
        labeler.registration_payloads(&report)[0].programming_language_name,
        "rust"
    );
}

#[test]
fn function_names_are_unique_within_a_run() {
    let labeler = AutoLabeler::new(SimpleTokenizer::new(), config(TargetLanguage::Python)).unwrap();
    let report = labeler.run(&records());
    let mut names: Vec<&str> = report.functions.iter().map(|f| f.name()).collect();
    names.sort_by_key(|name| {
        name.trim_start_matches("regex_")
            .parse::<usize>()
            .expect("numeric suffix")
    });
    let expected: Vec<String> = (1..=names.len()).map(|idx| format!("regex_{idx}")).collect();
    assert_eq!(names, expected);
}

struct SqlEmitter;

impl SourceEmitter for SqlEmitter {
    fn language(&self) -> &'static str {
        "sql"
    }

    fn language_version(&self) -> &'static str {
        "ansi"
    }

    fn render(&self, function: &LabelingFunction) -> String {
        let operator = match function.mode {
            MatchMode::Regex => "~*",
            MatchMode::Literal => "ILIKE",
        };
        format!(
            "-- {}\nSELECT '{}' WHERE {} {} '{}'",
            function.name, function.prediction, function.attribute, operator, function.pattern
        )
    }
}

#[test]
fn custom_emitters_plug_into_the_scorer() {
    let labeler = AutoLabeler::new(SimpleTokenizer::new(), config(TargetLanguage::Python))
        .unwrap()
        .with_emitter(Arc::new(SqlEmitter));
    let report = labeler.run(&records());
    let first = &report.functions[0];
    assert!(first.generated_source.starts_with(&format!("-- {}", first.name())));
    assert!(first.generated_source.contains("WHERE message ~*"));
    assert_eq!(labeler.registration_payloads(&report)[0].programming_language_name, "sql");
}

#[test]
fn register_client_line_is_optional() {
    let function = LabelingFunction {
        name: "regex_7".into(),
        attribute: "text".into(),
        pattern: "overdue".into(),
        prediction: "billing".into(),
        mode: MatchMode::Regex,
        description: "attribute 'text' somewhere contains term 'overdue'.".into(),
    };
    let plain = PythonEmitter::new().render(&function);
    assert!(!plain.contains("register_lf"));
    let registered = PythonEmitter::new()
        .with_register_client("client")
        .render(&function);
    assert!(registered.starts_with(&plain));
    assert!(registered.ends_with("client.register_lf(regex_7)"));
}
