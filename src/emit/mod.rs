//! Rendering structured labeling functions as source text.
//!
//! Scoring decides what a function does (`LabelingFunction`); an emitter
//! decides how it reads in a target language.

use std::sync::Arc;

use crate::config::TargetLanguage;
use crate::constants::emit::FUNCTION_PREFIX;
use crate::data::LabelingFunction;
use crate::types::FunctionName;

/// Python renderer.
pub mod python;
/// Rust renderer.
pub mod rust;

pub use python::PythonEmitter;
pub use rust::RustEmitter;

/// Renders a `LabelingFunction` as source text in one language.
pub trait SourceEmitter: Send + Sync {
    /// Language name reported in registration payloads.
    fn language(&self) -> &'static str;
    /// Language version the rendered source targets.
    fn language_version(&self) -> &'static str;
    /// Render the function definition.
    fn render(&self, function: &LabelingFunction) -> String;
}

/// Default emitter for `language`.
pub fn emitter_for(language: TargetLanguage) -> Arc<dyn SourceEmitter> {
    match language {
        TargetLanguage::Python => Arc::new(PythonEmitter::new()),
        TargetLanguage::Rust => Arc::new(RustEmitter::new()),
    }
}

/// Name of the `index`-th generated function (1-based).
pub fn function_name(index: usize) -> FunctionName {
    format!("{FUNCTION_PREFIX}{index}")
}
