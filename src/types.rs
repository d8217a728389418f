/// Regex candidate string, possibly anchored with `^` / `$`.
/// Examples: `^order.*?number `, ` [0-9][0-9]$`
pub type Pattern = String;
/// Label assigned to a record (manual or noisy).
/// Examples: `positive`, `cancellation`
pub type Label = String;
/// Name of the record attribute a labeling function reads.
/// Example: `text`
pub type AttributeName = String;
/// Generated labeling function name.
/// Example: `regex_3`
pub type FunctionName = String;
/// Warning/log message text.
/// Example: `only 42 records to analyze; continue labeling before analysis`
pub type LogMessage = String;
