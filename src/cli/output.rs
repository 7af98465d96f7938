use clap::ValueEnum;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// Machine-readable JSON
    Json,
}
