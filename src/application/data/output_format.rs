use clap::ValueEnum;

/// How the list of matches is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// One path per line
    #[default]
    Lines,
    /// A single bracketed list of quoted paths
    List,
}
