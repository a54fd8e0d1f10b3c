//! Per-subcommand argument definitions using clap
//!
//! The subcommand token is resolved by the registry; each command then parses
//! only its own tail arguments, hence `no_binary_name`.

use clap::Parser;

/// Extract specified columns
#[derive(Parser, Debug)]
#[command(name = "select", no_binary_name = true)]
pub struct SelectArgs {
    /// Columns to select: names, 1-based indices or ranges (e.g. id,3,5-7)
    #[arg(short = 'c', long)]
    pub columns: Option<String>,

    /// Drop the specified columns instead of keeping them
    #[arg(long)]
    pub exclude: bool,

    /// Input file (omit or "-" for stdin)
    pub files: Vec<String>,
}

/// Print the header names with their 1-based positions
#[derive(Parser, Debug)]
#[command(name = "headers", no_binary_name = true)]
pub struct HeadersArgs {
    /// Input file (omit or "-" for stdin)
    pub files: Vec<String>,
}

/// Count data rows and columns
#[derive(Parser, Debug)]
#[command(name = "dimensions", no_binary_name = true)]
pub struct DimensionsArgs {
    /// Print the counts as CSV
    #[arg(long)]
    pub csv: bool,

    /// Input file (omit or "-" for stdin)
    pub files: Vec<String>,
}

/// Rename header columns
#[derive(Parser, Debug)]
#[command(name = "rename", no_binary_name = true)]
pub struct RenameArgs {
    /// Columns to rename: names, 1-based indices or ranges
    #[arg(short = 'c', long)]
    pub columns: Option<String>,

    /// New names, comma-separated, one per selected column
    #[arg(long)]
    pub names: Option<String>,

    /// Input file (omit or "-" for stdin)
    pub files: Vec<String>,
}

/// Change the field delimiter
#[derive(Parser, Debug)]
#[command(name = "delimiter", no_binary_name = true)]
pub struct DelimiterArgs {
    /// Input delimiter (default: configured delimiter)
    #[arg(short = 'i', long)]
    pub input: Option<String>,

    /// Output delimiter (default: configured output delimiter)
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Input file (omit or "-" for stdin)
    pub files: Vec<String>,
}

/// Convert to tab-delimited output
#[derive(Parser, Debug)]
#[command(name = "tsv", no_binary_name = true)]
pub struct TsvArgs {
    /// Input file (omit or "-" for stdin)
    pub files: Vec<String>,
}

/// Keep the header and the first rows
#[derive(Parser, Debug)]
#[command(name = "head", no_binary_name = true)]
pub struct HeadArgs {
    /// Number of data rows to keep
    #[arg(short = 'n', long = "num-rows", default_value_t = 10)]
    pub num_rows: u64,

    /// Input file (omit or "-" for stdin)
    pub files: Vec<String>,
}

/// Drop leading rows, header included
#[derive(Parser, Debug)]
#[command(name = "behead", no_binary_name = true)]
pub struct BeheadArgs {
    /// Number of rows to drop
    #[arg(short = 'n', long = "num-rows", default_value_t = 1)]
    pub num_rows: u64,

    /// Input file (omit or "-" for stdin)
    pub files: Vec<String>,
}

/// Show the effective configuration
#[derive(Parser, Debug)]
#[command(name = "config", no_binary_name = true)]
pub struct ConfigArgs {
    /// Print only the global config file path
    #[arg(long)]
    pub path: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_args() {
        SelectArgs::command().debug_assert();
        HeadersArgs::command().debug_assert();
        DimensionsArgs::command().debug_assert();
        RenameArgs::command().debug_assert();
        DelimiterArgs::command().debug_assert();
        TsvArgs::command().debug_assert();
        HeadArgs::command().debug_assert();
        BeheadArgs::command().debug_assert();
        ConfigArgs::command().debug_assert();
    }

    #[test]
    fn test_select_args_short_and_long() {
        let args = SelectArgs::try_parse_from(["-c", "1,2", "--exclude", "in.csv"]).unwrap();
        assert_eq!(args.columns.as_deref(), Some("1,2"));
        assert!(args.exclude);
        assert_eq!(args.files, vec!["in.csv"]);

        let args = SelectArgs::try_parse_from(["--columns", "name"]).unwrap();
        assert_eq!(args.columns.as_deref(), Some("name"));
        assert!(!args.exclude);
        assert!(args.files.is_empty());
    }

    #[test]
    fn test_dash_is_a_positional_input() {
        let args = TsvArgs::try_parse_from(["-"]).unwrap();
        assert_eq!(args.files, vec!["-"]);
    }

    #[test]
    fn test_head_default_rows() {
        let args = HeadArgs::try_parse_from(Vec::<String>::new()).unwrap();
        assert_eq!(args.num_rows, 10);
    }
}
