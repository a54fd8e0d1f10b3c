//! Subcommand implementations and top-level execution

use std::io::{self, Write};

use clap::error::ErrorKind;
use clap::Parser;
use tracing::{debug, instrument};

use crate::application::services::{
    behead_rows, copy_rows, count_dimensions, head_rows, list_headers, rename_columns,
    select_columns,
};
use crate::application::ApplicationError;
use crate::cli::args::{
    BeheadArgs, ConfigArgs, DelimiterArgs, DimensionsArgs, HeadArgs, HeadersArgs, RenameArgs,
    SelectArgs, TsvArgs,
};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::registry::{Command, CommandRegistry, Invocation};
use crate::config::{global_config_path, parse_delimiter};
use crate::domain::{parse_column_spec, ColumnSelector, ProjectionMode, Row};
use crate::exitcode;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::RowWriter;
use crate::infrastructure::InfraError;

/// Build the registry of every subcommand, in listing order.
pub fn default_registry() -> CliResult<CommandRegistry> {
    let mut registry = CommandRegistry::new();
    registry.register(HeadersCommand)?;
    registry.register(DimensionsCommand)?;
    registry.register(RenameCommand)?;
    registry.register(DelimiterCommand)?;
    registry.register(TsvCommand)?;
    registry.register(HeadCommand)?;
    registry.register(BeheadCommand)?;
    registry.register(SelectCommand)?;
    registry.register(ConfigCommand)?;
    Ok(registry)
}

/// Run one invocation and return the process exit code.
///
/// Data goes to `out`; usage, help and error diagnostics go to `err`.
pub fn execute(
    registry: &CommandRegistry,
    services: &ServiceContainer,
    argv: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32 {
    let result = registry.resolve(argv).and_then(|invocation| match invocation {
        Invocation::Help => {
            output::plain(err, &registry.usage());
            Ok(())
        }
        Invocation::Run { command, args } => command.run(services, args, out),
    });

    match result {
        Ok(()) => exitcode::OK,
        Err(CliError::Help(text)) => {
            output::plain(err, text.trim_end());
            exitcode::OK
        }
        Err(e) => {
            debug!("command failed: {:?}", e);
            output::error(err, &e);
            if e.shows_usage() {
                output::plain(err, &registry.usage());
            }
            e.exit_code()
        }
    }
}

/// Parse tail arguments, turning clap errors into CLI errors.
fn parse_args<T: Parser>(args: &[String]) -> CliResult<T> {
    T::try_parse_from(args).map_err(|e| {
        let rendered = e.render().to_string();
        match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => CliError::Help(rendered),
            _ => CliError::Usage(
                rendered
                    .trim_start_matches("error: ")
                    .trim_end()
                    .to_string(),
            ),
        }
    })
}

/// A column spec flag that must be present and non-empty.
fn required_spec(value: Option<&str>, flag: &str) -> CliResult<Vec<ColumnSelector>> {
    match value {
        None | Some("") => Err(CliError::Usage(format!(
            "missing required argument --{}",
            flag
        ))),
        Some(spec) => Ok(parse_column_spec(spec)?),
    }
}

fn delimiter_arg(value: Option<&str>, default: u8) -> CliResult<u8> {
    match value {
        None => Ok(default),
        Some(v) => match parse_delimiter(v) {
            Ok(c) => Ok(c as u8),
            Err(ApplicationError::Config { message }) => Err(CliError::Usage(message)),
            Err(e) => Err(e.into()),
        },
    }
}

fn write_failed(e: io::Error) -> CliError {
    InfraError::io("write output", e).into()
}

// ============================================================
// COMMANDS
// ============================================================

pub struct SelectCommand;

impl Command for SelectCommand {
    fn name(&self) -> &'static str {
        "select"
    }

    fn description(&self) -> &'static str {
        "Extract specified columns."
    }

    #[instrument(name = "select", skip_all)]
    fn run(
        &self,
        services: &ServiceContainer,
        args: &[String],
        out: &mut dyn Write,
    ) -> CliResult<()> {
        let args: SelectArgs = parse_args(args)?;
        let selectors = required_spec(args.columns.as_deref(), "columns")?;
        let mode = if args.exclude {
            ProjectionMode::Exclude
        } else {
            ProjectionMode::Include
        };

        let mut reader = services.open_input(&args.files)?;
        let mut writer = services.writer(out);
        let summary = select_columns(&mut reader, &mut writer, &selectors, mode)?;
        debug!("select wrote {} rows", summary.rows_written);
        Ok(())
    }
}

pub struct HeadersCommand;

impl Command for HeadersCommand {
    fn name(&self) -> &'static str {
        "headers"
    }

    fn description(&self) -> &'static str {
        "View the headers from a CSV file."
    }

    fn run(
        &self,
        services: &ServiceContainer,
        args: &[String],
        out: &mut dyn Write,
    ) -> CliResult<()> {
        let args: HeadersArgs = parse_args(args)?;
        let mut reader = services.open_input(&args.files)?;
        for (i, name) in list_headers(&mut reader)?.iter().enumerate() {
            writeln!(out, "{}: {}", i + 1, name).map_err(write_failed)?;
        }
        Ok(())
    }
}

pub struct DimensionsCommand;

impl Command for DimensionsCommand {
    fn name(&self) -> &'static str {
        "dimensions"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["dims"]
    }

    fn description(&self) -> &'static str {
        "Get the dimensions of a CSV file."
    }

    fn run(
        &self,
        services: &ServiceContainer,
        args: &[String],
        out: &mut dyn Write,
    ) -> CliResult<()> {
        let args: DimensionsArgs = parse_args(args)?;
        let mut reader = services.open_input(&args.files)?;
        let dims = count_dimensions(&mut reader)?;

        if args.csv {
            let mut writer = services.writer(out);
            writer.write_row(&Row::from(vec!["Type", "Count"]))?;
            writer.write_row(&Row::from(vec!["Rows".to_string(), dims.rows.to_string()]))?;
            writer.write_row(&Row::from(vec![
                "Columns".to_string(),
                dims.columns.to_string(),
            ]))?;
            return Ok(());
        }
        writeln!(out, "Dimensions:").map_err(write_failed)?;
        output::detail(out, "Rows", &dims.rows).map_err(write_failed)?;
        output::detail(out, "Columns", &dims.columns).map_err(write_failed)?;
        Ok(())
    }
}

pub struct RenameCommand;

impl Command for RenameCommand {
    fn name(&self) -> &'static str {
        "rename"
    }

    fn description(&self) -> &'static str {
        "Rename the headers of a CSV file."
    }

    fn run(
        &self,
        services: &ServiceContainer,
        args: &[String],
        out: &mut dyn Write,
    ) -> CliResult<()> {
        let args: RenameArgs = parse_args(args)?;
        let selectors = required_spec(args.columns.as_deref(), "columns")?;
        let names: Vec<String> = match args.names.as_deref() {
            None | Some("") => {
                return Err(CliError::Usage("missing required argument --names".into()))
            }
            Some(names) => names.split(',').map(String::from).collect(),
        };

        let mut reader = services.open_input(&args.files)?;
        let mut writer = services.writer(out);
        rename_columns(&mut reader, &mut writer, &selectors, &names)?;
        Ok(())
    }
}

pub struct DelimiterCommand;

impl Command for DelimiterCommand {
    fn name(&self) -> &'static str {
        "delimiter"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["delim"]
    }

    fn description(&self) -> &'static str {
        "Change the delimiter being used for a CSV."
    }

    fn run(
        &self,
        services: &ServiceContainer,
        args: &[String],
        out: &mut dyn Write,
    ) -> CliResult<()> {
        let args: DelimiterArgs = parse_args(args)?;
        let settings = &services.settings;
        let input = delimiter_arg(args.input.as_deref(), settings.input_delimiter())?;
        let output = delimiter_arg(args.output.as_deref(), settings.output_delimiter())?;

        let mut reader = services.open_input_with(&args.files, input)?;
        let mut writer = services.writer_with(out, output);
        copy_rows(&mut reader, &mut writer)?;
        Ok(())
    }
}

pub struct TsvCommand;

impl Command for TsvCommand {
    fn name(&self) -> &'static str {
        "tsv"
    }

    fn description(&self) -> &'static str {
        "Transform a CSV into a TSV."
    }

    fn run(
        &self,
        services: &ServiceContainer,
        args: &[String],
        out: &mut dyn Write,
    ) -> CliResult<()> {
        let args: TsvArgs = parse_args(args)?;
        let mut reader = services.open_input(&args.files)?;
        let mut writer = services.writer_with(out, b'\t');
        copy_rows(&mut reader, &mut writer)?;
        Ok(())
    }
}

pub struct HeadCommand;

impl Command for HeadCommand {
    fn name(&self) -> &'static str {
        "head"
    }

    fn description(&self) -> &'static str {
        "Extract the first N rows from a CSV."
    }

    fn run(
        &self,
        services: &ServiceContainer,
        args: &[String],
        out: &mut dyn Write,
    ) -> CliResult<()> {
        let args: HeadArgs = parse_args(args)?;
        let mut reader = services.open_input(&args.files)?;
        let mut writer = services.writer(out);
        head_rows(&mut reader, &mut writer, args.num_rows)?;
        Ok(())
    }
}

pub struct BeheadCommand;

impl Command for BeheadCommand {
    fn name(&self) -> &'static str {
        "behead"
    }

    fn description(&self) -> &'static str {
        "Remove header row(s) from a CSV."
    }

    fn run(
        &self,
        services: &ServiceContainer,
        args: &[String],
        out: &mut dyn Write,
    ) -> CliResult<()> {
        let args: BeheadArgs = parse_args(args)?;
        let mut reader = services.open_input(&args.files)?;
        let mut writer = services.writer(out);
        behead_rows(&mut reader, &mut writer, args.num_rows)?;
        Ok(())
    }
}

pub struct ConfigCommand;

impl Command for ConfigCommand {
    fn name(&self) -> &'static str {
        "config"
    }

    fn description(&self) -> &'static str {
        "Show the effective configuration."
    }

    fn run(
        &self,
        services: &ServiceContainer,
        args: &[String],
        out: &mut dyn Write,
    ) -> CliResult<()> {
        let args: ConfigArgs = parse_args(args)?;
        if args.path {
            let written = match global_config_path() {
                Some(path) => writeln!(out, "{}", path.display()),
                None => writeln!(out, "(no config directory)"),
            };
            written.map_err(write_failed)?;
            return Ok(());
        }
        let toml = services.settings.to_toml()?;
        write!(out, "{}", toml).map_err(write_failed)?;
        Ok(())
    }
}
