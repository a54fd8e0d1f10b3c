//! Command registry and dispatch
//!
//! The registry is built once, before dispatch, and only read afterwards.
//! Registration order is the order of the usage listing and of alias lookup.

use std::io::Write;

use itertools::Itertools;
use tracing::debug;

use crate::cli::error::{CliError, CliResult};
use crate::infrastructure::di::ServiceContainer;

/// Reserved token that prints the usage listing.
pub const HELP_TOKEN: &str = "help";

/// A subcommand: name, aliases, description and how to run it.
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    fn description(&self) -> &'static str;

    /// Run with the arguments following the subcommand token.
    fn run(
        &self,
        services: &ServiceContainer,
        args: &[String],
        out: &mut dyn Write,
    ) -> CliResult<()>;

    fn matches(&self, token: &str) -> bool {
        self.name() == token || self.aliases().iter().any(|alias| *alias == token)
    }
}

/// What an argument vector asks for.
pub enum Invocation<'r, 'a> {
    /// Print the usage listing.
    Help,
    /// Run `command` with the remaining arguments.
    Run {
        command: &'r dyn Command,
        args: &'a [String],
    },
}

/// Ordered set of commands.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command. Names must be unique.
    ///
    /// Aliases are not checked: on collision the earlier command wins.
    pub fn register(&mut self, command: impl Command + 'static) -> CliResult<()> {
        if self.commands.iter().any(|c| c.name() == command.name()) {
            return Err(CliError::DuplicateCommand(command.name().to_string()));
        }
        self.commands.push(Box::new(command));
        Ok(())
    }

    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|c| c.as_ref())
    }

    /// First command whose name or alias equals `token`.
    pub fn find(&self, token: &str) -> Option<&dyn Command> {
        self.commands().find(|c| c.matches(token))
    }

    /// Resolve `argv` (program name excluded) to an invocation.
    pub fn resolve<'a>(&self, argv: &'a [String]) -> CliResult<Invocation<'_, 'a>> {
        let (token, args) = argv.split_first().ok_or(CliError::MissingCommand)?;
        if token == HELP_TOKEN {
            return Ok(Invocation::Help);
        }
        let command = self
            .find(token)
            .ok_or_else(|| CliError::UnknownCommand(token.clone()))?;
        debug!("dispatching {:?} to {}", token, command.name());
        Ok(Invocation::Run { command, args })
    }

    /// Listing of every command with aliases and description.
    pub fn usage(&self) -> String {
        let mut usage = String::from("Usage:\n  Valid subcommands are:\n");
        for command in self.commands() {
            usage.push_str(&usage_for(command));
        }
        usage.push_str("Run `rcsv <subcommand> --help` for subcommand flags.");
        usage
    }
}

fn usage_for(command: &dyn Command) -> String {
    let mut line = format!("  - {}", command.name());
    match command.aliases() {
        [] => {}
        [alias] => line.push_str(&format!(" (alias: {})", alias)),
        aliases => line.push_str(&format!(" (aliases: {})", aliases.iter().join(", "))),
    }
    line.push_str(&format!("\n      {}\n", command.description()));
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    struct Echo {
        name: &'static str,
        aliases: &'static [&'static str],
    }

    impl Command for Echo {
        fn name(&self) -> &'static str {
            self.name
        }

        fn aliases(&self) -> &'static [&'static str] {
            self.aliases
        }

        fn description(&self) -> &'static str {
            "Echo arguments."
        }

        fn run(
            &self,
            _services: &ServiceContainer,
            args: &[String],
            out: &mut dyn Write,
        ) -> CliResult<()> {
            writeln!(out, "{}:{}", self.name, args.join(" "))
                .map_err(|e| CliError::Usage(e.to_string()))
        }
    }

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry
            .register(Echo {
                name: "first",
                aliases: &["f", "shared"],
            })
            .unwrap();
        registry
            .register(Echo {
                name: "second",
                aliases: &["shared"],
            })
            .unwrap();
        registry
            .register(Echo {
                name: "third",
                aliases: &[],
            })
            .unwrap();
        registry
    }

    fn argv(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_usage_lists_commands_in_registration_order() {
        let usage = registry().usage();
        let expected = "Usage:\n  Valid subcommands are:\n\
                        \x20 - first (aliases: f, shared)\n      Echo arguments.\n\
                        \x20 - second (alias: shared)\n      Echo arguments.\n\
                        \x20 - third\n      Echo arguments.\n";
        assert!(usage.starts_with(expected), "{usage}");
    }

    #[test]
    fn test_alias_collision_resolves_to_first_registered() {
        assert_eq!(registry().find("shared").unwrap().name(), "first");
    }

    #[test]
    fn test_resolve_passes_tail_arguments() {
        let registry = registry();
        let argv = argv(&["f", "-c", "1"]);
        match registry.resolve(&argv).unwrap() {
            Invocation::Run { command, args } => {
                assert_eq!(command.name(), "first");
                assert_eq!(args, &argv[1..]);

                let services = ServiceContainer::new(Settings::default());
                let mut out = Vec::new();
                command.run(&services, args, &mut out).unwrap();
                assert_eq!(String::from_utf8(out).unwrap(), "first:-c 1\n");
            }
            Invocation::Help => panic!("expected a command"),
        }
    }

    #[test]
    fn test_resolve_help_missing_and_unknown() {
        let registry = registry();
        assert!(matches!(
            registry.resolve(&argv(&["help"])),
            Ok(Invocation::Help)
        ));
        assert!(matches!(
            registry.resolve(&[]),
            Err(CliError::MissingCommand)
        ));
        assert!(matches!(
            registry.resolve(&argv(&["nope"])),
            Err(CliError::UnknownCommand(name)) if name == "nope"
        ));
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut registry = registry();
        let err = registry
            .register(Echo {
                name: "third",
                aliases: &[],
            })
            .unwrap_err();
        assert!(matches!(err, CliError::DuplicateCommand(name) if name == "third"));
    }
}
