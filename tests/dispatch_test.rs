//! Tests for command registry dispatch through `execute`

use std::sync::Arc;

use rcsv::cli::{default_registry, execute};
use rcsv::config::Settings;
use rcsv::infrastructure::di::ServiceContainer;
use rcsv::util::testing::MemoryInputOpener;

struct Outcome {
    code: i32,
    out: String,
    err: String,
}

fn run(argv: &[&str]) -> Outcome {
    let registry = default_registry().unwrap();
    let services = ServiceContainer::with_deps(
        Settings::default(),
        Arc::new(MemoryInputOpener::new().with_stdin("id,name\n1,ann\n2,bob\n3,cy\n")),
    );
    let argv: Vec<String> = argv.iter().map(|s| s.to_string()).collect();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = execute(&registry, &services, &argv, &mut out, &mut err);
    Outcome {
        code,
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
    }
}

#[test]
fn given_no_arguments_when_dispatching_then_usage_on_stderr_and_exit_1() {
    let outcome = run(&[]);

    assert_eq!(outcome.code, 1);
    assert!(outcome.out.is_empty());
    assert!(outcome.err.contains("must provide a valid subcommand"));
    assert!(outcome.err.contains("Valid subcommands are:"));
}

#[test]
fn given_help_when_dispatching_then_usage_on_stderr_and_exit_0() {
    let outcome = run(&["help"]);

    assert_eq!(outcome.code, 0);
    assert!(outcome.out.is_empty());
    assert!(outcome.err.starts_with("Usage:\n  Valid subcommands are:\n"));
    assert!(!outcome.err.contains("error"));
}

#[test]
fn given_unknown_subcommand_when_dispatching_then_error_and_usage() {
    let outcome = run(&["frobnicate"]);

    assert_eq!(outcome.code, 1);
    assert!(outcome.out.is_empty());
    assert!(outcome.err.contains("invalid subcommand \"frobnicate\""));
    assert!(outcome.err.contains("Valid subcommands are:"));
}

#[test]
fn given_usage_then_lists_registered_commands_with_aliases() {
    let usage = default_registry().unwrap().usage();

    assert!(usage.contains("  - dimensions (alias: dims)\n      Get the dimensions of a CSV file.\n"));
    assert!(usage.contains("  - delimiter (alias: delim)\n"));
    assert!(usage.contains("  - select\n      Extract specified columns.\n"));

    let headers_at = usage.find("- headers").unwrap();
    let select_at = usage.find("- select").unwrap();
    assert!(headers_at < select_at, "registration order must be kept");
}

#[test]
fn given_alias_when_dispatching_then_behaves_like_primary_name() {
    let by_name = run(&["dimensions", "--csv"]);
    let by_alias = run(&["dims", "--csv"]);

    assert_eq!(by_name.code, 0);
    assert_eq!(by_alias.code, by_name.code);
    assert_eq!(by_alias.out, by_name.out);
    assert_eq!(by_alias.err, by_name.err);
}

#[test]
fn given_subcommand_help_flag_when_dispatching_then_help_on_stderr_and_exit_0() {
    let outcome = run(&["select", "--help"]);

    assert_eq!(outcome.code, 0);
    assert!(outcome.out.is_empty());
    assert!(outcome.err.contains("--columns"));
    assert!(outcome.err.contains("--exclude"));
}

#[test]
fn given_unknown_flag_when_dispatching_then_usage_error_without_listing() {
    let outcome = run(&["select", "--bogus"]);

    assert_eq!(outcome.code, 1);
    assert!(outcome.out.is_empty());
    assert!(outcome.err.contains("--bogus"));
    assert!(!outcome.err.contains("Valid subcommands are:"));
}
