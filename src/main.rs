use std::{env, io, process};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use rcsv::cli::{default_registry, execute, output};
use rcsv::config::Settings;
use rcsv::exitcode;
use rcsv::infrastructure::di::ServiceContainer;

fn main() {
    let settings = Settings::load().unwrap_or_else(|e| {
        output::error(&mut io::stderr(), &e);
        process::exit(exitcode::FAILURE);
    });

    setup_logging(&settings.log_level);

    let registry = default_registry().unwrap_or_else(|e| {
        output::error(&mut io::stderr(), &e);
        process::exit(exitcode::FAILURE);
    });
    let services = ServiceContainer::new(settings);

    let argv: Vec<String> = env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let code = execute(
        &registry,
        &services,
        &argv,
        &mut io::stdout().lock(),
        &mut io::stderr(),
    );
    process::exit(code);
}

fn setup_logging(level: &str) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::WARN.into()));

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr) // Set writer first
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    tracing::debug!("logging initialised at {:?}", level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rcsv::util::testing;

    #[test]
    fn verify_registry() {
        testing::init_test_setup();
        let registry = default_registry().unwrap();
        assert!(registry.find("select").is_some());
        assert!(registry.find("dims").is_some());
    }
}
