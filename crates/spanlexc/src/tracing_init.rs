use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber.
///
/// `RUST_LOG` selects what is logged; without it, `verbose` turns on debug
/// output for the spanlex crates and otherwise nothing is installed. Rule
/// spans from `named` rules render as an indented tree on stderr.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if verbose {
            EnvFilter::new("spanlex_grammar=debug,spanlex_ini=debug,spanlexc=debug")
        } else {
            return;
        };

        tracing_subscriber::registry()
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    });
}
