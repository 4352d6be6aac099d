//! Shared test support: logging setup and the sample genealogy.

use std::env;
use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::{GenealogyTree, Person};

static TEST_SETUP: Once = Once::new();

/// Sample genealogy in the on-disk CSV format.
///
/// ```text
///        Maya Leong
///        /        \
///  Matthew Hui   Curran Muhlberger
///       |          /        \
///   Amy Huang  Andrew Myers  Tomer Shamir
///       |
///   David Gries
/// ```
pub const SAMPLE_CSV: &str = "advisee,year,advisor
Maya Leong,1990,
Matthew Hui,1995,Maya Leong
Curran Muhlberger,1996,Maya Leong
Amy Huang,2000,Matthew Hui
Tomer Shamir,2003,Curran Muhlberger
Andrew Myers,2004,Curran Muhlberger
David Gries,2010,Amy Huang
";

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "trace");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let noisy_modules = [""];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Four-person tree: Maya Leong advising Matthew Hui and Curran Muhlberger, Matthew Hui advising Amy Huang.
pub fn small_tree() -> GenealogyTree {
    let maya = Person::new("Maya", "Leong");
    let hui = Person::new("Matthew", "Hui");
    let mut tree = GenealogyTree::new(maya.clone(), 1990);
    tree.insert(&maya, hui.clone(), 1995);
    tree.insert(&maya, Person::new("Curran", "Muhlberger"), 1996);
    tree.insert(&hui, Person::new("Amy", "Huang"), 2000);
    tree
}
