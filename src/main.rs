use adaptive_int_set::set::AdaptiveIntSet;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("adaptive_int_set=debug,adaptive_set_demo=info"));

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false);

    // A subscriber installed by an embedding process wins; the demo still runs.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .try_init();
}

fn main() {
    setup_logging();

    let mut a = AdaptiveIntSet::new();
    for value in 1..12 {
        a.add(value);
    }
    info!(backend = %a.backend_kind(), size = a.len(), "filled first set");
    println!("{a}");

    a.remove(5);
    info!(backend = %a.backend_kind(), size = a.len(), "removed 5");
    println!("{a}");

    let b: AdaptiveIntSet = [2, 3, 100].into_iter().collect();

    let union = a.union_with(&b);
    let intersection = a.intersect_with(&b);

    println!("Union: {union}");
    println!("Intersection: {intersection}");
}
