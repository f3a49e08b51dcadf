//! Writes a Turtle file of synthetic services for bulk loading into the
//! triple store. Usage: `generate-data [output.ttl]`.

use anyhow::Context;
use ecotour_backend::datagen;
use tracing_subscriber::EnvFilter;

const SERVICE_COUNT: u32 = 50;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "final_graph.ttl".to_string());

    let mut rng = rand::thread_rng();
    let services = datagen::generate(SERVICE_COUNT, &mut rng);
    let turtle = datagen::to_turtle(&services);

    std::fs::write(&path, turtle).with_context(|| format!("writing {path}"))?;

    tracing::info!(
        "generated {} triples for {} services into {path}",
        datagen::triple_count(&services),
        services.len(),
    );
    Ok(())
}
