//! Glimmer Banner Example
//!
//! Applies a glimmer to a banner element, prints the generated stylesheet
//! and inline style, then tears the effect down.
//!
//! Run with: cargo run -p glimmer_effect --example banner [config.toml]
//! Set `RUST_LOG=glimmer_core=trace,glimmer_effect=debug` to see the
//! registry traffic.

use std::env;

use glimmer_core::{shared_registry, Element, StyleTarget, Stylesheet};
use glimmer_effect::{glimmer, GlimmerConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match env::args().nth(1) {
        Some(path) => GlimmerConfig::load(path)?,
        None => GlimmerConfig {
            duration_ms: 2000,
            ..GlimmerConfig::default()
        },
    };

    let registry = shared_registry(Stylesheet::new());
    let banner = Element::new("div").id("banner").into_shared();

    let mut effect = glimmer().config(config).apply(&banner, registry.clone())?;

    println!("{}\n", registry.borrow().to_css());
    println!("#banner {{ {} }}\n", banner.borrow().style().to_css_declarations());

    effect.destroy();

    println!("after destroy: {} rule(s)", registry.borrow().len());
    println!("#banner {{ {} }}", banner.borrow().style().to_css_declarations());

    Ok(())
}
