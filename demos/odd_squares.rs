//! Filter the odd values out of a fixed array, square them and print each
//! result on its own line.
//!
//! Run with: cargo run --example odd_squares
//! Set `RUST_LOG=sequencer=trace` to see the pipeline's trace events.

use sequencer::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let numbers: [i64; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    fetch_slice(&numbers)
        .choose(|n| n % 2 == 1)
        .transform(|n| n * n)
        .perform(|n| println!("{n}"));
}
