//! Count Tracker
//!
//! Walks through an at-bat sequence and prints the count after each pitch.
//!
//! Key concepts:
//! - Pure transitions: `apply(rules, state, event)` returns the settled count
//! - Status messages are part of every update
//! - Outs reset the count; the third out starts a fresh inning
//!
//! Run with: RUST_LOG=dugout=debug cargo run --example count_tracker

use dugout::count::{CountEvent, CountTracker};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .init();

    println!("=== Count Tracker ===\n");

    let mut tracker = CountTracker::new();
    println!("{}\n", tracker.message());

    let pitches = [
        CountEvent::Ball,
        CountEvent::Strike,
        CountEvent::Ball,
        CountEvent::Strike,
        CountEvent::Ball,
        CountEvent::Ball,
        CountEvent::Strike,
        CountEvent::Strike,
        CountEvent::Strike,
        CountEvent::Out,
        CountEvent::Out,
    ];

    for event in pitches {
        let update = tracker.handle(event);
        println!(
            "{:<7} B:{} S:{} O:{}  {}",
            format!("{event:?}"),
            update.state.balls,
            update.state.strikes,
            update.state.outs,
            update.message
        );
    }

    let update = tracker.reset();
    println!("\nReset: {}", update.message);

    println!("\n=== Example Complete ===");
}
