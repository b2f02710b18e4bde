//! Compare the built-in presets and growth policies on the same target.
//!
//! Run with: `cargo run --release --example presets`

use polywalk::prelude::*;

fn main() {
    println!(
        "{:<32} {:>12} {:>12} {:>6} {:>8}",
        "configuration", "best", "baseline", "terms", "accepted"
    );

    for (name, preset) in [
        ("canonical", Preset::Canonical),
        ("adaptive absolute", Preset::AdaptiveAbsolute),
    ] {
        let walk = GreedyWalk::builder()
            .preset(preset)
            .seed(42)
            .build()
            .unwrap();
        print_row(name, &walk.run());
    }

    for (name, growth) in [
        ("canonical, fixed size", GrowthPolicy::Fixed),
        ("canonical, degeneracy guard", GrowthPolicy::FixedWithDegeneracyGuard),
    ] {
        let walk = GreedyWalk::builder()
            .growth_policy(growth)
            .seed(42)
            .build()
            .unwrap();
        print_row(name, &walk.run());
    }
}

fn print_row(name: &str, report: &WalkReport) {
    println!(
        "{:<32} {:>12.6} {:>12.6} {:>6} {:>8}",
        name,
        report.best_score,
        report.baseline,
        report.best.len(),
        report.history.len()
    );
}
