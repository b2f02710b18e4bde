use polywalk::prelude::*;

#[test]
fn test_canonical_is_default() {
    assert_eq!(Preset::default(), Preset::Canonical);
    let from_preset = GreedyWalk::builder()
        .preset(Preset::Canonical)
        .build()
        .unwrap();
    let plain = GreedyWalk::builder().build().unwrap();
    assert_eq!(from_preset.convergence(), plain.convergence());
    assert_eq!(from_preset.perturbation(), plain.perturbation());
    assert_eq!(from_preset.aggregation(), plain.aggregation());
    assert_eq!(from_preset.n_iterations(), plain.n_iterations());
}

#[test]
fn test_adaptive_absolute_values() {
    let walk = GreedyWalk::builder()
        .preset(Preset::AdaptiveAbsolute)
        .build()
        .unwrap();
    assert_eq!(walk.aggregation(), Aggregation::MeanAbsolute);
    assert_eq!(walk.initial_vector_size(), 5);
    assert_eq!(walk.target().interval(), Interval::one_period());
    assert_eq!(walk.target().step(), 0.05);
    assert_eq!(walk.convergence().margin(), 1e-3);
    assert_eq!(walk.convergence().super_converged_threshold(), 10);
    assert_eq!(walk.perturbation().perturb_probability, 0.5);
}

#[test]
fn test_preset_keeps_target_function_and_seed() {
    let builder = GreedyWalk::builder()
        .target_function(crate::targets::cosine())
        .seed(77)
        .preset(Preset::AdaptiveAbsolute);
    let walk = builder.clone().build().unwrap();
    assert_eq!(walk.target().function().name(), "cos");

    let a = walk.run();
    let b = builder.build().unwrap().run();
    assert_eq!(a.history, b.history);
}

#[test]
fn test_preset_keeps_initial_coefficients() {
    let walk = GreedyWalk::builder()
        .initial_coefficients(vec![0.0, 1.0])
        .preset(Preset::AdaptiveAbsolute)
        .build()
        .unwrap();
    assert_eq!(walk.initial_vector_size(), 2);
    let report = walk.run();
    assert_eq!(*report.initial, [0.0, 1.0]);
}

#[test]
fn test_adaptive_absolute_reaches_target_on_easy_problem() {
    // A constant target is reachable exactly, so the adaptive band keeps
    // shrinking the error until it crosses the target.
    let walk = GreedyWalk::builder()
        .preset(Preset::AdaptiveAbsolute)
        .target_function(TargetFunction::new("half", |_| 0.5))
        .initial_coefficients(vec![0.8])
        .growth_policy(GrowthPolicy::Fixed)
        .n_iterations(20_000)
        .seed(10)
        .build()
        .unwrap();
    let report = walk.run();
    assert_eq!(report.stop_reason, StopReason::TargetReached);
    assert!(report.best_score < 1e-5);
    assert!(report.iterations_run < 20_000);
}
