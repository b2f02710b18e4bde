use polywalk::prelude::*;

#[test]
fn test_builder_defaults_build() {
    let walk = GreedyWalk::builder().build().unwrap();
    assert_eq!(walk.initial_vector_size(), 6);
    assert_eq!(walk.n_iterations(), 10_000);
    assert_eq!(walk.target().interval(), Interval::two_periods());
    assert_eq!(walk.target().step(), 0.01);
    assert_eq!(walk.growth_policy(), GrowthPolicy::Expand);
}

#[test]
fn test_builder_default_matches_builder() {
    let a = GreedyWalkBuilder::default().build().unwrap();
    let b = GreedyWalk::builder().build().unwrap();
    assert_eq!(a.convergence(), b.convergence());
    assert_eq!(a.perturbation(), b.perturbation());
    assert_eq!(a.target().n_samples(), b.target().n_samples());
}

#[test]
fn test_builder_custom_target() {
    let walk = GreedyWalk::builder()
        .target_function(crate::targets::gaussian())
        .interval(-3.0, 3.0)
        .sample_step(0.25)
        .build()
        .unwrap();
    assert_eq!(walk.target().function().name(), "gaussian");
    assert_eq!(walk.target().n_samples(), 24);
    assert_eq!(walk.target().function().eval(0.0), 1.0);
}

#[test]
fn test_builder_errors_are_configuration_errors() {
    let failures = [
        GreedyWalk::builder().n_iterations(0).build(),
        GreedyWalk::builder().initial_vector_size(0).build(),
        GreedyWalk::builder().interval(0.0, f64::INFINITY).build(),
        GreedyWalk::builder().sample_step(-0.1).build(),
        GreedyWalk::builder().interval(-1e300, 1e300).build(),
        GreedyWalk::builder().target_error(0.0).build(),
        GreedyWalk::builder().improvement_margin(-1.0).build(),
        GreedyWalk::builder().convergence_threshold(0).build(),
        GreedyWalk::builder()
            .convergence_threshold(50)
            .super_convergence_threshold(40)
            .build(),
        GreedyWalk::builder().perturb_probability(1.1).build(),
        GreedyWalk::builder().sign_flip_probability(-0.5).build(),
        GreedyWalk::builder()
            .scale_band(ScaleBand::Fixed { half_width: 1.0 })
            .build(),
        GreedyWalk::builder()
            .scale_band(ScaleBand::Adaptive {
                max_sensitivity: 0.5,
            })
            .build(),
    ];
    for result in failures {
        let err = result.unwrap_err();
        assert!(err.is_invalid_configuration(), "{err}");
        assert!(!err.to_string().is_empty());
    }
}

#[test]
fn test_builder_threshold_error_reports_values() {
    let err = GreedyWalk::builder()
        .convergence_threshold(50)
        .super_convergence_threshold(40)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidThresholds {
            converged: 50,
            super_converged: 40
        }
    );
}

#[test]
fn test_builder_adaptive_band_with_target() {
    let walk = GreedyWalk::builder()
        .scale_band(ScaleBand::Adaptive {
            max_sensitivity: 0.2,
        })
        .target_error(1e-4)
        .build()
        .unwrap();
    assert_eq!(
        walk.perturbation().band,
        ScaleBand::Adaptive {
            max_sensitivity: 0.2
        }
    );
    assert_eq!(walk.target_error(), Some(1e-4));
}

#[test]
fn test_builder_evaluator_scores_like_walk() {
    let walk = GreedyWalk::builder()
        .interval(-1.0, 1.0)
        .sample_step(0.1)
        .n_iterations(200)
        .seed(2)
        .build()
        .unwrap();
    let report = walk.run();
    let rescored = walk.evaluator().evaluate(&report.best);
    assert_eq!(rescored.to_bits(), report.best_score.to_bits());
}

#[test]
fn test_builder_rejects_unsampleable_grid() {
    let err = GreedyWalk::builder()
        .interval(-1e300, 1e300)
        .sample_step(1e-300)
        .n_iterations(1)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::TooManySamples {
            max: polywalk::target::MAX_SAMPLES,
            ..
        }
    ));

    let err = GreedyWalk::builder()
        .interval(-f64::MAX, f64::MAX)
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::TooManySamples { requested, .. } if requested.is_infinite()));
}

#[test]
fn test_builder_grid_stays_below_upper_bound() {
    let walk = GreedyWalk::builder()
        .interval(-2.7, 1.5)
        .sample_step(0.3)
        .n_iterations(1)
        .build()
        .unwrap();
    assert_eq!(walk.target().n_samples(), 14);
    assert!(walk.target().samples().all(|x| x < 1.5));
    assert_eq!(walk.evaluator().n_samples(), 14);
}
