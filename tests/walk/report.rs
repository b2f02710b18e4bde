use polywalk::prelude::*;

fn small_report(seed: u64) -> WalkReport {
    GreedyWalk::builder()
        .initial_vector_size(3)
        .interval(-1.0, 1.0)
        .sample_step(0.1)
        .n_iterations(400)
        .seed(seed)
        .build()
        .unwrap()
        .run()
}

#[test]
fn test_summary_sections() {
    let report = small_report(1);
    let summary = report.summary();
    assert!(summary.starts_with("Walk: sin | 400 iterations"));
    assert!(summary.contains("accepted (iteration budget exhausted)"));
    assert!(summary.contains("Initial score:"));
    assert!(summary.contains("Best score:"));
    assert!(summary.contains("Baseline (y = 0):"));
    assert!(summary.contains(&format!("Terms: {}", report.best.len())));
    assert!(summary.ends_with(&report.graph_expression()));
}

#[test]
fn test_display_matches_summary() {
    let report = small_report(2);
    assert_eq!(report.to_string(), report.summary());
}

#[test]
fn test_graph_expression_lists_every_term() {
    let report = small_report(3);
    let expression = report.graph_expression();
    for i in 1..report.best.len() {
        assert!(expression.contains(&format!("*x^{i}")), "{expression}");
    }
    assert_eq!(expression.matches(" + ").count(), report.best.len() - 1);
}

#[test]
fn test_best_is_last_accepted_step() {
    let report = small_report(4);
    assert!(report.improved());
    let last = report.history.last().unwrap();
    assert_eq!(last.coefficients, report.best);
    assert_eq!(last.score, report.best_score);
    assert_eq!(last.plateau_length, report.tracker.plateau_length());
}

#[test]
fn test_no_improvement_keeps_initial() {
    // Every candidate equals the current vector, so nothing is accepted.
    let report = GreedyWalk::builder()
        .initial_coefficients(vec![0.1, 0.2])
        .perturb_probability(0.0)
        .growth_policy(GrowthPolicy::Fixed)
        .n_iterations(50)
        .seed(0)
        .build()
        .unwrap()
        .run();
    assert!(!report.improved());
    assert_eq!(report.best, report.initial);
    assert_eq!(report.best_score, report.initial_score);
    assert_eq!(report.final_phase(), SearchPhase::Exploring);
    assert_eq!(report.iterations_run, 50);
}

#[test]
fn test_csv_export() {
    let report = small_report(5);
    let mut buf = Vec::new();
    report.to_csv(&mut buf).unwrap();
    let csv = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "iteration,score,plateau_length,terms,coefficients");
    assert_eq!(lines.len(), report.history.len() + 1);
    for (line, step) in lines[1..].iter().zip(&report.history) {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[0], step.iteration.to_string());
        assert_eq!(fields[1].parse::<f64>().unwrap(), step.score);
        assert_eq!(fields[2], step.plateau_length.to_string());
        assert_eq!(fields[3], step.coefficients.len().to_string());
        assert_eq!(fields[4].split(';').count(), step.coefficients.len());
    }
}

#[test]
fn test_csv_export_empty_history() {
    let report = GreedyWalk::builder()
        .initial_coefficients(vec![0.0])
        .perturb_probability(0.0)
        .growth_policy(GrowthPolicy::Fixed)
        .n_iterations(5)
        .build()
        .unwrap()
        .run();
    let mut buf = Vec::new();
    report.to_csv(&mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "iteration,score,plateau_length,terms,coefficients\n"
    );
}
