use std::ops::ControlFlow;

use polywalk::prelude::*;

fn walk(seed: u64) -> GreedyWalk {
    GreedyWalk::builder()
        .initial_vector_size(4)
        .interval(-1.0, 1.0)
        .sample_step(0.1)
        .n_iterations(1_000)
        .seed(seed)
        .build()
        .unwrap()
}

#[test]
fn test_closure_sees_every_accepted_step() {
    let mut seen = Vec::new();
    let report = walk(1).run_with(|step: &Step| seen.push(step.clone()));
    assert_eq!(seen, report.history);
}

#[test]
fn test_observer_does_not_change_the_walk() {
    let plain = walk(2).run();
    let mut count = 0;
    let observed = walk(2).run_with(|_: &Step| count += 1);
    assert_eq!(plain.history, observed.history);
    assert_eq!(count, plain.history.len());
}

#[derive(Default)]
struct Stats {
    accepted: usize,
    finished: Option<(usize, StopReason)>,
}

struct Recorder<'a>(&'a mut Stats);

impl Observer for Recorder<'_> {
    fn on_accept(&mut self, _step: &Step) -> ControlFlow<()> {
        self.0.accepted += 1;
        ControlFlow::Continue(())
    }

    fn on_finish(&mut self, report: &WalkReport) {
        self.0.finished = Some((report.history.len(), report.stop_reason));
    }
}

#[test]
fn test_on_finish_receives_report() {
    let mut stats = Stats::default();
    let report = walk(3).run_with(Recorder(&mut stats));
    assert_eq!(stats.accepted, report.history.len());
    assert_eq!(
        stats.finished,
        Some((report.history.len(), StopReason::BudgetExhausted))
    );
}

struct StopBelow(f64);

impl Observer for StopBelow {
    fn on_accept(&mut self, step: &Step) -> ControlFlow<()> {
        if step.score < self.0 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

#[test]
fn test_break_interrupts_after_step() {
    let full = walk(4).run();
    assert!(full.improved());
    let threshold = (full.initial_score + full.best_score) / 2.0;
    let report = walk(4).run_with(StopBelow(threshold));

    assert_eq!(report.stop_reason, StopReason::Interrupted);
    let last = report.history.last().unwrap();
    assert!(last.score < threshold);
    assert!(
        report.history[..report.history.len() - 1]
            .iter()
            .all(|s| s.score >= threshold)
    );
    assert_eq!(report.iterations_run, last.iteration + 1);
    // Same seed, so the interrupted walk is a prefix of the full one.
    assert_eq!(report.history[..], full.history[..report.history.len()]);
}

#[test]
fn test_silent_observer() {
    let a = walk(5).run_with(Silent);
    let b = walk(5).run();
    assert_eq!(a.history, b.history);
}
