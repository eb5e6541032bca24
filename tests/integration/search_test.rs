use keysweep::alphabet::{Alphabet, Charset};
use keysweep::search::candidate::space_size;
use keysweep::search::parallel::{ParallelConfig, run_parallel_search};
use keysweep::search::{self, SearchConfig, Strategy};

fn config(strategy: Strategy, workers: usize) -> SearchConfig {
    SearchConfig::default()
        .with_strategy(strategy)
        .with_parallel(ParallelConfig::default().with_workers(workers))
}

const STRATEGIES: [Strategy; 2] = [Strategy::Parallel, Strategy::Incremental];

#[test]
fn test_both_strategies_recover_targets_in_space() {
    let alphabet = Alphabet::new("abc1").unwrap();
    for target in ["a", "1", "ca", "1cb", "abc1", "1111"] {
        for strategy in STRATEGIES {
            let result = search::run(target, &alphabet, &config(strategy, 3));
            assert_eq!(
                result.found.as_deref(),
                Some(target),
                "{} search missed {}",
                strategy,
                target
            );
        }
    }
}

#[test]
fn test_both_strategies_exhaust_on_foreign_symbol() {
    let alphabet = Alphabet::new("xyz").unwrap();
    let target = "xyw";

    let parallel = search::run(target, &alphabet, &config(Strategy::Parallel, 2));
    assert_eq!(parallel.found, None);
    assert_eq!(parallel.statistics.candidates_evaluated, space_size(3, 3));

    let incremental = search::run(target, &alphabet, &config(Strategy::Incremental, 1));
    assert_eq!(incremental.found, None);
    assert_eq!(
        incremental.statistics.candidates_evaluated,
        space_size(3, 1) + space_size(3, 2) + space_size(3, 3)
    );
}

#[test]
fn test_repeated_runs_agree() {
    let alphabet = Alphabet::new("0123").unwrap();
    for strategy in STRATEGIES {
        let first = search::run("3021", &alphabet, &config(strategy, 4));
        let second = search::run("3021", &alphabet, &config(strategy, 4));
        assert_eq!(first.found, second.found);
        assert_eq!(first.found.as_deref(), Some("3021"));
    }
}

#[test]
fn test_empty_target_matches_empty_candidate() {
    let alphabet = Alphabet::default();
    for strategy in STRATEGIES {
        let result = search::run("", &alphabet, &config(strategy, 4));
        assert_eq!(result.found.as_deref(), Some(""));
    }
}

#[test]
fn test_parallel_two_symbol_scenario() {
    let alphabet = Alphabet::new("ab").unwrap();
    let result = search::run("ba", &alphabet, &config(Strategy::Parallel, 4));
    assert_eq!(result.found.as_deref(), Some("ba"));
}

#[test]
fn test_incremental_binary_scenario() {
    let alphabet = Alphabet::new("01").unwrap();
    let result = search::run("101", &alphabet, &config(Strategy::Incremental, 1));
    assert_eq!(result.found.as_deref(), Some("101"));
    assert_eq!(result.statistics.candidates_evaluated, 12);
}

#[test]
fn test_parallel_long_target_in_last_partition() {
    let alphabet = Alphabet::new("xyz").unwrap();
    let parallel = run_parallel_search(
        "zzzzzzzzzz",
        &alphabet,
        &ParallelConfig::default().with_workers(3),
    );
    assert_eq!(parallel.result.found.as_deref(), Some("zzzzzzzzzz"));
    let origin = parallel.origin.unwrap();
    assert_eq!(origin.leading, 2);
    assert_eq!(origin.worker_id, 2);
}

#[test]
fn test_default_charset_short_target() {
    let alphabet = Charset::Default.alphabet();
    let result = search::run("a$", &alphabet, &config(Strategy::Parallel, 8));
    assert_eq!(result.found.as_deref(), Some("a$"));
    assert!(result.elapsed_secs() >= 0.0);
}

#[test]
fn test_alphabet_order_is_respected() {
    // Reversed alphabet still finds the target; the first candidate tried is "cc".
    let alphabet = Alphabet::new("cba").unwrap();
    let result = search::run("cc", &alphabet, &config(Strategy::Incremental, 1));
    assert_eq!(result.found.as_deref(), Some("cc"));
    assert_eq!(result.statistics.candidates_evaluated, 3 + 1);
}
