//! Cross-module properties of rules, partitions, selection and feedback

use diffle_solver::core::{LetterFeedback, Rule, SequencePattern, Tag, Word};
use diffle_solver::feedback::{feedback_for, parse_feedback, translate};
use diffle_solver::solver::minimax::{partition, select_guess, split_by_rule, worst_case_remaining};
use diffle_solver::solver::{
    ParallelScorer, Score, SelectionPolicy, Solver, SolverConfig, SolverError, filter_candidates,
};
use diffle_solver::wordlists::loader::words_from_slice;
use diffle_solver::wordlists::{SAMPLE_ALLOWED, SAMPLE_ANSWERS};

fn refs(words: &[Word]) -> Vec<&Word> {
    words.iter().collect()
}

fn sample() -> (Vec<Word>, Vec<Word>) {
    (
        words_from_slice(SAMPLE_ALLOWED),
        words_from_slice(SAMPLE_ANSWERS),
    )
}

#[test]
fn splitting_is_disjoint_and_complete() {
    let (allowed, answers) = sample();
    let pool = refs(&answers);

    for guess in &allowed {
        for rule in guess.rules() {
            let halves = split_by_rule(vec![pool.clone()], rule);
            assert!(halves.len() <= 2);
            assert_eq!(halves.iter().map(Vec::len).sum::<usize>(), pool.len());
            if let [first, second] = halves.as_slice() {
                assert!(first.iter().all(|w| !second.contains(w)));
            }
        }
    }
}

#[test]
fn partition_sizes_sum_to_pool() {
    let (allowed, answers) = sample();
    let pool = refs(&answers);

    for guess in &allowed {
        let buckets = partition(guess.rules(), &pool);
        assert_eq!(buckets.iter().map(Vec::len).sum::<usize>(), pool.len());
        assert!(buckets.iter().all(|bucket| !bucket.is_empty()));
    }
}

#[test]
fn guess_in_pool_leaves_at_least_one() {
    let (_, answers) = sample();
    let pool = refs(&answers);

    for guess in &answers {
        assert!(worst_case_remaining(guess.rules(), &pool) >= 1);
        assert_eq!(worst_case_remaining(guess.rules(), &[guess]), 1);
    }
}

#[test]
fn start_rule_separates_scenario() {
    let allowed = words_from_slice(&["abac", "bcab", "cabb"]);
    let candidates = words_from_slice(&["abac", "bcab"]);

    assert_eq!(
        worst_case_remaining(allowed[0].rules(), &refs(&candidates)),
        1
    );
}

#[test]
fn selection_base_cases() {
    let scorer = ParallelScorer::default();
    let (allowed, _) = sample();
    let allowed = refs(&allowed);

    let single = words_from_slice(&["attic"]);
    let selection = select_guess(&scorer, &allowed, &refs(&single)).unwrap();
    assert_eq!(selection.word.text(), "attic");
    assert_eq!(selection.score, Score::new(0, 5));

    let pair = words_from_slice(&["caster", "cat"]);
    let selection = select_guess(&scorer, &allowed, &refs(&pair)).unwrap();
    assert_eq!(selection.word.text(), "cat");
    assert_eq!(selection.score, Score::new(1, 3));

    assert!(matches!(
        select_guess(&scorer, &allowed, &[]),
        Err(SolverError::EmptyCandidateSet)
    ));
}

#[test]
fn selection_matches_sequential_minimum() {
    let (allowed, answers) = sample();
    let allowed = refs(&allowed);
    let candidates = refs(&answers);

    let expected = allowed
        .iter()
        .map(|guess| Score::of(guess, &candidates))
        .min()
        .unwrap();

    for batch_size in [1, 7, 1000] {
        let scorer = ParallelScorer::new(batch_size);
        let selection = select_guess(&scorer, &allowed, &candidates).unwrap();
        assert_eq!(selection.score, expected);
    }
}

#[test]
fn self_feedback_round_trips_to_the_word() {
    let (allowed, _) = sample();
    let pool = refs(&allowed);

    for hidden in &allowed {
        let rules = translate(&feedback_for(hidden, hidden));
        let outcome = filter_candidates(&pool, &rules);
        assert_eq!(outcome.pool, vec![hidden], "round trip failed for {hidden}");
    }
}

#[test]
fn feedback_never_eliminates_the_hidden_word() {
    let (allowed, answers) = sample();
    let hidden_pool = refs(&answers);

    for guess in &allowed {
        for hidden in &answers {
            let rules = translate(&feedback_for(guess, hidden));
            let outcome = filter_candidates(&hidden_pool, &rules);
            assert!(
                outcome.pool.contains(&hidden),
                "{guess} eliminated hidden {hidden}"
            );
        }
    }
}

#[test]
fn translation_of_typed_feedback() {
    let feedback = parse_feedback("c:start a:tail t:end").unwrap();
    assert_eq!(
        feedback[0],
        LetterFeedback::new(b'c', [Tag::Start])
    );

    let rules = translate(&feedback);
    assert_eq!(
        rules,
        vec![
            Rule::Start(b'c'),
            Rule::End(b't'),
            Rule::Occurrence { letter: b'c', count: 1, exact: false },
            Rule::Occurrence { letter: b'a', count: 1, exact: false },
            Rule::Occurrence { letter: b't', count: 1, exact: false },
            Rule::Sequence(SequencePattern::new(
                vec!["ca".into(), "t".into()],
                true,
                true
            )),
        ]
    );
}

#[test]
fn every_policy_solves_every_sample_answer() {
    let (allowed, answers) = sample();

    for policy in [
        SelectionPolicy::Exploit,
        SelectionPolicy::Explore,
        SelectionPolicy::Dual,
    ] {
        let config = SolverConfig {
            policy,
            ..SolverConfig::default()
        };
        let solver = Solver::new(config, &allowed, &answers).unwrap();

        for hidden in &answers {
            let mut session = solver.new_game();
            let mut solved = false;
            for _ in 0..allowed.len() {
                let guess = session.suggest().unwrap().word;
                if guess == hidden {
                    solved = true;
                    break;
                }
                session.apply(guess, feedback_for(guess, hidden));
            }
            assert!(solved, "{policy} failed to solve {hidden}");
        }
    }
}
