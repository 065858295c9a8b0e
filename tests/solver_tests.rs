use wordle_entropy::entropy;
use wordle_entropy::{
    load_dictionary, Dictionary, FeedbackPattern, GuessPolicy, Solver, Word, WordleError,
};

fn w(s: &str) -> Word {
    Word::parse(s).unwrap()
}

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|s| w(s)).collect()
}

fn test_dictionary() -> Dictionary {
    let answers = words(&[
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    ]);
    Dictionary::new(answers.clone(), answers).unwrap()
}

#[test]
fn test_solver_creation() {
    let dictionary = test_dictionary();
    let solver = Solver::new(&dictionary);
    assert_eq!(solver.remaining_count(), dictionary.answers().len());
    assert_eq!(solver.pool(), dictionary.answers());
}

#[test]
fn test_apply_feedback_shrinks_and_keeps_secret() {
    let dictionary = test_dictionary();
    let mut solver = Solver::new(&dictionary);
    let secret = w("toast");

    let mut previous = solver.remaining_count();
    for guess in ["crane", "raise", "roast"] {
        let guess = w(guess);
        let pattern = FeedbackPattern::calculate(guess, secret);
        solver.apply_feedback(guess, pattern).unwrap();

        assert!(solver.remaining_count() <= previous, "pool must never grow");
        assert!(
            solver.pool().contains(&secret),
            "true secret must survive filtering"
        );
        previous = solver.remaining_count();
    }
}

#[test]
fn test_inconsistent_feedback_leaves_pool_unchanged() {
    let dictionary = test_dictionary();
    let mut solver = Solver::new(&dictionary);
    let before = solver.pool().to_vec();

    // No candidate contains a z, so a yellow z matches nothing.
    let result = solver.apply_feedback(w("zzzzz"), FeedbackPattern::parse("YBBBB").unwrap());
    assert_eq!(result, Err(WordleError::EmptyPool));
    assert_eq!(solver.pool(), before.as_slice());
}

#[test]
fn test_entropy_bounds() {
    let dictionary = test_dictionary();
    let solver = Solver::new(&dictionary);
    let max = (solver.remaining_count() as f64).log2();

    for &guess in dictionary.guesses() {
        let bits = entropy::entropy_of(guess, solver.pool());
        assert!(bits >= 0.0, "{}: entropy must be non-negative", guess);
        assert!(bits <= max + 1e-9, "{}: entropy must not exceed log2(n)", guess);
    }
}

#[test]
fn test_entropy_zero_iff_single_partition() {
    let dictionary = test_dictionary();
    let pool = dictionary.answers();

    // Every candidate answers all-gray to a word sharing no letters.
    assert_eq!(entropy::entropy_of(w("muddy"), pool), 0.0);

    // A guess that distinguishes at least two candidates carries
    // information.
    assert!(entropy::entropy_of(w("crane"), pool) > 0.0);

    // Single-word pool has nothing left to resolve.
    assert_eq!(entropy::entropy_of(w("crane"), &[w("crane")]), 0.0);
}

#[test]
fn test_best_guess_deterministic() {
    let dictionary = test_dictionary();
    let solver = Solver::new(&dictionary);

    let first = solver.best_guess().unwrap();
    let second = solver.best_guess().unwrap();
    assert_eq!(first.word, second.word);

    let fresh = Solver::new(&dictionary).best_guess().unwrap();
    assert_eq!(first.word, fresh.word);
}

#[test]
fn test_tie_break_prefers_candidates_then_lexicographic() {
    // Both candidates (and many outside words) split the two-word pool
    // perfectly, so the tie-break decides: in-pool first, then the
    // lexicographically smaller word.
    let guesses = words(&["blimp", "crane", "trace", "vodka"]);
    let answers = words(&["crane", "trace"]);
    let dictionary = Dictionary::new(guesses, answers).unwrap();

    let solver = Solver::with_policy(&dictionary, GuessPolicy::FullGuessSet);
    let best = solver.best_guess().unwrap();
    assert_eq!(best.word, w("crane"));
    assert!(best.is_candidate);
    assert!((best.entropy - 1.0).abs() < 1e-9);
}

#[test]
fn test_pool_only_policy_selects_candidate() {
    let dictionary = test_dictionary();
    let mut solver = Solver::with_policy(&dictionary, GuessPolicy::PoolOnly);

    let best = solver.best_guess().unwrap();
    assert!(best.is_candidate);

    let pattern = FeedbackPattern::calculate(best.word, w("toast"));
    solver.apply_feedback(best.word, pattern).unwrap();
    let next = solver.best_guess().unwrap();
    assert!(next.is_candidate);
}

#[test]
fn test_adaptive_policy_switches_to_pool() {
    let dictionary = test_dictionary();
    // Threshold above the pool size: behaves like PoolOnly from the
    // first round.
    let solver = Solver::with_policy(&dictionary, GuessPolicy::Adaptive { threshold: 100 });
    assert!(solver.best_guess().unwrap().is_candidate);
}

#[test]
fn test_top_guesses_ranked() {
    let dictionary = test_dictionary();
    let solver = Solver::new(&dictionary);

    let top = solver.top_guesses(5);
    assert_eq!(top.len(), 5);
    for pair in top.windows(2) {
        assert!(pair[0].entropy >= pair[1].entropy);
    }
    assert_eq!(top[0].word, solver.best_guess().unwrap().word);
}

#[test]
fn test_single_candidate_is_proposed_directly() {
    let answers = words(&["crane"]);
    let dictionary = Dictionary::new(answers.clone(), answers).unwrap();
    let solver = Solver::new(&dictionary);

    let best = solver.best_guess().unwrap();
    assert_eq!(best.word, w("crane"));
    assert_eq!(best.entropy, 0.0);
    assert!(best.is_candidate);
}

#[test]
fn test_reset_restores_full_pool() {
    let dictionary = test_dictionary();
    let mut solver = Solver::new(&dictionary);

    let pattern = FeedbackPattern::calculate(w("crane"), w("toast"));
    solver.apply_feedback(w("crane"), pattern).unwrap();
    assert!(solver.remaining_count() < dictionary.answers().len());

    solver.reset();
    assert_eq!(solver.remaining_count(), dictionary.answers().len());
}

#[test]
fn test_dictionary_validation() {
    assert_eq!(
        Dictionary::new(vec![], vec![]).unwrap_err(),
        WordleError::EmptyDictionary
    );

    let guesses = words(&["crane"]);
    let answers = words(&["slate"]);
    assert_eq!(
        Dictionary::new(guesses, answers).unwrap_err(),
        WordleError::AnswerNotGuessable(w("slate"))
    );

    let malformed = Dictionary::from_lines("crane\nslate", "crane\nbad!!");
    assert!(matches!(malformed, Err(WordleError::InvalidWord(_))));
}

#[test]
fn test_embedded_dictionary_loads() {
    let dictionary = load_dictionary();
    assert!(!dictionary.answers().is_empty());
    assert!(dictionary.guesses().len() >= dictionary.answers().len());
    for &answer in dictionary.answers() {
        assert!(dictionary.is_guessable(answer));
    }
}
