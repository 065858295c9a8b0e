use wordle_entropy::{
    run_game, Dictionary, FeedbackPattern, Game, GameConfig, GameState, Outcome, Word, WordleError,
};

fn w(s: &str) -> Word {
    Word::parse(s).unwrap()
}

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|s| w(s)).collect()
}

fn five_word_dictionary() -> Dictionary {
    let answers = words(&["crane", "slate", "trace", "grace", "place"]);
    Dictionary::new(answers.clone(), answers).unwrap()
}

fn opening(word: &str) -> GameConfig {
    GameConfig {
        opening: Some(w(word)),
        ..GameConfig::default()
    }
}

#[test]
fn test_end_to_end_crane_into_grace() {
    let dictionary = five_word_dictionary();
    let report = run_game(&dictionary, w("grace"), opening("crane")).unwrap();

    // Round one: the fixed opening, with the repeated-letter pattern
    // computed by the evaluator (the c is present elsewhere in grace).
    let first = &report.history[0];
    assert_eq!(first.guess, w("crane"));
    assert_eq!(first.pattern, FeedbackPattern::parse("YGGBG").unwrap());
    assert_eq!(first.pool_before, 5);
    assert_eq!(first.pool_after, 2);

    // Solved within two further rounds on this five-word pool.
    assert_eq!(report.outcome, Outcome::Solved);
    assert!(report.rounds() <= 3);
    assert_eq!(report.history.last().unwrap().guess, w("grace"));
    assert!(report.history.last().unwrap().pattern.is_win());
}

#[test]
fn test_round_one_filters_to_consistent_subset() {
    let dictionary = five_word_dictionary();
    let mut game = Game::new(&dictionary, opening("crane"));

    let guess = game.next_guess().unwrap();
    assert_eq!(guess, w("crane"), "round one must use the opening word");

    game.apply_feedback(guess, FeedbackPattern::parse("YGGBG").unwrap())
        .unwrap();

    let mut pool = game.pool().to_vec();
    pool.sort();
    assert_eq!(pool, words(&["grace", "trace"]));
}

#[test]
fn test_run_game_deterministic() {
    let dictionary = five_word_dictionary();
    let first = run_game(&dictionary, w("place"), opening("crane")).unwrap();
    let second = run_game(&dictionary, w("place"), opening("crane")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_solves_every_word_in_small_pool() {
    let dictionary = five_word_dictionary();
    for &secret in dictionary.answers() {
        let report = run_game(&dictionary, secret, opening("crane")).unwrap();
        assert_eq!(report.outcome, Outcome::Solved, "secret {}", secret);
        assert!(report.rounds() <= 6, "secret {}", secret);
        assert_eq!(report.history.last().unwrap().guess, secret);
    }
}

#[test]
fn test_pool_monotonic_across_history() {
    let dictionary = five_word_dictionary();
    let report = run_game(&dictionary, w("slate"), opening("crane")).unwrap();

    let mut previous = dictionary.answers().len();
    for record in &report.history {
        assert_eq!(record.pool_before, previous);
        assert!(record.pool_after <= record.pool_before);
        previous = record.pool_after;
    }
}

#[test]
fn test_attempt_exhaustion_is_failed_state_not_error() {
    let dictionary = five_word_dictionary();
    let config = GameConfig {
        opening: Some(w("slate")),
        max_attempts: 1,
        ..GameConfig::default()
    };

    let report = run_game(&dictionary, w("grace"), config).unwrap();
    assert_eq!(report.outcome, Outcome::Failed);
    assert_eq!(report.rounds(), 1);
}

#[test]
fn test_win_on_final_attempt_is_solved() {
    let dictionary = five_word_dictionary();
    let config = GameConfig {
        opening: Some(w("grace")),
        max_attempts: 1,
        ..GameConfig::default()
    };

    let report = run_game(&dictionary, w("grace"), config).unwrap();
    assert_eq!(report.outcome, Outcome::Solved);
}

#[test]
fn test_malformed_feedback_string_changes_nothing() {
    let dictionary = five_word_dictionary();
    let game = Game::new(&dictionary, opening("crane"));

    // Length four, then a symbol outside G/Y/B: both are input errors
    // before the game is ever touched.
    for bad in ["GYBB", "GYBXB"] {
        assert!(matches!(
            FeedbackPattern::parse(bad),
            Err(WordleError::InvalidFeedback(_))
        ));
    }
    assert_eq!(game.state(), GameState::Active);
    assert!(game.history().is_empty());
    assert_eq!(game.remaining_count(), 5);
}

#[test]
fn test_contradictory_feedback_is_recoverable() {
    let dictionary = five_word_dictionary();
    let mut game = Game::new(&dictionary, opening("crane"));

    game.apply_feedback(w("crane"), FeedbackPattern::parse("YGGBG").unwrap())
        .unwrap();
    let pool_before = game.pool().to_vec();
    let rounds_before = game.rounds_played();

    // No remaining candidate is consistent with an all-yellow reply.
    let result = game.apply_feedback(w("slate"), FeedbackPattern::parse("YYYYY").unwrap());
    assert_eq!(result, Err(WordleError::EmptyPool));

    // The round can be retried: pool, history, and state are untouched.
    assert_eq!(game.pool(), pool_before.as_slice());
    assert_eq!(game.rounds_played(), rounds_before);
    assert_eq!(game.state(), GameState::Active);
}

#[test]
fn test_single_candidate_played_directly() {
    let dictionary = five_word_dictionary();
    let mut game = Game::new(&dictionary, opening("crane"));

    game.apply_feedback(w("crane"), FeedbackPattern::parse("YGGBG").unwrap())
        .unwrap();
    game.apply_feedback(w("trace"), FeedbackPattern::parse("BGGGG").unwrap())
        .unwrap();

    assert_eq!(game.remaining_count(), 1);
    assert_eq!(game.next_guess(), Some(w("grace")));
}

#[test]
fn test_all_correct_feedback_ends_the_game() {
    let dictionary = five_word_dictionary();
    let mut game = Game::new(&dictionary, opening("crane"));

    let state = game
        .apply_feedback(w("crane"), FeedbackPattern::ALL_CORRECT)
        .unwrap();
    assert_eq!(state, GameState::Solved);
    assert_eq!(game.next_guess(), None);
}
