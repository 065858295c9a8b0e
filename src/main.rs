//! Wordle Entropy CLI
//!
//! Interactive assistant plus simulation subcommands for the
//! entropy-driven solver.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;

use wordle_entropy::game::DEFAULT_OPENING;
use wordle_entropy::simulation::{self, DEFAULT_OPENINGS};
use wordle_entropy::{
    load_dictionary, Dictionary, FeedbackPattern, Game, GameConfig, GuessPolicy, Summary, Word,
    WordleError,
};

const USAGE: &str = "\
wordle-entropy - entropy-driven Wordle solver

USAGE:
    wordle-entropy                 interactive assistant
    wordle-entropy solve <word>    simulate one game against <word>
    wordle-entropy simulate [opening...] [--csv <path>]
                                   play every dictionary word as the
                                   secret, once per opening word
    wordle-entropy suggest         best opening guess for the dictionary
    wordle-entropy --help

Feedback strings are five symbols: G (green), Y (yellow), B (gray).
";

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        None => run_interactive(),
        Some("--help") | Some("-h") => {
            println!("{}", USAGE);
            Ok(())
        }
        Some("solve") => cmd_solve(&args[1..]),
        Some("simulate") | Some("bench") => cmd_simulate(&args[1..]),
        Some("suggest") => cmd_suggest(),
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Use --help for usage information.");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn default_config() -> Result<GameConfig, WordleError> {
    Ok(GameConfig {
        opening: Some(Word::parse(DEFAULT_OPENING)?),
        ..GameConfig::default()
    })
}

fn cmd_solve(args: &[String]) -> Result<(), WordleError> {
    let Some(target) = args.first() else {
        eprintln!("Usage: wordle-entropy solve <word>");
        return Ok(());
    };
    let secret = Word::parse(target)?;

    let dictionary = load_dictionary();
    let report = wordle_entropy::run_game(&dictionary, secret, default_config()?)?;

    println!("Solving for: {}", secret.to_string().to_uppercase());
    println!();
    print_trace(&report.history);
    println!();
    if report.is_win() {
        println!("Solved in {} guesses.", report.rounds());
    } else {
        println!("Failed to solve within {} guesses.", report.rounds());
    }
    Ok(())
}

fn cmd_simulate(args: &[String]) -> Result<(), WordleError> {
    let mut openings = Vec::new();
    let mut csv_path: Option<String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--csv" {
            csv_path = iter.next().cloned();
            if csv_path.is_none() {
                eprintln!("--csv needs a file path");
                return Ok(());
            }
        } else {
            openings.push(Word::parse(arg)?);
        }
    }
    if openings.is_empty() {
        openings = DEFAULT_OPENINGS
            .iter()
            .map(|s| Word::parse(s))
            .collect::<Result<_, _>>()?;
    }

    let dictionary = load_dictionary();
    println!(
        "Simulating {} secrets x {} openings...",
        dictionary.answers().len(),
        openings.len()
    );

    let start = std::time::Instant::now();
    let runs = simulation::simulate_openings(&dictionary, &openings, GameConfig::default())?;
    let elapsed = start.elapsed();

    for (opening, reports) in &runs {
        let summary = simulation::summarize(reports);
        print_summary(*opening, &summary);
    }
    println!("Time elapsed: {:.2?}", elapsed);

    if let Some(path) = csv_path {
        match write_csv(&runs, &path) {
            Ok(()) => println!("Wrote per-turn records to {}", path),
            Err(err) => eprintln!("Could not write {}: {}", path, err),
        }
    }
    Ok(())
}

fn cmd_suggest() -> Result<(), WordleError> {
    let dictionary = load_dictionary();
    let game = Game::new(&dictionary, GameConfig::default());

    match game.top_guesses(1).first() {
        Some(analysis) => {
            println!(
                "Best opening guess: {}",
                analysis.word.to_string().to_uppercase()
            );
            println!("Entropy: {:.3} bits", analysis.entropy);
        }
        None => eprintln!("No words available."),
    }
    Ok(())
}

fn print_trace(history: &[wordle_entropy::GuessRecord]) {
    for record in history {
        println!(
            "Guess {}: {} -> {}  ({} -> {} candidates)",
            record.round,
            record.guess.to_string().to_uppercase(),
            record.pattern,
            record.pool_before,
            record.pool_after
        );
    }
}

fn print_summary(opening: Word, summary: &Summary) {
    println!();
    println!(
        "--- Opening {} ---",
        opening.to_string().to_uppercase()
    );
    println!("Games:    {}", summary.games);
    println!("Wins:     {}", summary.wins);
    println!("Failures: {}", summary.failures);
    if let Some(mean) = summary.mean_rounds() {
        println!("Average guesses per win: {:.3}", mean);
    }
    println!("Win rate: {:.1}%", summary.win_rate() * 100.0);
    for (rounds, &count) in summary.distribution.iter().enumerate() {
        if count > 0 {
            let pct = count as f64 / summary.games as f64 * 100.0;
            println!("  {} guesses: {:>5} ({:>5.1}%)", rounds, count, pct);
        }
    }
    if !summary.failed_words.is_empty() {
        let words: Vec<String> = summary
            .failed_words
            .iter()
            .map(|w| w.to_string().to_uppercase())
            .collect();
        println!("Failed words: {}", words.join(", "));
    }
}

fn write_csv(runs: &[(Word, Vec<wordle_entropy::GameReport>)], path: &str) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(
        out,
        "secret,opening,outcome,rounds,round,guess,feedback,entropy,pool_before,pool_after"
    )?;
    for (_, reports) in runs {
        for row in simulation::turn_rows(reports) {
            writeln!(
                out,
                "{},{},{},{},{},{},{},{:.4},{},{}",
                row.secret,
                row.opening.map(|w| w.to_string()).unwrap_or_default(),
                if row.outcome == wordle_entropy::Outcome::Solved {
                    "solved"
                } else {
                    "failed"
                },
                row.rounds,
                row.round,
                row.guess,
                row.pattern,
                row.entropy,
                row.pool_before,
                row.pool_after
            )?;
        }
    }
    out.flush()
}

fn run_interactive() -> Result<(), WordleError> {
    println!("wordle-entropy interactive assistant");
    println!("Loading dictionary...");
    let dictionary = load_dictionary();
    println!(
        "Loaded {} guessable words, {} possible answers.",
        dictionary.guesses().len(),
        dictionary.answers().len()
    );
    println!("Type 'help' for commands or 'suggest' to get started.");
    println!();

    let config = default_config()?;
    let mut game = Game::new(&dictionary, config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            continue;
        };

        match command.to_lowercase().as_str() {
            "help" | "h" | "?" => print_interactive_help(),
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "suggest" | "s" | "best" => suggest(&game),
            "top" | "t" => {
                let n: usize = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(5);
                top(&game, n);
            }
            "feedback" | "f" | "fb" => feedback(&dictionary, &mut game, &parts),
            "remaining" | "r" | "left" => remaining(&game),
            "solve" => solve(&dictionary, config, &parts),
            "policy" => policy(&mut game, &parts),
            "reset" => {
                game = Game::new(&dictionary, config);
                println!(
                    "Reset to initial state. {} candidates.",
                    game.remaining_count()
                );
            }
            other => {
                println!("Unknown command: {}", other);
                println!("Type 'help' for available commands.");
            }
        }
    }
    Ok(())
}

fn print_interactive_help() {
    println!("Commands:");
    println!("  suggest              best next guess for the current pool");
    println!("  top [n]              the n best guesses (default 5)");
    println!("  feedback <word> <pattern>");
    println!("                       record a played guess, e.g. feedback crane GYBBB");
    println!("  remaining            candidates still possible");
    println!("  solve <word>         simulate a full game against <word>");
    println!("  policy <full|pool|adaptive>");
    println!("                       which words the selector scores");
    println!("  reset                start a new game");
    println!("  quit                 leave");
}

fn suggest(game: &Game<'_>) {
    if game.state() != wordle_entropy::GameState::Active {
        println!("Game over. Use 'reset' to start again.");
        return;
    }
    match game.next_guess() {
        Some(word) => {
            println!();
            println!("Best guess: {}", word.to_string().to_uppercase());
            if game.rounds_played() > 0 {
                if let Some(analysis) = game.top_guesses(1).first() {
                    println!("  Entropy: {:.3} bits", analysis.entropy);
                    println!(
                        "  Expected remaining: {:.1} words",
                        analysis.expected_remaining
                    );
                }
            }
            println!("  Candidates: {}", game.remaining_count());
            println!();
        }
        None => println!("No candidates remaining."),
    }
}

fn top(game: &Game<'_>, n: usize) {
    let analyses = game.top_guesses(n);
    if analyses.is_empty() {
        println!("No candidates remaining.");
        return;
    }
    println!();
    println!("{:>4} {:>8} {:>9} {:>13} Candidate?", "#", "Word", "Entropy", "Exp. remain");
    for (i, analysis) in analyses.iter().enumerate() {
        println!(
            "{:>4} {:>8} {:>9.3} {:>13.1} {}",
            i + 1,
            analysis.word.to_string().to_uppercase(),
            analysis.entropy,
            analysis.expected_remaining,
            if analysis.is_candidate { "yes" } else { "" }
        );
    }
    println!();
}

fn feedback(dictionary: &Dictionary, game: &mut Game<'_>, parts: &[&str]) {
    if game.state() != wordle_entropy::GameState::Active {
        println!("Game over. Use 'reset' to start a new game.");
        return;
    }
    if parts.len() < 3 {
        println!("Usage: feedback <word> <pattern>");
        println!("Example: feedback crane GYBBB");
        return;
    }

    let word = match Word::parse(parts[1]) {
        Ok(word) => word,
        Err(err) => {
            println!("{}", err);
            return;
        }
    };
    if !dictionary.is_guessable(word) {
        println!("\"{}\" is not in the guess dictionary.", word);
        return;
    }
    let pattern = match FeedbackPattern::parse(parts[2]) {
        Ok(pattern) => pattern,
        Err(err) => {
            println!("{}", err);
            return;
        }
    };

    let before = game.remaining_count();
    match game.apply_feedback(word, pattern) {
        Ok(wordle_entropy::GameState::Solved) => {
            println!("Solved in {} guesses!", game.rounds_played());
        }
        Ok(wordle_entropy::GameState::Failed) => {
            println!(
                "Out of attempts after {} guesses. Use 'reset' to start over.",
                game.rounds_played()
            );
        }
        Ok(wordle_entropy::GameState::Active) => {
            let after = game.remaining_count();
            println!(
                "Eliminated {} words ({} -> {}).",
                before - after,
                before,
                after
            );
            if after <= 10 {
                remaining(game);
            }
        }
        Err(err) => {
            // Pool and history are untouched; the round can be retried.
            println!("{}", err);
            println!("Check the feedback symbols and try this round again.");
        }
    }
}

fn remaining(game: &Game<'_>) {
    let pool = game.pool();
    println!("Candidates remaining: {}", pool.len());
    if pool.len() <= 20 {
        let words: Vec<String> = pool
            .iter()
            .map(|w| w.to_string().to_uppercase())
            .collect();
        println!("  {}", words.join(", "));
    }
}

fn solve(dictionary: &Dictionary, config: GameConfig, parts: &[&str]) {
    let Some(target) = parts.get(1) else {
        println!("Usage: solve <target_word>");
        return;
    };
    let secret = match Word::parse(target) {
        Ok(secret) => secret,
        Err(err) => {
            println!("{}", err);
            return;
        }
    };

    match wordle_entropy::run_game(dictionary, secret, config) {
        Ok(report) => {
            println!();
            print_trace(&report.history);
            if report.is_win() {
                println!("Solved in {} guesses.", report.rounds());
            } else {
                println!("Failed within {} guesses.", report.rounds());
            }
            println!();
        }
        Err(err) => println!("{}", err),
    }
}

fn policy(game: &mut Game<'_>, parts: &[&str]) {
    let Some(&mode) = parts.get(1) else {
        println!("Usage: policy <full|pool|adaptive>");
        return;
    };
    let policy = match mode {
        "full" => GuessPolicy::FullGuessSet,
        "pool" => GuessPolicy::PoolOnly,
        "adaptive" => GuessPolicy::default(),
        other => {
            println!("Unknown policy: {} (use full, pool, or adaptive)", other);
            return;
        }
    };
    game.set_policy(policy);
    println!("Selector policy set to {:?}.", policy);
}
