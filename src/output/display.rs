//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar, format_duration};
use crate::commands::{AnalysisResult, PickResult, SimulationResult};
use crate::solver::score::MAX_SCORE;
use colored::Colorize;

/// Print the guess picked for a snapshot
pub fn print_pick_result(result: &PickResult) {
    println!(
        "\nNext guess: {}",
        result.guess.word.to_string().to_uppercase().bright_yellow().bold()
    );
    println!(
        "  Expected score: {:.3} over {} boards ({} visible)",
        result.guess.score, result.remaining, result.visible
    );
    println!("  Picked in:      {}", format_duration(result.elapsed));
}

/// Print the analysis of a snapshot
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SNAPSHOT ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if !result.boards.is_empty() {
        println!("\n🧩 {}", "Visible boards:".bright_cyan().bold());
        for (index, board) in result.boards.iter().enumerate() {
            let row = board
                .last_row
                .map_or_else(String::new, |(guess, feedback)| colored_row(&guess, &feedback));
            let sample: Vec<String> = board.sample.iter().map(ToString::to_string).collect();
            let count = if board.candidates == 0 {
                "none".red().to_string()
            } else {
                board.candidates.to_string()
            };
            println!("  {index:>3} {row}  {count:>5}  {}", sample.join(" ").bright_black());
        }
    }

    println!("\n📦 {}", "Unseen boards:".bright_cyan().bold());
    println!("   Boards:       {}", result.pile_count);
    println!("   Pile words:   {}", result.pile_len);
    println!("   Score cap:    {}", result.pile_cap);
    println!("   Current:      {:.3}", result.current_score);

    println!("\n🎯 {}", "Best guesses:".bright_cyan().bold());
    let best = result.top.first().map_or(0.0, |g| g.score);
    for (rank, guess) in result.top.iter().enumerate() {
        let bar = create_progress_bar(guess.score, best, 30);
        println!(
            "  {:>3}. {}  [{}] {}",
            rank + 1,
            guess.word.to_string().to_uppercase(),
            bar.green(),
            format!("{:.3}", guess.score).bright_yellow()
        );
    }
    if best > 0.0 {
        let per_board = best / (result.boards.len() + result.pile_count) as f64;
        println!("\n   Per board:    {per_board:.2} of {MAX_SCORE}");
    }
}

/// Print the summary of a simulated game
pub fn print_simulation_result(result: &SimulationResult) {
    let turns = result.summary.turns();
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Game:".bright_cyan().bold());
    println!("   Boards:           {}", result.config.boards);
    println!("   Visible at once:  {}", result.config.visible);
    println!("   Seed:             {}", result.config.seed);

    println!("\n📈 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Guesses:          {}",
        turns.to_string().bright_yellow().bold()
    );
    let rate = result.boards_per_guess();
    let rate_text = format!("{rate:.2}");
    println!(
        "   Boards per guess: {}",
        if rate >= 1.0 {
            rate_text.green()
        } else {
            rate_text.yellow()
        }
    );
    if let Some(turn) = result.all_visible_turn {
        println!("   All visible from: turn {turn}");
    }
    println!("   Total time:       {}", format_duration(result.total_time));
    println!("   Slowest pick:     {}", format_duration(result.slowest_turn));
    if turns > 0 {
        println!(
            "   Time per guess:   {}",
            format_duration(result.total_time / u32::try_from(turns).unwrap_or(u32::MAX))
        );
    }

    println!(
        "\n{}",
        format!("✅ Solved {} boards in {turns} guesses!", result.config.boards)
            .green()
            .bold()
    );
}
