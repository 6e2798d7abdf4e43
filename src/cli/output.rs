//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::BoardState;

/// Create a progress bar for strategy comparison
pub fn create_match_progress(total_games: u64) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print the board with position numbers in empty cells
pub fn print_board_with_positions(board: &BoardState) {
    println!();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let pos = row * 3 + col;
                if board.is_empty(pos) {
                    pos.to_string()
                } else {
                    board.get(pos).to_char().to_string()
                }
            })
            .collect();
        println!("  {} | {} | {}", cells[0], cells[1], cells[2]);
        if row < 2 {
            println!(" ---+---+---");
        }
    }
    println!();
}

/// Percentage of `part` in `total`, zero when `total` is zero
pub fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
