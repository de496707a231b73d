use crate::formatter::Formatter;
use anyhow::Result;
use smartcalc::Engine;
use std::io::{self, BufRead, Write};

/// Run the interactive shell until `quit` or end of input.
///
/// Commands are matched case-insensitively; everything else is handed to the
/// engine. `history` and `help` never mutate state; `clear` empties the
/// history and persists immediately.
pub fn run(engine: &mut Engine) -> Result<()> {
    let formatter = Formatter::default();

    println!("=== SMART CLI CALCULATOR ===");
    print!("{}", formatter.format_help());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\ncalc> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break, // EOF behaves like quit
        };
        let input = line.trim();

        match input.to_lowercase().as_str() {
            "quit" | "q" => break,
            "history" => {
                print!("{}", formatter.format_history(engine.history()));
                continue;
            }
            "help" | "h" => {
                print!("{}", formatter.format_help());
                continue;
            }
            "clear" => {
                engine.clear_history();
                println!("✅ History cleared!");
                continue;
            }
            _ => {}
        }

        match engine.evaluate(input) {
            Ok(evaluation) => print!("{}", formatter.format_evaluation(input, &evaluation)),
            Err(error) => {
                tracing::debug!(%error, "evaluation failed");
                print!("{}", formatter.format_failure(input));
            }
        }
    }

    println!("📝 Saved {} calculations", engine.session_count());
    Ok(())
}
