//! Display functions for command results

use colored::Colorize;

use crate::commands::{FilterReport, FilterRequest};

const COLUMNS: usize = 8;

/// Print a one-shot filter run: the constraints, then the surviving words
pub fn print_filter_report(request: &FilterRequest, report: &FilterReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Constraints");
    println!("{}", "─".repeat(60).cyan());

    if request.excluded.is_empty() && request.correct.is_empty() && request.present.is_empty() {
        println!("  (none)");
    }
    if !request.excluded.is_empty() {
        let letters: String = request
            .excluded
            .iter()
            .map(|&l| (l as char).to_ascii_uppercase())
            .collect();
        println!("  Absent:  {}", letters.dimmed());
    }
    for &(letter, slot) in &request.correct {
        println!(
            "  Correct: {} at slot {slot}",
            (letter as char).to_string().to_uppercase().green().bold()
        );
    }
    for &(letter, slot) in &request.present {
        println!(
            "  Present: {} but not at slot {slot}",
            (letter as char).to_string().to_uppercase().yellow().bold()
        );
    }

    println!();
    if report.matches.is_empty() {
        println!("{}", "No candidates match.".red().bold());
    } else {
        println!(
            "{} of {} candidates match:\n",
            report.matches.len().to_string().green().bold(),
            report.total
        );
        for row in report.matches.chunks(COLUMNS) {
            let line: Vec<String> = row.iter().map(|w| w.to_uppercase()).collect();
            println!("  {}", line.join("  "));
        }
    }
    println!();
}
