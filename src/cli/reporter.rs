// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::geometry::{Line, Relation};
use crate::query::{Answer, Coords, Query};
use colored::*;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report the answer to one query
    pub fn report_answer(index: usize, query: &Query, answer: &Answer) {
        println!(
            "{} {}",
            format!("[{}]", index + 1).bright_black(),
            query.name().bold()
        );
        println!("  {}", Self::format_answer(answer));
    }

    /// Report a query that could not be evaluated
    pub fn report_failure(index: usize, query: &Query, message: &str) {
        println!(
            "{} {}",
            format!("[{}]", index + 1).bright_black(),
            query.name().bold()
        );
        println!("  {} {}", "❌".red(), message.red());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    /// Print summary line
    pub fn summary(evaluated: usize, failed: usize) {
        let line = format!("{} evaluated, {} failed", evaluated, failed);
        if failed == 0 {
            println!("\n{} {}", "✅".green(), line.green());
        } else {
            println!("\n{} {}", "⚠️ ".yellow(), line.yellow());
        }
    }

    fn format_answer(answer: &Answer) -> String {
        match answer {
            Answer::Relation { relation } => Self::format_relation(*relation),
            Answer::Point { point: Some(p) } => format!("point {}", Self::format_coords(p)),
            Answer::Point { point: None } => "no unique intersection point".yellow().to_string(),
            Answer::Line { line: Some(line) } => Self::format_line(line),
            Answer::Line { line: None } => "no intersection line".yellow().to_string(),
            Answer::Distance { distance } => format!("distance {:.6}", distance),
            Answer::Vector { vector } => format!("vector {}", Self::format_coords(vector)),
        }
    }

    fn format_relation(relation: Relation) -> String {
        let text = relation.to_string();
        match relation {
            Relation::Intersect | Relation::Containing | Relation::IdenticalOrMultiple => {
                text.green().to_string()
            }
            Relation::Orthogonal => text.cyan().to_string(),
            Relation::Skew | Relation::Parallel => text.yellow().to_string(),
        }
    }

    fn format_line(line: &Line) -> String {
        let p = line.point();
        let d = line.direction();
        format!(
            "line through {} along {}",
            Self::format_coords(&[p.x, p.y, p.z]),
            Self::format_coords(&[d.x, d.y, d.z])
        )
    }

    fn format_coords(c: &Coords) -> String {
        format!("({:.6}, {:.6}, {:.6})", c[0], c[1], c[2])
    }
}
