// SPDX-FileCopyrightText: 2026 Open Baby contributors
//
// SPDX-License-Identifier: Apache-2.0

use colored::Colorize;
use openbaby_core::{Notice, Notifier, Severity};

/// Terminal notification sink: success and error notices become colored
/// stdout lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermNotifier;

impl TermNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TermNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Success => match notice.description {
                Some(description) => {
                    println!("{} {}: {}", "✓".green(), notice.title.green(), description);
                }
                None => println!("{} {}", "✓".green(), notice.title.green()),
            },
            Severity::Error => {
                let description = notice.description.unwrap_or_default();
                println!("{} {}", format!("{}:", notice.title).red(), description);
            }
        }
    }
}
