// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Free-text entry parsing: pulls the first amount out of a sentence such as
//! `コンビニでパン 300円` and keeps whatever is left as the label.

use crate::classifier::Classifier;
use crate::models::{ParsedExpense, ParsedIncome};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// First numeric run (ASCII or full-width digits, with either comma style as
// separators), optionally followed by a yen suffix.
static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9０-９][0-9０-９,，]*)\s*円?").expect("amount regex"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Amount '{0}' is too large")]
    AmountOutOfRange(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub label: String,
    pub amount: i64,
}

pub fn parse_entry(text: &str) -> Result<ParsedEntry, ParseError> {
    let Some(caps) = AMOUNT_RE.captures(text) else {
        return Ok(ParsedEntry {
            label: text.trim().to_string(),
            amount: 0,
        });
    };
    let whole = caps.get(0).map_or("", |m| m.as_str());
    let run = caps.get(1).map_or("", |m| m.as_str());

    let digits = normalize_digits(run);
    let amount = digits
        .parse::<i64>()
        .map_err(|_| ParseError::AmountOutOfRange(run.to_string()))?;
    let label = text.replace(whole, "").trim().to_string();
    Ok(ParsedEntry { label, amount })
}

pub fn parse_expense(text: &str, classifier: &Classifier) -> Result<ParsedExpense, ParseError> {
    let entry = parse_entry(text)?;
    let category = classifier.classify(&entry.label).to_string();
    Ok(ParsedExpense {
        item: entry.label,
        price: entry.amount,
        category,
    })
}

pub fn parse_income(text: &str) -> Result<ParsedIncome, ParseError> {
    let entry = parse_entry(text)?;
    Ok(ParsedIncome {
        source: entry.label,
        amount: entry.amount,
    })
}

/// Full-width digits become ASCII; separators are dropped.
fn normalize_digits(run: &str) -> String {
    run.chars()
        .filter_map(|c| match c {
            '0'..='9' => Some(c),
            '０'..='９' => char::from_u32(c as u32 - '０' as u32 + '0' as u32),
            _ => None,
        })
        .collect()
}
