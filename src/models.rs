// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub item: String,
    pub price: i64,
    pub category: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Income {
    pub id: i64,
    pub source: String,
    pub amount: i64,
    pub created_at: NaiveDateTime,
}

/// Recurring monthly obligation. Counted in every cycle regardless of when it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedExpense {
    pub id: i64,
    pub name: String,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub id: i64,
    pub keyword: String,
    pub category: String,
}

/// An expense as understood from free text, before it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedExpense {
    pub item: String,
    pub price: i64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedIncome {
    pub source: String,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub cycle_start: NaiveDate,
    pub cycle_end: NaiveDate, // exclusive
    pub initial_balance: i64,
    pub salary_income: i64,
    pub other_income: i64,
    pub expense_total: i64,
    pub fixed_total: i64,
    pub current_balance: i64,
    pub projected_balance: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpend {
    pub category: String,
    pub total: i64,
    pub count: i64,
}
