// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use moneylite::classifier::{Classifier, DEFAULT_CATEGORY};
use moneylite::commands::rules::add_rule;
use moneylite::db;
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

#[test]
fn empty_rule_table_always_defaults() {
    let c = Classifier::new(Vec::new());
    assert_eq!(c.classify("コンビニでパン"), DEFAULT_CATEGORY);
    assert_eq!(c.categories(), vec![DEFAULT_CATEGORY]);
}

#[test]
fn no_keyword_match_defaults() {
    let c = Classifier::builtin();
    assert_eq!(c.classify("よくわからないもの"), DEFAULT_CATEGORY);
    assert_eq!(c.classify(""), DEFAULT_CATEGORY);
}

#[test]
fn first_category_in_order_wins_over_later_ones() {
    // 友達とランチ hits both 食費 (ランチ) and 交際費 (友達); 食費 comes first.
    let c = Classifier::builtin();
    assert_eq!(c.classify("友達とランチ"), "食費");
}

#[test]
fn load_without_user_rules_matches_builtin() {
    let conn = setup();
    let c = Classifier::load(&conn).unwrap();
    assert_eq!(c.categories(), Classifier::builtin().categories());
}

#[test]
fn user_rules_take_precedence() {
    let conn = setup();
    add_rule(&conn, "ランチ", "交際費").unwrap();
    add_rule(&conn, "ジム", "健康").unwrap();

    let c = Classifier::load(&conn).unwrap();
    assert_eq!(c.classify("同僚とランチ"), "交際費");
    assert_eq!(c.classify("ジムの月会費"), "健康");
    assert_eq!(c.classify("コンビニでパン"), "食費");

    let cats = c.categories();
    assert_eq!(cats[0], "交際費");
    assert_eq!(cats[1], "健康");
    assert_eq!(cats.iter().filter(|c| **c == "交際費").count(), 1);
    assert_eq!(cats.last(), Some(&DEFAULT_CATEGORY));
}
