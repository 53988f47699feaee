// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Keyword-based expense classification.
//!
//! Rules are an ordered list of `(category, keywords)`. A label gets the first
//! category that has any keyword occurring in it; later categories are never
//! consulted once one matches, even if they would match "better".

use anyhow::Result;
use rusqlite::Connection;

pub const DEFAULT_CATEGORY: &str = "その他";

const BUILTIN_RULES: &[(&str, &[&str])] = &[
    (
        "食費",
        &[
            "スーパー", "コンビニ", "パン", "弁当", "ランチ", "朝食", "昼食", "夕食", "外食",
            "カフェ", "コーヒー", "食材", "野菜", "牛乳",
        ],
    ),
    (
        "交通費",
        &["電車", "バス", "タクシー", "切符", "定期", "新幹線", "ガソリン", "駐車"],
    ),
    (
        "日用品",
        &[
            "洗剤", "ティッシュ", "トイレットペーパー", "シャンプー", "歯ブラシ",
            "ドラッグストア", "日用品",
        ],
    ),
    (
        "交際費",
        &["プレゼント", "飲み会", "友達", "誕生日", "お祝い", "贈り物"],
    ),
    (
        "自己投資",
        &["参考書", "書籍", "本屋", "文庫", "セミナー", "講座", "資格", "教材"],
    ),
    (
        "趣味・娯楽",
        &["映画", "ゲーム", "漫画", "カラオケ", "ライブ", "旅行", "音楽"],
    ),
    (
        "光熱・通信費",
        &["電気代", "ガス代", "水道", "携帯", "スマホ", "インターネット", "Wi-Fi"],
    ),
    ("医療費", &["病院", "薬", "歯医者", "診察", "クリニック"]),
];

#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<(String, Vec<String>)>,
}

impl Classifier {
    pub fn new(rules: Vec<(String, Vec<String>)>) -> Self {
        Self { rules }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_rules())
    }

    /// User rules from `keyword_rules` (oldest first) ahead of the built-in table.
    pub fn load(conn: &Connection) -> Result<Self> {
        let mut stmt = conn.prepare("SELECT keyword, category FROM keyword_rules ORDER BY id")?;
        let rows = stmt.query_map([], |r| Ok((r.get::<_, String>(0)?, r.get::<_, String>(1)?)))?;

        let mut rules: Vec<(String, Vec<String>)> = Vec::new();
        for row in rows {
            let (keyword, category) = row?;
            match rules.iter().position(|(c, _)| *c == category) {
                Some(i) => rules[i].1.push(keyword),
                None => rules.push((category, vec![keyword])),
            }
        }
        tracing::debug!(user_categories = rules.len(), "loaded keyword rules");
        rules.extend(builtin_rules());
        Ok(Self::new(rules))
    }

    pub fn classify(&self, label: &str) -> &str {
        self.rules
            .iter()
            .find(|(_, kws)| kws.iter().any(|k| !k.is_empty() && label.contains(k.as_str())))
            .map_or(DEFAULT_CATEGORY, |(c, _)| c.as_str())
    }

    /// Closed category vocabulary in rule order, ending with the default.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for (c, _) in &self.rules {
            if !out.contains(&c.as_str()) {
                out.push(c.as_str());
            }
        }
        if !out.contains(&DEFAULT_CATEGORY) {
            out.push(DEFAULT_CATEGORY);
        }
        out
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_rules() -> Vec<(String, Vec<String>)> {
    BUILTIN_RULES
        .iter()
        .map(|(c, kws)| (c.to_string(), kws.iter().map(|k| k.to_string()).collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_examples() {
        let c = Classifier::builtin();
        assert_eq!(c.classify("近所のスーパーで買い物"), "食費");
        assert_eq!(c.classify("参考書を買った"), "自己投資");
        assert_eq!(c.classify("友達へのプレゼント"), "交際費");
    }

    #[test]
    fn earlier_category_wins() {
        let c = Classifier::new(vec![
            ("A".into(), vec!["x".into()]),
            ("B".into(), vec!["xy".into()]),
        ]);
        assert_eq!(c.classify("xyz"), "A");
    }

    #[test]
    fn vocabulary_ends_with_default() {
        let c = Classifier::builtin();
        let cats = c.categories();
        assert_eq!(cats.first(), Some(&"食費"));
        assert_eq!(cats.last(), Some(&DEFAULT_CATEGORY));
    }
}
