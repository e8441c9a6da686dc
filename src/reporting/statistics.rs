// 統計の集計と表示
// 空のコレクションはブロックごと省略する

use serde::Serialize;
use serde_json::{json, Map, Value};
use std::fmt::Write as _;

use crate::aggregation::RunState;
use crate::core::{render_float, Category, FilterError, FilterResult, StatsLevel};

/// 整数の統計
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegerStats {
    pub count: usize,
    pub min: i64,
    pub max: i64,
    /// オーバーフローしないよう `i128` で正確に合計する
    pub sum: i128,
    pub mean: f64,
}

impl IntegerStats {
    pub fn compute(values: &[i64]) -> Option<Self> {
        let min = *values.iter().min()?;
        let max = *values.iter().max()?;
        let sum: i128 = values.iter().map(|&v| i128::from(v)).sum();
        Some(Self {
            count: values.len(),
            min,
            max,
            sum,
            mean: sum as f64 / values.len() as f64,
        })
    }
}

/// 浮動小数点数の統計
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloatStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub mean: f64,
}

impl FloatStats {
    /// 最小・最大は IEEE-754 の全順序（`f64::total_cmp`）で決める
    pub fn compute(values: &[f64]) -> Option<Self> {
        let min = values.iter().copied().min_by(f64::total_cmp)?;
        let max = values.iter().copied().max_by(f64::total_cmp)?;
        let sum: f64 = values.iter().sum();
        Some(Self {
            count: values.len(),
            min,
            max,
            sum,
            mean: sum / values.len() as f64,
        })
    }
}

/// 文字列の統計（長さは Unicode スカラー値の数）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StringStats {
    pub count: usize,
    pub shortest: usize,
    pub longest: usize,
}

impl StringStats {
    pub fn compute(values: &[String]) -> Option<Self> {
        let lengths = values.iter().map(|s| s.chars().count());
        let (shortest, longest) = lengths.fold(None, |acc: Option<(usize, usize)>, len| {
            Some(match acc {
                None => (len, len),
                Some((lo, hi)) => (lo.min(len), hi.max(len)),
            })
        })?;
        Some(Self {
            count: values.len(),
            shortest,
            longest,
        })
    }
}

/// 全カテゴリの統計。空のカテゴリは `None`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Statistics {
    pub integers: Option<IntegerStats>,
    pub floats: Option<FloatStats>,
    pub strings: Option<StringStats>,
}

impl Statistics {
    pub fn compute(state: &RunState) -> Self {
        Self {
            integers: IntegerStats::compute(&state.integers),
            floats: FloatStats::compute(&state.floats),
            strings: StringStats::compute(&state.strings),
        }
    }

    /// 人間向けのテキスト表示。`StatsLevel::None` なら空文字列
    pub fn render_text(&self, level: StatsLevel) -> String {
        if level == StatsLevel::None {
            return String::new();
        }
        let full = level == StatsLevel::Full;

        let mut out = String::from("Statistics:\n");
        if let Some(stats) = &self.integers {
            push_header(&mut out, Category::Integers, stats.count);
            if full {
                push_field(&mut out, "Min", stats.min);
                push_field(&mut out, "Max", stats.max);
                push_field(&mut out, "Sum", stats.sum);
                push_field(&mut out, "Average", render_float(stats.mean));
            }
        }
        if let Some(stats) = &self.floats {
            push_header(&mut out, Category::Floats, stats.count);
            if full {
                push_field(&mut out, "Min", render_float(stats.min));
                push_field(&mut out, "Max", render_float(stats.max));
                push_field(&mut out, "Sum", render_float(stats.sum));
                push_field(&mut out, "Average", render_float(stats.mean));
            }
        }
        if let Some(stats) = &self.strings {
            push_header(&mut out, Category::Strings, stats.count);
            if full {
                push_field(&mut out, "Shortest length", stats.shortest);
                push_field(&mut out, "Longest length", stats.longest);
            }
        }
        out
    }

    /// JSON表示。`StatsLevel::None` なら `None`
    ///
    /// 簡易表示では各ブロックに `count` のみを含める。非有限の浮動小数点数は
    /// `null` になる。
    pub fn to_json(&self, level: StatsLevel) -> FilterResult<Option<String>> {
        if level == StatsLevel::None {
            return Ok(None);
        }

        let mut report = Map::new();
        if let Some(stats) = &self.integers {
            report.insert(
                key(Category::Integers),
                block_json(stats, stats.count, level)?,
            );
        }
        if let Some(stats) = &self.floats {
            report.insert(key(Category::Floats), block_json(stats, stats.count, level)?);
        }
        if let Some(stats) = &self.strings {
            report.insert(
                key(Category::Strings),
                block_json(stats, stats.count, level)?,
            );
        }

        serde_json::to_string_pretty(&Value::Object(report))
            .map(Some)
            .map_err(FilterError::stats_render)
    }

    /// 統計ブロックが一つもないか
    pub fn is_empty(&self) -> bool {
        self.integers.is_none() && self.floats.is_none() && self.strings.is_none()
    }
}

fn push_header(out: &mut String, category: Category, count: usize) {
    let _ = writeln!(out, "{}:", category.label());
    push_field(out, "Count", count);
}

fn push_field(out: &mut String, name: &str, value: impl std::fmt::Display) {
    let _ = writeln!(out, "  {name}: {value}");
}

fn key(category: Category) -> String {
    category.label().to_lowercase()
}

fn block_json<T: Serialize>(stats: &T, count: usize, level: StatsLevel) -> FilterResult<Value> {
    if level == StatsLevel::Full {
        serde_json::to_value(stats).map_err(FilterError::stats_render)
    } else {
        Ok(json!({ "count": count }))
    }
}
