// 分類結果に関連するデータ型定義

use serde::Serialize;

/// 1行を分類した結果
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl ClassifiedValue {
    /// 格納先のカテゴリ
    pub fn category(&self) -> Category {
        match self {
            Self::Integer(_) => Category::Integers,
            Self::Float(_) => Category::Floats,
            Self::Text(_) => Category::Strings,
        }
    }

    /// 出力ファイルに書き込む正規の文字列表現
    pub fn render(&self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => render_float(*value),
            Self::Text(text) => text.clone(),
        }
    }
}

/// 浮動小数点数の正規表現
///
/// 最短の往復可能な表現を使い、有限値は常に小数点か指数を含む
/// (`2.0`, `10000000000.0`, `1e300`)。非有限値は `NaN`, `Infinity`,
/// `-Infinity` と書き、読み戻すと再び浮動小数点数になる。
pub fn render_float(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_negative() { "-Infinity" } else { "Infinity" }.to_string()
    } else {
        format!("{value:?}")
    }
}

/// 出力の振り分け先
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Integers,
    Floats,
    Strings,
}

impl Category {
    /// 書き込み・統計表示の固定順序
    pub const ALL: [Category; 3] = [Category::Integers, Category::Floats, Category::Strings];

    /// プレフィックスを付ける前の出力ファイル名
    pub const fn base_filename(&self) -> &'static str {
        match self {
            Self::Integers => "integers.txt",
            Self::Floats => "floats.txt",
            Self::Strings => "strings.txt",
        }
    }

    /// 統計ブロックの見出し
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Integers => "Integers",
            Self::Floats => "Floats",
            Self::Strings => "Strings",
        }
    }
}
