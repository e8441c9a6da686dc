// 分類結果の集約
// 3つのコレクションに入力順を保ったまま追加していく

use crate::classifier::classify;
use crate::core::{render_float, Category, ClassifiedValue};

/// 1回の実行で蓄積される全状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunState {
    pub integers: Vec<i64>,
    pub floats: Vec<f64>,
    pub strings: Vec<String>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 分類済みの値を対応するコレクションに追加
    pub fn push(&mut self, value: ClassifiedValue) {
        match value {
            ClassifiedValue::Integer(v) => self.integers.push(v),
            ClassifiedValue::Float(v) => self.floats.push(v),
            ClassifiedValue::Text(v) => self.strings.push(v),
        }
    }

    /// ファイル内容を行ごとに分類して追加し、処理した行数を返す
    ///
    /// 行区切りは `\n` と `\r\n`。末尾の改行の後に空行は生じない。
    pub fn ingest_text(&mut self, text: &str) -> usize {
        let mut lines = 0;
        for line in text.lines() {
            self.push(classify(line));
            lines += 1;
        }
        lines
    }

    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::Integers => self.integers.len(),
            Category::Floats => self.floats.len(),
            Category::Strings => self.strings.len(),
        }
    }

    pub fn total_lines(&self) -> usize {
        self.integers.len() + self.floats.len() + self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_lines() == 0
    }

    /// カテゴリの各要素を出力用の文字列に変換（順序は保持）
    pub fn rendered(&self, category: Category) -> Vec<String> {
        match category {
            Category::Integers => self.integers.iter().map(i64::to_string).collect(),
            Category::Floats => self.floats.iter().copied().map(render_float).collect(),
            Category::Strings => self.strings.clone(),
        }
    }
}

impl Extend<ClassifiedValue> for RunState {
    fn extend<T: IntoIterator<Item = ClassifiedValue>>(&mut self, iter: T) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<ClassifiedValue> for RunState {
    fn from_iter<T: IntoIterator<Item = ClassifiedValue>>(iter: T) -> Self {
        let mut state = Self::new();
        state.extend(iter);
        state
    }
}
