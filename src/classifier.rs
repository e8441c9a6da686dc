// 行分類器
// 1行を整数・浮動小数点数・文字列のいずれかに分類する

use crate::core::ClassifiedValue;

/// 1行を分類する（先に一致したものを採用）
///
/// 1. 行全体が10進の `i64`（符号は任意）なら `Integer`
/// 2. 行全体が10進/指数表記の浮動小数点数、または `NaN` / `Infinity`
///    (符号は任意) なら `Float`
/// 3. それ以外は行をそのまま `Text`
///
/// 前後の空白は取り除かない。`" 42"` は文字列として扱われる。
pub fn classify(line: &str) -> ClassifiedValue {
    if let Ok(value) = line.parse::<i64>() {
        return ClassifiedValue::Integer(value);
    }

    if let Some(value) = parse_float(line) {
        return ClassifiedValue::Float(value);
    }

    ClassifiedValue::Text(line.to_string())
}

/// 10進/指数表記の浮動小数点数として解釈する
///
/// `f64::from_str` は `inf` や `nan` を大文字小文字を問わず受け付けるため、
/// 非有限値は `NaN` と `Infinity` の綴りだけを別扱いで認める。
fn parse_float(line: &str) -> Option<f64> {
    if let Some(value) = parse_non_finite(line) {
        return Some(value);
    }
    if !is_decimal_notation(line) {
        return None;
    }
    line.parse::<f64>().ok()
}

/// `[+-]? (NaN | Infinity)`（大文字小文字を区別する）
fn parse_non_finite(line: &str) -> Option<f64> {
    let (negative, word) = match line.as_bytes().first() {
        Some(b'-') => (true, &line[1..]),
        Some(b'+') => (false, &line[1..]),
        _ => (false, line),
    };
    let value = match word {
        "NaN" => f64::NAN,
        "Infinity" => f64::INFINITY,
        _ => return None,
    };
    Some(if negative { -value } else { value })
}

/// `[+-]? digits? (. digits?)? ([eE] [+-]? digits)?` で仮数部に数字を含む
fn is_decimal_notation(line: &str) -> bool {
    let bytes = line.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
