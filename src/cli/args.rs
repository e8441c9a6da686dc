use clap::{CommandFactory, Parser};
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::core::{RunConfig, StatsFormat, StatsLevel, WriteMode};

/// 入力ファイルとして扱うトークンの拡張子
const INPUT_SUFFIX: &str = ".txt";

#[derive(Parser, Debug)]
#[command(name = "data_filter")]
#[command(about = "Sort the lines of text files into integers, floats and strings")]
#[command(version)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Input files; only arguments ending in `.txt` are read, others are ignored
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Directory for the output files
    #[arg(
        short = 'o',
        long = "output-dir",
        default_value = ".",
        env = "DATA_FILTER_OUTPUT_DIR",
        allow_hyphen_values = true
    )]
    pub output_dir: PathBuf,

    /// Prefix prepended to every output file name
    #[arg(
        short = 'p',
        long,
        env = "DATA_FILTER_PREFIX",
        allow_hyphen_values = true
    )]
    pub prefix: Option<String>,

    /// Append to existing output files instead of overwriting them
    #[arg(short = 'a', long)]
    pub append: bool,

    /// Print short statistics (counts only)
    #[arg(short = 's', long = "short-stats")]
    pub short_stats: bool,

    /// Print full statistics (min, max, sum and average, or string lengths)
    #[arg(short = 'f', long = "full-stats")]
    pub full_stats: bool,

    /// Format of the statistics report
    #[arg(long, value_enum, default_value_t = StatsFormat::Text)]
    pub stats_format: StatsFormat,

    /// Report every file read and written on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// プロセスの引数を解析する。失敗時は clap の使い方表示で終了する
    pub fn parse_lenient() -> Self {
        Self::try_parse_lenient(std::env::args_os()).unwrap_or_else(|error| error.exit())
    }

    /// 未知のハイフン付きトークンを拒否せずに解析する
    ///
    /// 既知のオプション（とその値）以外のトークンはすべて `--` の後ろへ
    /// 元の順序のまま移し、位置引数として受け取る。`-x` のような未知の
    /// フラグは `.txt` で終わらないので無視され、`-data.txt` は入力になる。
    pub fn try_parse_lenient<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let bin = args.next();
        let tokens = OptionTable::from_command().partition(args);

        if tokens.missing_value {
            // 値のないオプションは clap に報告させる
            return Self::try_parse_from(bin.into_iter().chain(tokens.options));
        }
        Self::try_parse_from(
            bin.into_iter()
                .chain(tokens.options)
                .chain(std::iter::once(OsString::from("--")))
                .chain(tokens.bare),
        )
    }

    /// 入力ファイルとして採用するトークンと無視するトークンに分ける
    pub fn split_files(&self) -> (Vec<PathBuf>, Vec<&str>) {
        let mut inputs = Vec::new();
        let mut ignored = Vec::new();
        for token in &self.files {
            if token.ends_with(INPUT_SUFFIX) {
                inputs.push(PathBuf::from(token));
            } else {
                ignored.push(token.as_str());
            }
        }
        (inputs, ignored)
    }

    /// 実行設定に変換する
    pub fn to_config(&self) -> RunConfig {
        let (inputs, ignored) = self.split_files();
        for token in ignored {
            tracing::debug!(token, "ignoring argument without .txt suffix");
        }

        let write_mode = if self.append {
            WriteMode::Append
        } else {
            WriteMode::Overwrite
        };

        RunConfig::new()
            .with_inputs(inputs)
            .with_output_dir(self.output_dir.clone())
            .with_prefix(self.prefix.clone().unwrap_or_default())
            .with_write_mode(write_mode)
            .with_stats(StatsLevel::from_flags(self.short_stats, self.full_stats))
            .with_stats_format(self.stats_format)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    /// 値を取らないオプション、または値が同じトークンに含まれるもの
    Option,
    /// 次のトークンを値として取るオプション
    OptionWithValue,
    Bare,
}

/// 並べ替え前のトークンの振り分け結果
struct PartitionedArgs {
    options: Vec<OsString>,
    bare: Vec<OsString>,
    /// 最後のオプションが値を必要とするのに引数が尽きた
    missing_value: bool,
}

/// `Cli` が定義するオプション名と、値を取るかどうか
struct OptionTable {
    shorts: HashMap<char, bool>,
    longs: HashMap<String, bool>,
}

impl OptionTable {
    fn from_command() -> Self {
        let mut command = Cli::command();
        // --help / --version はビルド時に追加される
        command.build();

        let mut shorts = HashMap::new();
        let mut longs = HashMap::new();
        for arg in command.get_arguments().filter(|arg| !arg.is_positional()) {
            let takes_value = arg.get_action().takes_values();
            if let Some(short) = arg.get_short() {
                shorts.insert(short, takes_value);
            }
            if let Some(long) = arg.get_long() {
                longs.insert(long.to_string(), takes_value);
            }
        }
        Self { shorts, longs }
    }

    /// オプション（値を含む）と、それ以外のトークンに分ける
    fn partition(&self, mut args: impl Iterator<Item = OsString>) -> PartitionedArgs {
        let mut options = Vec::new();
        let mut bare = Vec::new();
        let mut missing_value = false;

        while let Some(token) = args.next() {
            let kind = match token.to_str() {
                Some("--") => {
                    bare.extend(args.by_ref());
                    break;
                }
                Some(text) => self.kind_of(text),
                None => TokenKind::Bare,
            };
            match kind {
                TokenKind::Option => options.push(token),
                TokenKind::OptionWithValue => {
                    options.push(token);
                    match args.next() {
                        Some(value) => options.push(value),
                        None => missing_value = true,
                    }
                }
                TokenKind::Bare => bare.push(token),
            }
        }
        PartitionedArgs {
            options,
            bare,
            missing_value,
        }
    }

    fn kind_of(&self, token: &str) -> TokenKind {
        if let Some(long) = token.strip_prefix("--") {
            let (name, inline_value) = match long.split_once('=') {
                Some((name, _)) => (name, true),
                None => (long, false),
            };
            return match self.longs.get(name) {
                Some(true) if !inline_value => TokenKind::OptionWithValue,
                Some(_) => TokenKind::Option,
                None => TokenKind::Bare,
            };
        }

        let Some(cluster) = token.strip_prefix('-') else {
            return TokenKind::Bare;
        };
        if cluster.is_empty() {
            return TokenKind::Bare;
        }
        // `-sa` のような短いフラグの連結。値を取るフラグ以降はその値
        for (index, short) in cluster.char_indices() {
            match self.shorts.get(&short) {
                None => return TokenKind::Bare,
                Some(false) => {}
                Some(true) if index + short.len_utf8() == cluster.len() => {
                    return TokenKind::OptionWithValue
                }
                Some(true) => return TokenKind::Option,
            }
        }
        TokenKind::Option
    }
}
