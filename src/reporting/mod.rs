// 実行中の報告と統計
//
// - traits.rs          - ファイル単位のイベント報告トレイト
// - implementations.rs - コンソール出力・何もしない実装
// - statistics.rs      - 統計の集計とテキスト/JSON表示

pub mod implementations;
pub mod statistics;
pub mod traits;

#[cfg(test)]
pub mod test_mocks;

// 公開API
pub use implementations::{ConsoleRunReporter, NoOpRunReporter};
pub use statistics::{FloatStats, IntegerStats, Statistics, StringStats};
pub use traits::RunReporter;

// テストモック（テスト時のみ）
#[cfg(test)]
pub use test_mocks::*;
