// コアレイヤー - 分類結果の型、実行設定、エラー定義
// 他のレイヤーから参照される基本的な型を提供

pub mod config;
pub mod error;
pub mod types;

// 公開API
pub use config::{RunConfig, StatsFormat, StatsLevel, WriteMode};
pub use error::{FilterError, FilterResult};
pub use types::{render_float, Category, ClassifiedValue};
