// CLI層 - コマンドライン引数の定義と実行
// ユーザーインターフェースとアプリケーションロジックの橋渡し

pub mod args;
pub mod run;

// 公開API
pub use args::*;
pub use run::*;
