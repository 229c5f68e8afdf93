//! Endpoint Lister
//!
//! マルチトリップ移行対象のエンドポイント一覧を出力する開発者向けツール

#![warn(missing_docs)]

/// 移行対象エンドポイントの固定一覧
pub mod catalog;

/// 一覧の描画（テキスト/JSON）
pub mod render;

/// CLIインターフェース
pub mod cli;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 共通型の再エクスポート
pub use endpoint_lister_common as common;
