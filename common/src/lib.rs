//! Endpoint Lister Common Library
//!
//! 共通型定義、エラー型、環境変数ヘルパー

#![warn(missing_docs)]

/// エンドポイント定義の型
pub mod types;

/// エラー型定義
pub mod error;

/// 設定管理（環境変数ヘルパー）
pub mod config;

pub use error::{CommonError, CommonResult};
pub use types::{EndpointGroup, EndpointRecord, HttpMethod};
