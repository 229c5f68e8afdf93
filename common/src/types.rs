//! 共通型定義
//!
//! HttpMethod, EndpointGroup, EndpointRecord等のコアデータ型

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CommonError;

/// Params行の区切り文字
pub const PARAMS_SEPARATOR: &str = ", ";

/// HTTPメソッド
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// HttpMethodを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            _ => Err(CommonError::Validation(format!("unknown HTTP method: {}", s))),
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// エンドポイントの分類
///
/// 移行作業をまとめて進める単位。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EndpointGroup {
    /// 拠出金
    Contributions,
    /// 経費
    Expenses,
    /// メンバー承認・削除
    Members,
    /// 予算
    Budget,
}

impl EndpointGroup {
    /// 全グループ（一覧の並び順）
    pub const ALL: [EndpointGroup; 4] = [
        Self::Contributions,
        Self::Expenses,
        Self::Members,
        Self::Budget,
    ];

    /// EndpointGroupを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contributions => "contributions",
            Self::Expenses => "expenses",
            Self::Members => "members",
            Self::Budget => "budget",
        }
    }
}

impl FromStr for EndpointGroup {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CommonError::Validation(format!("unknown endpoint group: {}", s)))
    }
}

impl std::fmt::Display for EndpointGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// エンドポイント定義
///
/// 表示専用のデータ。`path`のプレースホルダー（`:id`等）は解釈しない。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct EndpointRecord {
    /// 所属グループ
    pub group: EndpointGroup,
    /// HTTPメソッド
    pub method: HttpMethod,
    /// パステンプレート
    pub path: &'static str,
    /// リクエストパラメータ名（順序保持）
    pub params: &'static [&'static str],
}

impl EndpointRecord {
    /// 新しいエンドポイント定義を作成
    pub const fn new(
        group: EndpointGroup,
        method: HttpMethod,
        path: &'static str,
        params: &'static [&'static str],
    ) -> Self {
        Self {
            group,
            method,
            path,
            params,
        }
    }

    /// `"{method} {path}"`
    pub fn route_line(&self) -> String {
        format!("{} {}", self.method, self.path)
    }

    /// パラメータ名を `", "` で連結
    pub fn params_line(&self) -> String {
        self.params.join(PARAMS_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_http_method_from_str() {
        assert_eq!("GET".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("delete".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
        assert!("FETCH".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_http_method_serialization() {
        let json = serde_json::to_string(&HttpMethod::Post).unwrap();
        assert_eq!(json, "\"POST\"");

        let method: HttpMethod = serde_json::from_str("\"PATCH\"").unwrap();
        assert_eq!(method, HttpMethod::Patch);
    }

    #[test]
    fn test_endpoint_group_from_str() {
        assert_eq!("budget".parse::<EndpointGroup>().unwrap(), EndpointGroup::Budget);
        assert_eq!("Members".parse::<EndpointGroup>().unwrap(), EndpointGroup::Members);

        let err = "trips".parse::<EndpointGroup>().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: unknown endpoint group: trips");
    }

    #[test]
    fn test_endpoint_group_display_roundtrips_through_from_str() {
        for group in EndpointGroup::ALL {
            assert_eq!(group.to_string().parse::<EndpointGroup>().unwrap(), group);
        }
    }

    #[test]
    fn test_record_lines() {
        let record = EndpointRecord::new(
            EndpointGroup::Budget,
            HttpMethod::Delete,
            "/api/budget/request/:id",
            &["tripCode", "id"],
        );

        assert_eq!(record.route_line(), "DELETE /api/budget/request/:id");
        assert_eq!(record.params_line(), "tripCode, id");
    }

    #[test]
    fn test_record_with_no_params() {
        let record =
            EndpointRecord::new(EndpointGroup::Expenses, HttpMethod::Get, "/api/expenses", &[]);
        assert_eq!(record.params_line(), "");
    }

    #[test]
    fn test_record_serialization() {
        let record = EndpointRecord::new(
            EndpointGroup::Members,
            HttpMethod::Post,
            "/api/members/refund",
            &["tripCode", "id", "amount"],
        );
        let value = serde_json::to_value(record).unwrap();

        assert_eq!(value["group"], "members");
        assert_eq!(value["method"], "POST");
        assert_eq!(value["path"], "/api/members/refund");
        assert_eq!(value["params"], serde_json::json!(["tripCode", "id", "amount"]));
    }

    proptest! {
        #[test]
        fn params_line_keeps_order_without_trailing_separator(
            params in proptest::collection::vec("[a-zA-Z][a-zA-Z0-9]{0,12}", 1..8)
        ) {
            let leaked: Vec<&'static str> = params
                .iter()
                .map(|p| -> &'static str { Box::leak(p.clone().into_boxed_str()) })
                .collect();
            let record = EndpointRecord::new(
                EndpointGroup::Contributions,
                HttpMethod::Post,
                "/api/contributions/request",
                Box::leak(leaked.into_boxed_slice()),
            );
            let line = record.params_line();

            prop_assert!(!line.ends_with(PARAMS_SEPARATOR));
            let split: Vec<&str> = line.split(PARAMS_SEPARATOR).collect();
            prop_assert_eq!(split, params.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
