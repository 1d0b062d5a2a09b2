//! Todo Context - Entities

use chrono::{DateTime, FixedOffset};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Todo 主键，由数据库分配
pub type TodoId = i64;

/// 已持久化的 Todo 条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
    pub created_on: Option<DateTime<FixedOffset>>,
}

/// 创建 / 更新请求体
///
/// 请求体中的 `id` 字段会被忽略：创建时由数据库分配，更新时以路径参数为准。
/// 缺失或为 `null` 的字段取默认值（空标题、`done = false`、无创建时间）。
/// `createdOn` 可以是 RFC 3339 字符串，也可以是毫秒时间戳。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDraft {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub done: bool,

    #[serde(default, deserialize_with = "deserialize_created_on")]
    pub created_on: Option<DateTime<FixedOffset>>,
}

impl TodoDraft {
    /// 解析 JSON 请求体
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CreatedOn {
    Rfc3339(DateTime<FixedOffset>),
    EpochMillis(i64),
}

fn deserialize_created_on<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<CreatedOn>::deserialize(deserializer)? {
        None => Ok(None),
        Some(CreatedOn::Rfc3339(t)) => Ok(Some(t)),
        Some(CreatedOn::EpochMillis(ms)) => DateTime::from_timestamp_millis(ms)
            .map(|t| Some(t.fixed_offset()))
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {}", ms))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_ignores_id() {
        let draft = TodoDraft::from_json(
            br#"{"id": 42, "title": "Test-1", "done": true, "createdOn": "2015-04-23T23:10:15-07:00"}"#,
        )
        .unwrap();

        assert_eq!(draft.title, "Test-1");
        assert!(draft.done);
        assert_eq!(
            draft.created_on.unwrap().to_rfc3339(),
            "2015-04-23T23:10:15-07:00"
        );
    }

    #[test]
    fn test_draft_missing_fields_use_defaults() {
        let draft = TodoDraft::from_json(b"{}").unwrap();
        assert_eq!(draft, TodoDraft::default());
    }

    #[test]
    fn test_draft_null_fields_use_defaults() {
        let draft = TodoDraft::from_json(
            br#"{"title": null, "done": null, "createdOn": null}"#,
        )
        .unwrap();
        assert_eq!(draft, TodoDraft::default());
    }

    #[test]
    fn test_draft_accepts_epoch_millis() {
        let draft = TodoDraft::from_json(br#"{"title": "Test-1", "createdOn": 1429855815000}"#)
            .unwrap();

        assert_eq!(
            draft.created_on.unwrap().to_rfc3339(),
            "2015-04-24T06:10:15+00:00"
        );
    }

    #[test]
    fn test_draft_rejects_malformed_json() {
        assert!(TodoDraft::from_json(b"{\"title\": ").is_err());
        assert!(TodoDraft::from_json(br#"{"done": "yes"}"#).is_err());
        assert!(TodoDraft::from_json(br#"{"createdOn": "yesterday"}"#).is_err());
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let item = TodoItem {
            id: 7,
            title: "Test-1".to_string(),
            done: false,
            created_on: None,
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 7, "title": "Test-1", "done": false, "createdOn": null})
        );
    }
}
