use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One stream definition as read from a config file
///
/// Every field is optional at this level so that missing values surface
/// as `MissingField` when the record is turned into an entry. Unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamRecord {
    /// Entry title
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: Option<String>,

    /// Stream URL or file path
    #[serde(default, deserialize_with = "scalar_text")]
    pub url: Option<String>,

    /// Selection tags
    #[serde(default)]
    pub tags: Option<Vec<String>>,

    /// Play length, unknown when absent
    #[serde(default)]
    pub length: Option<i64>,
}

impl StreamRecord {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            url: Some(url.into()),
            ..Self::default()
        }
    }
}

/// Read a scalar as text so that `name: 538` or `name: 1992` survive
///
/// Null stays `None`; sequences and mappings are rejected.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string, number or bool, found {}",
            other
        ))),
    }
}
