use serde::{Deserialize, Deserializer, Serialize};

/// A Connextar team member as listed by the Redbooth side of the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct CxUser {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "rbUserId", default, deserialize_with = "string_or_number")]
    pub rb_user_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Backend responses wrap their payload in a `data` field.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Redbooth ids come back as numbers from some endpoints and strings from others.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!("invalid rbUserId: {other}"))),
    }
}
