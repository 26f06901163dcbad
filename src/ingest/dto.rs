use serde::{Deserialize, Deserializer, Serialize};

use super::repo::UserData;

/// Body of `POST /ingest`. All fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct UserDataRequest {
    pub name: String,
    #[serde(deserialize_with = "deserialize_int_lenient")]
    pub age: i32,
    pub city: String,
}

/// Accepts a JSON integer or a string holding one (`36` or `"36"`).
fn deserialize_int_lenient<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i32),
        Str(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(v) => Ok(v),
        IntOrString::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Response envelope, tagged by `status`.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum IngestResponse {
    Success { data: UserData },
    Error { message: String },
}
