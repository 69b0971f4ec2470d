use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;

/// The API sends `{}` where an empty list is expected on some error paths.
const EMPTY_OBJECT: &[u8] = b"{}";

/// Payload types that can sit in [`Envelope::data`].
///
/// `from_empty_object` decides what the literal `{}` decodes to. List payloads
/// map it to an empty list; object payloads keep the default and treat it as
/// absent.
pub trait ResponseData: DeserializeOwned + Send + Sync + 'static {
    fn from_empty_object() -> Option<Self> {
        None
    }
}

impl<T: DeserializeOwned + Send + Sync + 'static> ResponseData for Vec<T> {
    fn from_empty_object() -> Option<Self> {
        Some(Vec::new())
    }
}

/// Wrapper every API response uses.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(bound(deserialize = "T: ResponseData", serialize = "T: Serialize"))]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(
        default = "Option::default",
        deserialize_with = "deserialize_data",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Success is decided by the code embedded in the body, not the HTTP
    /// status line.
    pub fn is_success(&self) -> bool {
        self.code < 300
    }
}

fn deserialize_data<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: ResponseData,
{
    let raw: Box<RawValue> = Deserialize::deserialize(deserializer)?;
    if raw.get().as_bytes() == EMPTY_OBJECT {
        return Ok(T::from_empty_object());
    }
    serde_json::from_str::<Option<T>>(raw.get()).map_err(D::Error::custom)
}

/// Body returned by the webhook receiver.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        code: String,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Single {
        id: i64,
    }

    impl ResponseData for Single {}

    #[test]
    fn is_success_boundaries() {
        let mut envelope: Envelope<Vec<Item>> = Envelope {
            code: 202,
            status: "accepted".into(),
            message: String::new(),
            data: None,
        };
        assert!(envelope.is_success());
        envelope.code = 299;
        assert!(envelope.is_success());
        envelope.code = 300;
        assert!(!envelope.is_success());
        envelope.code = 400;
        assert!(!envelope.is_success());
    }

    #[test]
    fn empty_object_decodes_to_empty_list() {
        let envelope: Envelope<Vec<Item>> =
            serde_json::from_str(r#"{"code":400,"status":"error","message":"bad","data":{}}"#)
                .unwrap();
        assert_eq!(envelope.data, Some(vec![]));
    }

    #[test]
    fn empty_object_is_absent_for_object_payloads() {
        let envelope: Envelope<Single> =
            serde_json::from_str(r#"{"code":400,"status":"error","message":"bad","data":{}}"#)
                .unwrap();
        assert_eq!(envelope.data, None);
    }

    #[test]
    fn spaced_empty_object_is_not_the_quirk() {
        let result = serde_json::from_str::<Envelope<Vec<Item>>>(
            r#"{"code":400,"status":"error","message":"bad","data":{ }}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn filled_object_for_list_is_a_decode_error() {
        let result = serde_json::from_str::<Envelope<Vec<Item>>>(
            r#"{"code":200,"status":"success","message":"ok","data":{"foo":"bar"}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn arrays_and_objects_decode_normally() {
        let list: Envelope<Vec<Item>> = serde_json::from_str(
            r#"{"code":200,"status":"success","message":"ok","data":[{"code":"GH030243"}]}"#,
        )
        .unwrap();
        assert_eq!(list.data.unwrap()[0].code, "GH030243");

        let empty: Envelope<Vec<Item>> =
            serde_json::from_str(r#"{"code":200,"status":"success","message":"ok","data":[]}"#)
                .unwrap();
        assert_eq!(empty.data, Some(vec![]));

        let single: Envelope<Single> =
            serde_json::from_str(r#"{"code":202,"status":"accepted","message":"ok","data":{"id":7}}"#)
                .unwrap();
        assert_eq!(single.data, Some(Single { id: 7 }));
    }

    #[test]
    fn missing_or_null_data_is_absent() {
        let missing: Envelope<Vec<Item>> = serde_json::from_str(
            r#"{"code":401,"status":"error","message":"Unauthorized API access. Unknown Merchant"}"#,
        )
        .unwrap();
        assert!(!missing.is_success());
        assert_eq!(missing.message, "Unauthorized API access. Unknown Merchant");
        assert_eq!(missing.data, None);

        let null: Envelope<Vec<Item>> =
            serde_json::from_str(r#"{"code":500,"status":"error","message":"x","data":null}"#)
                .unwrap();
        assert_eq!(null.data, None);
    }
}
