use serde::Serialize;

/// JSON envelope used by every endpoint: `{success, message?, count?, data?}`.
/// Absent fields are omitted from the serialized output entirely.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl ApiResponse<()> {
    /// Success acknowledgment with no payload, e.g. after update/delete.
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(msg.into()),
            count: None,
            data: None,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            count: None,
            data: Some(data),
        }
    }

    /// Creation acknowledgment: message plus a safe projection of the new row.
    pub fn created(msg: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(msg.into()),
            count: None,
            data: Some(data),
        }
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// List response; `count` mirrors the number of returned rows.
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            message: None,
            count: Some(items.len()),
            data: Some(items),
        }
    }
}
