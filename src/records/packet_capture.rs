use crate::record::Record;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(frozen)]
pub struct PacketSetup {
    #[serde(rename = "sessionId")]
    session_id: String,
    #[serde(rename = "isNewSession")]
    is_new_session: bool,
}

/// Download status of a capture file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Record)]
#[record(frozen)]
pub struct Status {
    #[serde(rename = "fileDownloadStatus", skip_serializing_if = "Option::is_none")]
    file_download_status: Option<String>,
    #[serde(rename = "fileSize", skip_serializing_if = "Option::is_none")]
    file_size: Option<i64>,
}
