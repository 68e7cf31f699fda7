use serde::Serialize;

/// Acknowledgement returned after a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub id: String,
    pub deleted: bool,
}
