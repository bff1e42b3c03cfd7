//! Case domain parameters, used by the catalog sheet ingest.

#[derive(Debug, Clone)]
pub struct CreateCaseParams {
    pub name: String,
    /// Explicit slug override; derived from the name when absent.
    pub slug: Option<String>,
    pub description: Option<serde_json::Value>,
    pub chapter_id: Option<i32>,
    pub order: i32,
    pub is_active: bool,
}
