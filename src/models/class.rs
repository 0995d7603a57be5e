use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Class {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}
