use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Staff {
    pub id: i64,
    pub full_name: String,
    pub email: Option<String>,
}
