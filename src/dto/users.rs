use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct UsersQuery {
    pub search: Option<String>,
    pub page: Option<usize>,
}
