use tb_service::TaskFilter;

use serde::Deserialize;

/// Query parameters for listing tasks
#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    pub status: Option<String>,
    /// Title substring
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl From<ListTasksQuery> for TaskFilter {
    fn from(query: ListTasksQuery) -> Self {
        TaskFilter {
            status: query.status,
            q: query.q,
            limit: query.limit,
            offset: query.offset,
        }
    }
}
