//! Filtered, paginated task listing.
//!
//! Filters are modelled as tagged predicates rendered into a
//! `sqlx::QueryBuilder`, always in the same order (status, title search,
//! owning project), so equal filters always produce identical SQL.

use tb_core::{DEFAULT_PAGE_LIMIT, TaskStatus};

use sqlx::{QueryBuilder, Sqlite};
use uuid::Uuid;

pub(crate) const TASK_COLUMNS: &str =
    "id, project_id, title, description, status, created_at, updated_at";

const LIKE_ESCAPE: char = '\\';

/// A single `AND`-ed condition with its bound parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskPredicate {
    Status(TaskStatus),
    /// Substring match on the title
    TitleContains(String),
    Project(Uuid),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListQuery {
    project_id: Uuid,
    status: Option<TaskStatus>,
    title_contains: Option<String>,
    limit: i64,
    offset: i64,
}

impl TaskListQuery {
    /// Every task in the project, first page at the default size.
    pub fn new(project_id: Uuid) -> Self {
        Self {
            project_id,
            status: None,
            title_contains: None,
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict to titles containing `needle`. An empty needle is ignored.
    pub fn with_title_containing(mut self, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        self.title_contains = (!needle.is_empty()).then_some(needle);
        self
    }

    /// `limit` and `offset` are expected to be already clamped.
    pub fn paginate(mut self, limit: i64, offset: i64) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }

    pub fn project_id(&self) -> Uuid {
        self.project_id
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Predicates in canonical order. The project predicate is always last
    /// and always present.
    pub fn predicates(&self) -> Vec<TaskPredicate> {
        let mut predicates = Vec::with_capacity(3);

        if let Some(status) = self.status {
            predicates.push(TaskPredicate::Status(status));
        }
        if let Some(ref needle) = self.title_contains {
            predicates.push(TaskPredicate::TitleContains(needle.clone()));
        }
        predicates.push(TaskPredicate::Project(self.project_id));

        predicates
    }

    /// Render the full `SELECT`, including ordering and pagination.
    pub fn to_query_builder(&self) -> QueryBuilder<'static, Sqlite> {
        let mut builder = QueryBuilder::new(format!("SELECT {} FROM tasks WHERE ", TASK_COLUMNS));

        for (index, predicate) in self.predicates().into_iter().enumerate() {
            if index > 0 {
                builder.push(" AND ");
            }
            match predicate {
                TaskPredicate::Status(status) => {
                    builder.push("status = ");
                    builder.push_bind(status.as_str());
                }
                TaskPredicate::TitleContains(needle) => {
                    builder.push("title LIKE ");
                    builder.push_bind(like_pattern(&needle));
                    builder.push(format!(" ESCAPE '{}'", LIKE_ESCAPE));
                }
                TaskPredicate::Project(project_id) => {
                    builder.push("project_id = ");
                    builder.push_bind(project_id.to_string());
                }
            }
        }

        // id breaks ties between equal timestamps so pages never overlap
        builder.push(" ORDER BY updated_at DESC, id ASC LIMIT ");
        builder.push_bind(self.limit);
        builder.push(" OFFSET ");
        builder.push_bind(self.offset);

        builder
    }
}

/// `%needle%` with LIKE wildcards in the needle matched literally.
pub(crate) fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
