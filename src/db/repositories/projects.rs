use diesel::prelude::*;

use crate::db::models::project::{NewProject, Project};
use crate::error::AppResult;

pub struct ProjectsRepo;

impl ProjectsRepo {
    pub fn insert(conn: &mut PgConnection, new_project: &NewProject) -> Result<Project, diesel::result::Error> {
        diesel::insert_into(crate::schema::projects::table)
            .values(new_project)
            .returning(Project::as_returning())
            .get_result(conn)
    }

    /// Inserts all rows with a single statement.
    pub fn insert_many(conn: &mut PgConnection, rows: &[NewProject]) -> Result<usize, diesel::result::Error> {
        diesel::insert_into(crate::schema::projects::table)
            .values(rows)
            .execute(conn)
    }

    pub fn find_by_title(conn: &mut PgConnection, project_title: &str) -> Result<Option<Project>, diesel::result::Error> {
        use crate::schema::projects::dsl::*;
        projects
            .filter(title.eq(project_title))
            .select(Project::as_select())
            .first::<Project>(conn)
            .optional()
    }
}

/// Batch-insert seam used by the seed loader.
pub trait ProjectStore {
    fn insert_many(&mut self, rows: &[NewProject]) -> AppResult<usize>;
}

impl ProjectStore for PgConnection {
    fn insert_many(&mut self, rows: &[NewProject]) -> AppResult<usize> {
        Ok(ProjectsRepo::insert_many(self, rows)?)
    }
}
