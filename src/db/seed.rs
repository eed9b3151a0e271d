//! Sample projects for local development and database-level tests.

use tracing::info;

use crate::db::models::project::NewProject;
use crate::db::repositories::ProjectStore;
use crate::error::AppResult;

struct SampleProject {
    title: &'static str,
    description: &'static str,
    image_url: Option<&'static str>,
    project_url: Option<&'static str>,
    github_url: Option<&'static str>,
    technologies: &'static [&'static str],
}

const SAMPLE_PROJECTS: &[SampleProject] = &[
    // Rows queried by the database tests
    SampleProject {
        title: "Test DB Query Project 1",
        description: "First test project for database queries",
        image_url: None,
        project_url: None,
        github_url: None,
        technologies: &["React", "Node.js"],
    },
    SampleProject {
        title: "Test DB Query Project 2",
        description: "Second test project for database queries",
        image_url: None,
        project_url: None,
        github_url: None,
        technologies: &["Next.js", "Prisma"],
    },
    SampleProject {
        title: "Test DB Query Project 3",
        description: "Third test project for database queries",
        image_url: None,
        project_url: None,
        github_url: None,
        technologies: &["TypeScript", "PostgreSQL"],
    },
    SampleProject {
        title: "Portfolio Website",
        description: "A personal portfolio website built with Next.js and Tailwind CSS.",
        image_url: Some("/project1.jpg"),
        project_url: Some("https://your-portfolio.vercel.app"),
        github_url: Some("https://github.com/yourusername/portfolio"),
        technologies: &["Next.js", "Tailwind CSS", "React", "Prisma"],
    },
    SampleProject {
        title: "Task Manager App",
        description: "A full-stack task management application with user authentication.",
        image_url: Some("/project2.jpg"),
        project_url: Some("https://task-manager.vercel.app"),
        github_url: Some("https://github.com/yourusername/task-manager"),
        technologies: &["React", "Node.js", "PostgreSQL", "Prisma"],
    },
    SampleProject {
        title: "Weather Dashboard",
        description: "A responsive weather dashboard using external APIs.",
        image_url: Some("/project3.jpg"),
        project_url: Some("https://weather-dash.vercel.app"),
        github_url: Some("https://github.com/yourusername/weather-dashboard"),
        technologies: &["JavaScript", "CSS", "Weather API", "Chart.js"],
    },
];

pub fn sample_projects() -> Vec<NewProject> {
    SAMPLE_PROJECTS
        .iter()
        .map(|sample| NewProject {
            title: sample.title.to_string(),
            description: sample.description.to_string(),
            image_url: sample.image_url.map(str::to_string),
            project_url: sample.project_url.map(str::to_string),
            github_url: sample.github_url.map(str::to_string),
            technologies: sample.technologies.iter().map(|t| t.to_string()).collect(),
        })
        .collect()
}

/// Inserts every sample project with one batch insert.
///
/// Errors are returned untouched; the caller owns logging and the
/// storage connection.
pub fn run<S>(store: &mut S) -> AppResult<usize>
where
    S: ProjectStore + ?Sized,
{
    info!("Start seeding...");

    let rows = sample_projects();
    let inserted = store.insert_many(&rows)?;

    info!(inserted, "Seeding finished.");
    Ok(inserted)
}
