pub mod http;
pub mod repo;

pub use http::HttpProjectSaver;
pub use repo::RepoProjectSaver;
