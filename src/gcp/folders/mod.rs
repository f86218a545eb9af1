//! Folder discovery (Cloud Resource Manager v2)

mod api;
mod models;

pub use models::{Folder, FoldersResponse};
