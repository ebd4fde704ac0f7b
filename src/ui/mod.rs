//! Server-rendered page sections for the public site.
//!
//! Every component is a pure function of its input: no database access, no
//! request state. They return the rendered HTML fragment as a `String`.

pub mod categories;
pub mod header;
pub mod hero;
pub mod page;

pub use categories::{render_job_categories, JobCategory, DEFAULT_CATEGORIES};
pub use header::{render_header, NavLink, NAV_LINKS};
pub use hero::render_hero;
pub use page::render_home_page;
