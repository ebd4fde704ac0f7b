use askama::Template;

use super::{render_header, render_hero, render_job_categories, DEFAULT_CATEGORIES};

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    title: &'a str,
    header: String,
    hero: String,
    categories: String,
}

/// Full landing page: header, hero search and the featured categories.
pub fn render_home_page() -> askama::Result<String> {
    HomeTemplate {
        title: "JobBoard - Tìm việc làm",
        header: render_header()?,
        hero: render_hero()?,
        categories: render_job_categories(&DEFAULT_CATEGORIES)?,
    }
    .render()
}
