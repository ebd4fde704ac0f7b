use askama::Template;

/// A category card. `count` is already formatted for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobCategory {
    pub id: u32,
    pub title: &'static str,
    pub icon: &'static str,
    pub count: &'static str,
}

pub const DEFAULT_CATEGORIES: [JobCategory; 4] = [
    JobCategory { id: 1, title: "Công nghệ thông tin", icon: "💻", count: "1.250" },
    JobCategory { id: 2, title: "Kinh doanh", icon: "📈", count: "980" },
    JobCategory { id: 3, title: "Marketing", icon: "📣", count: "640" },
    JobCategory { id: 4, title: "Kế toán", icon: "📊", count: "520" },
];

#[derive(Template)]
#[template(path = "job_categories.html")]
struct JobCategoriesTemplate<'a> {
    categories: &'a [JobCategory],
}

/// One card per category, in slice order, keyed by `data-key`.
pub fn render_job_categories(categories: &[JobCategory]) -> askama::Result<String> {
    JobCategoriesTemplate { categories }.render()
}
