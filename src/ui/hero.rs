use askama::Template;

#[derive(Template)]
#[template(path = "hero.html")]
struct HeroTemplate {
    headline: &'static str,
    tagline: &'static str,
    placeholder: &'static str,
    button_label: &'static str,
}

// The search form is presentational; nothing handles its submission yet.
pub fn render_hero() -> askama::Result<String> {
    HeroTemplate {
        headline: "Tìm việc làm nhanh, việc làm mới nhất",
        tagline: "Hàng nghìn cơ hội việc làm từ các nhà tuyển dụng uy tín",
        placeholder: "Nhập từ khóa, chức danh, công ty",
        button_label: "Tìm kiếm",
    }
    .render()
}
