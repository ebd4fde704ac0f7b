use askama::Template;

pub const BRAND: &str = "JobBoard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Việc làm", href: "/viec-lam" },
    NavLink { label: "Công ty", href: "/cong-ty" },
    NavLink { label: "Cẩm nang nghề nghiệp", href: "/cam-nang" },
    NavLink { label: "Nhà tuyển dụng", href: "/nha-tuyen-dung" },
];

#[derive(Template)]
#[template(path = "header.html")]
struct HeaderTemplate<'a> {
    brand: &'a str,
    links: &'a [NavLink],
}

/// Site header: logo plus the fixed navigation links.
pub fn render_header() -> askama::Result<String> {
    HeaderTemplate {
        brand: BRAND,
        links: &NAV_LINKS,
    }
    .render()
}
