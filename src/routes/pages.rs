use axum::response::Html;

use crate::error::AppError;
use crate::ui;

/// Public landing page
#[utoipa::path(
    get,
    path = "/",
    tag = "site",
    responses(
        (status = 200, description = "Landing page HTML", content_type = "text/html", body = String)
    )
)]
pub async fn home() -> Result<Html<String>, AppError> {
    Ok(Html(ui::render_home_page()?))
}
