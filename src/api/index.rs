use poem::{handler, web::Html};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// The item list page; all data is loaded client-side from `/api/items`
#[handler]
pub fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}
