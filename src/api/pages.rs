//! Server-rendered HTML pages

use crate::api::handlers::search_request_from_params;
use crate::api::AppState;
use crate::search::{format_iso_date, SearchPage, DISPLAY_DATE_FORMAT};
use axum::{
    extract::{Query, State},
    response::Html,
};

const PAGE_STYLE: &str = r#"
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #f5f5f5; color: #222; }
        header { background: #1a1a2e; color: white; padding: 16px 24px; }
        header a { color: white; text-decoration: none; font-weight: 600; }
        main { max-width: 960px; margin: 0 auto; padding: 24px; }
        form.search { display: flex; gap: 8px; margin-bottom: 24px; }
        form.search input[type=text] { flex: 1; padding: 10px 12px; border: 1px solid #ccc; border-radius: 8px; font-size: 1em; }
        form.search button { padding: 10px 20px; border: none; border-radius: 8px; background: #1a1a2e; color: white; cursor: pointer; }
        .result { display: flex; gap: 16px; background: white; border-radius: 12px; padding: 16px; margin-bottom: 12px; box-shadow: 0 1px 4px rgba(0,0,0,0.08); }
        .result img { width: 120px; height: 90px; object-fit: cover; border-radius: 8px; background: #ddd; }
        .result h3 { margin: 0 0 4px 0; font-size: 1em; }
        .result .date { color: #777; font-size: 0.85em; }
        .pager { display: flex; justify-content: space-between; margin-top: 24px; }
        .pager a { color: #1a1a2e; text-decoration: none; font-weight: 600; }
        .summary { color: #555; margin-bottom: 16px; }
        .error { background: #fdecea; color: #b3261e; border-radius: 12px; padding: 24px; }
"#;

/// Landing page, no search executed
pub async fn landing_page() -> Html<String> {
    let body = r#"
        <h1>Media Archive Search</h1>
        <form class="search" action="/search" method="get">
            <input type="text" name="q" placeholder="Search the archive..." autofocus>
            <button type="submit">Search</button>
        </form>
"#;
    Html(render_shell("Media Archive", body))
}

/// Search results page
///
/// Only `q`, `page`, and `size` are honored here; arbitrary filters
/// are an API-route feature. Gateway failures render an error page
/// instead of failing the request.
pub async fn search_page(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Html<String> {
    let request = match search_request_from_params(&params, false) {
        Ok(request) => request,
        Err(e) => return Html(render_error(&e.to_string())),
    };

    match state.search.search(&request).await {
        Ok(page) => Html(render_results(&request.query, &page)),
        Err(e) => Html(render_error(&e.to_string())),
    }
}

fn render_results(query: &str, page: &SearchPage) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        r#"
        <form class="search" action="/search" method="get">
            <input type="text" name="q" value="{}" placeholder="Search the archive...">
            <button type="submit">Search</button>
        </form>
        <p class="summary">{} results</p>
"#,
        html_escape(query),
        page.total,
    ));

    for item in &page.results {
        body.push_str(&format!(
            r#"
        <div class="result">
            <img src="{}" alt="thumbnail" loading="lazy">
            <div>
                <h3>{}</h3>
                <div class="date">{} &middot; {} &middot; {}</div>
                <p>{}</p>
            </div>
        </div>
"#,
            html_escape(&item.thumbnail_url),
            html_escape(&item.title),
            html_escape(&format_iso_date(&item.date, DISPLAY_DATE_FORMAT)),
            html_escape(&item.db),
            html_escape(&item.id),
            html_escape(&item.description),
        ));
    }

    body.push_str("        <div class=\"pager\">\n");
    if page.page > 1 {
        body.push_str(&format!(
            "            <a href=\"{}\">&laquo; Previous</a>\n",
            page_link(query, page.page - 1, page.size)
        ));
    } else {
        body.push_str("            <span></span>\n");
    }
    if u64::from(page.page) * u64::from(page.size) < page.total {
        body.push_str(&format!(
            "            <a href=\"{}\">Next &raquo;</a>\n",
            page_link(query, page.page + 1, page.size)
        ));
    }
    body.push_str("        </div>\n");

    render_shell("Search Results", &body)
}

fn render_error(message: &str) -> String {
    let body = format!(
        r#"
        <div class="error">
            <h2>Search unavailable</h2>
            <p>{}</p>
        </div>
"#,
        html_escape(message)
    );
    render_shell("Search Error", &body)
}

fn render_shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{}</title>
    <style>{}</style>
</head>
<body>
    <header><a href="/">Media Archive</a></header>
    <main>
{}
    </main>
</body>
</html>"#,
        html_escape(title),
        PAGE_STYLE,
        body
    )
}

fn page_link(query: &str, page: u32, size: u32) -> String {
    format!(
        "/search?q={}&page={}&size={}",
        urlencoding::encode(query),
        page,
        size
    )
}

fn html_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
