use std::fmt::Write;

pub fn total_pages(count: usize, limit: usize) -> usize {
    count.div_ceil(limit.max(1))
}

pub fn page_slice<T>(items: &[T], page: usize, limit: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(limit).min(items.len());
    let end = start.saturating_add(limit).min(items.len());
    &items[start..end]
}

pub fn pagination_html(current: usize, total: usize) -> String {
    if total <= 1 {
        return String::new();
    }

    let mut html = String::from("<div class=\"pagination\">");

    if current > 1 {
        let _ = write!(
            html,
            "<a href=\"/?page={}\" class=\"pagination-btn\">← Previous</a>",
            current - 1
        );
    }

    let start = current.saturating_sub(2).max(1);
    let end = (current + 2).min(total);

    if start > 1 {
        html.push_str("<a href=\"/?page=1\" class=\"pagination-btn\">1</a>");
        if start > 2 {
            html.push_str("<span class=\"pagination-dots\">...</span>");
        }
    }

    for page in start..=end {
        let active = if page == current { " active" } else { "" };
        let _ = write!(
            html,
            "<a href=\"/?page={page}\" class=\"pagination-btn{active}\">{page}</a>"
        );
    }

    if end < total {
        if end < total - 1 {
            html.push_str("<span class=\"pagination-dots\">...</span>");
        }
        let _ = write!(
            html,
            "<a href=\"/?page={total}\" class=\"pagination-btn\">{total}</a>"
        );
    }

    if current < total {
        let _ = write!(
            html,
            "<a href=\"/?page={}\" class=\"pagination-btn\">Next →</a>",
            current + 1
        );
    }

    html.push_str("</div>");
    html
}
