use octocrab::Page;
use url::form_urlencoded;

pub(super) trait PageExt {
    /// Page number of the `rel="next"` link, 0 when this is the last page.
    fn next_page(&self) -> u32;
}

impl<I> PageExt for Page<I> {
    fn next_page(&self) -> u32 {
        self.next
            .as_ref()
            .and_then(|uri| uri.query())
            .and_then(page_param)
            .unwrap_or(0)
    }
}

fn page_param(query: &str) -> Option<u32> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}
