use crate::error::ClassifiedError;

/// One page of a cursor-paginated listing.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Absent on the last page.
    pub next_cursor: Option<String>,
}

#[async_trait::async_trait]
pub trait Pager<T: Send>: Send + Sync {
    async fn fetch(&self, cursor: Option<&str>) -> Result<Page<T>, ClassifiedError>;
}

/// Fetch every page in sequence, following each page's cursor until a page
/// comes back without one. The first failed page fails the whole drain.
pub async fn drain_pages<T: Send>(pager: &dyn Pager<T>) -> Result<Vec<T>, ClassifiedError> {
    let mut items = vec![];
    let mut cursor: Option<String> = None;
    let mut num_pages = 0usize;
    loop {
        let page = pager.fetch(cursor.as_deref()).await?;
        num_pages += 1;
        items.extend(page.items);
        match page.next_cursor {
            Some(next_cursor) => cursor = Some(next_cursor),
            None => break,
        }
    }
    log::debug!("Drained {} item(s) across {num_pages} page(s).", items.len());
    Ok(items)
}
