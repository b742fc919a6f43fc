/// Extract the resource identifier from a catalog self-link.
///
/// Catalog resources live at URLs ending in `/<id>/`, so the identifier is the
/// second-to-last slash-delimited segment. Returns `None` when the URL has
/// fewer than two segments or that segment is empty.
pub fn id_from_resource_url(url: &str) -> Option<&str> {
    let mut segments = url.rsplit('/');
    let _last = segments.next()?;
    segments.next().filter(|segment| !segment.is_empty())
}
