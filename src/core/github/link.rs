//! `Link` header pagination.

/// Extract the `rel="next"` target from a `Link` header.
///
/// ```text
/// <https://api.github.com/user/repos?page=2>; rel="next", <...>; rel="last"
/// ```
pub fn next_page(header: &str) -> Option<String> {
    header.split(',').find_map(|part| {
        let mut pieces = part.split(';');
        let target = pieces.next()?.trim();
        let is_next = pieces.any(|param| {
            let param = param.trim();
            param == "rel=\"next\"" || param == "rel=next"
        });
        if !is_next {
            return None;
        }
        target
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .map(str::to_string)
    })
}
