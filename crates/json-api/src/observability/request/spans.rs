//! HTTP span helpers.

use uuid::Uuid;

/// Route label for `path` with identifiers collapsed, so metrics and span names stay bounded.
pub(super) fn route_label(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuids_are_collapsed() {
        let order = Uuid::now_v7();
        let product = Uuid::now_v7();

        assert_eq!(
            route_label(&format!("/api/orders/{order}/items/{product}")),
            "/api/orders/{id}/items/{id}"
        );
    }

    #[test]
    fn static_paths_are_unchanged() {
        assert_eq!(route_label("/"), "/");
        assert_eq!(route_label("/api/dashboard"), "/api/dashboard");
        assert_eq!(route_label("/api/orders/not-an-id"), "/api/orders/not-an-id");
    }
}
