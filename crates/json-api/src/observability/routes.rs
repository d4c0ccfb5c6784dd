//! Route labels for request spans and metrics.

/// Every fixed path the router serves.
const ROUTES: [&str; 16] = [
    "/",
    "/metrics",
    "/upload",
    "/addproduct",
    "/removeproduct",
    "/allproducts",
    "/newcollections",
    "/popularproducts",
    "/signup",
    "/login",
    "/getuser",
    "/addtocart",
    "/removefromcart",
    "/getcart",
    "/api-doc/openapi.json",
    "/docs",
];

const IMAGE_ROUTE: &str = "/images/{file}";

/// Anything the router does not know, so scanners cannot grow the label set.
const UNMATCHED_ROUTE: &str = "unmatched";

/// Map a request path onto one of a fixed set of labels.
pub(super) fn route_label(path: &str) -> &'static str {
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    if path.starts_with("/images/") {
        return IMAGE_ROUTE;
    }

    if path.starts_with("/docs/") {
        return "/docs";
    }

    ROUTES
        .iter()
        .find(|route| **route == path)
        .copied()
        .unwrap_or(UNMATCHED_ROUTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storefront_routes_label_as_themselves() {
        assert_eq!(route_label("/"), "/");
        assert_eq!(route_label("/allproducts"), "/allproducts");
        assert_eq!(route_label("/addtocart/"), "/addtocart");
        assert_eq!(route_label("/getcart"), "/getcart");
    }

    #[test]
    fn image_and_docs_assets_collapse() {
        assert_eq!(route_label("/images/product_1700000000000.png"), "/images/{file}");
        assert_eq!(route_label("/docs/swagger-ui.css"), "/docs");
    }

    #[test]
    fn unknown_paths_share_one_label() {
        assert_eq!(route_label("/wp-login.php"), "unmatched");
        assert_eq!(route_label("/allproducts/7"), "unmatched");
    }
}
