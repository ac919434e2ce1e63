use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{
    OpenApi, ToSchema,
    openapi::path::{Operation, PathItem},
};

use crate::routes::doc::ApiDoc;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Endpoint {
    pub method: String,
    pub path: String,
    pub summary: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Sitemap {
    pub endpoints: Vec<Endpoint>,
}

/// Map of every documented endpoint.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Available endpoints", body = Sitemap)
    ),
    tag = "Sitemap"
)]
pub async fn sitemap() -> Json<Sitemap> {
    Json(build_sitemap())
}

pub fn build_sitemap() -> Sitemap {
    let openapi = ApiDoc::openapi();
    let endpoints = openapi
        .paths
        .paths
        .iter()
        .flat_map(|(path, item)| {
            operations(item)
                .into_iter()
                .map(move |(method, operation)| Endpoint {
                    method: method.to_string(),
                    path: path.clone(),
                    summary: operation.summary.clone(),
                })
        })
        .collect();

    Sitemap { endpoints }
}

fn operations(item: &PathItem) -> Vec<(&'static str, &Operation)> {
    [
        ("GET", item.get.as_ref()),
        ("POST", item.post.as_ref()),
        ("PUT", item.put.as_ref()),
        ("PATCH", item.patch.as_ref()),
        ("DELETE", item.delete.as_ref()),
    ]
    .into_iter()
    .filter_map(|(method, operation)| operation.map(|op| (method, op)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_favorite_routes_with_both_methods() {
        let sitemap = build_sitemap();

        let methods: Vec<&str> = sitemap
            .endpoints
            .iter()
            .filter(|e| e.path == "/favorite/character/{id}")
            .map(|e| e.method.as_str())
            .collect();

        assert_eq!(methods, vec!["POST", "DELETE"]);
    }

    #[test]
    fn includes_catalog_routes() {
        let sitemap = build_sitemap();

        for path in ["/user", "/user/favorite", "/character", "/planet/{id}"] {
            assert!(
                sitemap.endpoints.iter().any(|e| e.path == path),
                "missing {path}"
            );
        }
    }
}
