//! Handler-level tests for the catalog crate
//!
//! Drive the generic router with the in-memory repository, covering the
//! contractual behavior: id validation, status codes, partial updates,
//! and the review cascade.

#[cfg(test)]
mod api_tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::infra::memory::MemoryCatalogRepository;
    use crate::presentation::router::catalog_router_generic;

    const UNKNOWN_ID: &str = "5de81fc15ab5264604d45000";

    fn test_router() -> (Router, MemoryCatalogRepository) {
        let repo = MemoryCatalogRepository::new();
        (catalog_router_generic(repo.clone()), repo)
    }

    async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    fn bag() -> Value {
        json!({
            "name": "Small Vintage Check and Leather Crossbody Bag",
            "price": 910.0,
            "options": [{ "color": "beige" }, { "size": "one size" }]
        })
    }

    async fn create_bag(router: &Router) -> String {
        let (status, body) = send(router, "POST", "/products", Some(bag())).await;
        assert_eq!(status, StatusCode::CREATED);
        body["data"]["id"].as_str().unwrap().to_string()
    }

    // ========================================================================
    // Products
    // ========================================================================

    #[tokio::test]
    async fn test_list_products_empty() {
        let (router, _) = test_router();

        let (status, body) = send(&router, "GET", "/products", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data": [] }));
    }

    #[tokio::test]
    async fn test_create_then_get_roundtrip() {
        let (router, _) = test_router();

        let id = create_bag(&router).await;
        // Generated id is a well-formed object id
        assert_eq!(id.len(), 24);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));

        let (status, body) = send(&router, "GET", &format!("/products/{}", id), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], json!(id));
        assert_eq!(
            body["data"]["name"],
            json!("Small Vintage Check and Leather Crossbody Bag")
        );
        assert_eq!(body["data"]["price"], json!(910.0));
        // Option order survives the round trip
        assert_eq!(
            body["data"]["options"],
            json!([{ "color": "beige" }, { "size": "one size" }])
        );
    }

    #[tokio::test]
    async fn test_list_products_idempotent() {
        let (router, _) = test_router();
        create_bag(&router).await;

        let (status_a, body_a) = send(&router, "GET", "/products", None).await;
        let (status_b, body_b) = send(&router, "GET", "/products", None).await;

        assert_eq!(status_a, StatusCode::OK);
        assert_eq!(status_b, StatusCode::OK);
        assert_eq!(body_a, body_b);
        assert_eq!(body_a["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_malformed_id() {
        let (router, _) = test_router();

        let (status, body) = send(&router, "GET", "/products/id", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let (router, _) = test_router();

        let (status, body) =
            send(&router, "GET", &format!("/products/{}", UNKNOWN_ID), None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_patch_partial_update() {
        let (router, _) = test_router();
        let id = create_bag(&router).await;

        let (status, body) = send(
            &router,
            "PATCH",
            &format!("/products/{}", id),
            Some(json!({ "price": 900.0 })),
        )
        .await;

        // The post-mutation record comes back
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["price"], json!(900.0));
        assert_eq!(
            body["data"]["name"],
            json!("Small Vintage Check and Leather Crossbody Bag")
        );
        assert_eq!(
            body["data"]["options"],
            json!([{ "color": "beige" }, { "size": "one size" }])
        );

        // And a fresh read agrees
        let (_, body) = send(&router, "GET", &format!("/products/{}", id), None).await;
        assert_eq!(body["data"]["price"], json!(900.0));
    }

    #[tokio::test]
    async fn test_patch_malformed_id() {
        let (router, _) = test_router();

        let (status, body) = send(
            &router,
            "PATCH",
            "/products/id",
            Some(json!({ "price": 900.0 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_patch_unknown_id() {
        let (router, _) = test_router();

        let (status, body) = send(
            &router,
            "PATCH",
            &format!("/products/{}", UNKNOWN_ID),
            Some(json!({ "price": 900.0 })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_delete_malformed_id() {
        let (router, _) = test_router();

        let (status, body) = send(&router, "DELETE", "/products/id", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_delete_unknown_id() {
        let (router, _) = test_router();

        let (status, body) =
            send(&router, "DELETE", &format!("/products/{}", UNKNOWN_ID), None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_delete_returns_null_data() {
        let (router, _) = test_router();
        let id = create_bag(&router).await;

        let (status, body) = send(&router, "DELETE", &format!("/products/{}", id), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data": null }));
    }

    // ========================================================================
    // Reviews
    // ========================================================================

    #[tokio::test]
    async fn test_create_and_list_reviews() {
        let (router, _) = test_router();
        let id = create_bag(&router).await;

        let (status, body) = send(
            &router,
            "POST",
            "/reviews",
            Some(json!({
                "author": "Jane Air",
                "date": "2019-08-19",
                "text": "Awesome product",
                "productId": id
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["author"], json!("Jane Air"));
        assert_eq!(body["data"]["productId"], json!(id));

        let (status, body) = send(
            &router,
            "GET",
            &format!("/products/{}/reviews", id),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let reviews = body["data"].as_array().unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0]["author"], json!("Jane Air"));
        assert_eq!(reviews[0]["date"], json!("2019-08-19"));
        assert_eq!(reviews[0]["text"], json!("Awesome product"));
        assert_eq!(reviews[0]["productId"], json!(id));
    }

    #[tokio::test]
    async fn test_create_review_for_missing_product() {
        let (router, _) = test_router();

        let (status, body) = send(
            &router,
            "POST",
            "/reviews",
            Some(json!({
                "author": "Jane Air",
                "date": "2019-08-19",
                "text": "Awesome product",
                "productId": UNKNOWN_ID
            })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_create_review_malformed_product_id() {
        let (router, _) = test_router();

        let (status, _) = send(
            &router,
            "POST",
            "/reviews",
            Some(json!({
                "author": "Jane Air",
                "date": "2019-08-19",
                "text": "Awesome product",
                "productId": "id"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_reviews_unknown_product() {
        let (router, _) = test_router();

        let (status, _) = send(
            &router,
            "GET",
            &format!("/products/{}/reviews", UNKNOWN_ID),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    // ========================================================================
    // Cascade delete
    // ========================================================================

    #[tokio::test]
    async fn test_delete_cascades_to_reviews() {
        use crate::domain::repository::ReviewRepository;
        use kernel::id::ProductId;

        let (router, repo) = test_router();
        let id = create_bag(&router).await;

        let (status, _) = send(
            &router,
            "POST",
            "/reviews",
            Some(json!({
                "author": "Jane Air",
                "date": "2019-08-19",
                "text": "Awesome product",
                "productId": id
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = send(&router, "DELETE", &format!("/products/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);

        // Product is gone
        let (status, _) = send(&router, "GET", &format!("/products/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // Its reviews collection is unreachable
        let (status, _) = send(
            &router,
            "GET",
            &format!("/products/{}/reviews", id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // And no review record survives in the store itself
        let product_id = ProductId::parse(&id).unwrap();
        let orphans = repo.find_by_product(&product_id).await.unwrap();
        assert!(orphans.is_empty());
    }
}
