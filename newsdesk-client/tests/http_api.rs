//! HttpArticleApi and FeedView against a mock article server

use httpmock::prelude::*;
use serde_json::json;

use newsdesk_client::{ArticleApi, ClientError, DeleteResolution, FeedView, HttpArticleApi, ViewState};
use newsdesk_core::{ArticleId, DeleteOutcome, PageRequest};

fn rows(ids: &[i64]) -> serde_json::Value {
    json!(ids
        .iter()
        .map(|id| json!({
            "id": id,
            "headline": format!("Headline {}", id),
            "url": format!("https://www.bbc.co.uk/news/{}", id)
        }))
        .collect::<Vec<_>>())
}

#[tokio::test]
async fn fetch_page_sends_page_and_limit() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/articles")
                .query_param("page", "2")
                .query_param("limit", "50");
            then.status(200).json_body(rows(&[51, 52]));
        })
        .await;

    let api = HttpArticleApi::new(server.base_url()).unwrap();
    let articles = api.fetch_page(PageRequest::new(2, 50)).await.unwrap();

    mock.assert_async().await;
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].id, ArticleId::new(51));
    assert_eq!(articles[1].headline, "Headline 52");
}

#[tokio::test]
async fn fetch_page_server_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/articles");
            then.status(500)
                .json_body(json!({ "message": "Failed to fetch articles" }));
        })
        .await;

    let api = HttpArticleApi::new(server.base_url()).unwrap();
    match api.fetch_page(PageRequest::default()).await {
        Err(ClientError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Failed to fetch articles");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn delete_maps_200_and_404_to_outcomes() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/articles").query_param("id", "7");
            then.status(200).json_body(json!({ "message": "Article deleted" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/articles").query_param("id", "8");
            then.status(404).json_body(json!({ "message": "Article not found" }));
        })
        .await;

    let api = HttpArticleApi::new(server.base_url()).unwrap();
    assert_eq!(
        api.delete_article(ArticleId::new(7)).await.unwrap(),
        DeleteOutcome::Deleted
    );
    assert_eq!(
        api.delete_article(ArticleId::new(8)).await.unwrap(),
        DeleteOutcome::NotFound
    );
}

#[tokio::test]
async fn delete_500_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/articles");
            then.status(500)
                .json_body(json!({ "message": "Failed to delete article" }));
        })
        .await;

    let api = HttpArticleApi::new(server.base_url()).unwrap();
    assert!(matches!(
        api.delete_article(ArticleId::new(1)).await,
        Err(ClientError::Status { status: 500, .. })
    ));
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    // Port 9 (discard) is not serving HTTP
    let api = HttpArticleApi::new("http://127.0.0.1:9").unwrap();
    assert!(matches!(
        api.fetch_page(PageRequest::default()).await,
        Err(ClientError::Transport(_))
    ));
}

#[tokio::test]
async fn view_reconciles_after_failed_delete() {
    let server = MockServer::start_async().await;
    let list = server
        .mock_async(|when, then| {
            when.method(GET).path("/articles");
            then.status(200).json_body(rows(&[1, 2, 3]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/articles").query_param("id", "2");
            then.status(500)
                .json_body(json!({ "message": "Failed to delete article" }));
        })
        .await;

    let mut view = FeedView::new(
        HttpArticleApi::new(server.base_url()).unwrap(),
        PageRequest::default(),
    );
    view.refresh().await;
    assert_eq!(view.state(), &ViewState::Ready);

    let resolution = view.delete(ArticleId::new(2)).await.unwrap();

    assert_eq!(resolution, DeleteResolution::Reconcile);
    let ids: Vec<i64> = view.articles().iter().map(|a| a.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(view.notice().is_some());
    list.assert_hits_async(2).await;
}

#[tokio::test]
async fn view_keeps_optimistic_removal_on_success() {
    let server = MockServer::start_async().await;
    let list = server
        .mock_async(|when, then| {
            when.method(GET).path("/articles");
            then.status(200).json_body(rows(&[1, 2, 3]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/articles").query_param("id", "2");
            then.status(200).json_body(json!({ "message": "Article deleted" }));
        })
        .await;

    let mut view = FeedView::new(
        HttpArticleApi::new(server.base_url()).unwrap(),
        PageRequest::default(),
    );
    view.refresh().await;
    let _ = view.delete(ArticleId::new(2)).await.unwrap();

    let ids: Vec<i64> = view.articles().iter().map(|a| a.id.get()).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(view.state(), &ViewState::Ready);
    list.assert_hits_async(1).await;
}
