mod common;

use common::{assert_rate, mock_headers, octocat};
use scm_client::{Client, Installation, RepositorySelection};

fn want_installation() -> Installation {
    let mut permissions = std::collections::BTreeMap::new();
    permissions.insert("checks".to_owned(), "write".to_owned());
    permissions.insert("contents".to_owned(), "read".to_owned());
    permissions.insert("deployments".to_owned(), "write".to_owned());
    permissions.insert("metadata".to_owned(), "read".to_owned());

    Installation {
        id: 1,
        app_id: 1,
        app_slug: "octoapp".to_owned(),
        target_id: 1,
        target_type: "User".to_owned(),
        account: octocat(),
        repository_selection: RepositorySelection::All,
        permissions,
        events: vec![
            "push".to_owned(),
            "pull_request".to_owned(),
            "deployment".to_owned(),
        ],
        access_tokens_link: "https://api.github.com/app/installations/1/access_tokens".to_owned(),
        repositories_link: "https://api.github.com/installation/repositories".to_owned(),
        link: "https://github.com/settings/installations/1".to_owned(),
        created: "2017-07-08T20:18:44Z".parse().unwrap(),
        updated: "2017-07-08T20:18:44Z".parse().unwrap(),
    }
}

#[tokio::test]
async fn app_repository_installation() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_headers(
        server
            .mock("GET", "/repos/octocat/hello-world/installation")
            .match_header("authorization", "token t0ps3cret"),
    )
    .with_status(200)
    .with_body(include_str!("testdata/app_repo_install.json"))
    .create_async()
    .await;

    let _ = env_logger::builder().is_test(true).try_init();
    let client = Client::builder()
        .base_url(server.url())
        .api_token("t0ps3cret")
        .build()
        .unwrap();

    let (meta, installation) = client
        .apps()
        .get_repository_installation("octocat", "hello-world")
        .await
        .unwrap()
        .into_parts();

    assert_eq!(installation, want_installation());
    assert_rate(&meta);
    mock.assert_async().await;
}

#[tokio::test]
async fn app_repository_installation_missing() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_headers(server.mock("GET", "/repos/octocat/hello-world/installation"))
        .with_status(404)
        .with_body(include_str!("testdata/error.json"))
        .create_async()
        .await;

    let client = common::client(&server);
    let err = client
        .apps()
        .get_repository_installation("octocat", "hello-world")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.api_message(), Some("Not Found"));
}
