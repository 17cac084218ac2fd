//! HTTP Integration Tests for the Showcase Endpoint
//!
//! These tests drive `POST /v1/showcase` end-to-end against a mocked
//! GitHub API.

#[cfg(test)]
mod http_integration_tests {
    use actix_web::{App, test, web};
    use mockito::{Server, ServerGuard};
    use serde_json::{json, Value};

    use crate::AppState;
    use crate::config::Config;
    use crate::handlers::configure_showcase_routes;
    use crate::services::GithubClient;

    /// Create test config pointed at the mock GitHub server
    fn create_test_config(github_url: &str) -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            github_api_url: github_url.to_string(),
            github_token: None,
        }
    }

    /// Create test app state
    fn create_test_app_state(github_url: &str) -> web::Data<AppState> {
        let config = create_test_config(github_url);
        let github = GithubClient::new(&config.github_api_url, config.github_token.clone())
            .expect("GitHub client should build");
        web::Data::new(AppState { config, github })
    }

    /// Mount the standard octocat fixtures: profile, repo listing, and
    /// activity for the three selectable repos
    async fn mount_octocat(server: &mut ServerGuard) {
        server
            .mock("GET", "/users/octocat")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "login": "octocat",
                    "name": null,
                    "avatar_url": "https://avatars.githubusercontent.com/u/583231",
                    "bio": "Mascot",
                    "public_repos": 4,
                    "followers": 42,
                    "following": 7,
                    "created_at": "2011-01-25T18:44:36Z"
                })
                .to_string(),
            )
            .create_async()
            .await;

        server
            .mock("GET", "/users/octocat/repos?per_page=100&sort=updated")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([
                    {
                        "name": "spoon-knife",
                        "html_url": "https://github.com/octocat/spoon-knife",
                        "description": "Fork me",
                        "fork": true,
                        "stargazers_count": 300,
                        "forks_count": 900,
                        "language": "HTML",
                        "topics": [],
                        "updated_at": "2024-04-01T09:00:00Z"
                    },
                    {
                        "name": "hello-world",
                        "html_url": "https://github.com/octocat/hello-world",
                        "description": "My first repo",
                        "fork": false,
                        "stargazers_count": 80,
                        "forks_count": 12,
                        "language": "Rust",
                        "topics": ["demo"],
                        "updated_at": "2024-05-01T12:00:00Z"
                    },
                    {
                        "name": "web-thing",
                        "html_url": "https://github.com/octocat/web-thing",
                        "description": null,
                        "fork": false,
                        "stargazers_count": 120,
                        "forks_count": 30,
                        "language": "TypeScript",
                        "topics": ["react", "website"],
                        "updated_at": "2024-05-02T12:00:00Z"
                    },
                    {
                        "name": "scratch",
                        "html_url": "https://github.com/octocat/scratch",
                        "description": null,
                        "fork": false,
                        "stargazers_count": 2,
                        "forks_count": 0,
                        "language": null,
                        "topics": [],
                        "updated_at": "2024-03-01T12:00:00Z"
                    }
                ])
                .to_string(),
            )
            .create_async()
            .await;

        for (repo, weeks) in [
            ("web-thing", json!([{"week": 1_714_262_400, "total": 6, "days": [1,1,1,1,1,1,0]}])),
            ("hello-world", json!([{"week": 1_714_262_400, "total": 2, "days": [2,0,0,0,0,0,0]}])),
            ("scratch", json!([])),
        ] {
            server
                .mock(
                    "GET",
                    format!("/repos/octocat/{repo}/stats/commit_activity").as_str(),
                )
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(weeks.to_string())
                .create_async()
                .await;
        }
    }

    // =========================================================================
    // Test: Full showcase document for a known user
    // =========================================================================
    #[actix_rt::test]
    async fn http_showcase_returns_full_document() {
        let mut server = Server::new_async().await;
        mount_octocat(&mut server).await;

        let app = test::init_service(
            App::new()
                .app_data(create_test_app_state(&server.url()))
                .configure(|cfg| {
                    cfg.service(web::scope("/v1").configure(configure_showcase_routes));
                }),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/showcase")
            .set_json(json!({"username": "octocat"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success(), "Request should succeed");

        let body: Value = test::read_body_json(resp).await;
        assert!(
            body["meta"]["requestId"].is_string(),
            "Response should carry a request id"
        );

        let data = &body["data"];
        assert_eq!(data["profile"]["login"], "octocat");
        // Display name falls back to the login when GitHub has none
        assert_eq!(data["profile"]["name"], "octocat");
        assert_eq!(data["profile"]["followers"], 42);

        // Fork spoon-knife is excluded; scratch has no language
        let stats = data["languageStats"]
            .as_object()
            .expect("languageStats should be an object");
        assert_eq!(stats.len(), 2);
        assert_eq!(stats["Rust"], 1);
        assert_eq!(stats["TypeScript"], 1);

        let projects = data["projects"].as_array().expect("projects array");
        assert_eq!(projects.len(), 3);

        let names: Vec<&str> = projects.iter().map(|p| p["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["web-thing", "hello-world", "scratch"]);

        assert_eq!(projects[0]["recentCommits"], 6);
        assert_eq!(projects[0]["topics"], json!(["react", "website"]));
        assert_eq!(projects[1]["recentCommits"], 2);
        assert_eq!(projects[2]["recentCommits"], 0);
        assert_eq!(
            projects[2]["weeklyCommits"].as_array().map(Vec::len),
            Some(0)
        );
    }

    // =========================================================================
    // Test: Blank username rejected before GitHub is contacted
    // =========================================================================
    #[actix_rt::test]
    async fn http_blank_username_returns_validation_error() {
        let mut server = Server::new_async().await;
        let untouched = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let app = test::init_service(
            App::new()
                .app_data(create_test_app_state(&server.url()))
                .configure(|cfg| {
                    cfg.service(web::scope("/v1").configure(configure_showcase_routes));
                }),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/showcase")
            .set_json(json!({"username": "   "}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["meta"]["requestId"].is_string());

        untouched.assert_async().await;
    }

    // =========================================================================
    // Test: Missing username field is a client error
    // =========================================================================
    #[actix_rt::test]
    async fn http_missing_username_returns_bad_request() {
        let server = Server::new_async().await;

        let app = test::init_service(
            App::new()
                .app_data(create_test_app_state(&server.url()))
                .configure(|cfg| {
                    cfg.service(web::scope("/v1").configure(configure_showcase_routes));
                }),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/showcase")
            .set_json(json!({}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
    }

    // =========================================================================
    // Test: Unknown user maps to 404 with NOT_FOUND code
    // =========================================================================
    #[actix_rt::test]
    async fn http_unknown_user_returns_not_found() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/users/nobody-here")
            .with_status(404)
            .with_body(json!({"message": "Not Found"}).to_string())
            .create_async()
            .await;

        let app = test::init_service(
            App::new()
                .app_data(create_test_app_state(&server.url()))
                .configure(|cfg| {
                    cfg.service(web::scope("/v1").configure(configure_showcase_routes));
                }),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/showcase")
            .set_json(json!({"username": "nobody-here"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 404);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(
            body["error"]["message"]
                .as_str()
                .unwrap()
                .contains("nobody-here")
        );
    }

    // =========================================================================
    // Test: Load-bearing GitHub failure maps to 502 with UPSTREAM_ERROR code
    // =========================================================================
    #[actix_rt::test]
    async fn http_github_outage_returns_bad_gateway() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/users/octocat")
            .with_status(500)
            .with_body(json!({"message": "temporarily unavailable"}).to_string())
            .create_async()
            .await;

        let app = test::init_service(
            App::new()
                .app_data(create_test_app_state(&server.url()))
                .configure(|cfg| {
                    cfg.service(web::scope("/v1").configure(configure_showcase_routes));
                }),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/showcase")
            .set_json(json!({"username": "octocat"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 502);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    }

    // =========================================================================
    // Test: Username is trimmed before reaching GitHub
    // =========================================================================
    #[actix_rt::test]
    async fn http_username_is_trimmed() {
        let mut server = Server::new_async().await;
        mount_octocat(&mut server).await;

        let app = test::init_service(
            App::new()
                .app_data(create_test_app_state(&server.url()))
                .configure(|cfg| {
                    cfg.service(web::scope("/v1").configure(configure_showcase_routes));
                }),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/showcase")
            .set_json(json!({"username": "  octocat  "}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success(), "Trimmed username should resolve");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["profile"]["login"], "octocat");
    }
}
