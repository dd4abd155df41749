//! Local HTTP stand-in for the GitHub REST API.
//!
//! `RestClient` drives its own runtime with `block_on`, so tests stay
//! synchronous and only use a separate runtime to start the server and
//! mount mocks.

use serde_json::{json, Value};
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use github_update_secret::core::config::Config;
use github_update_secret::core::github::RestClient;

pub const TOKEN: &str = "ghp_test";

pub struct MockApi {
    server: MockServer,
    runtime: Runtime,
}

impl MockApi {
    pub fn start() -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("test runtime");
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn config(&self) -> Config {
        Config::resolve(Some(TOKEN.to_string()), Some(&self.uri())).expect("valid config")
    }

    pub fn client(&self) -> RestClient {
        RestClient::new(&self.config()).expect("client builds")
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    /// Answer `GET route` with a JSON body.
    pub fn get(&self, route: &str, body: Value) {
        self.mount(
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(ResponseTemplate::new(200).set_body_json(body)),
        );
    }

    /// Answer `verb route` with a status and a GitHub-style error body.
    pub fn fail(&self, verb: &str, route: &str, status: u16, message: &str) {
        self.mount(
            Mock::given(method(verb))
                .and(path(route))
                .respond_with(
                    ResponseTemplate::new(status).set_body_json(json!({ "message": message })),
                ),
        );
    }

    /// Accept `PUT route` with 204.
    pub fn accept_put(&self, route: &str) {
        self.mount(
            Mock::given(method("PUT"))
                .and(path(route))
                .respond_with(ResponseTemplate::new(204)),
        );
    }

    /// Requests received so far, as `(method, path, body)`.
    pub fn received(&self) -> Vec<(String, String, Vec<u8>)> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
            .into_iter()
            .map(|r| (r.method.to_string(), r.url.path().to_string(), r.body))
            .collect()
    }

    /// How many requests hit `route`, regardless of query string.
    pub fn hits(&self, route: &str) -> usize {
        self.received().iter().filter(|(_, p, _)| p == route).count()
    }

    /// JSON bodies of the `PUT` requests to `route`, in order.
    pub fn put_bodies(&self, route: &str) -> Vec<Value> {
        self.received()
            .into_iter()
            .filter(|(m, p, _)| m == "PUT" && p == route)
            .map(|(_, _, body)| serde_json::from_slice(&body).expect("json body"))
            .collect()
    }
}

/// A repository listing entry the token administers.
pub fn repo_entry(owner: &str, name: &str) -> Value {
    json!({
        "name": name,
        "full_name": format!("{owner}/{name}"),
        "owner": { "login": owner },
        "fork": false,
        "archived": false,
        "is_template": false,
        "permissions": { "admin": true, "push": true, "pull": true }
    })
}

pub fn secrets_page(names: &[&str]) -> Value {
    let secrets: Vec<Value> = names.iter().map(|n| json!({ "name": n })).collect();
    json!({ "total_count": names.len(), "secrets": secrets })
}

pub fn user_entry(login: &str, kind: &str) -> Value {
    json!({ "login": login, "id": 1, "type": kind })
}
