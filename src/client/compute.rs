//! Compute console API client implementation

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as HttpClient, Method, StatusCode, Url};
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};

use super::api::{
    AccessApi, AlertProfileApi, CloudScanRuleApi, CollectionApi, CredentialApi, CustomRuleApi,
    PolicyApi, SettingsApi, TagApi,
};
use super::models::{
    AlertProfile, AuthRequest, AuthResponse, CloudScanRule, Collection, Credential,
    CustomCompliance, CustomRule, Group, Policy, PolicyKind, RegistrySettings, Role, Tag, TagVuln,
    User,
};
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};

/// API path prefix, relative to the console URL
const API: &str = "api/v1";

/// Compute console API client
///
/// Holds one bearer token obtained at construction. The token is never
/// refreshed; an expiry mid-run surfaces as a non-200 error.
#[derive(Debug, Clone)]
pub struct ComputeClient {
    http: HttpClient,
    base_url: Url,
    project: Option<String>,
    token: String,
}

impl ComputeClient {
    /// Build the HTTP transport and log in.
    ///
    /// Fails with [`ApiError::Authentication`] if the login call errors,
    /// returns a non-200 status or returns no token.
    pub async fn connect(config: &ClientConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .danger_accept_invalid_certs(config.skip_cert_verification)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let base_url = Url::parse(&config.console_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", config.console_url, e)))?;

        let mut client = Self {
            http,
            base_url,
            project: config.project.clone().filter(|p| !p.is_empty()),
            token: String::new(),
        };

        client.token = client
            .authenticate(&config.username, &config.password)
            .await?;

        Ok(client)
    }

    /// Bearer token obtained at login
    pub fn token(&self) -> &str {
        &self.token
    }

    async fn authenticate(&self, username: &str, password: &str) -> Result<String> {
        let body = AuthRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let mut response = AuthResponse::default();
        self.request(
            Method::POST,
            &format!("{API}/authenticate"),
            &[],
            Some(&body),
            &mut response,
        )
        .await
        .map_err(|e| ApiError::Authentication(e.to_string()))?;

        if response.token.is_empty() {
            return Err(ApiError::Authentication("login response carried no token".to_string()).into());
        }

        Ok(response.token)
    }

    /// Join `path` onto the console URL and append the query string.
    ///
    /// Each `/`-separated piece of `path` becomes one percent-encoded path
    /// segment. `project=<project>` is appended only when a project is
    /// configured.
    pub fn build_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ApiError::InvalidUrl(format!("{} cannot be used as a base URL", self.base_url))
            })?;
            segments.pop_if_empty();
            for segment in path.split('/').filter(|s| !s.is_empty()) {
                segments.push(segment);
            }
        }

        if !query.is_empty() || self.project.is_some() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
            if let Some(project) = &self.project {
                pairs.append_pair("project", project);
            }
        }

        Ok(url)
    }

    /// Make one authenticated API request.
    ///
    /// `body`, when present, is sent as JSON. Any status other than 200 is an
    /// error carrying the status code. A 200 response with a non-empty body
    /// is decoded into `out`; an empty body leaves `out` untouched.
    pub async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
        out: &mut T,
    ) -> Result<()>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send,
    {
        let url = self.build_url(path, query)?;

        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        if !self.token.is_empty() {
            request = request.bearer_auth(&self.token);
        }

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(|e| ApiError::Serialize(e.to_string()))?;
            request = request.body(bytes);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::Status {
                status: status.as_u16(),
            }
            .into());
        }

        let bytes = response.bytes().await.map_err(ApiError::from)?;
        if bytes.is_empty() {
            return Ok(());
        }

        *out = serde_json::from_slice(&bytes).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        Ok(())
    }

    /// GET `path` and decode the response (default value for an empty body).
    async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Default + Send,
    {
        let mut out = T::default();
        self.request::<(), T>(Method::GET, path, &[], None, &mut out)
            .await?;
        Ok(out)
    }

    /// Send `body` with `method`, ignoring whatever the console returns.
    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + Sync + ?Sized,
    {
        let mut ignored = IgnoredAny;
        self.request(method, path, &[], body, &mut ignored).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.send::<()>(Method::DELETE, path, None).await
    }
}

#[async_trait]
impl PolicyApi for ComputeClient {
    async fn get_policy<R>(&self, kind: PolicyKind) -> Result<Policy<R>>
    where
        R: DeserializeOwned + Send + 'static,
    {
        self.get(&format!("{API}/{}", kind.path())).await
    }

    async fn update_policy<R>(&self, kind: PolicyKind, policy: &Policy<R>) -> Result<()>
    where
        R: Serialize + Send + Sync,
    {
        self.send(Method::PUT, &format!("{API}/{}", kind.path()), Some(policy))
            .await
    }
}

#[async_trait]
impl AlertProfileApi for ComputeClient {
    async fn list_alert_profiles(&self) -> Result<Vec<AlertProfile>> {
        self.get(&format!("{API}/alert-profiles")).await
    }

    async fn upsert_alert_profile(&self, profile: &AlertProfile) -> Result<()> {
        self.send(Method::POST, &format!("{API}/alert-profiles"), Some(profile))
            .await
    }

    async fn delete_alert_profile(&self, name: &str) -> Result<()> {
        self.delete(&format!("{API}/alert-profiles/{name}")).await
    }
}

#[async_trait]
impl CredentialApi for ComputeClient {
    async fn list_credentials(&self) -> Result<Vec<Credential>> {
        self.get(&format!("{API}/credentials")).await
    }

    async fn upsert_credential(&self, credential: &Credential) -> Result<()> {
        self.send(Method::POST, &format!("{API}/credentials"), Some(credential))
            .await
    }

    async fn delete_credential(&self, id: &str) -> Result<()> {
        self.delete(&format!("{API}/credentials/{id}")).await
    }
}

#[async_trait]
impl CloudScanRuleApi for ComputeClient {
    async fn list_cloud_scan_rules(&self) -> Result<Vec<CloudScanRule>> {
        self.get(&format!("{API}/cloud-scan-rules")).await
    }

    // The console takes a list on both create and update
    async fn create_cloud_scan_rule(&self, rule: &CloudScanRule) -> Result<()> {
        self.send(
            Method::POST,
            &format!("{API}/cloud-scan-rules"),
            Some(std::slice::from_ref(rule)),
        )
        .await
    }

    async fn update_cloud_scan_rule(&self, rule: &CloudScanRule) -> Result<()> {
        self.send(
            Method::PUT,
            &format!("{API}/cloud-scan-rules"),
            Some(std::slice::from_ref(rule)),
        )
        .await
    }

    async fn delete_cloud_scan_rule(&self, credential_id: &str) -> Result<()> {
        self.delete(&format!("{API}/cloud-scan-rules/{credential_id}"))
            .await
    }
}

#[async_trait]
impl CustomRuleApi for ComputeClient {
    async fn list_custom_rules(&self) -> Result<Vec<CustomRule>> {
        self.get(&format!("{API}/custom-rules")).await
    }

    async fn put_custom_rule(&self, rule: &CustomRule) -> Result<()> {
        self.send(
            Method::PUT,
            &format!("{API}/custom-rules/{}", rule.id),
            Some(rule),
        )
        .await
    }

    async fn delete_custom_rule(&self, id: i32) -> Result<()> {
        self.delete(&format!("{API}/custom-rules/{id}")).await
    }

    async fn list_custom_compliance(&self) -> Result<Vec<CustomCompliance>> {
        self.get(&format!("{API}/custom-compliance")).await
    }

    async fn put_custom_compliance(&self, check: &CustomCompliance) -> Result<()> {
        self.send(Method::PUT, &format!("{API}/custom-compliance"), Some(check))
            .await
    }

    async fn delete_custom_compliance(&self, id: i32) -> Result<()> {
        self.delete(&format!("{API}/custom-compliance/{id}")).await
    }
}

#[async_trait]
impl TagApi for ComputeClient {
    async fn list_tags(&self) -> Result<Vec<Tag>> {
        self.get(&format!("{API}/tags")).await
    }

    async fn create_tag(&self, tag: &Tag) -> Result<()> {
        self.send(Method::POST, &format!("{API}/tags"), Some(tag)).await
    }

    async fn update_tag(&self, name: &str, tag: &Tag) -> Result<()> {
        self.send(Method::PUT, &format!("{API}/tags/{name}"), Some(tag))
            .await
    }

    async fn delete_tag(&self, name: &str) -> Result<()> {
        self.delete(&format!("{API}/tags/{name}")).await
    }

    async fn add_tag_vuln(&self, name: &str, vuln: &TagVuln) -> Result<()> {
        self.send(Method::POST, &format!("{API}/tags/{name}/vuln"), Some(vuln))
            .await
    }

    async fn remove_tag_vuln(&self, name: &str, vuln: &TagVuln) -> Result<()> {
        self.send(
            Method::DELETE,
            &format!("{API}/tags/{name}/vuln"),
            Some(vuln),
        )
        .await
    }
}

#[async_trait]
impl AccessApi for ComputeClient {
    async fn list_groups(&self) -> Result<Vec<Group>> {
        self.get(&format!("{API}/groups")).await
    }

    async fn create_group(&self, group: &Group) -> Result<()> {
        self.send(Method::POST, &format!("{API}/groups"), Some(group))
            .await
    }

    async fn update_group(&self, name: &str, group: &Group) -> Result<()> {
        self.send(Method::PUT, &format!("{API}/groups/{name}"), Some(group))
            .await
    }

    async fn delete_group(&self, name: &str) -> Result<()> {
        self.delete(&format!("{API}/groups/{name}")).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.get(&format!("{API}/users")).await
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        self.send(Method::POST, &format!("{API}/users"), Some(user))
            .await
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        self.send(Method::PUT, &format!("{API}/users"), Some(user))
            .await
    }

    async fn delete_user(&self, username: &str) -> Result<()> {
        self.delete(&format!("{API}/users/{username}")).await
    }

    async fn list_roles(&self) -> Result<Vec<Role>> {
        self.get(&format!("{API}/rbac/roles")).await
    }

    async fn create_role(&self, role: &Role) -> Result<()> {
        self.send(Method::POST, &format!("{API}/rbac/roles"), Some(role))
            .await
    }

    async fn update_role(&self, role: &Role) -> Result<()> {
        self.send(Method::PUT, &format!("{API}/rbac/roles"), Some(role))
            .await
    }

    async fn delete_role(&self, name: &str) -> Result<()> {
        self.delete(&format!("{API}/rbac/roles/{name}")).await
    }
}

#[async_trait]
impl SettingsApi for ComputeClient {
    async fn get_registry_settings(&self) -> Result<RegistrySettings> {
        self.get(&format!("{API}/settings/registry")).await
    }

    async fn put_registry_settings(&self, settings: &RegistrySettings) -> Result<()> {
        self.send(
            Method::PUT,
            &format!("{API}/settings/registry"),
            Some(settings),
        )
        .await
    }
}

#[async_trait]
impl CollectionApi for ComputeClient {
    async fn list_collections(&self) -> Result<Vec<Collection>> {
        self.get(&format!("{API}/collections")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use mockito::Matcher;
    use serde_json::json;

    fn config(url: &str, project: Option<&str>) -> ClientConfig {
        ClientConfig {
            console_url: url.to_string(),
            project: project.map(str::to_string),
            username: "admin".to_string(),
            password: "pw".to_string(),
            skip_cert_verification: false,
        }
    }

    /// Mount the login mock and connect.
    async fn connected(server: &mut mockito::ServerGuard, project: Option<&str>) -> ComputeClient {
        server
            .mock("POST", "/api/v1/authenticate")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"token":"abc"}"#)
            .create_async()
            .await;

        ComputeClient::connect(&config(&server.url(), project))
            .await
            .expect("login should succeed")
    }

    #[tokio::test]
    async fn test_connect_stores_token() {
        let mut server = mockito::Server::new_async().await;
        let login = server
            .mock("POST", "/api/v1/authenticate")
            .match_body(Matcher::Json(json!({"username": "admin", "password": "pw"})))
            .with_status(200)
            .with_body(r#"{"token":"abc"}"#)
            .create_async()
            .await;

        let client = ComputeClient::connect(&config(&server.url(), None))
            .await
            .unwrap();

        assert_eq!(client.token(), "abc");
        login.assert_async().await;
    }

    #[tokio::test]
    async fn test_connect_with_project_sends_it_on_login() {
        let mut server = mockito::Server::new_async().await;
        let login = server
            .mock("POST", "/api/v1/authenticate")
            .match_query(Matcher::UrlEncoded("project".into(), "central".into()))
            .with_status(200)
            .with_body(r#"{"token":"abc"}"#)
            .create_async()
            .await;

        let client = ComputeClient::connect(&config(&server.url(), Some("central")))
            .await
            .unwrap();

        assert_eq!(client.token(), "abc");
        login.assert_async().await;
    }

    #[tokio::test]
    async fn test_connect_fails_on_non_200() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/v1/authenticate")
            .with_status(401)
            .with_body(r#"{"err":"invalid credentials"}"#)
            .create_async()
            .await;

        let err = ComputeClient::connect(&config(&server.url(), None))
            .await
            .unwrap_err();

        match err {
            Error::Api(ApiError::Authentication(msg)) => assert!(msg.contains("401")),
            other => panic!("Expected authentication error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connect_fails_without_token() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/v1/authenticate")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let err = ComputeClient::connect(&config(&server.url(), None))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Authentication(_))));
    }

    #[tokio::test]
    async fn test_build_url_with_project_adds_one_parameter() {
        let mut server = mockito::Server::new_async().await;
        let client = connected(&mut server, Some("central")).await;

        let url = client.build_url("api/v1/tags", &[]).unwrap();
        let projects: Vec<_> = url
            .query_pairs()
            .filter(|(k, _)| k == "project")
            .map(|(_, v)| v.into_owned())
            .collect();
        assert_eq!(projects, vec!["central".to_string()]);
    }

    #[tokio::test]
    async fn test_build_url_without_project_has_no_parameter() {
        let mut server = mockito::Server::new_async().await;
        let client = connected(&mut server, None).await;

        let url = client.build_url("api/v1/tags", &[]).unwrap();
        assert!(url.query().is_none());
        assert!(url.path().ends_with("/api/v1/tags"));

        let url = client.build_url("api/v1/tags", &[("search", "x")]).unwrap();
        assert_eq!(url.query(), Some("search=x"));
    }

    #[tokio::test]
    async fn test_build_url_with_empty_project_has_no_parameter() {
        let mut server = mockito::Server::new_async().await;
        let client = connected(&mut server, Some("")).await;

        let url = client.build_url("api/v1/tags", &[]).unwrap();
        assert!(url.query().is_none());

        let url = client.build_url("api/v1/tags", &[("search", "x")]).unwrap();
        assert_eq!(url.query(), Some("search=x"));
    }

    #[tokio::test]
    async fn test_build_url_encodes_segments() {
        let mut server = mockito::Server::new_async().await;
        let client = connected(&mut server, None).await;

        let url = client.build_url("api/v1/tags/my tag", &[]).unwrap();
        assert!(url.path().ends_with("/api/v1/tags/my%20tag"));
    }

    #[tokio::test]
    async fn test_request_sends_auth_headers_and_project() {
        let mut server = mockito::Server::new_async().await;
        let client = connected(&mut server, Some("central")).await;

        let tags = server
            .mock("GET", "/api/v1/tags")
            .match_header("authorization", "Bearer abc")
            .match_header("content-type", "application/json")
            .match_query(Matcher::UrlEncoded("project".into(), "central".into()))
            .with_status(200)
            .with_body(r##"[{"name":"ignored","color":"#ff0000"}]"##)
            .create_async()
            .await;

        let result = client.list_tags().await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "ignored");
        tags.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_200_is_an_error_regardless_of_body() {
        let mut server = mockito::Server::new_async().await;
        let client = connected(&mut server, None).await;

        server
            .mock("GET", "/api/v1/tags")
            .with_status(201)
            .with_body("[]")
            .create_async()
            .await;

        let err = client.list_tags().await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Status { status: 201 })));
    }

    #[tokio::test]
    async fn test_empty_200_body_leaves_output_untouched() {
        let mut server = mockito::Server::new_async().await;
        let client = connected(&mut server, None).await;

        server
            .mock("GET", "/api/v1/settings/registry")
            .with_status(200)
            .create_async()
            .await;

        let mut out = vec!["sentinel".to_string()];
        client
            .request::<(), _>(Method::GET, "api/v1/settings/registry", &[], None, &mut out)
            .await
            .unwrap();
        assert_eq!(out, vec!["sentinel".to_string()]);
    }

    #[tokio::test]
    async fn test_malformed_json_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let client = connected(&mut server, None).await;

        server
            .mock("GET", "/api/v1/groups")
            .with_status(200)
            .with_body("{not json")
            .create_async()
            .await;

        let err = client.list_groups().await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_update_policy_puts_rules_in_order() {
        let mut server = mockito::Server::new_async().await;
        let client = connected(&mut server, None).await;

        let put = server
            .mock("PUT", "/api/v1/policies/admission")
            .match_body(Matcher::Json(json!({
                "policyType": "admission",
                "rules": [
                    {"name": "second", "effect": "alert"},
                    {"name": "first", "effect": "block"}
                ]
            })))
            .with_status(200)
            .create_async()
            .await;

        let policy = Policy::new(
            PolicyKind::Admission,
            vec![
                crate::client::models::AdmissionRule {
                    name: "second".to_string(),
                    effect: "alert".to_string(),
                    ..Default::default()
                },
                crate::client::models::AdmissionRule {
                    name: "first".to_string(),
                    effect: "block".to_string(),
                    ..Default::default()
                },
            ],
        );
        client
            .update_policy(PolicyKind::Admission, &policy)
            .await
            .unwrap();
        put.assert_async().await;
    }

    #[tokio::test]
    async fn test_cloud_scan_rule_create_sends_a_list() {
        let mut server = mockito::Server::new_async().await;
        let client = connected(&mut server, None).await;

        let post = server
            .mock("POST", "/api/v1/cloud-scan-rules")
            .match_body(Matcher::Json(json!([
                {"credentialId": "aws-prod", "agentlessScanSpec": {}, "serverlessScanSpec": {}}
            ])))
            .with_status(200)
            .create_async()
            .await;

        let rule = CloudScanRule {
            credential_id: "aws-prod".to_string(),
            ..Default::default()
        };
        client.create_cloud_scan_rule(&rule).await.unwrap();
        post.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_custom_rule_uses_id_path() {
        let mut server = mockito::Server::new_async().await;
        let client = connected(&mut server, None).await;

        let delete = server
            .mock("DELETE", "/api/v1/custom-rules/17")
            .with_status(200)
            .create_async()
            .await;

        client.delete_custom_rule(17).await.unwrap();
        delete.assert_async().await;
    }
}
