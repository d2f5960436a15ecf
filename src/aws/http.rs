//! Lightweight AWS HTTP client with SigV4 signing
//!
//! Speaks the AWS Query protocol (EC2, IAM) directly over HTTP instead of
//! pulling in the service SDKs. A client is constructed from bare credentials
//! for every operation and holds no state across calls.

use anyhow::{anyhow, Result};
use aws_sigv4::http_request::{sign, SignableBody, SignableRequest, SigningSettings};
use aws_sigv4::sign::v4::SigningParams;
use aws_smithy_runtime_api::client::identity::Identity;
use reqwest::Client;
use std::time::SystemTime;
use tracing::{debug, trace, warn};

/// Immutable client configuration: the only input the service adapters get.
#[derive(Clone)]
pub struct ClientConfig {
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
    /// Endpoint override for all services (LocalStack, tests).
    pub endpoint_url: Option<String>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_key", &mask_credential(&self.access_key))
            .field("secret_key", &"********")
            .field("region", &self.region)
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

/// Truncate a response body for logging without splitting a multibyte
/// character.
fn truncate_body(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Mask sensitive credential values for logging
fn mask_credential(value: &str) -> String {
    if value.len() <= 8 {
        "*".repeat(value.len())
    } else {
        format!("{}...{}", &value[..4], &value[value.len() - 4..])
    }
}

/// AWS service definition
#[derive(Debug, Clone)]
pub(crate) struct ServiceDefinition {
    /// Service signing name (e.g., "ec2", "iam")
    pub signing_name: &'static str,
    /// Service endpoint prefix
    pub endpoint_prefix: &'static str,
    /// Query API version (e.g., "2016-11-15" for EC2)
    pub api_version: &'static str,
    /// Whether this is a global service (signs against us-east-1)
    pub is_global: bool,
}

/// Service definitions for the two backing services
pub(crate) fn get_service(name: &str) -> Option<ServiceDefinition> {
    match name {
        "ec2" => Some(ServiceDefinition {
            signing_name: "ec2",
            endpoint_prefix: "ec2",
            api_version: "2016-11-15",
            is_global: false,
        }),
        "iam" => Some(ServiceDefinition {
            signing_name: "iam",
            endpoint_prefix: "iam",
            api_version: "2010-05-08",
            is_global: true,
        }),
        _ => None,
    }
}

/// AWS HTTP client. One instance per operation invocation.
pub struct AwsHttpClient {
    http_client: Client,
    config: ClientConfig,
}

impl AwsHttpClient {
    /// Create a new AWS HTTP client from bare credentials.
    pub fn new(config: &ClientConfig) -> Self {
        debug!(
            "Creating AWS HTTP client for region: {}, access_key: {}",
            config.region,
            mask_credential(&config.access_key)
        );
        Self {
            http_client: Client::new(),
            config: config.clone(),
        }
    }

    /// Region a service request is signed against.
    fn effective_region<'a>(&'a self, service: &ServiceDefinition) -> &'a str {
        if service.is_global {
            "us-east-1"
        } else {
            &self.config.region
        }
    }

    /// Endpoint URL for a service.
    pub(crate) fn get_endpoint(&self, service: &ServiceDefinition) -> String {
        // A custom endpoint overrides ALL services (LocalStack, etc.)
        if let Some(ref endpoint) = self.config.endpoint_url {
            return endpoint.clone();
        }

        if service.is_global {
            return format!("https://{}.amazonaws.com", service.endpoint_prefix);
        }

        format!(
            "https://{}.{}.amazonaws.com",
            service.endpoint_prefix, self.config.region
        )
    }

    /// Make a Query protocol request (EC2, IAM): Action and Version plus the
    /// flattened operation parameters, POSTed with an empty body. Returns the
    /// raw XML response body.
    pub async fn query_request(
        &self,
        service_name: &str,
        action: &str,
        params: &[(String, String)],
    ) -> Result<String> {
        debug!("Query request: service={}, action={}", service_name, action);
        trace!("Query params: {:?}", params);

        let service = get_service(service_name)
            .ok_or_else(|| anyhow!("Unknown service: {}", service_name))?;

        let endpoint = self.get_endpoint(&service);
        debug!("Endpoint: {}", endpoint);

        let mut query_params: Vec<(String, String)> = vec![
            ("Action".to_string(), action.to_string()),
            ("Version".to_string(), service.api_version.to_string()),
        ];
        query_params.extend(params.iter().cloned());

        let query_string: String = query_params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let url = format!("{}/?{}", endpoint, query_string);

        self.signed_request(&service, "POST", &url, "").await
    }

    /// Make a signed request
    async fn signed_request(
        &self,
        service: &ServiceDefinition,
        method: &str,
        url: &str,
        body: &str,
    ) -> Result<String> {
        let region = self.effective_region(service);

        // Parse URL
        let parsed_url = url::Url::parse(url)?;
        let host = parsed_url
            .host_str()
            .ok_or_else(|| anyhow!("Invalid URL"))?;
        let path_and_query = if let Some(query) = parsed_url.query() {
            format!("{}?{}", parsed_url.path(), query)
        } else {
            parsed_url.path().to_string()
        };

        let headers = vec![("host".to_string(), host.to_string())];

        // Create identity for signing
        let creds = aws_credential_types::Credentials::new(
            &self.config.access_key,
            &self.config.secret_key,
            None,
            None,
            "laws",
        );
        let identity: Identity = creds.into();

        // Create signing params
        let signing_params = SigningParams::builder()
            .identity(&identity)
            .region(region)
            .name(service.signing_name)
            .time(SystemTime::now())
            .settings(SigningSettings::default())
            .build()?
            .into();

        let signable_body = if body.is_empty() {
            SignableBody::Bytes(&[])
        } else {
            SignableBody::Bytes(body.as_bytes())
        };

        let signable_request = SignableRequest::new(
            method,
            &path_and_query,
            headers.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            signable_body,
        )?;

        // Sign the request
        let (signing_instructions, _signature) =
            sign(signable_request, &signing_params)?.into_parts();

        // Build the actual request
        let mut request = match method {
            "GET" => self.http_client.get(url),
            "POST" => self.http_client.post(url),
            "DELETE" => self.http_client.delete(url),
            _ => return Err(anyhow!("Unsupported HTTP method: {}", method)),
        };

        // Apply signing headers
        for (name, value) in signing_instructions.headers() {
            request = request.header(name.to_string(), value.to_string());
        }

        // Set body if present
        if !body.is_empty() {
            request = request.body(body.to_string());
        }

        // Send request
        trace!("Sending {} request to {}", method, url);
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!("Response status: {}", status);
        trace!(
            "Response body (first 2000 bytes): {}",
            truncate_body(&text, 2000)
        );

        if !status.is_success() {
            warn!(
                "AWS request failed: status={}, body={}",
                status,
                truncate_body(&text, 500)
            );
            return Err(anyhow!("AWS request failed ({}): {}", status, text));
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_region(region: &str) -> ClientConfig {
        ClientConfig {
            access_key: "TESTACCESSKEY".to_string(),
            secret_key: "TESTSECRETKEY".to_string(),
            region: region.to_string(),
            endpoint_url: None,
        }
    }

    #[test]
    fn ec2_uses_regional_endpoint() {
        let client = AwsHttpClient::new(&config_with_region("eu-west-1"));
        let service = get_service("ec2").expect("ec2 service definition");
        assert_eq!(
            client.get_endpoint(&service),
            "https://ec2.eu-west-1.amazonaws.com"
        );
    }

    #[test]
    fn iam_uses_global_endpoint() {
        let client = AwsHttpClient::new(&config_with_region("eu-west-1"));
        let service = get_service("iam").expect("iam service definition");
        assert_eq!(client.get_endpoint(&service), "https://iam.amazonaws.com");
    }

    #[test]
    fn custom_endpoint_overrides_all_services() {
        let mut config = config_with_region("eu-west-1");
        config.endpoint_url = Some("http://127.0.0.1:4566".to_string());
        let client = AwsHttpClient::new(&config);
        for name in ["ec2", "iam"] {
            let service = get_service(name).expect("service definition");
            assert_eq!(client.get_endpoint(&service), "http://127.0.0.1:4566");
        }
    }

    #[test]
    fn unknown_service_is_rejected() {
        assert!(get_service("s3").is_none());
    }

    #[test]
    fn debug_output_masks_credentials() {
        let config = config_with_region("eu-west-1");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("TESTSECRETKEY"));
    }

    #[test]
    fn body_truncation_stays_on_char_boundaries() {
        // 1 ASCII byte then 250 two-byte chars: byte 500 falls inside 'é'.
        let body = format!("x{}", "é".repeat(250));
        assert_eq!(body.len(), 501);
        let cut = truncate_body(&body, 500);
        assert_eq!(cut.len(), 499);
        assert!(cut.ends_with('é'));

        assert_eq!(truncate_body("short", 500), "short");
        assert_eq!(truncate_body("abcdef", 3), "abc");
        assert_eq!(truncate_body("", 500), "");
    }

    #[tokio::test]
    async fn multibyte_error_body_is_an_error_not_a_panic() {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        // Force log formatting so the truncation path actually runs.
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(std::io::sink)
            .try_init();

        let server = MockServer::start().await;
        let body = format!("x{}", "é".repeat(250));
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string(body.clone()))
            .mount(&server)
            .await;

        let mut config = config_with_region("eu-west-1");
        config.endpoint_url = Some(server.uri());
        let err = AwsHttpClient::new(&config)
            .query_request("ec2", "CreateVpc", &[])
            .await
            .unwrap_err();
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains(&body));
    }
}
