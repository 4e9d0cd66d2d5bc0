//! WAAS (web application and API security) container firewall models
//!
//! The console nests everything under `rules[].applicationsSpec[]`. Sub-objects
//! are always sent, even when zero-valued, to match the console's own output.

use serde::{Deserialize, Serialize};

use super::{Collection, Secret, is_false, is_zero};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaasRule {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<Collection>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub read_timeout_seconds: i32,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applications_spec: Vec<WaasApplication>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaasApplication {
    #[serde(default, rename = "appID", skip_serializing_if = "String::is_empty")]
    pub app_id: String,

    #[serde(default)]
    pub api_spec: ApiSpec,

    #[serde(default)]
    pub tls_config: TlsConfig,

    // Firewall protections
    #[serde(default)]
    pub sqli: ProtectionConfig,

    #[serde(default)]
    pub xss: ProtectionConfig,

    #[serde(default)]
    pub cmdi: ProtectionConfig,

    #[serde(default)]
    pub code_injection: ProtectionConfig,

    #[serde(default)]
    pub lfi: ProtectionConfig,

    #[serde(default)]
    pub attack_tools: ProtectionConfig,

    #[serde(default)]
    pub shellshock: ProtectionConfig,

    #[serde(default)]
    pub malformed_req: ProtectionConfig,

    #[serde(default)]
    pub intel_gathering: IntelGathering,

    #[serde(default, skip_serializing_if = "is_false")]
    pub clickjacking_enabled: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub csrf_enabled: bool,

    #[serde(default)]
    pub dos_config: DosConfig,

    #[serde(default)]
    pub network_controls: NetworkControls,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header_specs: Vec<HeaderSpec>,

    #[serde(default)]
    pub malicious_upload: MaliciousUpload,

    #[serde(default)]
    pub bot_protection_spec: BotProtectionSpec,

    // Advanced settings
    #[serde(default, skip_serializing_if = "is_false")]
    pub session_cookie_enabled: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub session_cookie_ban: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub session_cookie_same_site: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub session_cookie_secure: bool,

    #[serde(default)]
    pub body: BodyConfig,

    #[serde(default)]
    pub custom_block_response: CustomBlockResponse,

    #[serde(default, rename = "disableEventIDHeader", skip_serializing_if = "is_false")]
    pub disable_event_id_header: bool,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub ban_duration_minutes: i32,
}

// ============================================================================
// API definition
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSpec {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub effect: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<Endpoint>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub fallback_effect: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<ApiPath>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub query_param_fallback_effect: String,

    /// Disables API endpoint discovery
    #[serde(default, skip_serializing_if = "is_false")]
    pub skip_learning: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub base_path: String,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub exposed_port: i32,

    #[serde(default, skip_serializing_if = "is_false")]
    pub grpc: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub http2: bool,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub internal_port: i32,

    #[serde(default, skip_serializing_if = "is_false")]
    pub tls: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiPath {
    #[serde(default)]
    pub path: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<ApiMethod>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiMethod {
    #[serde(default)]
    pub method: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ApiParameter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiParameter {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub location: String,

    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub style: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub allow_empty_value: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub array: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub explode: bool,

    #[serde(default)]
    pub min: f64,

    #[serde(default)]
    pub max: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsConfig {
    #[serde(default, rename = "minTLSVersion", skip_serializing_if = "String::is_empty")]
    pub min_tls_version: String,

    #[serde(default, rename = "HSTSConfig")]
    pub hsts_config: HstsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HstsConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_age_seconds: i32,

    #[serde(default, skip_serializing_if = "is_false")]
    pub include_subdomains: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub preload: bool,
}

// ============================================================================
// Firewall
// ============================================================================

/// Effect plus exceptions for one attack class (sqli, xss, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectionConfig {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub effect: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exception_fields: Vec<ExceptionField>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionField {
    #[serde(default)]
    pub location: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntelGathering {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub info_leakage_effect: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub remove_fingerprints_enabled: bool,
}

// ============================================================================
// DoS protection
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DosConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub alert: MatchRate,

    #[serde(default)]
    pub ban: MatchRate,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_network_lists: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub match_conditions: Vec<DosMatchCondition>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub track_session: bool,
}

/// Requests-per-second thresholds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRate {
    #[serde(default)]
    pub average: i32,

    #[serde(default)]
    pub burst: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DosMatchCondition {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_types: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub response_code_ranges: Vec<StatusCodeRange>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCodeRange {
    #[serde(default)]
    pub start: i32,

    #[serde(default)]
    pub end: i32,
}

// ============================================================================
// Access control
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkControls {
    /// Advanced threat protection effect
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub advanced_protection_effect: String,

    #[serde(default)]
    pub subnets: AccessControls,

    #[serde(default)]
    pub countries: AccessControls,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exception_subnets: Vec<String>,
}

/// Allow/deny lists for IP subnets or country codes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessControls {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub allow_mode: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allow: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alert: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prevent: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub fallback_effect: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSpec {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub effect: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub allow: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaliciousUpload {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub effect: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_file_types: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_extensions: Vec<String>,
}

// ============================================================================
// Bot protection
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotProtectionSpec {
    #[serde(default)]
    pub known_bot_protections_spec: KnownBotProtections,

    #[serde(default)]
    pub unknown_bot_protection_spec: UnknownBotProtection,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_defined_bots: Vec<UserDefinedBot>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub session_validation: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub interstitial_page: bool,

    #[serde(default)]
    pub js_injection_spec: JsInjectionSpec,

    #[serde(default, rename = "reCAPTCHASpec")]
    pub recaptcha_spec: RecaptchaSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnownBotProtections {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub archiving: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub business_analytics: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub career_search: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content_feed_clients: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub educational: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub financial: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub media_search: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub news: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub search_engine_crawlers: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnknownBotProtection {
    #[serde(default, rename = "apiLibraries", skip_serializing_if = "String::is_empty")]
    pub api_libraries: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bot_impersonation: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub browser_impersonation: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub generic: String,

    #[serde(default, rename = "httpLibraries", skip_serializing_if = "String::is_empty")]
    pub http_libraries: String,

    #[serde(default)]
    pub request_anomalies: RequestAnomalies,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub web_automation_tools: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub web_scrapers: String,
}

/// Anomaly scoring; the console blocks at or above `threshold`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestAnomalies {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub effect: String,

    #[serde(default = "unset_threshold")]
    pub threshold: i32,
}

fn unset_threshold() -> i32 {
    -1
}

impl Default for RequestAnomalies {
    fn default() -> Self {
        Self {
            effect: String::new(),
            threshold: unset_threshold(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDefinedBot {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub header_name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header_values: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subnets: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub effect: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsInjectionSpec {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub timeout_effect: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecaptchaSpec {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub all_sessions: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub site_key: String,

    /// Write-only; omitted when empty so an update keeps the stored key.
    #[serde(default, skip_serializing_if = "Secret::is_empty")]
    pub secret_key: Secret,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub success_expiration_hours: i32,

    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
}

// ============================================================================
// Advanced settings
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyConfig {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub inspection_size_bytes: i32,

    /// Disables body inspection
    #[serde(default, skip_serializing_if = "is_false")]
    pub skip: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomBlockResponse {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub code: i32,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,
}
