//! WAAS container firewall policy schema
//!
//! The deepest tree in the crate. A rule holds applications; each application
//! is split into app definition, firewall, DoS, access control, bot
//! protection and advanced settings blocks.
//!
//! Three flags read the opposite way from the console's JSON and default to
//! `true` here, so an absent block means the console's zero value:
//! `endpoint_setup.api_endpoint_discovery_enabled`,
//! `http_body_inspection.enabled` and `advanced_settings.enable_event_id_header`.

use serde::{Deserialize, Serialize};

use super::{
    BOT_SENSITIVITIES, PARAMETER_LOCATIONS, SAME_SITE, SchemaResult, TLS_VERSIONS, Validate,
    WAAS_EFFECTS, field, one_of, required, singleton,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaasRuleSchema {
    pub name: String,
    pub collections: Vec<String>,
    pub notes: String,
    pub disabled: bool,
    pub read_timeout_seconds: i32,
    pub application: Vec<WaasApplicationSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaasApplicationSchema {
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub app_definition: Option<AppDefinitionSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub app_firewall: Option<AppFirewallSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub dos_protection: Option<DosProtectionSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub access_control: Option<AccessControlSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub bot_protection: Option<BotProtectionSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub advanced_settings: Option<AdvancedSettingsSchema>,
}

// ============================================================================
// App definition
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppDefinitionSchema {
    pub app_id: String,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub endpoint_setup: Option<EndpointSetupSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub api_protection: Option<ApiProtectionSchema>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EndpointSetupSchema {
    pub api_endpoint_discovery_enabled: bool,
    pub endpoint: Vec<EndpointSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub tls_config: Option<TlsConfigSchema>,
}

impl Default for EndpointSetupSchema {
    fn default() -> Self {
        Self {
            api_endpoint_discovery_enabled: true,
            endpoint: Vec::new(),
            tls_config: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EndpointSchema {
    pub host: String,
    pub base_path: String,
    pub exposed_port: i32,
    pub internal_port: i32,
    pub tls: bool,
    pub http2: bool,
    pub grpc: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TlsConfigSchema {
    pub min_tls_version: String,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub hsts_config: Option<HstsConfigSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HstsConfigSchema {
    pub enabled: bool,
    pub max_age_seconds: i32,
    pub include_subdomains: bool,
    pub preload: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiProtectionSchema {
    pub description: String,
    pub effect: String,
    pub fallback_effect: String,
    pub query_param_fallback_effect: String,
    pub path: Vec<ApiPathSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiPathSchema {
    pub path: String,
    pub method: Vec<ApiMethodSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiMethodSchema {
    pub method: String,
    pub parameter: Vec<ApiParameterSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiParameterSchema {
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub style: String,
    pub required: bool,
    pub allow_empty_value: bool,
    pub array: bool,
    pub explode: bool,
    pub min: f64,
    pub max: f64,
}

// ============================================================================
// App firewall
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppFirewallSchema {
    pub clickjacking_enabled: bool,
    pub csrf_enabled: bool,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub sql_injection: Option<FirewallProtectionSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub xss: Option<FirewallProtectionSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub command_injection: Option<FirewallProtectionSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub code_injection: Option<FirewallProtectionSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub local_file_inclusion: Option<FirewallProtectionSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub attack_tools: Option<FirewallProtectionSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub shellshock: Option<FirewallProtectionSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub malformed_request: Option<FirewallProtectionSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub advanced_threat_protection: Option<AdvancedThreatProtectionSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub information_leakage: Option<InformationLeakageSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FirewallProtectionSchema {
    pub effect: String,
    pub exception_field: Vec<ExceptionFieldSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExceptionFieldSchema {
    pub location: String,
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdvancedThreatProtectionSchema {
    pub effect: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InformationLeakageSchema {
    pub effect: String,
    pub remove_fingerprints_enabled: bool,
}

// ============================================================================
// DoS protection
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DosProtectionSchema {
    pub enabled: bool,
    pub excluded_network_lists: Vec<String>,
    pub track_session: bool,
    pub match_condition: Vec<DosMatchConditionSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub alert: Option<MatchRateSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub ban: Option<MatchRateSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchRateSchema {
    pub average: i32,
    pub burst: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DosMatchConditionSchema {
    pub file_types: Vec<String>,
    pub methods: Vec<String>,
    pub response_code_range: Vec<ResponseCodeRangeSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResponseCodeRangeSchema {
    pub start: i32,
    pub end: i32,
}

// ============================================================================
// Access control
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccessControlSchema {
    pub http_header: Vec<HttpHeaderSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub network_controls: Option<NetworkControlsSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub file_uploads: Option<FileUploadsSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkControlsSchema {
    pub exception_subnets: Vec<String>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub ip_access_control: Option<ListAccessControlSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub geo_access_control: Option<ListAccessControlSchema>,
}

/// Allow/alert/prevent lists of subnets or country codes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListAccessControlSchema {
    pub enabled: bool,
    pub allow_mode: bool,
    pub allow: Vec<String>,
    pub alert: Vec<String>,
    pub prevent: Vec<String>,
    pub fallback_effect: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpHeaderSchema {
    pub name: String,
    pub values: Vec<String>,
    pub effect: String,
    pub allow: bool,
    pub required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileUploadsSchema {
    pub effect: String,
    pub allowed_file_types: Vec<String>,
    pub allowed_extensions: Vec<String>,
}

// ============================================================================
// Bot protection
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BotProtectionSchema {
    pub user_defined_bot: Vec<UserDefinedBotSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub known_bots: Option<KnownBotsSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub unknown_bots: Option<UnknownBotsSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub active_bot_detection: Option<ActiveBotDetectionSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KnownBotsSchema {
    pub archiving: String,
    pub business_analytics: String,
    pub career_search: String,
    pub content_feed_clients: String,
    pub educational: String,
    pub financial: String,
    pub media_search: String,
    pub news: String,
    pub search_engine_crawlers: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UnknownBotsSchema {
    pub api_libraries: String,
    pub bot_impersonation: String,
    pub browser_impersonation: String,
    pub generic: String,
    pub http_libraries: String,
    pub web_automation_tools: String,
    pub web_scrapers: String,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub request_anomalies: Option<RequestAnomaliesSchema>,
}

/// `threshold` is a sensitivity name (`lax`, `moderate`, `strict`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RequestAnomaliesSchema {
    pub effect: String,
    pub threshold: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserDefinedBotSchema {
    pub name: String,
    pub header_name: String,
    pub header_values: Vec<String>,
    pub subnets: Vec<String>,
    pub effect: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ActiveBotDetectionSchema {
    pub session_validation: String,
    pub interstitial_page: bool,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub javascript_based_detection: Option<JavascriptDetectionSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub recaptcha: Option<RecaptchaSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JavascriptDetectionSchema {
    pub enabled: bool,
    pub timeout_effect: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecaptchaSchema {
    pub enabled: bool,
    pub all_sessions: bool,
    pub site_key: String,
    pub secret_key: String,
    pub success_expiration_hours: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

// ============================================================================
// Advanced settings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdvancedSettingsSchema {
    pub enable_event_id_header: bool,
    pub ban_duration_minutes: i32,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub session_cookies: Option<SessionCookiesSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub http_body_inspection: Option<HttpBodyInspectionSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub custom_waas_response: Option<CustomResponseSchema>,
}

impl Default for AdvancedSettingsSchema {
    fn default() -> Self {
        Self {
            enable_event_id_header: true,
            ban_duration_minutes: 0,
            session_cookies: None,
            http_body_inspection: None,
            custom_waas_response: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionCookiesSchema {
    pub enabled: bool,
    pub ban: bool,
    pub same_site: String,
    pub secure: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpBodyInspectionSchema {
    pub enabled: bool,
    pub inspection_size_bytes: i32,
}

impl Default for HttpBodyInspectionSchema {
    fn default() -> Self {
        Self {
            enabled: true,
            inspection_size_bytes: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CustomResponseSchema {
    pub enabled: bool,
    pub code: i32,
    pub body: String,
}

// ============================================================================
// Validation
// ============================================================================

impl Validate for WaasRuleSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        required(path, "name", &self.name)?;
        self.application.validate(&field(path, "application"))
    }
}

impl Validate for WaasApplicationSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        self.app_definition
            .validate(&field(path, "app_definition"))?;
        self.app_firewall.validate(&field(path, "app_firewall"))?;
        self.access_control
            .validate(&field(path, "access_control"))?;
        self.bot_protection
            .validate(&field(path, "bot_protection"))?;
        self.advanced_settings
            .validate(&field(path, "advanced_settings"))
    }
}

impl Validate for AppDefinitionSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        if let Some(tls) = self
            .endpoint_setup
            .as_ref()
            .and_then(|e| e.tls_config.as_ref())
        {
            one_of(
                &field(&field(path, "endpoint_setup"), "tls_config"),
                "min_tls_version",
                &tls.min_tls_version,
                TLS_VERSIONS,
            )?;
        }
        self.api_protection
            .validate(&field(path, "api_protection"))
    }
}

impl Validate for ApiProtectionSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        one_of(path, "effect", &self.effect, WAAS_EFFECTS)?;
        one_of(path, "fallback_effect", &self.fallback_effect, WAAS_EFFECTS)?;
        one_of(
            path,
            "query_param_fallback_effect",
            &self.query_param_fallback_effect,
            WAAS_EFFECTS,
        )?;
        for (i, api_path) in self.path.iter().enumerate() {
            for (j, method) in api_path.method.iter().enumerate() {
                for (k, parameter) in method.parameter.iter().enumerate() {
                    one_of(
                        &format!("{path}.path[{i}].method[{j}].parameter[{k}]"),
                        "location",
                        &parameter.location,
                        PARAMETER_LOCATIONS,
                    )?;
                }
            }
        }
        Ok(())
    }
}

impl Validate for AppFirewallSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        for (name, block) in [
            ("sql_injection", &self.sql_injection),
            ("xss", &self.xss),
            ("command_injection", &self.command_injection),
            ("code_injection", &self.code_injection),
            ("local_file_inclusion", &self.local_file_inclusion),
            ("attack_tools", &self.attack_tools),
            ("shellshock", &self.shellshock),
            ("malformed_request", &self.malformed_request),
        ] {
            block.validate(&field(path, name))?;
        }
        if let Some(atp) = &self.advanced_threat_protection {
            one_of(
                &field(path, "advanced_threat_protection"),
                "effect",
                &atp.effect,
                WAAS_EFFECTS,
            )?;
        }
        if let Some(leakage) = &self.information_leakage {
            one_of(
                &field(path, "information_leakage"),
                "effect",
                &leakage.effect,
                WAAS_EFFECTS,
            )?;
        }
        Ok(())
    }
}

impl Validate for FirewallProtectionSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        one_of(path, "effect", &self.effect, WAAS_EFFECTS)
    }
}

impl Validate for AccessControlSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        for (i, header) in self.http_header.iter().enumerate() {
            one_of(
                &format!("{path}.http_header[{i}]"),
                "effect",
                &header.effect,
                WAAS_EFFECTS,
            )?;
        }
        if let Some(uploads) = &self.file_uploads {
            one_of(
                &field(path, "file_uploads"),
                "effect",
                &uploads.effect,
                WAAS_EFFECTS,
            )?;
        }
        Ok(())
    }
}

impl Validate for BotProtectionSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        if let Some(known) = &self.known_bots {
            let at = field(path, "known_bots");
            for (name, value) in [
                ("archiving", &known.archiving),
                ("business_analytics", &known.business_analytics),
                ("career_search", &known.career_search),
                ("content_feed_clients", &known.content_feed_clients),
                ("educational", &known.educational),
                ("financial", &known.financial),
                ("media_search", &known.media_search),
                ("news", &known.news),
                ("search_engine_crawlers", &known.search_engine_crawlers),
            ] {
                one_of(&at, name, value, WAAS_EFFECTS)?;
            }
        }
        if let Some(unknown) = &self.unknown_bots {
            let at = field(path, "unknown_bots");
            for (name, value) in [
                ("api_libraries", &unknown.api_libraries),
                ("bot_impersonation", &unknown.bot_impersonation),
                ("browser_impersonation", &unknown.browser_impersonation),
                ("generic", &unknown.generic),
                ("http_libraries", &unknown.http_libraries),
                ("web_automation_tools", &unknown.web_automation_tools),
                ("web_scrapers", &unknown.web_scrapers),
            ] {
                one_of(&at, name, value, WAAS_EFFECTS)?;
            }
            if let Some(anomalies) = &unknown.request_anomalies {
                let at = field(&at, "request_anomalies");
                one_of(&at, "effect", &anomalies.effect, WAAS_EFFECTS)?;
                one_of(&at, "threshold", &anomalies.threshold, BOT_SENSITIVITIES)?;
            }
        }
        for (i, bot) in self.user_defined_bot.iter().enumerate() {
            one_of(
                &format!("{path}.user_defined_bot[{i}]"),
                "effect",
                &bot.effect,
                WAAS_EFFECTS,
            )?;
        }
        Ok(())
    }
}

impl Validate for AdvancedSettingsSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        if let Some(cookies) = &self.session_cookies {
            one_of(
                &field(path, "session_cookies"),
                "same_site",
                &cookies.same_site,
                SAME_SITE,
            )?;
        }
        Ok(())
    }
}
