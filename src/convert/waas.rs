//! WAAS container rule conversions
//!
//! The schema groups the console's flat application object into themed
//! blocks; each block is assembled from (or split back into) the matching
//! application fields. Three flags are inverted on the way through, see
//! [`crate::schema::waas`].

use super::{block, collection_names, collections, map_from, map_into};
use crate::client::models::{
    AccessControls, ApiMethod, ApiParameter, ApiPath, ApiSpec, BodyConfig, BotProtectionSpec,
    CustomBlockResponse, DosConfig, DosMatchCondition, Endpoint, ExceptionField, HeaderSpec,
    HstsConfig, IntelGathering, JsInjectionSpec, KnownBotProtections, MaliciousUpload, MatchRate,
    NetworkControls, ProtectionConfig, RecaptchaSpec, RequestAnomalies, Secret, StatusCodeRange,
    TlsConfig, UnknownBotProtection, UserDefinedBot, WaasApplication, WaasRule,
};
use crate::schema::waas::{
    AccessControlSchema, ActiveBotDetectionSchema, AdvancedSettingsSchema,
    AdvancedThreatProtectionSchema, ApiMethodSchema, ApiParameterSchema, ApiPathSchema,
    ApiProtectionSchema, AppDefinitionSchema, AppFirewallSchema, BotProtectionSchema,
    CustomResponseSchema, DosMatchConditionSchema, DosProtectionSchema, EndpointSchema,
    EndpointSetupSchema, ExceptionFieldSchema, FileUploadsSchema, FirewallProtectionSchema,
    HstsConfigSchema, HttpBodyInspectionSchema, HttpHeaderSchema, InformationLeakageSchema,
    JavascriptDetectionSchema, KnownBotsSchema, ListAccessControlSchema, MatchRateSchema,
    NetworkControlsSchema, RecaptchaSchema, RequestAnomaliesSchema, ResponseCodeRangeSchema,
    SessionCookiesSchema, TlsConfigSchema, UnknownBotsSchema, UserDefinedBotSchema,
    WaasApplicationSchema, WaasRuleSchema,
};

/// Request-anomaly score threshold for a sensitivity name.
///
/// Unknown names (including the empty string) map to -1, the console's
/// "unset" threshold.
pub fn anomaly_threshold(sensitivity: &str) -> i32 {
    match sensitivity {
        "lax" => 9,
        "moderate" => 6,
        "strict" => 3,
        _ => -1,
    }
}

/// Sensitivity name for a threshold; any other score reads back unset.
pub fn anomaly_sensitivity(threshold: i32) -> String {
    match threshold {
        9 => "lax",
        6 => "moderate",
        3 => "strict",
        _ => "",
    }
    .to_string()
}

impl From<WaasRuleSchema> for WaasRule {
    fn from(s: WaasRuleSchema) -> Self {
        Self {
            name: s.name,
            collections: collections(s.collections),
            notes: s.notes,
            disabled: s.disabled,
            read_timeout_seconds: s.read_timeout_seconds,
            applications_spec: map_into(s.application),
        }
    }
}

impl From<&WaasRule> for WaasRuleSchema {
    fn from(r: &WaasRule) -> Self {
        Self {
            name: r.name.clone(),
            collections: collection_names(&r.collections),
            notes: r.notes.clone(),
            disabled: r.disabled,
            read_timeout_seconds: r.read_timeout_seconds,
            application: map_from(&r.applications_spec),
        }
    }
}

// ============================================================================
// Application: schema -> console
// ============================================================================

impl From<WaasApplicationSchema> for WaasApplication {
    fn from(s: WaasApplicationSchema) -> Self {
        let definition = s.app_definition.unwrap_or_default();
        let setup = definition.endpoint_setup.unwrap_or_default();
        let protection = definition.api_protection.unwrap_or_default();
        let tls = setup.tls_config.unwrap_or_default();
        let hsts = tls.hsts_config.unwrap_or_default();

        let firewall = s.app_firewall.unwrap_or_default();
        let leakage = firewall.information_leakage.unwrap_or_default();
        let threat = firewall.advanced_threat_protection.unwrap_or_default();

        let access = s.access_control.unwrap_or_default();
        let controls = access.network_controls.unwrap_or_default();

        let advanced = s.advanced_settings.unwrap_or_default();
        let cookies = advanced.session_cookies.unwrap_or_default();
        let body = advanced.http_body_inspection.unwrap_or_default();

        Self {
            app_id: definition.app_id,
            api_spec: ApiSpec {
                description: protection.description,
                effect: protection.effect,
                endpoints: map_into(setup.endpoint),
                fallback_effect: protection.fallback_effect,
                paths: map_into(protection.path),
                query_param_fallback_effect: protection.query_param_fallback_effect,
                skip_learning: !setup.api_endpoint_discovery_enabled,
            },
            tls_config: TlsConfig {
                min_tls_version: tls.min_tls_version,
                hsts_config: HstsConfig {
                    enabled: hsts.enabled,
                    max_age_seconds: hsts.max_age_seconds,
                    include_subdomains: hsts.include_subdomains,
                    preload: hsts.preload,
                },
            },
            sqli: firewall.sql_injection.unwrap_or_default().into(),
            xss: firewall.xss.unwrap_or_default().into(),
            cmdi: firewall.command_injection.unwrap_or_default().into(),
            code_injection: firewall.code_injection.unwrap_or_default().into(),
            lfi: firewall.local_file_inclusion.unwrap_or_default().into(),
            attack_tools: firewall.attack_tools.unwrap_or_default().into(),
            shellshock: firewall.shellshock.unwrap_or_default().into(),
            malformed_req: firewall.malformed_request.unwrap_or_default().into(),
            intel_gathering: IntelGathering {
                info_leakage_effect: leakage.effect,
                remove_fingerprints_enabled: leakage.remove_fingerprints_enabled,
            },
            clickjacking_enabled: firewall.clickjacking_enabled,
            csrf_enabled: firewall.csrf_enabled,
            dos_config: s.dos_protection.unwrap_or_default().into(),
            network_controls: NetworkControls {
                advanced_protection_effect: threat.effect,
                subnets: controls.ip_access_control.unwrap_or_default().into(),
                countries: controls.geo_access_control.unwrap_or_default().into(),
                exception_subnets: controls.exception_subnets,
            },
            header_specs: map_into(access.http_header),
            malicious_upload: access.file_uploads.unwrap_or_default().into(),
            bot_protection_spec: s.bot_protection.unwrap_or_default().into(),
            session_cookie_enabled: cookies.enabled,
            session_cookie_ban: cookies.ban,
            session_cookie_same_site: cookies.same_site,
            session_cookie_secure: cookies.secure,
            body: BodyConfig {
                inspection_size_bytes: body.inspection_size_bytes,
                skip: !body.enabled,
            },
            custom_block_response: advanced.custom_waas_response.unwrap_or_default().into(),
            disable_event_id_header: !advanced.enable_event_id_header,
            ban_duration_minutes: advanced.ban_duration_minutes,
        }
    }
}

// ============================================================================
// Application: console -> schema
// ============================================================================

impl From<&WaasApplication> for WaasApplicationSchema {
    fn from(a: &WaasApplication) -> Self {
        let spec = &a.api_spec;

        let endpoint_setup = block(EndpointSetupSchema {
            api_endpoint_discovery_enabled: !spec.skip_learning,
            endpoint: map_from(&spec.endpoints),
            tls_config: block(TlsConfigSchema {
                min_tls_version: a.tls_config.min_tls_version.clone(),
                hsts_config: block(HstsConfigSchema {
                    enabled: a.tls_config.hsts_config.enabled,
                    max_age_seconds: a.tls_config.hsts_config.max_age_seconds,
                    include_subdomains: a.tls_config.hsts_config.include_subdomains,
                    preload: a.tls_config.hsts_config.preload,
                }),
            }),
        });

        let api_protection = block(ApiProtectionSchema {
            description: spec.description.clone(),
            effect: spec.effect.clone(),
            fallback_effect: spec.fallback_effect.clone(),
            query_param_fallback_effect: spec.query_param_fallback_effect.clone(),
            path: map_from(&spec.paths),
        });

        let app_firewall = block(AppFirewallSchema {
            clickjacking_enabled: a.clickjacking_enabled,
            csrf_enabled: a.csrf_enabled,
            sql_injection: block((&a.sqli).into()),
            xss: block((&a.xss).into()),
            command_injection: block((&a.cmdi).into()),
            code_injection: block((&a.code_injection).into()),
            local_file_inclusion: block((&a.lfi).into()),
            attack_tools: block((&a.attack_tools).into()),
            shellshock: block((&a.shellshock).into()),
            malformed_request: block((&a.malformed_req).into()),
            advanced_threat_protection: block(AdvancedThreatProtectionSchema {
                effect: a.network_controls.advanced_protection_effect.clone(),
            }),
            information_leakage: block(InformationLeakageSchema {
                effect: a.intel_gathering.info_leakage_effect.clone(),
                remove_fingerprints_enabled: a.intel_gathering.remove_fingerprints_enabled,
            }),
        });

        let access_control = block(AccessControlSchema {
            http_header: map_from(&a.header_specs),
            network_controls: block(NetworkControlsSchema {
                exception_subnets: a.network_controls.exception_subnets.clone(),
                ip_access_control: block((&a.network_controls.subnets).into()),
                geo_access_control: block((&a.network_controls.countries).into()),
            }),
            file_uploads: block((&a.malicious_upload).into()),
        });

        let advanced_settings = block(AdvancedSettingsSchema {
            enable_event_id_header: !a.disable_event_id_header,
            ban_duration_minutes: a.ban_duration_minutes,
            session_cookies: block(SessionCookiesSchema {
                enabled: a.session_cookie_enabled,
                ban: a.session_cookie_ban,
                same_site: a.session_cookie_same_site.clone(),
                secure: a.session_cookie_secure,
            }),
            http_body_inspection: block(HttpBodyInspectionSchema {
                enabled: !a.body.skip,
                inspection_size_bytes: a.body.inspection_size_bytes,
            }),
            custom_waas_response: block((&a.custom_block_response).into()),
        });

        Self {
            app_definition: block(AppDefinitionSchema {
                app_id: a.app_id.clone(),
                endpoint_setup,
                api_protection,
            }),
            app_firewall,
            dos_protection: block((&a.dos_config).into()),
            access_control,
            bot_protection: block((&a.bot_protection_spec).into()),
            advanced_settings,
        }
    }
}

// ============================================================================
// API definition
// ============================================================================

impl From<EndpointSchema> for Endpoint {
    fn from(s: EndpointSchema) -> Self {
        Self {
            base_path: s.base_path,
            exposed_port: s.exposed_port,
            grpc: s.grpc,
            host: s.host,
            http2: s.http2,
            internal_port: s.internal_port,
            tls: s.tls,
        }
    }
}

impl From<&Endpoint> for EndpointSchema {
    fn from(e: &Endpoint) -> Self {
        Self {
            host: e.host.clone(),
            base_path: e.base_path.clone(),
            exposed_port: e.exposed_port,
            internal_port: e.internal_port,
            tls: e.tls,
            http2: e.http2,
            grpc: e.grpc,
        }
    }
}

impl From<ApiPathSchema> for ApiPath {
    fn from(s: ApiPathSchema) -> Self {
        Self {
            path: s.path,
            methods: map_into(s.method),
        }
    }
}

impl From<&ApiPath> for ApiPathSchema {
    fn from(p: &ApiPath) -> Self {
        Self {
            path: p.path.clone(),
            method: map_from(&p.methods),
        }
    }
}

impl From<ApiMethodSchema> for ApiMethod {
    fn from(s: ApiMethodSchema) -> Self {
        Self {
            method: s.method,
            parameters: map_into(s.parameter),
        }
    }
}

impl From<&ApiMethod> for ApiMethodSchema {
    fn from(m: &ApiMethod) -> Self {
        Self {
            method: m.method.clone(),
            parameter: map_from(&m.parameters),
        }
    }
}

impl From<ApiParameterSchema> for ApiParameter {
    fn from(s: ApiParameterSchema) -> Self {
        Self {
            name: s.name,
            location: s.location,
            kind: s.kind,
            style: s.style,
            required: s.required,
            allow_empty_value: s.allow_empty_value,
            array: s.array,
            explode: s.explode,
            min: s.min,
            max: s.max,
        }
    }
}

impl From<&ApiParameter> for ApiParameterSchema {
    fn from(p: &ApiParameter) -> Self {
        Self {
            name: p.name.clone(),
            location: p.location.clone(),
            kind: p.kind.clone(),
            style: p.style.clone(),
            required: p.required,
            allow_empty_value: p.allow_empty_value,
            array: p.array,
            explode: p.explode,
            min: p.min,
            max: p.max,
        }
    }
}

// ============================================================================
// Firewall
// ============================================================================

impl From<FirewallProtectionSchema> for ProtectionConfig {
    fn from(s: FirewallProtectionSchema) -> Self {
        Self {
            effect: s.effect,
            exception_fields: s
                .exception_field
                .into_iter()
                .map(|f| ExceptionField {
                    location: f.location,
                    key: f.key,
                })
                .collect(),
        }
    }
}

impl From<&ProtectionConfig> for FirewallProtectionSchema {
    fn from(p: &ProtectionConfig) -> Self {
        Self {
            effect: p.effect.clone(),
            exception_field: p
                .exception_fields
                .iter()
                .map(|f| ExceptionFieldSchema {
                    location: f.location.clone(),
                    key: f.key.clone(),
                })
                .collect(),
        }
    }
}

// ============================================================================
// DoS
// ============================================================================

impl From<MatchRateSchema> for MatchRate {
    fn from(s: MatchRateSchema) -> Self {
        Self {
            average: s.average,
            burst: s.burst,
        }
    }
}

impl From<&MatchRate> for MatchRateSchema {
    fn from(m: &MatchRate) -> Self {
        Self {
            average: m.average,
            burst: m.burst,
        }
    }
}

impl From<DosProtectionSchema> for DosConfig {
    fn from(s: DosProtectionSchema) -> Self {
        Self {
            enabled: s.enabled,
            alert: s.alert.unwrap_or_default().into(),
            ban: s.ban.unwrap_or_default().into(),
            excluded_network_lists: s.excluded_network_lists,
            match_conditions: s
                .match_condition
                .into_iter()
                .map(|c| DosMatchCondition {
                    file_types: c.file_types,
                    methods: c.methods,
                    response_code_ranges: c
                        .response_code_range
                        .into_iter()
                        .map(|r| StatusCodeRange {
                            start: r.start,
                            end: r.end,
                        })
                        .collect(),
                })
                .collect(),
            track_session: s.track_session,
        }
    }
}

impl From<&DosConfig> for DosProtectionSchema {
    fn from(d: &DosConfig) -> Self {
        Self {
            enabled: d.enabled,
            excluded_network_lists: d.excluded_network_lists.clone(),
            track_session: d.track_session,
            match_condition: d
                .match_conditions
                .iter()
                .map(|c| DosMatchConditionSchema {
                    file_types: c.file_types.clone(),
                    methods: c.methods.clone(),
                    response_code_range: c
                        .response_code_ranges
                        .iter()
                        .map(|r| ResponseCodeRangeSchema {
                            start: r.start,
                            end: r.end,
                        })
                        .collect(),
                })
                .collect(),
            alert: block((&d.alert).into()),
            ban: block((&d.ban).into()),
        }
    }
}

// ============================================================================
// Access control
// ============================================================================

impl From<ListAccessControlSchema> for AccessControls {
    fn from(s: ListAccessControlSchema) -> Self {
        Self {
            enabled: s.enabled,
            allow_mode: s.allow_mode,
            allow: s.allow,
            alert: s.alert,
            prevent: s.prevent,
            fallback_effect: s.fallback_effect,
        }
    }
}

impl From<&AccessControls> for ListAccessControlSchema {
    fn from(c: &AccessControls) -> Self {
        Self {
            enabled: c.enabled,
            allow_mode: c.allow_mode,
            allow: c.allow.clone(),
            alert: c.alert.clone(),
            prevent: c.prevent.clone(),
            fallback_effect: c.fallback_effect.clone(),
        }
    }
}

impl From<HttpHeaderSchema> for HeaderSpec {
    fn from(s: HttpHeaderSchema) -> Self {
        Self {
            name: s.name,
            values: s.values,
            effect: s.effect,
            allow: s.allow,
            required: s.required,
        }
    }
}

impl From<&HeaderSpec> for HttpHeaderSchema {
    fn from(h: &HeaderSpec) -> Self {
        Self {
            name: h.name.clone(),
            values: h.values.clone(),
            effect: h.effect.clone(),
            allow: h.allow,
            required: h.required,
        }
    }
}

impl From<FileUploadsSchema> for MaliciousUpload {
    fn from(s: FileUploadsSchema) -> Self {
        Self {
            effect: s.effect,
            allowed_file_types: s.allowed_file_types,
            allowed_extensions: s.allowed_extensions,
        }
    }
}

impl From<&MaliciousUpload> for FileUploadsSchema {
    fn from(m: &MaliciousUpload) -> Self {
        Self {
            effect: m.effect.clone(),
            allowed_file_types: m.allowed_file_types.clone(),
            allowed_extensions: m.allowed_extensions.clone(),
        }
    }
}

// ============================================================================
// Bot protection
// ============================================================================

impl From<BotProtectionSchema> for BotProtectionSpec {
    fn from(s: BotProtectionSchema) -> Self {
        let known = s.known_bots.unwrap_or_default();
        let unknown = s.unknown_bots.unwrap_or_default();
        let anomalies = unknown.request_anomalies.unwrap_or_default();
        let active = s.active_bot_detection.unwrap_or_default();
        let js = active.javascript_based_detection.unwrap_or_default();
        let recaptcha = active.recaptcha.unwrap_or_default();

        Self {
            known_bot_protections_spec: KnownBotProtections {
                archiving: known.archiving,
                business_analytics: known.business_analytics,
                career_search: known.career_search,
                content_feed_clients: known.content_feed_clients,
                educational: known.educational,
                financial: known.financial,
                media_search: known.media_search,
                news: known.news,
                search_engine_crawlers: known.search_engine_crawlers,
            },
            unknown_bot_protection_spec: UnknownBotProtection {
                api_libraries: unknown.api_libraries,
                bot_impersonation: unknown.bot_impersonation,
                browser_impersonation: unknown.browser_impersonation,
                generic: unknown.generic,
                http_libraries: unknown.http_libraries,
                request_anomalies: RequestAnomalies {
                    effect: anomalies.effect,
                    threshold: anomaly_threshold(&anomalies.threshold),
                },
                web_automation_tools: unknown.web_automation_tools,
                web_scrapers: unknown.web_scrapers,
            },
            user_defined_bots: s
                .user_defined_bot
                .into_iter()
                .map(|b| UserDefinedBot {
                    name: b.name,
                    header_name: b.header_name,
                    header_values: b.header_values,
                    subnets: b.subnets,
                    effect: b.effect,
                })
                .collect(),
            session_validation: active.session_validation,
            interstitial_page: active.interstitial_page,
            js_injection_spec: JsInjectionSpec {
                enabled: js.enabled,
                timeout_effect: js.timeout_effect,
            },
            recaptcha_spec: RecaptchaSpec {
                enabled: recaptcha.enabled,
                all_sessions: recaptcha.all_sessions,
                site_key: recaptcha.site_key,
                secret_key: Secret::plain(recaptcha.secret_key),
                success_expiration_hours: recaptcha.success_expiration_hours,
                kind: recaptcha.kind,
            },
        }
    }
}

impl From<&BotProtectionSpec> for BotProtectionSchema {
    fn from(b: &BotProtectionSpec) -> Self {
        let known = &b.known_bot_protections_spec;
        let unknown = &b.unknown_bot_protection_spec;
        let recaptcha = &b.recaptcha_spec;

        Self {
            user_defined_bot: b
                .user_defined_bots
                .iter()
                .map(|u| UserDefinedBotSchema {
                    name: u.name.clone(),
                    header_name: u.header_name.clone(),
                    header_values: u.header_values.clone(),
                    subnets: u.subnets.clone(),
                    effect: u.effect.clone(),
                })
                .collect(),
            known_bots: block(KnownBotsSchema {
                archiving: known.archiving.clone(),
                business_analytics: known.business_analytics.clone(),
                career_search: known.career_search.clone(),
                content_feed_clients: known.content_feed_clients.clone(),
                educational: known.educational.clone(),
                financial: known.financial.clone(),
                media_search: known.media_search.clone(),
                news: known.news.clone(),
                search_engine_crawlers: known.search_engine_crawlers.clone(),
            }),
            unknown_bots: block(UnknownBotsSchema {
                api_libraries: unknown.api_libraries.clone(),
                bot_impersonation: unknown.bot_impersonation.clone(),
                browser_impersonation: unknown.browser_impersonation.clone(),
                generic: unknown.generic.clone(),
                http_libraries: unknown.http_libraries.clone(),
                web_automation_tools: unknown.web_automation_tools.clone(),
                web_scrapers: unknown.web_scrapers.clone(),
                request_anomalies: block(RequestAnomaliesSchema {
                    effect: unknown.request_anomalies.effect.clone(),
                    threshold: anomaly_sensitivity(unknown.request_anomalies.threshold),
                }),
            }),
            active_bot_detection: block(ActiveBotDetectionSchema {
                session_validation: b.session_validation.clone(),
                interstitial_page: b.interstitial_page,
                javascript_based_detection: block(JavascriptDetectionSchema {
                    enabled: b.js_injection_spec.enabled,
                    timeout_effect: b.js_injection_spec.timeout_effect.clone(),
                }),
                recaptcha: block(RecaptchaSchema {
                    enabled: recaptcha.enabled,
                    all_sessions: recaptcha.all_sessions,
                    site_key: recaptcha.site_key.clone(),
                    secret_key: recaptcha.secret_key.plain.clone(),
                    success_expiration_hours: recaptcha.success_expiration_hours,
                    kind: recaptcha.kind.clone(),
                }),
            }),
        }
    }
}

// ============================================================================
// Advanced settings
// ============================================================================

impl From<CustomResponseSchema> for CustomBlockResponse {
    fn from(s: CustomResponseSchema) -> Self {
        Self {
            enabled: s.enabled,
            code: s.code,
            body: s.body,
        }
    }
}

impl From<&CustomBlockResponse> for CustomResponseSchema {
    fn from(c: &CustomBlockResponse) -> Self {
        Self {
            enabled: c.enabled,
            code: c.code,
            body: c.body.clone(),
        }
    }
}
