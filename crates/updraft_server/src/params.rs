use axum::http::HeaderMap;
use serde::Deserialize;
use updraft_core::prelude::*;

pub const PLATFORM_HEADER: &str = "expo-platform";
pub const RUNTIME_VERSION_HEADER: &str = "expo-runtime-version";

/// Raw query-string view of the manifest request. Both keys are optional
/// here; validation happens in [`resolve_params`].
#[derive(Debug, Default, Deserialize)]
pub struct RawManifestParams {
    pub platform: Option<String>,
    #[serde(rename = "runtimeVersion")]
    pub runtime_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParameters {
    pub platform: Platform,
    pub runtime_version: String,
}

/// Collapses an ordered list of lookup sources to the first present value.
/// A present-but-empty query value counts as present and never falls through
/// to the header.
fn first_present<'a>(sources: [Option<&'a str>; 2]) -> Option<&'a str> {
    sources.into_iter().flatten().next()
}

fn header_value<'a>(headers: &'a HeaderMap, key: &str) -> Option<&'a str> {
    headers.get(key).and_then(|value| value.to_str().ok())
}

/// Resolves and validates the request parameters, query first, header second.
/// Platform is checked before the runtime version; when both are bad only the
/// platform error surfaces.
pub fn resolve_params(
    query: &RawManifestParams,
    headers: &HeaderMap,
) -> Result<RequestParameters, ValidationError> {
    let platform = first_present([
        query.platform.as_deref(),
        header_value(headers, PLATFORM_HEADER),
    ])
    .and_then(Platform::parse)
    .ok_or(ValidationError::UnsupportedPlatform)?;

    let runtime_version = first_present([
        query.runtime_version.as_deref(),
        header_value(headers, RUNTIME_VERSION_HEADER),
    ])
    .filter(|value| !value.is_empty())
    .ok_or(ValidationError::NoRuntimeVersion)?;

    Ok(RequestParameters {
        platform,
        runtime_version: runtime_version.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn query(platform: Option<&str>, runtime_version: Option<&str>) -> RawManifestParams {
        RawManifestParams {
            platform: platform.map(str::to_string),
            runtime_version: runtime_version.map(str::to_string),
        }
    }

    fn headers(platform: Option<&str>, runtime_version: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(platform) = platform {
            headers.insert(PLATFORM_HEADER, HeaderValue::from_str(platform).unwrap());
        }
        if let Some(runtime_version) = runtime_version {
            headers.insert(
                RUNTIME_VERSION_HEADER,
                HeaderValue::from_str(runtime_version).unwrap(),
            );
        }
        headers
    }

    #[test]
    fn resolves_from_query() {
        let params = resolve_params(&query(Some("ios"), Some("1.0")), &HeaderMap::new()).unwrap();
        assert_eq!(params.platform, Platform::Ios);
        assert_eq!(params.runtime_version, "1.0");
    }

    #[test]
    fn falls_back_to_headers() {
        let params =
            resolve_params(&query(None, None), &headers(Some("android"), Some("2"))).unwrap();
        assert_eq!(params.platform, Platform::Android);
        assert_eq!(params.runtime_version, "2");
    }

    #[test]
    fn query_wins_over_header() {
        let params = resolve_params(
            &query(Some("android"), Some("1")),
            &headers(Some("ios"), Some("9")),
        )
        .unwrap();
        assert_eq!(params.platform, Platform::Android);
        assert_eq!(params.runtime_version, "1");
    }

    #[test]
    fn rejects_unknown_platforms() {
        for (query_platform, header_platform) in [
            (None, None),
            (Some("foo"), None),
            (None, Some("bar")),
            (Some("foo"), Some("bar")),
            (Some("IOS"), None),
        ] {
            let err = resolve_params(
                &query(query_platform, Some("1")),
                &headers(header_platform, Some("1")),
            )
            .unwrap_err();
            assert_eq!(err, ValidationError::UnsupportedPlatform);
        }
    }

    #[test]
    fn platform_error_wins_when_both_are_invalid() {
        let err = resolve_params(&query(None, None), &HeaderMap::new()).unwrap_err();
        assert_eq!(err, ValidationError::UnsupportedPlatform);
    }

    #[test]
    fn rejects_missing_runtime_version() {
        let err = resolve_params(&query(Some("ios"), None), &HeaderMap::new()).unwrap_err();
        assert_eq!(err, ValidationError::NoRuntimeVersion);
    }

    #[test]
    fn empty_query_runtime_version_does_not_fall_through() {
        // "?runtimeVersion=" is present, so the header is never consulted.
        let err =
            resolve_params(&query(Some("ios"), Some("")), &headers(None, Some("1"))).unwrap_err();
        assert_eq!(err, ValidationError::NoRuntimeVersion);
    }
}
