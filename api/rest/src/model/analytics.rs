use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Beacon body sent by the page for each measured web vital.
#[derive(Deserialize, Debug, PartialEq)]
pub struct WebVitalReqJson {
    name: WebVitalName,
    value: f64,
    rating: WebVitalRating,
    id: String,
}

impl WebVitalReqJson {
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    pub fn name(&self) -> &WebVitalName {
        &self.name
    }

    pub fn value(&self) -> &f64 {
        &self.value
    }

    pub fn rating(&self) -> &WebVitalRating {
        &self.rating
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Deserialize, Display, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum WebVitalName {
    Cls,
    Fcp,
    Fid,
    Inp,
    Lcp,
    Ttfb,
}

#[derive(Deserialize, AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum WebVitalRating {
    Good,
    NeedsImprovement,
    Poor,
}

#[derive(Serialize)]
pub struct AnalyticsResJson {
    success: bool,
    message: &'static str,
}

impl AnalyticsResJson {
    pub fn received() -> Self {
        Self {
            success: true,
            message: "Metric received",
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            message: "Failed to process metric",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_beacon_body() {
        let metric = WebVitalReqJson::from_slice(
            br#"{"name":"LCP","value":2310.5,"rating":"good","id":"v3-1700000000000-42"}"#,
        )
        .unwrap();

        assert_eq!(metric.name(), &WebVitalName::Lcp);
        assert_eq!(metric.value(), &2310.5);
        assert_eq!(metric.rating(), &WebVitalRating::Good);
        assert_eq!(metric.id(), "v3-1700000000000-42");
        assert_eq!(metric.name().to_string(), "LCP");
    }

    #[test]
    fn parses_kebab_case_rating() {
        let metric = WebVitalReqJson::from_slice(
            br#"{"name":"CLS","value":0.12,"rating":"needs-improvement","id":"a"}"#,
        )
        .unwrap();

        assert_eq!(metric.rating(), &WebVitalRating::NeedsImprovement);
        assert_eq!(metric.rating().as_ref(), "needs-improvement");
    }

    #[test]
    fn rejects_unknown_metric_name() {
        assert!(WebVitalReqJson::from_slice(
            br#"{"name":"FPS","value":60,"rating":"good","id":"a"}"#
        )
        .is_err());
    }

    #[test]
    fn rejects_missing_field() {
        assert!(WebVitalReqJson::from_slice(br#"{"name":"LCP","value":1}"#).is_err());
        assert!(WebVitalReqJson::from_slice(b"not json").is_err());
    }
}
