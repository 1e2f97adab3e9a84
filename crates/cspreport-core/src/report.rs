//! `report-uri` violation report body.
//!
//! Browsers POST `{"csp-report": {...}}` with content type
//! `application/csp-report`. All members are optional on the wire, `null`
//! reads as empty, and unknown members (e.g. `line-number`, `source-file`)
//! are ignored.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::directive::{Directive, Disposition};
use crate::error::{CspReportError, Result};

/// Envelope object wrapping a single violation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContentSecurityPolicyReport {
    #[serde(rename = "csp-report", default, deserialize_with = "null_as_default")]
    pub report: ViolationReport,
}

/// A single CSP violation as reported by the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ViolationReport {
    #[serde(deserialize_with = "null_as_default")]
    pub blocked_uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub disposition: String,
    #[serde(deserialize_with = "null_as_default")]
    pub document_uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub effective_directive: String,
    #[serde(deserialize_with = "null_as_default")]
    pub original_policy: String,
    #[serde(deserialize_with = "null_as_default")]
    pub referrer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub script_sample: String,
    /// HTTP status of the protected document; out-of-range values reject the body.
    #[serde(deserialize_with = "null_as_default")]
    pub status_code: u16,
    #[serde(deserialize_with = "null_as_default")]
    pub violated_directive: String,
}

fn null_as_default<'de, D, T>(d: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

impl ViolationReport {
    /// Bounded directive label derived from `violated-directive`.
    pub fn directive(&self) -> Directive {
        Directive::classify(&self.violated_directive)
    }

    /// Bounded disposition label.
    pub fn disposition(&self) -> Disposition {
        Disposition::classify(&self.disposition)
    }
}

impl fmt::Display for ContentSecurityPolicyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.report;
        f.write_str("csp-report")?;
        let fields: [(&str, &dyn fmt::Display); 9] = [
            ("referrer", &r.referrer),
            ("document-uri", &r.document_uri),
            ("violated-directive", &r.violated_directive),
            ("effective-directive", &r.effective_directive),
            ("original-policy", &r.original_policy),
            ("blocked-uri", &r.blocked_uri),
            ("disposition", &r.disposition),
            ("script-sample", &r.script_sample),
            ("status-code", &r.status_code),
        ];
        for (k, v) in fields {
            write!(f, "\n\t{k}: {v}")?;
        }
        Ok(())
    }
}

/// Decode a request body into a report.
pub fn decode(body: &[u8]) -> Result<ContentSecurityPolicyReport> {
    serde_json::from_slice(body)
        .map_err(|e| CspReportError::BadRequest(format!("invalid csp report: {e}")))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn display_lists_every_passthrough_field() {
        let cspr = ContentSecurityPolicyReport {
            report: ViolationReport {
                document_uri: "https://example.com/".into(),
                violated_directive: "img-src 'self'".into(),
                status_code: 200,
                ..Default::default()
            },
        };
        let s = cspr.to_string();
        assert!(s.starts_with("csp-report\n\t"));
        assert!(s.contains("\n\tdocument-uri: https://example.com/"));
        assert!(s.contains("\n\tviolated-directive: img-src 'self'"));
        assert!(s.ends_with("\n\tstatus-code: 200"));
    }

    #[test]
    fn empty_object_decodes_to_defaults() {
        let cspr = decode(b"{}").unwrap();
        assert_eq!(cspr, ContentSecurityPolicyReport::default());
        assert_eq!(cspr.report.directive(), Directive::Unknown);
        assert_eq!(cspr.report.disposition(), Disposition::Unknown);
    }

    #[test]
    fn null_fields_read_as_empty() {
        let cspr = decode(
            br#"{"csp-report":{"violated-directive":"img-src","referrer":null,"status-code":null,"script-sample":null}}"#,
        )
        .unwrap();
        assert_eq!(cspr.report.directive(), Directive::ImgSrc);
        assert_eq!(cspr.report.referrer, "");
        assert_eq!(cspr.report.status_code, 0);
    }

    #[test]
    fn garbage_is_bad_request() {
        let err = decode(b"not json").expect_err("must fail");
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
    }
}
