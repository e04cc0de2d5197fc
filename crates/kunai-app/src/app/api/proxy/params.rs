//! ## Summary
//! Query parameters of the proxy endpoint.

use chrono::NaiveDate;
use kunai_service::pipeline::DateRange;
use reqwest::Url;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reasons a proxy request is rejected before anything is fetched. The
/// messages are sent to the client verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("Missing 'url' parameter")]
    MissingUrl,

    #[error("Invalid 'url' parameter")]
    InvalidUrl,

    #[error("Invalid 'from' date format. Use YYYY-MM-DD")]
    InvalidFrom,

    #[error("Invalid 'to' date format. Use YYYY-MM-DD")]
    InvalidTo,
}

/// Validated proxy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyParams {
    pub url: Url,
    pub range: DateRange,
}

impl ProxyParams {
    /// ## Summary
    /// Validates raw query values. Empty values count as absent.
    ///
    /// ## Errors
    /// Returns the first problem found, checking `url` before `from` and
    /// `from` before `to`.
    pub fn parse(url: Option<&str>, from: Option<&str>, to: Option<&str>) -> Result<Self, ParamError> {
        let url = non_empty(url).ok_or(ParamError::MissingUrl)?;
        let url = Url::parse(url).map_err(|_err| ParamError::InvalidUrl)?;
        if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
            return Err(ParamError::InvalidUrl);
        }

        let from = parse_date(from).map_err(|()| ParamError::InvalidFrom)?;
        let to = parse_date(to).map_err(|()| ParamError::InvalidTo)?;

        Ok(Self {
            url,
            range: DateRange::new(from, to),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn parse_date(value: Option<&str>) -> Result<Option<NaiveDate>, ()> {
    non_empty(value)
        .map(|v| NaiveDate::parse_from_str(v, DATE_FORMAT).map_err(|_err| ()))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_url() {
        let params = ProxyParams::parse(Some("https://example.com/cal.ics"), None, None).unwrap();
        assert_eq!(params.url.as_str(), "https://example.com/cal.ics");
        assert!(params.range.is_unbounded());
    }

    #[test]
    fn accepts_dates() {
        let params = ProxyParams::parse(
            Some("http://example.com/cal.ics"),
            Some("2025-06-01"),
            Some("2025-08-31"),
        )
        .unwrap();
        assert_eq!(params.range.from, NaiveDate::from_ymd_opt(2025, 6, 1));
        assert_eq!(params.range.to, NaiveDate::from_ymd_opt(2025, 8, 31));
    }

    #[test]
    fn empty_values_count_as_absent() {
        assert_eq!(ProxyParams::parse(Some(""), None, None), Err(ParamError::MissingUrl));
        let params = ProxyParams::parse(Some("http://example.com/"), Some(""), Some("")).unwrap();
        assert!(params.range.is_unbounded());
    }

    #[test]
    fn rejects_missing_url() {
        assert_eq!(ProxyParams::parse(None, None, None), Err(ParamError::MissingUrl));
    }

    #[test]
    fn rejects_non_http_urls() {
        for url in ["ftp://example.com/cal.ics", "file:///etc/passwd", "example.com/cal.ics", "http:/"] {
            assert_eq!(
                ProxyParams::parse(Some(url), None, None),
                Err(ParamError::InvalidUrl),
                "{url}"
            );
        }
    }

    #[test]
    fn rejects_bad_dates() {
        let url = Some("http://example.com/cal.ics");
        assert_eq!(
            ProxyParams::parse(url, Some("2025/01/01"), None),
            Err(ParamError::InvalidFrom)
        );
        assert_eq!(
            ProxyParams::parse(url, None, Some("01-01-2025")),
            Err(ParamError::InvalidTo)
        );
        assert_eq!(
            ProxyParams::parse(url, Some("2025-02-30"), None),
            Err(ParamError::InvalidFrom)
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(ParamError::MissingUrl.to_string(), "Missing 'url' parameter");
        assert_eq!(
            ParamError::InvalidTo.to_string(),
            "Invalid 'to' date format. Use YYYY-MM-DD"
        );
    }
}
