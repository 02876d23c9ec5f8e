//! URL Utility Functions
//!
//! Display labels for the source pages. Only `https://` URLs are accepted,
//! since both sources are served over TLS.

use url::Url;

use crate::error::{Error, Result};

const HTTPS_PREFIX: &str = "https://";

/// Return the short domain label and the home host of a URL.
///
/// The home host is everything between `https://` and the first `/`; the
/// domain is its second dot-separated label.
///
/// # Examples
///
/// ```
/// use asthma_report::url_utils::find_domain;
///
/// let (domain, home) = find_domain("https://www.epa.gov/asthma/x")?;
/// assert_eq!(domain, "epa");
/// assert_eq!(home, "www.epa.gov");
/// # Ok::<(), asthma_report::Error>(())
/// ```
pub fn find_domain(url: &str) -> Result<(String, String)> {
    let start = url
        .find(HTTPS_PREFIX)
        .ok_or_else(|| Error::InvalidUrl(url.to_string()))?;
    let link = &url[start..];

    let parsed = Url::parse(link).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))?;
    let home = parsed
        .host_str()
        .ok_or_else(|| Error::InvalidUrl(url.to_string()))?
        .to_string();

    let domain = home
        .split('.')
        .nth(1)
        .ok_or_else(|| Error::InvalidUrl(format!("{url}: host has a single label")))?
        .to_string();

    Ok((domain, home))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn find_domain_epa() {
        let (domain, home) =
            find_domain("https://www.epa.gov/asthma/asthma-triggers-gain-control").unwrap();
        assert_eq!(domain, "epa");
        assert_eq!(home, "www.epa.gov");
    }

    #[test]
    fn find_domain_cdc() {
        let (domain, home) = find_domain("https://www.cdc.gov/nchs/fastats/asthma.htm").unwrap();
        assert_eq!(domain, "cdc");
        assert_eq!(home, "www.cdc.gov");
    }

    #[test]
    fn find_domain_host_only() {
        let (domain, home) = find_domain("https://www.epa.gov").unwrap();
        assert_eq!(domain, "epa");
        assert_eq!(home, "www.epa.gov");
    }

    #[test]
    fn find_domain_two_labels() {
        let (domain, home) = find_domain("https://example.com/path").unwrap();
        assert_eq!(domain, "com");
        assert_eq!(home, "example.com");
    }

    #[test]
    fn find_domain_rejects_plain_http() {
        let err = find_domain("http://www.epa.gov/asthma").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn find_domain_rejects_single_label_host() {
        let err = find_domain("https://localhost/page").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn find_domain_skips_leading_text() {
        let (domain, _) = find_domain("source: https://www.cdc.gov/nchs").unwrap();
        assert_eq!(domain, "cdc");
    }
}
