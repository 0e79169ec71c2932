use regex::Regex;
use std::sync::LazyLock;

static PROFILE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://[A-Za-z0-9.-]+/societe/([A-Za-z0-9-]+)\.html")
        .expect("valid profile pattern")
});

/// Extract the profile slug from a directory URL of the form
/// `https://<domain>/societe/<slug>.html`.
///
/// ```
/// use societe_scrape::profile_name;
///
/// assert_eq!(
///     profile_name("https://www.societe.com/societe/orange-380129866.html").as_deref(),
///     Some("orange-380129866")
/// );
/// assert_eq!(profile_name("https://www.societe.com/dirigeant/jean-dupont.html"), None);
/// ```
pub fn profile_name(url: &str) -> Option<String> {
    PROFILE_URL
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_profiles() {
        let cases = [
            (
                "https://www.societe.com/societe/bouygues-telecom-397480930.html",
                "bouygues-telecom-397480930",
            ),
            (
                "https://www.societe.com/societe/societe-francaise-du-radiotelephone-s-f-r-343059564.html",
                "societe-francaise-du-radiotelephone-s-f-r-343059564",
            ),
            (
                "https://societe.com/societe/free-421938861.html?utm_source=x",
                "free-421938861",
            ),
        ];
        for (url, slug) in cases {
            assert_eq!(profile_name(url).as_deref(), Some(slug), "{url}");
        }
    }

    #[test]
    fn rejects_other_shapes() {
        for url in [
            "",
            "not a url",
            "http://www.societe.com/societe/orange-380129866.html",
            "https://www.societe.com/societe/orange-380129866",
            "https://www.societe.com/societe/.html",
            "https://www.societe.com/etablissement/orange-38012986600031.html",
            "https://www.societe.com/societe/orange_380129866.html",
        ] {
            assert_eq!(profile_name(url), None, "{url:?}");
        }
    }
}
