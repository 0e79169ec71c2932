use fantoccini::Locator;

/// A locating expression, classified the way the page engine reads it.
///
/// Expressions starting with `/` or `(` are XPath. An explicit `xpath=` or
/// `css=` prefix overrides that guess. Everything else is a CSS selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    Css(&'a str),
    XPath(&'a str),
}

impl<'a> Selector<'a> {
    pub fn parse(expression: &'a str) -> Self {
        let trimmed = expression.trim();
        if let Some(rest) = trimmed.strip_prefix("xpath=") {
            return Selector::XPath(rest);
        }
        if let Some(rest) = trimmed.strip_prefix("css=") {
            return Selector::Css(rest);
        }
        if trimmed.starts_with('/') || trimmed.starts_with('(') {
            Selector::XPath(trimmed)
        } else {
            Selector::Css(trimmed)
        }
    }

    pub fn as_locator(&self) -> Locator<'a> {
        match *self {
            Selector::Css(css) => Locator::Css(css),
            Selector::XPath(xpath) => Locator::XPath(xpath),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_xpath() {
        let expr = r#"//td[contains(text(), "Adresse postale")]/following-sibling::td"#;
        assert_eq!(Selector::parse(expr), Selector::XPath(expr));
        assert_eq!(
            Selector::parse("(//span)[1]"),
            Selector::XPath("(//span)[1]")
        );
    }

    #[test]
    fn defaults_to_css() {
        assert_eq!(
            Selector::parse("#siren_number > span.copyNumber__copy"),
            Selector::Css("#siren_number > span.copyNumber__copy")
        );
    }

    #[test]
    fn honours_explicit_prefixes() {
        assert_eq!(Selector::parse("xpath=//h1"), Selector::XPath("//h1"));
        assert_eq!(Selector::parse("css=h1.title"), Selector::Css("h1.title"));
    }
}
