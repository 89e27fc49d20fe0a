/// Clean admin-authored HTML using the ammonia library.
///
/// Quiz and event descriptions are stored cleaned and rendered unescaped by
/// the pages, so whatever is written here is what visitors' browsers get.
/// Safe tags (like <b>, <p>) survive; <script>, <iframe> and event handler
/// attributes are stripped.
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_formatting_and_drops_scripts() {
        let cleaned = clean_html("<p onclick=\"x()\"><b>Bring</b> snacks</p><script>alert(1)</script>");

        assert_eq!(cleaned, "<p><b>Bring</b> snacks</p>");
    }
}
