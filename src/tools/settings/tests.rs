#[cfg(test)]
mod tests {
    use crate::tools::settings::utils::{number_value, parse_leading_object};
    use crate::tools::settings::*;
    use serde_json::json;

    fn page(script: &str) -> String {
        format!(
            "<!DOCTYPE html><html><head><script src=\"/lp.js\"></script><script>{script}</script></head><body><div id=\"swipe\"></div></body></html>"
        )
    }

    #[test]
    fn test_extract_settings_basic() {
        let html = page(
            r#"window.lpSettings = {
                "firstImageUrl": "https://lp.example.com/img/01.jpg",
                "firstPageContentType": "image",
                "lastPageNum": 12,
                "htmlInsertions": {"0.1": "video: https://cdn.example.com/v.mp4", "3.1": "html: <p>hi</p>"},
                "companyInfoUrl": "https://example.com/company",
                "privacyPolicyUrl": "https://example.com/privacy",
                "sctLawUrl": "https://example.com/law"
            };"#,
        );

        let settings = extract_settings(&html).unwrap();
        assert_eq!(
            settings.first_content_url.as_deref(),
            Some("https://lp.example.com/img/01.jpg")
        );
        assert_eq!(settings.first_content_kind, FirstContentKind::Image);
        assert_eq!(settings.last_image_number, 12);
        assert_eq!(settings.insertions.len(), 2);
        assert_eq!(
            settings.insertions.get("3.1").map(String::as_str),
            Some("html: <p>hi</p>")
        );
        let links = settings.info_links();
        assert_eq!(links.company, "https://example.com/company");
        assert_eq!(links.privacy, "https://example.com/privacy");
        assert_eq!(links.law, "https://example.com/law");
    }

    #[test]
    fn test_extract_settings_missing() {
        let html = page("window.otherSettings = {\"lastPageNum\": 3};");
        assert_eq!(extract_settings(&html), Err(SettingsAbsence::NotFound));
    }

    #[test]
    fn test_extract_settings_malformed_is_absence() {
        // JS object literal, not JSON
        let html = page("window.lpSettings = {lastPageNum: 3, firstImageUrl: '/a/01.jpg'};");
        assert!(matches!(
            extract_settings(&html),
            Err(SettingsAbsence::Malformed(_))
        ));
    }

    #[test]
    fn test_extract_settings_first_well_formed_wins() {
        let html = page(
            r#"window.lpSettings = {broken;
               window.lpSettings = {"lastPageNum": 4};
               window.lpSettings = {"lastPageNum": 9};"#,
        );
        let settings = extract_settings(&html).unwrap();
        assert_eq!(settings.last_image_number, 4);
    }

    #[test]
    fn test_extract_settings_nested_braces_in_strings() {
        let html = page(
            r#"window.lpSettings={"htmlInsertions":{"2.1":"html: <style>.a{color:red};</style>"},"lastPageNum":3};var x = 1;"#,
        );
        let settings = extract_settings(&html).unwrap();
        assert_eq!(
            settings.insertions.get("2.1").map(String::as_str),
            Some("html: <style>.a{color:red};</style>")
        );
        assert_eq!(settings.last_image_number, 3);
    }

    #[test]
    fn test_extract_settings_defaults() {
        let html = page("window.lpSettings = {};");
        let settings = extract_settings(&html).unwrap();
        assert_eq!(settings, PageSettings::default());
        assert_eq!(settings.info_links().company, "");
    }

    #[test]
    fn test_extract_settings_loose_types() {
        let html = page(
            r#"window.lpSettings = {"lastPageNum": "7", "firstPageContentType": "VIDEO", "firstImageUrl": "", "htmlInsertions": {"1.1": 42, "2.1": "video: x"}};"#,
        );
        let settings = extract_settings(&html).unwrap();
        assert_eq!(settings.last_image_number, 7);
        assert_eq!(settings.first_content_kind, FirstContentKind::Other);
        assert_eq!(settings.first_content_url, None);
        assert_eq!(settings.insertions.len(), 1);
    }

    #[test]
    fn test_number_value() {
        assert_eq!(number_value(&json!(5)), 5);
        assert_eq!(number_value(&json!(5.9)), 5);
        assert_eq!(number_value(&json!("12")), 12);
        assert_eq!(number_value(&json!(-3)), 0);
        assert_eq!(number_value(&json!("abc")), 0);
        assert_eq!(number_value(&json!(null)), 0);
    }

    #[test]
    fn test_parse_leading_object_rejects_non_objects() {
        assert!(parse_leading_object("[1,2];").is_err());
        assert!(parse_leading_object("null;").is_err());
        assert!(parse_leading_object("{\"a\": 1}; trailing").is_ok());
    }
}
