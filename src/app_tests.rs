//! Simple integration tests wiring i18n, themes, and QR generation together
//! This file contains basic smoke tests to ensure core functionality works

#[cfg(test)]
mod tests {
    use crate::features::share;
    use crate::qr;
    use crate::shared::{I18n, Language, QrTheme};

    #[test]
    fn test_every_ui_slot_resolves_in_every_language() {
        let keys = [
            "title",
            "subtitle",
            "urlLabel",
            "urlPlaceholder",
            "themeLabel",
            "generateBtn",
            "downloadBtn",
            "shareBtn",
            "loading",
            "footer",
        ];

        for lang in Language::ALL {
            let i18n = I18n::new(lang);
            for key in keys {
                assert_ne!(i18n.t(key), key, "unresolved key {key} for {}", lang.code());
            }
        }
    }

    #[test]
    fn test_theme_labels_resolve() {
        let i18n = I18n::new(Language::French);
        for theme in QrTheme::ALL {
            assert_ne!(i18n.t(theme.label_key()), theme.label_key());
        }
    }

    #[test]
    fn test_validation_feeds_the_request_builder() {
        let url = qr::validate_url(" https://example.com ").unwrap();
        let request = qr::api::qr_image_url(&url, QrTheme::Nature).unwrap();
        assert!(request.query().unwrap().contains("bgcolor=f0f8e8"));
    }

    #[test]
    fn test_share_text_for_catalog_less_language() {
        // zh is selectable but has no catalog, so the share message comes
        // from the default catalog.
        let i18n = I18n::new(Language::Chinese);
        assert_eq!(
            share::share_text(&i18n, "https://x.y"),
            "Fun QRCode: Check out this QR code for: https://x.y"
        );
    }
}
