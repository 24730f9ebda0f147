use anyhow::{Context, Result};
use url::Url;

use crate::shared::QrTheme;

/// Third-party QR generation endpoint.
pub const BASE_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Rendered QR image size in pixels.
pub const DEFAULT_SIZE: &str = "250x250";

/// Quiet-zone margin requested from the API.
pub const MARGIN: &str = "10";

/// Build the request URL for a themed QR code image.
pub fn qr_image_url(data: &str, theme: QrTheme) -> Result<Url> {
    let mut request = Url::parse(BASE_URL).context("invalid QR API base URL")?;

    request
        .query_pairs_mut()
        .append_pair("size", DEFAULT_SIZE)
        .append_pair("data", data)
        .append_pair("format", "png")
        .append_pair("margin", MARGIN)
        .append_pair("color", theme.module_color())
        .append_pair("bgcolor", theme.background_color());

    Ok(request)
}

/// Fetch the PNG bytes for a themed QR code.
pub async fn fetch_qr_image(
    client: &reqwest::Client,
    data: &str,
    theme: QrTheme,
) -> Result<Vec<u8>> {
    let request = qr_image_url(data, theme)?;

    let response = client
        .get(request)
        .header("User-Agent", "fun-qrcode/1.0")
        .send()
        .await?
        .error_for_status()?;

    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_carries_all_parameters() {
        let url = qr_image_url("https://example.com", QrTheme::Classic).unwrap();
        let query = url.query().unwrap();

        assert!(url.as_str().starts_with(BASE_URL));
        assert!(query.contains("size=250x250"));
        assert!(query.contains("format=png"));
        assert!(query.contains("margin=10"));
        assert!(query.contains("color=000000"));
        assert!(query.contains("bgcolor=ffffff"));
    }

    #[test]
    fn test_data_parameter_is_percent_encoded() {
        let url = qr_image_url("https://example.com/a b?x=1&y=2", QrTheme::Classic).unwrap();
        let query = url.query().unwrap();

        assert!(query.contains("data=https%3A%2F%2Fexample.com"));
        assert!(!query.contains("data=https://"));
    }

    #[test]
    fn test_theme_colors_reach_the_query() {
        let url = qr_image_url("https://example.com", QrTheme::Neon).unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("color=00ffff"));
        assert!(query.contains("bgcolor=000000"));

        let url = qr_image_url("https://example.com", QrTheme::Nature).unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("color=2d5016"));
        assert!(query.contains("bgcolor=f0f8e8"));
    }
}
