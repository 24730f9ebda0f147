use anyhow::{Context, Result};
use image::{imageops, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

use crate::shared::theme::{Background, QrTheme};
use crate::shared::I18n;

/// Side length of the exported image in pixels.
pub const EXPORT_SIZE: u32 = 300;

/// Offset of the 250x250 QR image inside the export canvas.
pub const QR_OFFSET: i64 = 25;

/// Paint the themed backdrop the QR code sits on.
fn render_background(theme: QrTheme) -> RgbaImage {
    let mut canvas = RgbaImage::new(EXPORT_SIZE, EXPORT_SIZE);

    match theme.export_background() {
        Background::Solid([r, g, b]) => {
            for pixel in canvas.pixels_mut() {
                *pixel = Rgba([r, g, b, 255]);
            }
        }
        Background::Gradient(top, bottom) => {
            for y in 0..EXPORT_SIZE {
                let t = y as f32 / (EXPORT_SIZE - 1) as f32;
                let blend =
                    |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
                let row = Rgba([
                    blend(top[0], bottom[0]),
                    blend(top[1], bottom[1]),
                    blend(top[2], bottom[2]),
                    255,
                ]);
                for x in 0..EXPORT_SIZE {
                    canvas.put_pixel(x, y, row);
                }
            }
        }
    }

    canvas
}

/// Composite the fetched QR PNG centered on the themed background.
pub fn compose_export_image(qr_png: &[u8], theme: QrTheme) -> Result<RgbaImage> {
    let qr = image::load_from_memory(qr_png)
        .context("failed to decode QR code image")?
        .to_rgba8();

    let mut canvas = render_background(theme);
    imageops::overlay(&mut canvas, &qr, QR_OFFSET, QR_OFFSET);
    Ok(canvas)
}

/// File name for an exported QR code.
pub fn export_file_name(theme: QrTheme, unix_millis: i64) -> String {
    format!("fun-qrcode-{}-{}.png", theme.slug(), unix_millis)
}

/// Composite and save the QR code into `dir`, returning the written path.
pub fn save_qr_image(qr_png: &[u8], theme: QrTheme, dir: &Path) -> Result<PathBuf> {
    let image = compose_export_image(qr_png, theme)?;
    let path = dir.join(export_file_name(theme, chrono::Utc::now().timestamp_millis()));
    image.save(&path).context("failed to write PNG file")?;
    Ok(path)
}

/// Localized share message for an encoded URL.
pub fn share_text(i18n: &I18n, url: &str) -> String {
    format!(
        "{}: {}",
        i18n.t("share.title"),
        i18n.t_with("share.text", &[("url", url)])
    )
}

/// Copy the share message to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
    clipboard
        .set_text(text.to_string())
        .context("failed to write clipboard")?;
    Ok(())
}
