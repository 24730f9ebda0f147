/// QR code generation: input validation and the third-party image API.
pub mod api;
pub mod validation;

pub use api::fetch_qr_image;
pub use validation::{validate_url, UrlError};
