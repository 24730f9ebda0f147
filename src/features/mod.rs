/// Feature modules layered on top of QR generation.
pub mod share;
