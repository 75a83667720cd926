use thiserror::Error;

/// Business-rule violations on item input
///
/// The display strings are shown to end users as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is absent, not a string, or blank after trimming
    #[error("Tên món ăn bắt buộc")]
    NameRequired,

    /// Price does not coerce to a finite number >= 0
    #[error("Giá bán phải là số hợp lệ và >= 0")]
    InvalidPrice,
}
