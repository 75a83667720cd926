#[cfg(test)]
mod tests {
    use crate::errors::internal::{DatabaseError, InternalError, ValidationError};
    use crate::errors::ItemError;

    #[test]
    fn test_validation_errors_map_to_bad_request() {
        let error = ItemError::from_internal_error(ValidationError::NameRequired.into());
        assert_eq!(error.status_code(), 400);
        assert_eq!(error.message(), "Tên món ăn bắt buộc");

        let error = ItemError::from_internal_error(ValidationError::InvalidPrice.into());
        assert_eq!(error.status_code(), 400);
        assert_eq!(error.message(), "Giá bán phải là số hợp lệ và >= 0");
    }

    #[test]
    fn test_database_errors_are_hidden_behind_generic_message() {
        let err = InternalError::database(
            "list_items",
            sea_orm::DbErr::Custom("disk I/O error at /var/lib/items.db".to_string()),
        );

        let error = ItemError::from(err);
        assert_eq!(error.status_code(), 500);
        assert_eq!(error.message(), "Internal server error");
        assert!(!error.message().contains("items.db"));
    }

    #[test]
    fn test_connect_error_maps_to_internal_error() {
        let err = InternalError::Database(DatabaseError::Connect {
            source: sea_orm::DbErr::Custom("refused".to_string()),
        });

        assert_eq!(ItemError::from(err).status_code(), 500);
    }

    #[test]
    fn test_display_uses_message() {
        let error = ItemError::validation_failed("bad body");
        assert_eq!(format!("{}", error), "bad body");
    }
}
