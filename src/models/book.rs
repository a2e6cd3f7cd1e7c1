use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Book model for reading from database
/// Derives Queryable for SELECT operations and Selectable for type-safe column selection
#[derive(Debug, Queryable, Selectable, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub rating: i32,
    pub price: i32,
}

/// NewBook model for inserting new records
#[derive(Debug, Insertable, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::books)]
pub struct NewBook {
    pub title: String,
    pub description: String,
    pub rating: i32,
    pub price: i32,
}

/// UpdateBook model for full overwrites
///
/// Every mutable column is written; there are no partial updates.
#[derive(Debug, AsChangeset, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::books)]
pub struct UpdateBook {
    pub title: String,
    pub description: String,
    pub rating: i32,
    pub price: i32,
}

impl From<&Book> for UpdateBook {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            description: book.description.clone(),
            rating: book.rating,
            price: book.price,
        }
    }
}

/// Inbound book payload shared by create and update.
///
/// Fields are optional at the decoding level so that a missing field is
/// reported by validation (`required`) instead of failing JSON decoding.
/// `rating` and `price` accept JSON numbers or numeric strings. With
/// serde_json's `arbitrary_precision` the number text reaches `BigDecimal`
/// untouched, so no digits are lost to `f64` before the service narrows it.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct BookRequest {
    #[validate(required, length(min = 1, code = "required"))]
    #[schema(value_type = String, example = "Go 101")]
    pub title: Option<String>,

    #[validate(required, length(min = 1, code = "required"))]
    #[schema(value_type = String, example = "intro")]
    pub description: Option<String>,

    #[validate(required)]
    #[schema(value_type = f64, example = 4)]
    pub rating: Option<BigDecimal>,

    #[validate(required)]
    #[schema(value_type = f64, example = 10000)]
    pub price: Option<BigDecimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn full_request() -> BookRequest {
        BookRequest {
            title: Some("Go 101".to_string()),
            description: Some("intro".to_string()),
            rating: Some(BigDecimal::from(4)),
            price: Some(BigDecimal::from(10000)),
        }
    }

    #[test]
    fn test_full_request_is_valid() {
        assert!(full_request().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_are_reported_as_required() {
        let errors = BookRequest::default().validate().unwrap_err();
        let field_errors = errors.field_errors();

        assert_eq!(field_errors.len(), 4);
        for field in ["title", "description", "rating", "price"] {
            let errs = field_errors.get(field).expect("field should fail");
            assert_eq!(errs[0].code, "required");
        }
    }

    #[test]
    fn test_empty_title_is_reported_as_required() {
        let request = BookRequest {
            title: Some(String::new()),
            ..full_request()
        };
        let errors = request.validate().unwrap_err();
        let field_errors = errors.field_errors();

        assert_eq!(field_errors.len(), 1);
        assert_eq!(field_errors["title"][0].code, "required");
    }

    #[test]
    fn test_zero_numbers_are_present() {
        let request = BookRequest {
            rating: Some(BigDecimal::from(0)),
            price: Some(BigDecimal::from_str("0.0").unwrap()),
            ..full_request()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_deserialize_numbers_and_strings() {
        let request: BookRequest = serde_json::from_str(
            r#"{"title":"t","description":"d","rating":4.5,"price":"12000"}"#,
        )
        .unwrap();

        assert_eq!(request.rating, Some(BigDecimal::from_str("4.5").unwrap()));
        assert_eq!(request.price, Some(BigDecimal::from(12000)));
    }

    #[test]
    fn test_deserialize_keeps_every_digit() {
        let request: BookRequest = serde_json::from_str(
            r#"{"title":"t","description":"d","rating":0.1,"price":2147483647.99999999}"#,
        )
        .unwrap();

        assert_eq!(request.rating, Some(BigDecimal::from_str("0.1").unwrap()));
        assert_eq!(
            request.price,
            Some(BigDecimal::from_str("2147483647.99999999").unwrap())
        );
    }

    #[test]
    fn test_deserialize_rejects_non_numeric_string() {
        let result = serde_json::from_str::<BookRequest>(
            r#"{"title":"t","description":"d","rating":1,"price":"abc"}"#,
        );
        assert!(result.is_err());
    }
}
