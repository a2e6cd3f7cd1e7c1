//! Book service for business logic operations.
//!
//! Maps inbound `BookRequest` payloads onto storage entities and forwards
//! them to the repository. There are no business rules beyond the numeric
//! narrowing of `rating` and `price`.

use std::sync::Arc;

use bigdecimal::{BigDecimal, ToPrimitive};

use crate::error::{AppError, AppResult};
use crate::models::{Book, BookRequest, NewBook};
use crate::repositories::BookStore;

/// Book service for handling book-related operations.
#[derive(Clone)]
pub struct BookService {
    repo: Arc<dyn BookStore>,
}

/// Fields of a `BookRequest` after presence checks and narrowing.
struct BookFields {
    title: String,
    description: String,
    rating: i32,
    price: i32,
}

impl BookService {
    /// Creates a new BookService on top of the given store.
    pub fn new(repo: Arc<dyn BookStore>) -> Self {
        Self { repo }
    }

    /// Lists all books.
    pub async fn find_all(&self) -> AppResult<Vec<Book>> {
        self.repo.find_all().await
    }

    /// Gets a book by its ID.
    ///
    /// # Returns
    /// The book if found, or `NotFound` error
    pub async fn find_by_id(&self, id: i32) -> AppResult<Book> {
        self.repo.find_by_id(id).await
    }

    /// Creates a new book from a request payload.
    ///
    /// # Errors
    /// `Validation` when a field is missing or a number does not fit in an
    /// `i32`, plus any storage error.
    pub async fn create(&self, request: BookRequest) -> AppResult<Book> {
        let fields = BookFields::try_from(request)?;
        tracing::debug!(title = %fields.title, "Creating book");

        self.repo
            .create(NewBook {
                title: fields.title,
                description: fields.description,
                rating: fields.rating,
                price: fields.price,
            })
            .await
    }

    /// Overwrites every mutable field of an existing book.
    ///
    /// The payload is checked before the lookup, so a bad payload is a
    /// `Validation` error whether or not the id exists. A failed lookup
    /// aborts the update before anything is written.
    pub async fn update(&self, id: i32, request: BookRequest) -> AppResult<Book> {
        let fields = BookFields::try_from(request)?;
        let mut book = self.repo.find_by_id(id).await?;
        tracing::debug!(book_id = id, "Updating book");

        book.title = fields.title;
        book.description = fields.description;
        book.rating = fields.rating;
        book.price = fields.price;

        self.repo.update(&book).await
    }

    /// Deletes a book and returns the row as it was before deletion.
    ///
    /// A failed lookup aborts the delete.
    pub async fn delete(&self, id: i32) -> AppResult<Book> {
        let book = self.repo.find_by_id(id).await?;
        tracing::debug!(book_id = id, "Deleting book");

        self.repo.delete(&book).await
    }
}

impl TryFrom<BookRequest> for BookFields {
    type Error = AppError;

    fn try_from(request: BookRequest) -> AppResult<Self> {
        Ok(Self {
            title: required("title", request.title)?,
            description: required("description", request.description)?,
            rating: narrow("rating", &required("rating", request.rating)?)?,
            price: narrow("price", &required("price", request.price)?)?,
        })
    }
}

fn required<T>(field: &str, value: Option<T>) -> AppResult<T> {
    value.ok_or_else(|| AppError::Validation {
        field: field.to_string(),
        reason: "required".to_string(),
    })
}

/// Largest order of magnitude an `i32` can reach (2147483647 is 2.1e9).
const I32_MAX_MAGNITUDE: i64 = 9;

/// Narrows a decimal to `i32`, discarding any fractional part.
///
/// Values outside the `i32` range are rejected rather than wrapped or
/// defaulted. The magnitude is read off the digit count first, so an
/// input like `1e10000000` never gets expanded into a huge integer.
fn narrow(field: &str, value: &BigDecimal) -> AppResult<i32> {
    let out_of_range = || AppError::Validation {
        field: field.to_string(),
        reason: "int32".to_string(),
    };

    match value.order_of_magnitude() {
        m if m > I32_MAX_MAGNITUDE => Err(out_of_range()),
        // |value| < 1, and zero has magnitude 0
        m if m < 0 => Ok(0),
        _ => value.with_scale(0).to_i32().ok_or_else(out_of_range),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_narrow_integer() {
        assert_eq!(narrow("price", &dec("10000")).unwrap(), 10000);
    }

    #[test]
    fn test_narrow_discards_fraction() {
        assert_eq!(narrow("rating", &dec("4.9")).unwrap(), 4);
        assert_eq!(narrow("rating", &dec("-4.9")).unwrap(), -4);
    }

    #[test]
    fn test_narrow_exponent_notation() {
        assert_eq!(narrow("price", &dec("1.5e3")).unwrap(), 1500);
    }

    #[test]
    fn test_narrow_out_of_range() {
        let err = narrow("price", &dec("2147483648")).unwrap_err();
        match err {
            AppError::Validation { field, reason } => {
                assert_eq!(field, "price");
                assert_eq!(reason, "int32");
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_narrow_huge_exponent_fails_fast() {
        let started = std::time::Instant::now();

        assert!(narrow("price", &dec("1e10000000")).is_err());
        assert!(narrow("price", &dec("-1e10000000")).is_err());
        assert_eq!(narrow("price", &dec("1e-10000000")).unwrap(), 0);
        assert_eq!(narrow("price", &dec("-1e-10000000")).unwrap(), 0);

        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn test_narrow_magnitude_edges() {
        assert_eq!(narrow("price", &dec("0")).unwrap(), 0);
        assert_eq!(narrow("price", &dec("0.999")).unwrap(), 0);
        assert_eq!(narrow("price", &dec("9999999999e-1")).unwrap(), 999999999);
        assert_eq!(narrow("price", &dec("2147483647.99999999")).unwrap(), i32::MAX);
        assert!(narrow("price", &dec("9999999999")).is_err());
        assert!(narrow("price", &dec("10000000000")).is_err());
    }

    #[test]
    fn test_narrow_bounds() {
        assert_eq!(narrow("price", &dec("2147483647")).unwrap(), i32::MAX);
        assert_eq!(narrow("price", &dec("-2147483648")).unwrap(), i32::MIN);
    }

    #[test]
    fn test_fields_missing_value() {
        let request = BookRequest {
            title: Some("t".to_string()),
            description: None,
            rating: Some(dec("1")),
            price: Some(dec("2")),
        };
        match BookFields::try_from(request) {
            Err(AppError::Validation { field, reason }) => {
                assert_eq!(field, "description");
                assert_eq!(reason, "required");
            }
            _ => panic!("Expected Validation error"),
        }
    }

    proptest! {
        #[test]
        fn prop_narrow_roundtrips_i32(n in any::<i32>()) {
            prop_assert_eq!(narrow("rating", &BigDecimal::from(n)).unwrap(), n);
        }

        #[test]
        fn prop_narrow_truncates_toward_zero(n in -1_000_000i32..1_000_000, frac in 0u32..1000) {
            let value = dec(&format!("{}.{:03}", n, frac));
            prop_assert_eq!(narrow("price", &value).unwrap(), n);
        }
    }
}
