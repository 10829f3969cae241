//! Verb and path to handler mapping.

use lambda_http::http::Method;

/// Collection resource served by the API.
pub const PRODUCTS_RESOURCE: &str = "products";

/// The five CRUD operations.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operation {
    /// `GET /products`
    List,
    /// `POST /products`
    Create,
    /// `GET /products/{id}`
    GetOne,
    /// `PATCH /products/{id}`
    UpdateOne,
    /// `DELETE /products/{id}`
    DeleteOne,
}

impl Operation {
    /// Every operation, in route-table order.
    pub const ALL: [Self; 5] = [
        Self::List,
        Self::Create,
        Self::GetOne,
        Self::UpdateOne,
        Self::DeleteOne,
    ];

    /// HTTP verb of the route.
    pub fn method(self) -> Method {
        match self {
            Self::List | Self::GetOne => Method::GET,
            Self::Create => Method::POST,
            Self::UpdateOne => Method::PATCH,
            Self::DeleteOne => Method::DELETE,
        }
    }

    /// Path template of the route.
    pub fn path(self) -> &'static str {
        match self {
            Self::List | Self::Create => "/products",
            Self::GetOne | Self::UpdateOne | Self::DeleteOne => "/products/{id}",
        }
    }
}

/// Outcome of matching a request line against the route table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Route {
    /// A route matched; `id` carries the `{id}` segment for item routes.
    Matched {
        /// Operation to run.
        operation: Operation,
        /// Percent-decoded `{id}` path segment, if the route has one.
        id: Option<String>,
    },
    /// The path exists but not with this verb.
    MethodNotAllowed,
    /// No route has this path.
    NotFound,
}

impl Route {
    /// Matches `method` and `path` against the route table.
    ///
    /// ```rust
    /// use inventory_crud::routes::{Operation, Route};
    /// use lambda_http::http::Method;
    ///
    /// let route = Route::resolve(&Method::PATCH, "/products/abc");
    /// assert_eq!(
    ///     route,
    ///     Route::Matched {
    ///         operation: Operation::UpdateOne,
    ///         id: Some("abc".to_string()),
    ///     }
    /// );
    /// ```
    pub fn resolve(method: &Method, path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [PRODUCTS_RESOURCE] => match *method {
                Method::GET => Self::matched(Operation::List, None),
                Method::POST => Self::matched(Operation::Create, None),
                _ => Self::MethodNotAllowed,
            },
            [PRODUCTS_RESOURCE, id] => {
                // segments arrive percent-encoded, stored keys do not
                let Ok(id) = urlencoding::decode(id) else {
                    return Self::NotFound;
                };
                let id = Some(id.into_owned());
                match *method {
                    Method::GET => Self::matched(Operation::GetOne, id),
                    Method::PATCH => Self::matched(Operation::UpdateOne, id),
                    Method::DELETE => Self::matched(Operation::DeleteOne, id),
                    _ => Self::MethodNotAllowed,
                }
            }
            _ => Self::NotFound,
        }
    }

    fn matched(operation: Operation, id: Option<String>) -> Self {
        Self::Matched { operation, id }
    }
}
