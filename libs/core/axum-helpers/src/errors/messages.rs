//! Client-facing message text for every [`ErrorKind`](super::ErrorKind).

pub const AUTH_HEADER_MISSING: &str = "authorization header is missing";
pub const AUTH_HEADER_MALFORMED: &str = "invalid Authorization header format";
pub const KEY_DECODE_FAILED: &str = "error decoding public key";
pub const KEY_PARSE_FAILED: &str = "error parsing public key";
pub const TOKEN_INVALID: &str = "invalid token";

// Kind descriptions for logs. Field violations reach clients with their own
// per-field message, e.g. "price is required".
pub const FIELD_REQUIRED: &str = "field is required";
pub const FIELD_OUT_OF_RANGE: &str = "field is out of range";
pub const INVALID_LIMIT: &str = "invalid limit parameter, limit must be in the range of [1, 100]";
pub const INVALID_OFFSET: &str = "invalid offset parameter, offset must be a non-negative integer";
pub const INVALID_QUERY: &str = "invalid query parameters";

pub const NOT_FOUND_RESOURCE: &str = "the requested resource was not found";
pub const METHOD_NOT_ALLOWED: &str = "the HTTP method is not allowed for this resource";
pub const INTERNAL_ERROR: &str = "an unexpected error occurred";
