// Adapters layer: concrete transports behind the domain ports.

pub mod function;
pub mod http;

pub use function::{FnTransport, JsonResponse};
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
