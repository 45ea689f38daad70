use crate::domain::model::ResponseBody;
use crate::utils::error::Result;

/// A response as handed back by a [`Transport`], before classification.
pub trait RawResponse: Send {
    fn ok(&self) -> bool;

    fn status(&self) -> u16;

    /// Consumes the response and decodes its JSON body.
    fn body(self) -> impl std::future::Future<Output = Result<ResponseBody>> + Send;
}

/// Performs the actual network call for a set of request parameters.
pub trait Transport<P>: Send + Sync {
    type Response: RawResponse;

    fn send(&self, params: P) -> impl std::future::Future<Output = Result<Self::Response>> + Send;
}
