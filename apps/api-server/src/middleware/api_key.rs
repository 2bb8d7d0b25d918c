//! Admin API-key gate.
//!
//! Requests whose path falls under the admin prefix must carry an
//! `X-API-Key` header matching the configured secret byte-for-byte. CORS
//! preflights (`OPTIONS`) always pass so the browser can negotiate before
//! credentials are attached. Everything else passes untouched. The check is
//! request-scoped; no state is kept across requests.

use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::Method,
};
use std::future::{Future, Ready, ready};
use std::pin::Pin;

const ADMIN_PREFIX: &str = "/api/admin";
const API_KEY_HEADER: &str = "X-API-Key";

/// Admin gate middleware factory.
pub struct AdminGate {
    api_key: Option<String>,
}

impl AdminGate {
    /// `api_key` is the configured secret; `None` rejects every admin
    /// request.
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AdminGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AdminGateService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminGateService {
            service,
            api_key: self.api_key.clone(),
        }))
    }
}

pub struct AdminGateService<S> {
    service: S,
    api_key: Option<String>,
}

impl<S> AdminGateService<S> {
    fn is_authorized(&self, req: &ServiceRequest) -> bool {
        if req.method() == Method::OPTIONS {
            return true;
        }
        if !req.path().starts_with(ADMIN_PREFIX) {
            return true;
        }

        let supplied = req
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok());

        match (&self.api_key, supplied) {
            (Some(expected), Some(key)) => key == expected,
            _ => false,
        }
    }
}

impl<S, B> Service<ServiceRequest> for AdminGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if self.is_authorized(&req) {
            let fut = self.service.call(req);
            return Box::pin(async move {
                let res = fut.await?;
                Ok(res.map_into_left_body())
            });
        }

        tracing::warn!(path = %req.path(), "Rejected admin request: invalid or missing API key");

        let response = HttpResponse::Unauthorized()
            .json(serde_json::json!({"error": "Invalid or missing API key"}));

        let (http_req, _payload) = req.into_parts();
        let srv_response = ServiceResponse::new(http_req, response);

        Box::pin(async move { Ok(srv_response.map_into_right_body()) })
    }
}
