use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use super::exchange::Exchange;
use super::{STUDENT_GROUP_HEADER, STUDENT_NAME_HEADER};
use crate::config::IdentityConfig;

/// Stamps `X-Student-Name` and `X-Student-Group` on every response.
#[derive(Clone)]
pub struct Identification {
    student_name: HeaderValue,
    student_group: HeaderValue,
}

impl Identification {
    pub fn new(identity: &IdentityConfig) -> Self {
        Self {
            student_name: identity.student_name.clone(),
            student_group: identity.student_group.clone(),
        }
    }

    fn headers(&self) -> [(HeaderName, HeaderValue); 2] {
        [
            (
                HeaderName::from_static(STUDENT_NAME_HEADER),
                self.student_name.clone(),
            ),
            (
                HeaderName::from_static(STUDENT_GROUP_HEADER),
                self.student_group.clone(),
            ),
        ]
    }
}

impl<S, B> Transform<S, ServiceRequest> for Identification
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = IdentificationService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(IdentificationService {
            service,
            identity: self.clone(),
        }))
    }
}

pub struct IdentificationService<S> {
    service: S,
    identity: Identification,
}

impl<S, B> Service<ServiceRequest> for IdentificationService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Some(exchange) = Exchange::of(&req) {
            for (name, value) in self.identity.headers() {
                exchange.append_header(name, value);
            }
            return Box::pin(self.service.call(req));
        }

        // No boundary: stamp the response on its way back out.
        let headers = self.identity.headers();
        let fut = self.service.call(req);
        Box::pin(async move {
            let mut res = fut.await?;
            for (name, value) in headers {
                res.headers_mut().append(name, value);
            }
            Ok(res)
        })
    }
}
