use std::time::Instant;

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use super::exchange::Exchange;
use super::RESPONSE_TIME_HEADER;

/// Reports the latency of everything downstream as `X-Response-time-Ms`.
///
/// The stopwatch starts when the request enters this stage and stops in an
/// on-starting callback, so the value covers the full inner pipeline up to
/// the moment the response head is written. Requires a [`ResponseBoundary`]
/// further out; without one the request passes through untimed.
///
/// [`ResponseBoundary`]: super::ResponseBoundary
pub struct ResponseTiming;

impl<S, B> Transform<S, ServiceRequest> for ResponseTiming
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = ResponseTimingService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ResponseTimingService { service }))
    }
}

pub struct ResponseTimingService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ResponseTimingService<S>
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
        match Exchange::of(&req) {
            Some(exchange) => {
                let stopwatch = Instant::now();
                exchange.on_starting(move |headers| {
                    let elapsed = elapsed_millis(stopwatch);
                    headers.append(
                        HeaderName::from_static(RESPONSE_TIME_HEADER),
                        HeaderValue::from(elapsed),
                    );
                });
            }
            None => {
                log::warn!(
                    "no response boundary in scope for {}, skipping response timing",
                    req.path()
                );
            }
        }

        Box::pin(self.service.call(req))
    }
}

fn elapsed_millis(stopwatch: Instant) -> u64 {
    u64::try_from(stopwatch.elapsed().as_millis()).unwrap_or(u64::MAX)
}
