use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::{HeaderMap, HeaderName, HeaderValue},
    Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};

type StartingCallback = Box<dyn FnOnce(&mut HeaderMap)>;

struct ExchangeState {
    headers: HeaderMap,
    on_starting: Vec<StartingCallback>,
    started: bool,
}

/// Request-local view of a single HTTP exchange.
///
/// Holds the response headers written by pipeline stages before a response
/// exists, and the callbacks to run at the moment the response is about to
/// be sent. [`ResponseBoundary`] creates one per request and places it in the
/// request extensions; stages reach it through [`Exchange::of`].
///
/// Once [`Exchange::start`] has run, the exchange is sealed: further header
/// appends and callback registrations are refused.
#[derive(Clone)]
pub struct Exchange(Rc<RefCell<ExchangeState>>);

impl Exchange {
    pub fn new() -> Self {
        Exchange(Rc::new(RefCell::new(ExchangeState {
            headers: HeaderMap::new(),
            on_starting: Vec::new(),
            started: false,
        })))
    }

    /// Returns the exchange attached to `req`, if a boundary is in scope.
    pub fn of(req: &ServiceRequest) -> Option<Exchange> {
        req.extensions().get::<Exchange>().cloned()
    }

    /// Queues a header for the response. Returns `false` once started.
    pub fn append_header(&self, name: HeaderName, value: HeaderValue) -> bool {
        let mut state = self.0.borrow_mut();
        if state.started {
            return false;
        }
        state.headers.append(name, value);
        true
    }

    /// Registers a callback to run when the response is about to be sent.
    ///
    /// Callbacks run once, in registration order, after queued headers have
    /// been merged into the response. Returns `false` once started.
    pub fn on_starting<F>(&self, callback: F) -> bool
    where
        F: FnOnce(&mut HeaderMap) + 'static,
    {
        let mut state = self.0.borrow_mut();
        if state.started {
            return false;
        }
        state.on_starting.push(Box::new(callback));
        true
    }

    pub fn has_started(&self) -> bool {
        self.0.borrow().started
    }

    /// Marks the response as starting: merges queued headers into `headers`
    /// and fires the on-starting callbacks. Subsequent calls do nothing.
    pub fn start(&self, headers: &mut HeaderMap) {
        let (pending, callbacks) = {
            let mut state = self.0.borrow_mut();
            if state.started {
                return;
            }
            state.started = true;
            (
                mem::replace(&mut state.headers, HeaderMap::new()),
                mem::take(&mut state.on_starting),
            )
        };

        for (name, value) in pending {
            headers.append(name, value);
        }

        log::trace!("response starting, {} callback(s)", callbacks.len());
        for callback in callbacks {
            callback(headers);
        }
    }
}

impl Default for Exchange {
    fn default() -> Self {
        Self::new()
    }
}

/// Outermost pipeline stage: the point at which response headers are
/// considered sent.
///
/// Actix Web writes the response head as soon as the outermost service
/// returns, so this middleware is where the exchange starts. A downstream
/// error is still returned as an error, but carries its rendered response,
/// already started, so the host sends that response with the stamped headers.
pub struct ResponseBoundary;

impl<S, B> Transform<S, ServiceRequest> for ResponseBoundary
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = ResponseBoundaryService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ResponseBoundaryService { service }))
    }
}

pub struct ResponseBoundaryService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ResponseBoundaryService<S>
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
        let exchange = Exchange::new();
        req.extensions_mut().insert(exchange.clone());
        // The router needs sole ownership of the request, so keep no clone of it.
        let path = req.path().to_owned();

        let fut = self.service.call(req);

        Box::pin(async move {
            match fut.await {
                Ok(mut res) => {
                    exchange.start(res.headers_mut());
                    Ok(res)
                }
                Err(err) => {
                    log::debug!("downstream error for {}: {}", path, err);
                    let mut res = err.error_response();
                    exchange.start(res.headers_mut());
                    Err(InternalError::from_response(err.to_string(), res).into())
                }
            }
        })
    }
}
