//! Actix middleware recording request count, latency and errors per endpoint.
//!
//! Every sample is labelled with the matched route pattern (for example
//! `/api/cat/single/{cat_id}`, so cat ids never become label values), the HTTP
//! method and the numeric status code such as `404`. Requests that fail before
//! producing a response go to `error_requests_total` instead of
//! `requests_total`. The raw-URI counter keeps the concrete path.

use crate::metrics::{ERROR_COUNTER, RAW_REQUEST_COUNTER, REQUEST_COUNTER, REQUEST_LATENCY};
use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures::future::{LocalBoxFuture, Ready};
use std::{
    task::{Context, Poll},
    time::Instant,
};

pub struct MetricsMiddleware;

impl<S, B> Transform<S, ServiceRequest> for MetricsMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = MetricsMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        futures::future::ready(Ok(MetricsMiddlewareService { service }))
    }
}

pub struct MetricsMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for MetricsMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Route pattern keeps ids out of the label set; unmatched paths fall back to the raw path.
        let endpoint = req
            .match_pattern()
            .unwrap_or_else(|| req.path().to_string());
        let method = req.method().to_string();
        let raw_uri = req.path().to_string();
        let start_time = Instant::now();

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await;
            let elapsed = start_time.elapsed().as_secs_f64();

            let status = match &res {
                Ok(response) => response.response().status().as_u16().to_string(),
                Err(e) => e.as_response_error().status_code().as_u16().to_string(),
            };
            let labels = [endpoint.as_str(), method.as_str(), status.as_str()];

            REQUEST_LATENCY.with_label_values(&labels).observe(elapsed);
            match &res {
                Ok(_) => REQUEST_COUNTER.with_label_values(&labels).inc(),
                Err(_) => ERROR_COUNTER.with_label_values(&labels).inc(),
            }
            RAW_REQUEST_COUNTER
                .with_label_values(&[&raw_uri, &method, &status])
                .inc();
            res
        })
    }
}
