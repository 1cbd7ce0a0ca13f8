//! Tower middleware layer enforcing bearer-token authentication.
//!
//! Per request the gate is in one of two states: the path is in the
//! exemption set and the request passes without header inspection, or the
//! request must authenticate. In the latter case the `Authorization`
//! header value, trimmed of surrounding whitespace, is treated verbatim as
//! the token string — no `Bearer ` prefix handling — and any validation
//! failure short-circuits with an opaque 401. The failure sub-kind is
//! logged, never surfaced to the client. Successful validation forwards
//! the request unchanged; handlers that need the caller's identity resolve
//! it themselves.

use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use taxon_auth_core::TokenService;

/// Tower layer that gates requests behind bearer-token authentication.
#[derive(Clone)]
pub struct AuthGateLayer {
    verifier: TokenService,
    exempt: Arc<HashSet<String>>,
}

impl AuthGateLayer {
    /// Create a new gate.
    ///
    /// `exempt` paths are matched exactly against the request path; no
    /// prefix matching, so the exemption surface stays auditable.
    pub fn new<I, S>(verifier: TokenService, exempt: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            verifier,
            exempt: Arc::new(exempt.into_iter().map(Into::into).collect()),
        }
    }
}

impl<S> Layer<S> for AuthGateLayer {
    type Service = AuthGate<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthGate {
            inner,
            verifier: self.verifier.clone(),
            exempt: Arc::clone(&self.exempt),
        }
    }
}

/// The gate service wrapping an inner service.
#[derive(Clone)]
pub struct AuthGate<S> {
    inner: S,
    verifier: TokenService,
    exempt: Arc<HashSet<String>>,
}

impl<S> AuthGate<S> {
    /// Decide whether the request may proceed.
    fn allow(&self, req: &Request<Body>) -> bool {
        if self.exempt.contains(req.uri().path()) {
            return true;
        }

        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .unwrap_or("");

        if token.is_empty() {
            tracing::debug!(path = %req.uri().path(), "Rejecting request without token");
            return false;
        }

        match self.verifier.validate(token) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(path = %req.uri().path(), error = %e, "Rejecting invalid token");
                false
            }
        }
    }
}

impl<S, ResBody> Service<Request<Body>> for AuthGate<S>
where
    S: Service<Request<Body>, Response = Response<ResBody>>,
    ResBody: Default,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = AuthGateFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        // Token validation is CPU-bound and synchronous, so the decision is
        // made here and the future only has to forward or reject.
        if self.allow(&req) {
            AuthGateFuture {
                kind: Kind::Forward {
                    future: self.inner.call(req),
                },
            }
        } else {
            AuthGateFuture {
                kind: Kind::Reject { done: false },
            }
        }
    }
}

pin_project! {
    /// Future for the gate service.
    pub struct AuthGateFuture<F> {
        #[pin]
        kind: Kind<F>,
    }
}

pin_project! {
    #[project = KindProj]
    enum Kind<F> {
        Forward {
            #[pin]
            future: F,
        },
        Reject {
            done: bool,
        },
    }
}

impl<F, ResBody, E> Future for AuthGateFuture<F>
where
    F: Future<Output = Result<Response<ResBody>, E>>,
    ResBody: Default,
{
    type Output = Result<Response<ResBody>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project().kind.project() {
            KindProj::Forward { future } => future.poll(cx),
            KindProj::Reject { done } => {
                assert!(!*done, "polled after completion");
                *done = true;

                let mut response = Response::new(ResBody::default());
                *response.status_mut() = StatusCode::UNAUTHORIZED;
                Poll::Ready(Ok(response))
            }
        }
    }
}
