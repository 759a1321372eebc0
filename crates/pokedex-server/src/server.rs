//! Request handling and the accept loop

use crate::pages::{error_response, html_response, index_page, render};
use crate::query::QueryParams;
use crate::router::Route;
use crate::state::AppState;
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::header::{HeaderValue, ALLOW};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode, Uri};
use hyper_util::rt::TokioIo;
use pokedex_db::{Query, SortMode};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Answer one request. Never fails: problems become error pages.
pub async fn handle_request(state: &AppState, method: &Method, uri: &Uri) -> Response<Full<Bytes>> {
    let route = state.router().route(uri.path());
    let params = QueryParams::parse(uri.query());

    let response = match route {
        Route::Index => html_response(StatusCode::OK, index_page(state.snapshot().await)),
        Route::Reload => reload(state, method).await,
        Route::Categories | Route::Creatures | Route::Creature => {
            match state.store().await {
                Ok(store) => {
                    let query = match route {
                        Route::Categories => Query::Categories {
                            name: params.get("name"),
                        },
                        Route::Creatures => Query::Creatures {
                            category: params.get("type"),
                            sort: SortMode::from_param(params.get("sortby")),
                        },
                        _ => Query::Creature {
                            name: params.get("name"),
                        },
                    };
                    html_response(StatusCode::OK, render(&store.execute(query)))
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to load dataset");
                    error_response(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "The dataset could not be loaded.",
                    )
                }
            }
        }
    };

    tracing::info!(
        method = %method,
        uri = %uri,
        route = ?route,
        status = response.status().as_u16(),
        "Request handled"
    );
    response
}

async fn reload(state: &AppState, method: &Method) -> Response<Full<Bytes>> {
    if *method != Method::POST {
        let mut response = error_response(StatusCode::METHOD_NOT_ALLOWED, "Use POST to reload.");
        response
            .headers_mut()
            .insert(ALLOW, HeaderValue::from_static("POST"));
        return response;
    }

    match state.reload().await {
        Ok(store) => {
            let stats = store.stats();
            html_response(
                StatusCode::OK,
                index_page(Some((stats, store.loaded_at()))),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Reload failed; keeping previous dataset");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "The dataset could not be reloaded.",
            )
        }
    }
}

/// Accept connections on `addr` until the task is dropped
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening on http://{}", addr);

    loop {
        let (stream, remote_addr) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::warn!(error = %e, "Accept error");
                continue;
            }
        };

        let state = state.clone();
        tokio::spawn(async move {
            let io = TokioIo::new(stream);
            let service = service_fn(move |req: Request<Incoming>| {
                let state = state.clone();
                async move {
                    tracing::debug!(%remote_addr, "Incoming request");
                    Ok::<_, std::convert::Infallible>(
                        handle_request(&state, req.method(), req.uri()).await,
                    )
                }
            });

            if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                tracing::warn!(error = %e, "Connection error");
            }
        });
    }
}
