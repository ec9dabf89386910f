use crate::views::{Shell, SkeletonKind, page_state};
use axum::body::Body;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use dioxus::prelude::*;
use folio::domain::PageContent;
use folio::features::content::{LoadState, MountGate, PageLoader, Resolved};
use std::convert::Infallible;
use std::fmt::Display;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::debug;

/// One page visit: the gate opens after the first render pass while the loader waits on
/// it, then fetches and settles.
///
/// Returns the loader's final state, which is always `Ready`.
pub(crate) async fn visit<T, F, R, E>(page: &'static str, fetch: F, fallback: impl FnOnce() -> T) -> LoadState<T>
where
    T: PageContent + Clone + Send + Sync,
    F: Future<Output = Result<R, E>>,
    R: Into<Option<T>>,
    E: Display,
{
    let gate = MountGate::new();
    let loader = PageLoader::new(gate.clone(), page);

    tokio::join!(gate.open_after_paint(), loader.load(fetch, fallback));
    loader.state()
}

/// Pending markup; hidden by `site.css` once `#page-ready` follows it and removed by `site.js`.
const PENDING_ID: &str = "page-pending";
const READY_ID: &str = "page-ready";

/// A streamed page visit.
///
/// The first chunk is the shell head plus whatever the loader shows before it settles (the
/// skeleton). The gate opens once that chunk is handed to the body, so the fetch only starts
/// after the first paint is on its way. The settled content and the shell tail follow.
pub(crate) fn stream_page<T, F, R, E>(
    shell: Shell,
    page: &'static str,
    skeleton: SkeletonKind,
    fetch: F,
    fallback: impl FnOnce() -> T + Send + 'static,
    ready: impl FnOnce(&Resolved<T>) -> Element + Send + 'static,
) -> Response
where
    T: PageContent + Clone + Send + Sync + 'static,
    F: Future<Output = Result<R, E>> + Send + 'static,
    R: Into<Option<T>> + Send + 'static,
    E: Display + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<Result<String, Infallible>>(2);

    tokio::spawn(async move {
        let gate = MountGate::new();
        let loader = PageLoader::new(gate.clone(), page);

        let pending = render_state(&loader.state(), skeleton, |_| rsx! {});
        let first = format!(r#"{}<div id="{PENDING_ID}">{pending}</div>"#, shell.head());
        if tx.send(Ok(first)).await.is_err() {
            debug!(page, "Visitor left before the first paint");
            return;
        }

        gate.open();
        loader.load(fetch, fallback).await;

        let settled = render_state(&loader.state(), skeleton, ready);
        let rest = format!(r#"<div id="{READY_ID}">{settled}</div>{}"#, shell.tail());
        if tx.send(Ok(rest)).await.is_err() {
            debug!(page, "Visitor left before the page settled");
        }
    });

    ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], Body::from_stream(ReceiverStream::new(rx))).into_response()
}

fn render_state<T>(
    state: &LoadState<T>,
    skeleton: SkeletonKind,
    ready: impl FnOnce(&Resolved<T>) -> Element,
) -> String {
    dioxus_ssr::render_element(page_state(state, skeleton, ready))
}
