//! Request dispatch with an optional abort deadline.

use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use web_sys::AbortController;

/// Controller whose signal outgoing requests are built against.
pub fn abort_controller() -> Option<AbortController> {
    AbortController::new().ok()
}

/// Send `request`, aborting through `controller` if `deadline_ms` elapses
/// before a response arrives. With no deadline the transport default applies.
pub async fn send_with_deadline(
    request: Request,
    controller: Option<AbortController>,
    deadline_ms: Option<u32>,
) -> Result<Response, String> {
    let send = request.send();

    let Some(ms) = deadline_ms else {
        return send.await.map_err(|e| format!("Request failed: {e}"));
    };

    futures::pin_mut!(send);
    let deadline = TimeoutFuture::new(ms);
    futures::pin_mut!(deadline);

    match select(send, deadline).await {
        Either::Left((result, _)) => result.map_err(|e| format!("Request failed: {e}")),
        Either::Right(((), _)) => {
            if let Some(controller) = &controller {
                controller.abort();
            }
            Err(format!("Request aborted after {ms} ms"))
        }
    }
}
