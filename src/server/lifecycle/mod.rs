//! Serving the router until shutdown, with a bounded drain of in-flight requests.
//!
//! Connections are served by hyper directly rather than `axum::serve` so that each one can
//! carry read, write and idle timeouts.

mod stream;

use std::{future::Future, time::Duration};

use axum::Router;
use hyper_util::{
    rt::{TokioExecutor, TokioIo, TokioTimer},
    server::conn::auto::Builder,
    service::TowerToHyperService,
};
use tokio::{
    net::{TcpListener, TcpStream},
    sync::watch,
};

use self::stream::{Activity, TrackedStream};

/// Per-connection time limits.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionTimeouts {
    /// Limit for receiving a complete set of request headers.
    pub read: Duration,
    /// Limit for a response write that makes no progress.
    pub write: Duration,
    /// Connections without any I/O for this long are closed.
    pub idle: Duration,
}

impl Default for ConnectionTimeouts {
    fn default() -> Self {
        Self {
            read: Duration::from_secs(15),
            write: Duration::from_secs(15),
            idle: Duration::from_secs(60),
        }
    }
}

/// Pause after a failed `accept`, typically caused by running out of file descriptors.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Serves `router` on `listener` until `shutdown` resolves, then drains.
///
/// Once `shutdown` completes the listener is closed, so new connections are refused, and
/// requests already in flight get up to `grace` to finish. If the window elapses the
/// remaining connections are abandoned and this returns anyway.
///
/// # Arguments
/// - `listener` - Bound TCP listener
/// - `router` - Application router with state applied
/// - `timeouts` - Read, write and idle limits applied to every connection
/// - `grace` - Drain window for in-flight requests
/// - `shutdown` - Future that resolves when the server should stop
pub async fn serve<F>(
    listener: TcpListener,
    router: Router,
    timeouts: ConnectionTimeouts,
    grace: Duration,
    shutdown: F,
) where
    F: Future<Output = ()> + Send,
{
    let mut builder = Builder::new(TokioExecutor::new());
    builder
        .http1()
        .timer(TokioTimer::new())
        .header_read_timeout(timeouts.read);
    builder.http2().timer(TokioTimer::new());

    // `stop` tells connections to finish up; `open` is held by every live connection task.
    let (stop_tx, stop_rx) = watch::channel(());
    let (open_tx, open_rx) = watch::channel(());

    tokio::pin!(shutdown);

    loop {
        let stream = tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok((stream, _)) => stream,
                Err(e) => {
                    tracing::warn!("Failed to accept connection: {}", e);
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                    continue;
                }
            },
            _ = &mut shutdown => break,
        };

        tokio::spawn(serve_connection(
            builder.clone(),
            stream,
            router.clone(),
            timeouts,
            stop_rx.clone(),
            open_rx.clone(),
        ));
    }

    drop(listener);
    tracing::info!("Shutting down, draining in-flight requests for up to {:?}", grace);

    let _ = stop_tx.send(());
    drop(stop_rx);
    drop(open_rx);

    match tokio::time::timeout(grace, open_tx.closed()).await {
        Ok(()) => tracing::info!("Server stopped"),
        Err(_) => tracing::warn!(
            "Graceful shutdown window of {:?} elapsed, abandoning remaining connections",
            grace
        ),
    }
}

/// Drives one connection until it ends, closing it gracefully on shutdown or when idle.
///
/// A graceful close lets an in-flight request finish before the socket is shut down.
async fn serve_connection(
    builder: Builder<TokioExecutor>,
    stream: TcpStream,
    router: Router,
    timeouts: ConnectionTimeouts,
    mut stop: watch::Receiver<()>,
    _open: watch::Receiver<()>,
) {
    let activity = Activity::new();
    let io = TokioIo::new(TrackedStream::new(stream, activity.clone(), timeouts.write));

    let conn = builder.serve_connection(io, TowerToHyperService::new(router));
    tokio::pin!(conn);

    let mut closing = false;
    loop {
        tokio::select! {
            result = conn.as_mut() => {
                if let Err(e) = result {
                    tracing::debug!("Connection closed with error: {}", e);
                }
                break;
            }
            _ = stop.changed(), if !closing => {
                closing = true;
                conn.as_mut().graceful_shutdown();
            }
            _ = tokio::time::sleep_until(activity.last() + timeouts.idle), if !closing => {
                if activity.last().elapsed() >= timeouts.idle {
                    tracing::debug!("Closing connection idle for {:?}", timeouts.idle);
                    closing = true;
                    conn.as_mut().graceful_shutdown();
                }
            }
        }
    }
}

/// Resolves on SIGINT, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }
}

/// Spawns [`serve`] on its own task, for callers that need to keep working meanwhile.
#[cfg(test)]
fn spawn_serve(
    listener: TcpListener,
    router: Router,
    timeouts: ConnectionTimeouts,
    grace: Duration,
) -> (tokio::sync::oneshot::Sender<()>, tokio::task::JoinHandle<()>) {
    let (trigger, signal) = tokio::sync::oneshot::channel::<()>();
    let handle = tokio::spawn(serve(listener, router, timeouts, grace, async move {
        let _ = signal.await;
    }));

    (trigger, handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::State, routing::get};
    use std::{net::SocketAddr, sync::Arc, time::Instant};
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        sync::Notify,
    };

    /// Router whose only route signals `started` and then sleeps for `delay`.
    fn slow_router(started: Arc<Notify>, delay: Duration) -> Router {
        Router::new()
            .route(
                "/",
                get(move |State(started): State<Arc<Notify>>| async move {
                    started.notify_one();
                    tokio::time::sleep(delay).await;
                    "done"
                }),
            )
            .with_state(started)
    }

    async fn bind() -> (TcpListener, SocketAddr) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        (listener, addr)
    }

    /// Polls until a fresh connection to `addr` is refused.
    async fn wait_until_refused(addr: SocketAddr) -> bool {
        for _ in 0..50 {
            if TcpStream::connect(addr).await.is_err() {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        false
    }

    /// Reads until the server closes the connection, returning what was received.
    ///
    /// Panics if the connection is still open after `limit`.
    async fn read_until_closed(client: &mut TcpStream, limit: Duration) -> String {
        let mut received = Vec::new();

        // A reset still counts as closed.
        let _ = tokio::time::timeout(limit, client.read_to_end(&mut received))
            .await
            .expect("server kept the connection open");

        String::from_utf8_lossy(&received).into_owned()
    }

    /// Expect the in-flight request to complete and new connections to be refused
    #[tokio::test]
    async fn drains_in_flight_request_and_refuses_new_ones() {
        let (listener, addr) = bind().await;
        let started = Arc::new(Notify::new());
        let router = slow_router(started.clone(), Duration::from_millis(500));

        let (trigger, server) = spawn_serve(
            listener,
            router,
            ConnectionTimeouts::default(),
            Duration::from_secs(5),
        );

        let in_flight = tokio::spawn(reqwest::get(format!("http://{}/", addr)));
        started.notified().await;

        let shutdown_at = Instant::now();
        trigger.send(()).unwrap();

        assert!(wait_until_refused(addr).await);

        let response = in_flight.await.unwrap().unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), "done");

        server.await.unwrap();
        assert!(shutdown_at.elapsed() < Duration::from_secs(5));
    }

    /// Expect serve to return once the grace window elapses with a request still running
    #[tokio::test]
    async fn returns_after_grace_window_elapses() {
        let (listener, addr) = bind().await;
        let started = Arc::new(Notify::new());
        let router = slow_router(started.clone(), Duration::from_secs(30));

        let (trigger, server) = spawn_serve(
            listener,
            router,
            ConnectionTimeouts::default(),
            Duration::from_millis(200),
        );

        let _stuck = tokio::spawn(reqwest::get(format!("http://{}/", addr)));
        started.notified().await;

        trigger.send(()).unwrap();

        tokio::time::timeout(Duration::from_secs(3), server)
            .await
            .expect("serve did not return after the grace window")
            .unwrap();
    }

    /// Expect an idle server to stop as soon as shutdown is requested
    #[tokio::test]
    async fn stops_idle_server_immediately() {
        let (listener, addr) = bind().await;
        let router = slow_router(Arc::new(Notify::new()), Duration::ZERO);

        let (trigger, server) = spawn_serve(
            listener,
            router,
            ConnectionTimeouts::default(),
            Duration::from_secs(5),
        );

        let response = reqwest::get(format!("http://{}/", addr)).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), "done");

        trigger.send(()).unwrap();

        tokio::time::timeout(Duration::from_secs(1), server)
            .await
            .expect("idle server did not stop")
            .unwrap();

        assert!(wait_until_refused(addr).await);
    }

    /// Expect a client that never finishes its request headers to be disconnected
    #[tokio::test]
    async fn closes_connection_with_incomplete_headers() {
        let (listener, addr) = bind().await;
        let router = slow_router(Arc::new(Notify::new()), Duration::ZERO);
        let timeouts = ConnectionTimeouts {
            read: Duration::from_millis(300),
            ..ConnectionTimeouts::default()
        };

        let (_trigger, _server) = spawn_serve(listener, router, timeouts, Duration::from_secs(5));

        let mut client = TcpStream::connect(addr).await.unwrap();
        client
            .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\n")
            .await
            .unwrap();

        let received = read_until_closed(&mut client, Duration::from_secs(5)).await;
        assert!(!received.contains("done"));
    }

    /// Expect a keep-alive connection to be closed after the idle timeout
    #[tokio::test]
    async fn closes_idle_keep_alive_connection() {
        let (listener, addr) = bind().await;
        let router = slow_router(Arc::new(Notify::new()), Duration::ZERO);
        let timeouts = ConnectionTimeouts {
            idle: Duration::from_millis(300),
            ..ConnectionTimeouts::default()
        };

        let (_trigger, _server) = spawn_serve(listener, router, timeouts, Duration::from_secs(5));

        let mut client = TcpStream::connect(addr).await.unwrap();
        client
            .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .await
            .unwrap();

        let received = read_until_closed(&mut client, Duration::from_secs(5)).await;
        assert!(received.starts_with("HTTP/1.1 200"));
        assert!(received.ends_with("done"));
    }

    /// Expect a connection that never sends anything to be closed after the idle timeout
    #[tokio::test]
    async fn closes_silent_connection() {
        let (listener, addr) = bind().await;
        let router = slow_router(Arc::new(Notify::new()), Duration::ZERO);
        let timeouts = ConnectionTimeouts {
            read: Duration::from_secs(30),
            idle: Duration::from_millis(300),
            ..ConnectionTimeouts::default()
        };

        let (_trigger, _server) = spawn_serve(listener, router, timeouts, Duration::from_secs(5));

        let mut client = TcpStream::connect(addr).await.unwrap();

        let received = read_until_closed(&mut client, Duration::from_secs(5)).await;
        assert!(received.is_empty());
    }
}
