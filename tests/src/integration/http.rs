//! # Full-Stack HTTP Flows
//!
//! The gateway served on an ephemeral loopback port, driven with raw
//! HTTP/1.1 over `TcpStream`. Every connection comes from 127.0.0.1, so all
//! requests share one latest-wins slot.

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::time::Duration;

    use lw_03_job_orchestrator::{JobApi, JobOrchestrator};
    use lw_04_api_gateway::{ApiGatewayService, AssetsConfig, GatewayConfig, GatewayError};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::sync::oneshot;
    use tokio::task::JoinHandle;

    use crate::integration::{orchestrator, wait_for_active};

    struct Server {
        addr: SocketAddr,
        jobs: Arc<JobOrchestrator>,
        stop: oneshot::Sender<()>,
        handle: JoinHandle<Result<(), GatewayError>>,
    }

    impl Server {
        async fn start(assets: AssetsConfig) -> Self {
            let jobs = orchestrator();
            let config = GatewayConfig {
                assets,
                ..Default::default()
            };
            let service = ApiGatewayService::new(config, jobs.clone()).unwrap();
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            let (stop, stopped) = oneshot::channel::<()>();

            let handle = tokio::spawn(async move {
                service
                    .serve(listener, async {
                        let _ = stopped.await;
                    })
                    .await
            });

            Self {
                addr,
                jobs,
                stop,
                handle,
            }
        }

        async fn stop(self) {
            let _ = self.stop.send(());
            let result = tokio::time::timeout(Duration::from_secs(10), self.handle)
                .await
                .unwrap()
                .unwrap();
            assert!(result.is_ok());
        }
    }

    /// Sends one request and returns `(status line, body)`.
    async fn get(addr: SocketAddr, target: &str) -> (String, String) {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let request =
            format!("GET {target} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.unwrap();
        let (head, body) = raw.split_once("\r\n\r\n").unwrap();
        let status = head.lines().next().unwrap().to_string();
        (status, body.to_string())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_compute_over_tcp() {
        let server = Server::start(AssetsConfig::default()).await;

        let (status, body) = get(server.addr, "/cpu-intensive?size=3").await;
        assert_eq!(status, "HTTP/1.1 200 OK");
        assert!(body.starts_with("Matrix multiplication (size: 3) completed in "));
        assert_eq!(body.lines().count(), 5);

        server.stop().await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_second_connection_cancels_first() {
        let server = Server::start(AssetsConfig::default()).await;

        let addr = server.addr;
        let first = tokio::spawn(async move { get(addr, "/cpu-intensive?size=2001").await });
        wait_for_active(server.jobs.as_ref(), 1).await;

        let (status, body) = get(server.addr, "/cpu-intensive?size=2").await;
        assert_eq!(status, "HTTP/1.1 200 OK");
        assert!(body.starts_with("Matrix multiplication (size: 2)"));

        let (status, body) = tokio::time::timeout(Duration::from_secs(10), first)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(status, "HTTP/1.1 200 OK");
        assert_eq!(body, "Request was cancelled due to large number\n");

        server.stop().await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_disconnect_releases_slot() {
        let server = Server::start(AssetsConfig::default()).await;

        let mut stream = TcpStream::connect(server.addr).await.unwrap();
        stream
            .write_all(b"GET /cpu-intensive?size=3000 HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .await
            .unwrap();
        wait_for_active(server.jobs.as_ref(), 1).await;

        drop(stream);
        wait_for_active(server.jobs.as_ref(), 0).await;
        assert_eq!(server.jobs.status().registry.released, 1);

        server.stop().await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_history_page_lists_loopback_requests() {
        let server = Server::start(AssetsConfig::default()).await;

        for size in ["2", "3", "oops"] {
            get(server.addr, &format!("/cpu-intensive?size={size}")).await;
        }

        let (status, body) = get(server.addr, "/all-values?pageSize=2").await;
        assert_eq!(status, "HTTP/1.1 200 OK");
        assert!(body.contains("<td>1</td><td>127.0.0.1</td><td>2</td>"));
        assert!(body.contains("<td>2</td><td>127.0.0.1</td><td>3</td>"));
        assert!(!body.contains("<td>100</td>"));

        let (_, body) = get(server.addr, "/all-values?page=2&pageSize=2").await;
        assert!(body.contains("<td>3</td><td>127.0.0.1</td><td>100</td>"));

        server.stop().await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_assets_and_health() {
        let dir = tempfile::tempdir().unwrap();
        let static_dir = dir.path().join("static");
        std::fs::create_dir(&static_dir).unwrap();
        std::fs::write(static_dir.join("site.js"), "console.log('hi');").unwrap();
        std::fs::write(dir.path().join("index.html"), "<p>index</p>").unwrap();

        let server = Server::start(AssetsConfig {
            static_dir,
            index_file: dir.path().join("index.html"),
        })
        .await;

        let (status, body) = get(server.addr, "/static/site.js").await;
        assert_eq!(status, "HTTP/1.1 200 OK");
        assert_eq!(body, "console.log('hi');");

        let (_, body) = get(server.addr, "/no/such/page").await;
        assert_eq!(body, "<p>index</p>");

        let (status, body) = get(server.addr, "/health").await;
        assert_eq!(status, "HTTP/1.1 200 OK");
        assert!(body.contains("\"status\":\"healthy\""));

        server.stop().await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_shutdown_answers_parked_request() {
        let server = Server::start(AssetsConfig::default()).await;

        let addr = server.addr;
        let parked = tokio::spawn(async move { get(addr, "/cpu-intensive?size=4000").await });
        wait_for_active(server.jobs.as_ref(), 1).await;

        server.stop().await;

        let (_, body) = parked.await.unwrap();
        assert_eq!(body, "Request was cancelled due to large number\n");
    }
}
