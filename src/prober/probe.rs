use futures_util::future::join_all;
use tokio::net::TcpStream;
use tokio::time::timeout;

use super::types::{HealthReport, HealthStatus, ProbeOptions, ServiceDescriptor, ServiceStatus};

/// Check whether something accepts TCP connections on `host:port`.
///
/// Refused, unreachable and timed out connections are all `Down`. The
/// connection is closed right away without sending anything.
pub async fn probe_port(host: &str, port: u16, options: &ProbeOptions) -> HealthStatus {
    match timeout(options.timeout, TcpStream::connect((host, port))).await {
        Ok(Ok(stream)) => {
            drop(stream);
            HealthStatus::Running
        }
        Ok(Err(err)) => {
            tracing::debug!(host, port, error = %err, "Connect failed");
            HealthStatus::Down
        }
        Err(_) => {
            tracing::debug!(host, port, timeout_ms = options.timeout.as_millis() as u64, "Connect timed out");
            HealthStatus::Down
        }
    }
}

/// Probe every service concurrently.
///
/// Results come back in the order of `services`.
pub async fn check_health(services: &[ServiceDescriptor], options: &ProbeOptions) -> Vec<ServiceStatus> {
    let probes = services.iter().map(|descriptor| async move {
        let status = probe_port(&options.host, descriptor.port, options).await;
        ServiceStatus {
            descriptor: *descriptor,
            status,
        }
    });

    join_all(probes).await
}

/// Probe every service and stamp the result with the current local time.
pub async fn health_report(services: &[ServiceDescriptor], options: &ProbeOptions) -> HealthReport {
    let services = check_health(services, options).await;
    let running = services.iter().filter(|s| s.healthy()).count();
    tracing::info!(running, total = services.len(), "Checked service health");

    HealthReport {
        timestamp: chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, false),
        services,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::net::TcpListener;

    fn local_options() -> ProbeOptions {
        ProbeOptions {
            host: "127.0.0.1".to_string(),
            timeout: Duration::from_secs(1),
        }
    }

    async fn closed_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    }

    fn descriptor(key: &'static str, port: u16) -> ServiceDescriptor {
        ServiceDescriptor {
            key,
            name: key,
            port,
            description: "test service",
            url: "http://localhost",
        }
    }

    #[tokio::test]
    async fn test_probe_listening_port_is_running() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        assert_eq!(probe_port("127.0.0.1", port, &local_options()).await, HealthStatus::Running);
    }

    #[tokio::test]
    async fn test_probe_closed_port_is_down() {
        let port = closed_port().await;

        assert_eq!(probe_port("127.0.0.1", port, &local_options()).await, HealthStatus::Down);
    }

    #[tokio::test]
    async fn test_probe_unresolvable_host_is_down() {
        let status = probe_port("host.invalid", 80, &local_options()).await;
        assert_eq!(status, HealthStatus::Down);
    }

    #[tokio::test]
    async fn test_check_health_preserves_order() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let open = listener.local_addr().unwrap().port();
        let closed = closed_port().await;

        let services = [
            descriptor("first", closed),
            descriptor("second", open),
            descriptor("third", closed),
        ];
        let results = check_health(&services, &local_options()).await;

        let keys: Vec<&str> = results.iter().map(|s| s.key()).collect();
        assert_eq!(keys, ["first", "second", "third"]);

        let healthy: Vec<bool> = results.iter().map(|s| s.healthy()).collect();
        assert_eq!(healthy, [false, true, false]);
    }

    #[tokio::test]
    async fn test_health_report_has_timestamp() {
        let report = health_report(&[], &local_options()).await;

        assert!(report.services.is_empty());
        assert!(chrono::DateTime::parse_from_rfc3339(&report.timestamp).is_ok());
    }
}
