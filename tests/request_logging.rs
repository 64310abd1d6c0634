mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use elo_lists::config::Config;
use elo_lists::routes::app_router;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

/// Log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn config(log_request_bodies: bool) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        log_request_bodies,
        request_timeout_secs: 15,
        db_max_connections: 1,
    }
}

#[tokio::test]
async fn test_log_level_debug_prints_request_body_under_info_filter() {
    let config = config(true);
    let logs = CapturedLogs::default();
    let writer = logs.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let database = common::test_database().await;
    let app = app_router(
        common::create_test_state(&database),
        config.log_request_bodies,
        Duration::from_secs(config.request_timeout_secs),
    );

    let response = app
        .oneshot(
            Request::post("/lists")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("title=Logged"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let output = logs.contents();
    assert!(
        output.contains("POST /lists | Request body: title=Logged"),
        "{output}"
    );
    assert!(output.contains("DEBUG"), "{output}");
}
