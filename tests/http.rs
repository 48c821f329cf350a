use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::io::Write;
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct Summary {
    last_timestamp: String,
    last_temperature: String,
    first_timestamp: String,
    current_humidity: String,
    readings: usize,
}

struct TestServer {
    base_url: String,
    log_path: PathBuf,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
        let _ = std::fs::remove_file(&self.log_path);
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

const SEED_LOG: &str = "2024-03-09 22:00:00, 19.0, 45.0\n\
                        2024-03-10 08:00:00, 20.0, 40.0\n\
                        2024-03-10 08:30:00, 22.0, 42.0\n\
                        2024-03-10 09:00:00, 21.0, 41.0\n";

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_log_path() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("th_dashboard_http_{}_{}.csv", std::process::id(), nanos));
    path
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/summary")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let log_path = unique_log_path();
    std::fs::write(&log_path, SEED_LOG).expect("write seed log");

    let child = Command::new(env!("CARGO_BIN_EXE_th_dashboard"))
        .arg("--file")
        .arg(&log_path)
        .args(["--ch", "false", "--port", &port.to_string()])
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer {
        base_url,
        log_path,
        child,
    }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn summary(client: &Client, server: &TestServer) -> Summary {
    let body = client
        .get(format!("{}/api/summary", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    serde_json::from_str(&body).unwrap()
}

#[tokio::test]
async fn http_index_renders_dashboard() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client.get(format!("{}/", server.base_url)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();

    assert!(body.contains("window.DASHBOARD"));
    assert!(body.contains(">N/A<"));
    assert!(body.contains("/static/dashboard.js"));
}

#[tokio::test]
async fn http_unknown_path_is_not_found() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/nothing/here", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .get(format!("{}/static/dashboard.css", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn http_each_request_reads_the_log_again() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = summary(&client, &server).await;
    assert_eq!(before.current_humidity, "N/A");
    assert_eq!(before.first_timestamp, "2024-03-09 22:00:00");

    let mut log = std::fs::OpenOptions::new()
        .append(true)
        .open(&server.log_path)
        .unwrap();
    writeln!(log, "2024-03-10 09:30:00, 23.5, 43.0").unwrap();
    drop(log);

    let after = summary(&client, &server).await;
    assert_eq!(after.last_timestamp, "2024-03-10 09:30:00");
    assert_eq!(after.last_temperature, "23.5");
    assert_eq!(after.readings, before.readings + 1);
}
