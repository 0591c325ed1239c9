use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::{Value, json};
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::Once;
    use std::sync::atomic::{AtomicI32, Ordering};

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

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("show_ledger_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/state")).send().await {
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
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_show_ledger"))
        .env("PORT", port.to_string())
        .env("LEDGER_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
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

async fn create_event(client: &Client, base: &str, body: Value) -> Value {
    let created: Value = client
        .post(format!("{base}/api/events"))
        .json(&body)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(created["id"].is_string());
    created
}

async fn put_event(client: &Client, base: &str, event: &Value) -> Value {
    let id = event["id"].as_str().unwrap();
    client
        .put(format!("{base}/api/events/{id}"))
        .json(event)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn month_view(client: &Client, base: &str, month: &str) -> Value {
    client
        .get(format!("{base}/api/months/{month}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_month_summary_matches_the_march_scenario() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    let mut event_a = create_event(
        &client,
        base,
        json!({
            "date": "2024-03-09",
            "status": "done",
            "couvertPrice": 15,
            "bands": [{ "name": "Samba da Gente", "time": "17:00", "value": 800 }]
        }),
    )
    .await;
    event_a["couvertCount"] = json!(40);
    put_event(&client, base, &event_a).await;

    let mut event_b = create_event(
        &client,
        base,
        json!({
            "date": "2024-03-16",
            "status": "done",
            "couvertPrice": 15,
            "bands": [{ "name": "Menos é Mais Cover", "time": "20:00", "value": 1200 }]
        }),
    )
    .await;
    event_b["couvertCount"] = json!(100);
    event_b["promoPrice"] = json!(25);
    event_b["promoCount"] = json!(10);
    event_b["extraCosts"] = json!([{ "description": "extra sound", "value": 100 }]);
    put_event(&client, base, &event_b).await;

    let view = month_view(&client, base, "2024-03").await;
    let summary = &view["summary"];
    assert_eq!(summary["revenue"], json!(2350.0));
    assert_eq!(summary["cost"], json!(2100.0));
    assert_eq!(summary["profit"], json!(250.0));
    assert_eq!(summary["eventCount"], json!(2));
    assert_eq!(summary["maxAudience"], json!(110));
    assert_eq!(summary["bestEventValue"], json!(450.0));
    assert_eq!(summary["bestEventLabel"], json!("16/3"));
    assert_eq!(view["events"].as_array().unwrap().len(), 2);

    let presets: Value = client
        .get(format!("{base}/api/state"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let learned = presets["bandPresets"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == json!("Samba da Gente"))
        .expect("preset learned from the event");
    assert_eq!(learned["lastValue"], json!(800.0));
}

#[tokio::test]
async fn http_realize_resets_the_slate_but_keeps_bands() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    let mut event = create_event(
        &client,
        base,
        json!({
            "date": "2027-08-01",
            "status": "scheduled",
            "bands": [
                { "name": "Grupo Revelação Cover", "time": "17:00", "value": 1200 },
                { "name": "DJ Residente", "time": "20:00", "value": 300 }
            ]
        }),
    )
    .await;
    assert_eq!(event["status"], json!("scheduled"));

    event["couvertCount"] = json!(30);
    event["extraCosts"] = json!([{ "description": "placeholder", "value": 50 }]);
    put_event(&client, base, &event).await;

    let id = event["id"].as_str().unwrap();
    let realized: Value = client
        .post(format!("{base}/api/events/{id}/realize"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(realized["status"], json!("done"));
    assert_eq!(realized["couvertCount"], json!(0));
    assert_eq!(realized["extraCosts"], json!([]));
    let bands = realized["bands"].as_array().unwrap();
    assert_eq!(bands.len(), 2);
    assert_eq!(bands[0]["name"], json!("Grupo Revelação Cover"));
    assert_eq!(bands[0]["value"], json!(1200.0));

    let mut done = realized.clone();
    done["couvertCount"] = json!(120);
    put_event(&client, base, &done).await;

    let again: Value = client
        .post(format!("{base}/api/events/{id}/realize"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(again["couvertCount"], json!(120));
}

#[tokio::test]
async fn http_settlement_toggle_is_self_inverse() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    let before = month_view(&client, base, "2099-01").await;
    assert_eq!(before["settled"], json!(false));

    let toggled: Value = client
        .post(format!("{base}/api/months/2099-01/toggle"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(toggled["settled"], json!(true));
    assert_eq!(month_view(&client, base, "2099-01").await["settled"], json!(true));

    client
        .post(format!("{base}/api/months/2099-01/toggle"))
        .send()
        .await
        .unwrap();
    assert_eq!(month_view(&client, base, "2099-01").await["settled"], json!(false));
}

#[tokio::test]
async fn http_outstanding_subtracts_payments_from_any_date() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    let before = month_view(&client, base, "2030-01").await["outstanding"]
        .as_f64()
        .unwrap();

    let mut event = create_event(
        &client,
        base,
        json!({
            "date": "2030-01-06",
            "status": "done",
            "couvertPrice": 20,
            "bands": [{ "name": "Samba da Gente", "time": "17:00", "value": 200 }]
        }),
    )
    .await;
    event["couvertCount"] = json!(60);
    put_event(&client, base, &event).await;

    client
        .post(format!("{base}/api/expenses"))
        .json(&json!({
            "date": "2030-01-10",
            "description": "Whisky + energy drink",
            "originalValue": 200,
            "discountPercent": 15
        }))
        .send()
        .await
        .unwrap();

    // paid more than a year after the viewed month; still settles the tab
    client
        .post(format!("{base}/api/payments"))
        .json(&json!({ "date": "2031-06-01", "amount": 300, "note": "late pix" }))
        .send()
        .await
        .unwrap();

    let view = month_view(&client, base, "2030-01").await;
    assert_eq!(view["expensesTotal"], json!(170.0));
    assert!(view["payments"].as_array().unwrap().is_empty());
    let after = view["outstanding"].as_f64().unwrap();
    assert_eq!(after - before, 1000.0 - 170.0 - 300.0);
}

#[tokio::test]
async fn http_blank_dates_are_rejected_at_the_edge() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    let resp = client
        .post(format!("{base}/api/events"))
        .json(&json!({ "date": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

    let resp = client
        .post(format!("{base}/api/expenses"))
        .json(&json!({ "date": "  ", "originalValue": 10 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_reset_restores_the_starter_state() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    create_event(
        &client,
        base,
        json!({
            "date": "2040-01-05",
            "status": "done",
            "bands": [{ "name": "Roda do Zé", "time": "17:00", "value": 600 }]
        }),
    )
    .await;

    let fresh: Value = client
        .post(format!("{base}/api/reset"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fresh["events"], json!([]));
    assert_eq!(fresh["payments"], json!([]));
    assert_eq!(fresh["bandPresets"].as_array().unwrap().len(), 5);

    let view = month_view(&client, base, "2040-01").await;
    assert_eq!(view["summary"]["eventCount"], json!(0));
}

#[tokio::test]
async fn http_deletes_are_idempotent() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    let payment: Value = client
        .post(format!("{base}/api/payments"))
        .json(&json!({ "date": "2028-02-02", "amount": 50, "note": "" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = payment["id"].as_str().unwrap();

    let first = client
        .delete(format!("{base}/api/payments/{id}"))
        .send()
        .await
        .unwrap();
    assert!(first.status().is_success());

    let second = client
        .delete(format!("{base}/api/payments/{id}"))
        .send()
        .await
        .unwrap();
    assert!(second.status().is_success());
}
