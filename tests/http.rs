use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct Entry {
    id: u64,
    date: String,
    mood: String,
    energy: String,
    title: String,
    content: String,
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Notifications {
    email: bool,
    push: bool,
    reminders: bool,
    weekly_report: bool,
}

#[derive(Debug, Deserialize)]
struct Session {
    logged_in: bool,
}

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

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/session")).send().await {
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
    let child = Command::new(env!("CARGO_BIN_EXE_health_journal"))
        .env("PORT", port.to_string())
        .env("BIND_ADDR", "127.0.0.1")
        .env("JOURNAL_SEED_SAMPLES", "true")
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

async fn list_entries(client: &Client, base_url: &str, query: &str) -> Vec<Entry> {
    client
        .get(format!("{base_url}/api/journal"))
        .query(&[("q", query)])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_create_entry_becomes_first() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = list_entries(&client, &server.base_url, "").await;

    let response = client
        .post(format!("{}/api/journal", server.base_url))
        .json(&serde_json::json!({
            "date": "2026-02-01",
            "mood": "happy",
            "energy": "low",
            "title": "  Evening stretch  ",
            "content": "Ten minutes of mobility work.",
            "tags_input": " mobility, recovery ,  "
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Entry = response.json().await.unwrap();
    assert_eq!(created.title, "Evening stretch");
    assert_eq!(created.date, "2026-02-01");
    assert_eq!(created.mood, "happy");
    assert_eq!(created.energy, "low");
    assert_eq!(created.tags, vec!["mobility", "recovery"]);

    let after = list_entries(&client, &server.base_url, "").await;
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after[0].id, created.id);
    assert!(before.iter().all(|entry| entry.id != created.id));

    let fetched: Entry = client
        .get(format!("{}/api/journal/{}", server.base_url, created.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched.content, "Ten minutes of mobility work.");

    let missing = client
        .get(format!("{}/api/journal/999999", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_invalid_entry_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = list_entries(&client, &server.base_url, "").await;

    let response = client
        .post(format!("{}/api/journal", server.base_url))
        .json(&serde_json::json!({ "title": "   ", "content": "body" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.text().await.unwrap().contains("title must not be empty"));

    let after = list_entries(&client, &server.base_url, "").await;
    assert_eq!(after.len(), before.len());
}

#[tokio::test]
async fn http_unknown_mood_or_bad_body_is_bad_request() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = list_entries(&client, &server.base_url, "").await;

    let response = client
        .post(format!("{}/api/journal", server.base_url))
        .json(&serde_json::json!({ "mood": "angry", "title": "t", "content": "c" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.text().await.unwrap().contains("unknown mood"));

    let response = client
        .post(format!("{}/api/journal", server.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let after = list_entries(&client, &server.base_url, "").await;
    assert_eq!(after.len(), before.len());
}

#[tokio::test]
async fn http_search_matches_title_content_and_tags() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let by_tag = list_entries(&client, &server.base_url, "health").await;
    assert!(by_tag.iter().any(|entry| entry.title == "Rest day"));
    for entry in &by_tag {
        let haystack = format!("{} {} {}", entry.title, entry.content, entry.tags.join(" "));
        assert!(haystack.to_lowercase().contains("health"));
    }

    let by_title = list_entries(&client, &server.base_url, "WORKOUT").await;
    assert!(by_title.iter().any(|entry| entry.title == "Great workout session"));

    let none = list_entries(&client, &server.base_url, "zzz-no-such-text").await;
    assert!(none.is_empty());
}

#[tokio::test]
async fn http_journal_form_round_trip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/journal", server.base_url))
        .form(&[
            ("date", ""),
            ("mood", "neutral"),
            ("energy", "medium"),
            ("title", "Form posted entry"),
            ("content", "Submitted through the page form."),
            ("tags_input", "form, page"),
        ])
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    assert!(response.url().as_str().ends_with("/journal?created=true"));
    let body = response.text().await.unwrap();
    assert!(body.contains("Journal Entry Added"));
    assert!(body.contains("Form posted entry"));

    let response = client
        .post(format!("{}/journal", server.base_url))
        .form(&[("title", "No body"), ("content", "  ")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.text().await.unwrap();
    assert!(body.contains("content must not be empty"));
    assert!(body.contains(r#"value="No body""#));
}

#[tokio::test]
async fn http_cards_fragment_follows_query() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let fragment = client
        .get(format!("{}/journal/cards", server.base_url))
        .query(&[("q", "running")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(fragment.contains("New personal record!"));
    assert!(!fragment.contains("Rest day"));
    assert!(!fragment.contains("<html"));

    let empty = client
        .get(format!("{}/journal/cards", server.base_url))
        .query(&[("q", "zzz-no-such-text")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(empty.contains("No Journal Entries Found"));
}

#[tokio::test]
async fn http_notification_toggle_flips_one_flag() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let toggle = |kind: &'static str| {
        client
            .post(format!("{}/api/profile/notifications", server.base_url))
            .json(&serde_json::json!({ "kind": kind }))
            .send()
    };

    let first: Notifications = toggle("push").await.unwrap().json().await.unwrap();
    let second: Notifications = toggle("push").await.unwrap().json().await.unwrap();
    assert_ne!(first.push, second.push);
    assert_eq!(first.email, second.email);
    assert_eq!(first.reminders, second.reminders);
    assert_eq!(first.weekly_report, second.weekly_report);

    let rejected = toggle("sms").await.unwrap();
    assert!(rejected.status().is_client_error());
}

#[tokio::test]
async fn http_profile_forms_save_and_redirect() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let response = client
        .post(format!("{}/profile/personal", server.base_url))
        .form(&[
            ("name", "Sam Rivera"),
            ("email", "sam@example.com"),
            ("phone", "555-0100"),
            ("date_of_birth", "1985-02-03"),
            ("gender", "prefer-not-to-say"),
            ("height_cm", "168.5"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers()["location"].to_str().unwrap().to_string();
    assert_eq!(location, "/profile?tab=personal&saved=profile");
    let page = client
        .get(format!("{}{location}", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("Profile Updated"));
    assert!(page.contains(r#"value="Sam Rivera""#));

    let response = client
        .post(format!("{}/profile/goals", server.base_url))
        .form(&[
            ("weight_kg", "80"),
            ("goal_weight_kg", "75.5"),
            ("goal_steps", "12000"),
            ("goal_sleep_hours", "7.5"),
            ("goal_water_liters", "3"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers()["location"].to_str().unwrap().to_string();
    assert_eq!(location, "/profile?tab=goals&saved=goals");
    let page = client
        .get(format!("{}{location}", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("Goals Updated"));

    let profile: serde_json::Value = client
        .get(format!("{}/api/profile", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(profile["personal"]["name"], "Sam Rivera");
    assert_eq!(profile["personal"]["gender"], "prefer-not-to-say");
    assert_eq!(profile["personal"]["date_of_birth"], "1985-02-03");
    assert_eq!(profile["goals"]["goal_steps"], 12000);
    assert_eq!(profile["goals"]["goal_water_liters"], 3.0);
}

#[tokio::test]
async fn http_session_login_and_logout() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let session = |client: &Client| client.get(format!("{}/api/session", server.base_url)).send();

    let page = client
        .post(format!("{}/session/login", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("My Account"));
    let state: Session = session(&client).await.unwrap().json().await.unwrap();
    assert!(state.logged_in);

    client
        .post(format!("{}/session/logout", server.base_url))
        .send()
        .await
        .unwrap();
    let state: Session = session(&client).await.unwrap().json().await.unwrap();
    assert!(!state.logged_in);
}

#[tokio::test]
async fn http_pages_render_and_unknown_paths_404() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    for (path, marker) in [
        ("/", "Track Your Health"),
        ("/dashboard?range=month", "Today's Summary"),
        ("/profile?tab=notifications", "Notification Preferences"),
        ("/journal?new=true", "New Journal Entry"),
    ] {
        let response = client
            .get(format!("{}{path}", server.base_url))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success(), "{path}");
        assert!(response.text().await.unwrap().contains(marker), "{path}");
    }

    let missing = client
        .get(format!("{}/no/such/page", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert!(missing.text().await.unwrap().contains("Page not found"));
}

#[tokio::test]
async fn http_dashboard_api_reports_week() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let dashboard: serde_json::Value = client
        .get(format!("{}/api/dashboard", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(dashboard["range"], "week");
    assert_eq!(dashboard["days"].as_array().unwrap().len(), 7);
    assert!(dashboard["summary"]["hydration_percent"].as_u64().is_some());
}
