//! Scripted stand-in for the remote time API.
//!
//! Each request consumes the next scripted reply; once the script runs out
//! the last reply repeats.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use parking_lot::Mutex;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// One scripted response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// 200 with a worldtimeapi-shaped body
    Time {
        datetime: String,
        day_of_week: i64,
    },
    /// Bare status code, empty body
    Status(u16),
    /// 200 with a body that is not the expected JSON
    Garbage(String),
}

impl Reply {
    pub fn time(datetime: &str, day_of_week: i64) -> Self {
        Reply::Time {
            datetime: datetime.to_string(),
            day_of_week,
        }
    }

    fn render(self) -> Response {
        match self {
            Reply::Time {
                datetime,
                day_of_week,
            } => Json(serde_json::json!({
                "abbreviation": "PDT",
                "datetime": datetime,
                "day_of_week": day_of_week,
                "day_of_year": 227,
                "timezone": "America/Tijuana",
                "week_number": 33
            }))
            .into_response(),
            Reply::Status(code) => StatusCode::from_u16(code)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
                .into_response(),
            Reply::Garbage(body) => (StatusCode::OK, body).into_response(),
        }
    }
}

struct Script {
    replies: Mutex<Vec<Reply>>,
    hits: AtomicUsize,
}

async fn serve_time(State(script): State<Arc<Script>>) -> Response {
    let index = script.hits.fetch_add(1, Ordering::SeqCst);
    let replies = script.replies.lock();
    let reply = replies
        .get(index)
        .or_else(|| replies.last())
        .cloned()
        .unwrap_or(Reply::Status(404));
    reply.render()
}

/// Running fake endpoint on an ephemeral localhost port.
pub struct FakeTimeApi {
    addr: SocketAddr,
    script: Arc<Script>,
    server: JoinHandle<()>,
}

impl FakeTimeApi {
    pub async fn spawn(replies: Vec<Reply>) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let script = Arc::new(Script {
            replies: Mutex::new(replies),
            hits: AtomicUsize::new(0),
        });

        let app = Router::new()
            .fallback(serve_time)
            .with_state(Arc::clone(&script));
        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            addr,
            script,
            server,
        })
    }

    /// URL in the same shape as the real endpoint.
    pub fn url(&self) -> String {
        format!("http://{}/api/timezone/America/Tijuana", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.script.hits.load(Ordering::SeqCst)
    }
}

impl Drop for FakeTimeApi {
    fn drop(&mut self) {
        self.server.abort();
    }
}
