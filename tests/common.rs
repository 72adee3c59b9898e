use std::net::SocketAddr;
use labelscope::structs::connection::Connection;
use serde_json::{json, Value};
use warp::Filter;

/// Serves `filter` on an ephemeral local port for the rest of the test.
pub fn spawn<F>(filter: F) -> SocketAddr
where
    F: Filter<Error = warp::Rejection> + Clone + Send + Sync + 'static,
    F::Extract: warp::Reply,
{
    let (address, server) = warp::serve(filter).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    address
}

/// An address nothing listens on.
pub fn closed_address() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

pub fn connection(proxy: SocketAddr, host: &str) -> Connection {
    Connection {
        proxy_url: format!("http://{}", proxy),
        host: host.to_string(),
        email: "a".to_string(),
        token: "b".to_string(),
        project: "PROJ".to_string(),
    }
}

/// Search page of `count` issues starting at `start`, labelled round-robin.
pub fn page(start: usize, count: usize, next: Option<&str>) -> Value {
    let issues: Vec<Value> = (start..start + count)
        .map(|n| {
            let kind = if n % 2 == 0 { "type-bug" } else { "type-ny-funksjonalitet" };
            json!({
                "key": format!("PROJ-{}", n),
                "fields": {
                    "summary": format!("Issue {}", n),
                    "labels": [kind, "tema-backend"],
                    "assignee": { "displayName": "Kari Hansen", "name": "kari" }
                }
            })
        })
        .collect();

    match next {
        Some(token) => json!({ "issues": issues, "nextPageToken": token }),
        None => json!({ "issues": issues, "isLast": true }),
    }
}
