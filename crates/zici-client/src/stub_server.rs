//! Throwaway HTTP/1.1 server for exercising the client against real sockets

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use url::Url;

#[derive(Clone, Copy)]
pub enum Reply {
    Respond(u16, &'static str),
    /// Accept the request and never answer
    Hang,
}

pub struct StubServer {
    url: String,
    searches: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// Serve `routes`, keyed by the decoded `search` query value
    pub async fn start(routes: Vec<(&'static str, Reply)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let routes = Arc::new(routes);
        let searches = Arc::new(Mutex::new(Vec::new()));

        let seen = searches.clone();
        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                tokio::spawn(handle(socket, routes.clone(), seen.clone()));
            }
        });

        Self {
            url: format!("http://{addr}/api/dict/spelltoword-notone"),
            searches,
        }
    }

    /// URL of a port nothing listens on
    pub async fn closed_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/api")
    }

    pub fn url(&self) -> String {
        self.url.clone()
    }

    pub fn searches(&self) -> Vec<String> {
        self.searches.lock().unwrap().clone()
    }
}

async fn handle(
    mut socket: TcpStream,
    routes: Arc<Vec<(&'static str, Reply)>>,
    searches: Arc<Mutex<Vec<String>>>,
) {
    let mut buf = vec![0u8; 8192];
    let mut read = 0;
    loop {
        let n = match socket.read(&mut buf[read..]).await {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        read += n;
        if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") || read == buf.len() {
            break;
        }
    }

    let request = String::from_utf8_lossy(&buf[..read]).to_string();
    let target = request.split_whitespace().nth(1).unwrap_or("/");
    let search = search_param(target);
    searches.lock().unwrap().push(search.clone());

    let reply = routes
        .iter()
        .find(|(key, _)| *key == search)
        .map(|(_, reply)| *reply)
        .unwrap_or(Reply::Respond(404, ""));

    match reply {
        Reply::Respond(status, body) => {
            let response = format!(
                "HTTP/1.1 {status} Stub\r\nContent-Type: application/json; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
        Reply::Hang => {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
    }
}

/// Decoded `search` query value of a request target, empty when absent
fn search_param(target: &str) -> String {
    Url::parse(&format!("http://stub{target}"))
        .ok()
        .and_then(|url| {
            url.query_pairs()
                .find(|(key, _)| key == "search")
                .map(|(_, value)| value.into_owned())
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_param_is_decoded() {
        assert_eq!(search_param("/api?search=l%C3%BC"), "lü");
        assert_eq!(search_param("/api?x=1&search=a+b"), "a b");
    }

    #[test]
    fn test_search_param_missing() {
        assert_eq!(search_param("/api"), "");
        assert_eq!(search_param("/api?q=ba"), "");
    }
}
