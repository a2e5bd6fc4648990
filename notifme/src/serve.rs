//! Local preview server.
//!
//! Serves one pre-rendered document from memory. One request per
//! connection, `Connection: close`, GET and HEAD only.

use std::io::{self, BufRead, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::process::Command;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::CliError;

/// A response ready to be written to the socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: &'static str,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    pub include_body: bool,
}

impl Response {
    fn text(status: &'static str, body: &[u8], include_body: bool) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.to_vec(),
            include_body,
        }
    }

    fn write_to(&self, stream: &mut impl Write) -> io::Result<()> {
        let header = format!(
            "{}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            self.status,
            self.content_type,
            self.body.len()
        );
        stream.write_all(header.as_bytes())?;
        if self.include_body {
            stream.write_all(&self.body)?;
        }
        stream.flush()
    }
}

/// Route a raw request line (`GET / HTTP/1.1`) to a response.
pub fn respond(request_line: &str, page: &str) -> Response {
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("/");
    let is_head = method.eq_ignore_ascii_case("head");

    if !(method.eq_ignore_ascii_case("get") || is_head) {
        return Response::text("HTTP/1.1 405 Method Not Allowed", b"method not allowed", true);
    }

    let (path_only, _) = target.split_once('?').unwrap_or((target, ""));
    match path_only {
        "/" | "/index.html" => Response {
            status: "HTTP/1.1 200 OK",
            content_type: "text/html; charset=utf-8",
            body: page.as_bytes().to_vec(),
            include_body: !is_head,
        },
        _ => Response::text("HTTP/1.1 404 Not Found", b"not found", !is_head),
    }
}

/// Idle clients (browser preconnects) are dropped after this long.
pub const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Upper bound on request line plus headers.
const MAX_REQUEST_BYTES: u64 = 8 * 1024;

/// Bind `127.0.0.1:port` (0 = ephemeral) and answer requests on a
/// background thread. With `once`, the thread exits after the first request.
pub fn start(
    port: u16,
    page: Arc<str>,
    once: bool,
) -> Result<(SocketAddr, thread::JoinHandle<()>), CliError> {
    let bind_addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&bind_addr).map_err(|source| CliError::Bind {
        addr: bind_addr.clone(),
        source,
    })?;
    let addr = listener.local_addr().map_err(|source| CliError::Bind {
        addr: bind_addr,
        source,
    })?;

    let handle = thread::spawn(move || accept_loop(listener, page, once, READ_TIMEOUT));
    Ok((addr, handle))
}

/// Each connection gets its own thread so one slow client cannot stall the
/// rest. In `once` mode the single connection is handled inline; the read
/// timeout bounds how long an idle client can hold it.
fn accept_loop(listener: TcpListener, page: Arc<str>, once: bool, timeout: Duration) {
    for stream in listener.incoming() {
        let mut stream = match stream {
            Ok(stream) => stream,
            Err(e) => {
                warn!("accept failed: {}", e);
                continue;
            }
        };
        if once {
            handle_connection(&mut stream, &page, timeout);
            break;
        }
        let page = Arc::clone(&page);
        thread::spawn(move || handle_connection(&mut stream, &page, timeout));
    }
}

fn handle_connection(stream: &mut TcpStream, page: &str, timeout: Duration) {
    if let Err(e) = stream.set_read_timeout(Some(timeout)) {
        warn!("failed to set read timeout: {}", e);
        return;
    }

    let mut line = String::new();
    let mut reader = io::BufReader::new((&*stream).take(MAX_REQUEST_BYTES));
    match reader.read_line(&mut line) {
        Ok(0) => return,
        Ok(_) => {}
        Err(e) => {
            debug!("dropping connection: {}", e);
            return;
        }
    }

    let response = if line.ends_with('\n') {
        // Drain headers so closing the socket doesn't reset unread input.
        let mut header = String::new();
        while matches!(reader.read_line(&mut header), Ok(n) if n > 0)
            && !header.trim().is_empty()
        {
            header.clear();
        }
        respond(line.trim(), page)
    } else {
        Response::text("HTTP/1.1 400 Bad Request", b"request line too long", true)
    };

    debug!(request = line.trim(), status = response.status, "preview request");
    if let Err(e) = response.write_to(stream) {
        warn!("failed to write response: {}", e);
    }
}

/// Best-effort launch of the system browser.
pub fn open_in_browser(url: &str) {
    if url.bytes().any(|b| b < 0x20) {
        warn!("Skipping auto-open for suspicious url: {}", url);
        return;
    }

    #[cfg(target_os = "macos")]
    let try_cmds = vec![("open", vec![url])];
    #[cfg(target_os = "windows")]
    let try_cmds = vec![("cmd", vec!["/C", "start", url])];
    #[cfg(all(not(target_os = "macos"), not(target_os = "windows")))]
    let try_cmds = vec![("xdg-open", vec![url])];

    for (program, args) in try_cmds {
        if Command::new(program).args(args).spawn().is_ok() {
            return;
        }
    }
    warn!("Could not open preview automatically: {}", url);
}

/// `http://` URL for a bound address.
pub fn base_url(addr: &SocketAddr) -> String {
    format!("http://{addr}")
}
