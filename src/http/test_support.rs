use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

type Captured = Arc<Mutex<Vec<String>>>;

pub(crate) struct TestServer {
    url: String,
    captured: Captured,
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl TestServer {
    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    /// Raw requests received so far.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.captured
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) enum Reply {
    Respond {
        status_line: &'static str,
        body: &'static str,
    },
    /// Accept and read, never answer.
    Stall,
}

pub(crate) fn spawn_http_server(reply: Reply) -> Result<TestServer, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let server_captured = Arc::clone(&captured);

    let handle = thread::spawn(move || {
        let mut stalled = Vec::new();
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => match reply {
                    Reply::Respond { status_line, body } => {
                        let captured = Arc::clone(&server_captured);
                        thread::spawn(move || handle_client(stream, status_line, body, &captured));
                    }
                    Reply::Stall => stalled.push(stream),
                },
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
        drop(stalled);
    });

    Ok(TestServer {
        url: format!("http://{}", addr),
        captured,
        shutdown: shutdown_tx,
        thread: Some(handle),
    })
}

/// URL of a port that nothing listens on.
pub(crate) fn closed_port_url() -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind probe listener failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("probe addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}", addr))
}

fn handle_client(
    mut stream: TcpStream,
    status_line: &'static str,
    body: &'static str,
    captured: &Captured,
) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let Ok(request) = read_request(&mut stream) else {
        return;
    };
    if let Ok(mut requests) = captured.lock() {
        requests.push(request);
    }
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

fn read_request(stream: &mut TcpStream) -> std::io::Result<String> {
    stream.set_read_timeout(Some(Duration::from_secs(5)))?;
    let mut data = Vec::new();
    let mut buffer = [0u8; 1024];
    loop {
        let read = stream.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        data.extend_from_slice(buffer.get(..read).unwrap_or_default());
        let text = String::from_utf8_lossy(&data);
        if let Some(head_end) = text.find("\r\n\r\n") {
            let expected = content_length(text.get(..head_end).unwrap_or_default());
            if data.len() >= head_end.saturating_add(4).saturating_add(expected) {
                break;
            }
        }
    }
    Ok(String::from_utf8_lossy(&data).into_owned())
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}
