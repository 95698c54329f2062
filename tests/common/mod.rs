// tests/common/mod.rs
//
// Canned-response HTTP server on 127.0.0.1 and recording presentation doubles.
#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

use contact_scrape::contact::Record;
use contact_scrape::present::{ContactView, Notice, NoticeKind, Notifier};

fn read_request(stream: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
}

/// Serve one request with `status` and `body`, then close. Returns the URL.
pub fn serve_once(status: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let resp = format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            read_request(&mut stream);
            let _ = stream.write_all(resp.as_bytes());
            let _ = stream.flush();
        }
    });
    format!("http://{addr}/staff")
}

/// Accept the connection and never answer for `hold`.
pub fn serve_silent(hold: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            read_request(&mut stream);
            thread::sleep(hold);
        }
    });
    format!("http://{addr}/slow")
}

/// A local URL nothing listens on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/gone")
}

pub fn teacher_block(name: &str, title: &str, email: &str) -> String {
    format!(
        r#"<div class="teacher">
             <p class="name">{name}</p>
             <p class="title">{title}</p>
             <a href="mailto:{email}">{email}</a>
           </div>"#
    )
}

pub fn page(inner: &str) -> String {
    format!("<!DOCTYPE html><html><head><title>Staff</title></head><body>{inner}</body></html>")
}

#[derive(Default)]
pub struct RecordingView {
    pub rows: Vec<Record>,
    pub clears: usize,
}

impl ContactView for RecordingView {
    fn clear(&mut self) {
        self.clears += 1;
        self.rows.clear();
    }
    fn append_row(&mut self, record: &Record) {
        self.rows.push(record.clone());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, kind: NoticeKind, title: &str, message: &str) {
        self.notices.push(Notice::new(kind, title, message));
    }
}

impl RecordingNotifier {
    pub fn kinds(&self) -> Vec<NoticeKind> {
        self.notices.iter().map(|n| n.kind).collect()
    }
}
