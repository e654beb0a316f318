// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only). HTTP/1.0 + Connection: close means the
// server ends the body with EOF — no chunked transfer to deal with.

use std::{io::{Read, Write}, net::TcpStream, time::Duration};
use crate::error::{Error, Result};
use crate::params::HOST;

/// Fetch `path` from the archive host and return the response body.
/// Any transport failure or non-2xx status is a `NetworkFetch` error;
/// there is no retry — one blocking request per run.
pub fn http_get(path: &str) -> Result<String> {
    let mut s = TcpStream::connect((HOST, 80)).map_err(|e| fetch_err(path, &e))?;
    s.set_read_timeout(Some(Duration::from_secs(15))).map_err(|e| fetch_err(path, &e))?;
    s.set_write_timeout(Some(Duration::from_secs(15))).map_err(|e| fetch_err(path, &e))?;

    // The site localizes contest names; ask for the Japanese page like the
    // rating-history front end expects.
    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: ahc-history/0.1\r\n\
         Accept-Language: ja,en-US;q=0.9,en;q=0.8\r\nConnection: close\r\n\r\n",
        path, HOST
    );
    s.write_all(req.as_bytes()).map_err(|e| fetch_err(path, &e))?;
    s.flush().map_err(|e| fetch_err(path, &e))?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf).map_err(|e| fetch_err(path, &e))?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !is_success(status) {
        loge!("archive fetch failed: {} {}{}", status, HOST, path);
        return Err(Error::NetworkFetch(format!("{} {}{}", status, HOST, path)));
    }
    let body_idx = resp
        .find("\r\n\r\n")
        .ok_or_else(|| Error::NetworkFetch(format!("malformed HTTP response from {}", HOST)))?
        + 4;
    Ok(resp[body_idx..].to_string())
}

// "HTTP/1.0 200 OK" → any 2xx counts
fn is_success(status_line: &str) -> bool {
    status_line
        .split_whitespace()
        .nth(1)
        .map(|code| code.starts_with('2'))
        .unwrap_or(false)
}

fn fetch_err(path: &str, e: &dyn std::fmt::Display) -> Error {
    Error::NetworkFetch(format!("{}{}: {}", HOST, path, e))
}
