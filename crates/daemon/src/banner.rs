// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable startup banner.

use std::net::{IpAddr, Ipv4Addr, UdpSocket};

/// Address of the interface that routes to the public internet.
///
/// Connecting a UDP socket sends no packets; it only selects a route.
/// Falls back to loopback when no route exists.
pub fn local_ip() -> IpAddr {
    let discover = || -> std::io::Result<IpAddr> {
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
        socket.connect((Ipv4Addr::new(8, 8, 8, 8), 80))?;
        Ok(socket.local_addr()?.ip())
    };
    discover().unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

pub fn render(port: u16, lan_ip: IpAddr, token_required: bool) -> String {
    let rule = "=".repeat(60);
    let mut lines = vec![
        rule.clone(),
        "deskrelay started".to_string(),
        format!("Open on desktop: http://127.0.0.1:{port}"),
        format!("Open on phone  : http://{lan_ip}:{port}"),
    ];
    if token_required {
        lines.push("Security enabled: phone must send REMOTE_API_TOKEN.".to_string());
    }
    lines.push("Keep this running on your desktop; phone commands execute here.".to_string());
    lines.push(rule);
    lines.join("\n")
}

#[cfg(test)]
#[path = "banner_tests.rs"]
mod tests;
