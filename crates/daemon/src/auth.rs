// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared-secret authorization for remote requests.

/// Header carrying the shared secret.
pub const TOKEN_HEADER: &str = "x-remote-token";

/// Accepts a request when no secret is configured, or when either the
/// header or the body token equals the secret after trimming.
#[derive(Debug, Clone, Default)]
pub struct TokenAuth {
    secret: Option<String>,
}

impl TokenAuth {
    pub fn new(secret: Option<&str>) -> Self {
        let secret = secret
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Self { secret }
    }

    /// Auth disabled
    pub fn open() -> Self {
        Self::default()
    }

    pub fn is_required(&self) -> bool {
        self.secret.is_some()
    }

    pub fn authorize(&self, header: Option<&str>, body: Option<&str>) -> bool {
        let Some(secret) = &self.secret else {
            return true;
        };
        // Evaluate both so timing does not reveal which one matched
        let header_ok = header.is_some_and(|c| constant_time_eq(c.trim(), secret));
        let body_ok = body.is_some_and(|c| constant_time_eq(c.trim(), secret));
        header_ok | body_ok
    }
}

/// Comparison time depends only on the lengths.
fn constant_time_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
