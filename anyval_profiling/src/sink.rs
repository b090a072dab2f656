// Copyright 2026 the Anyval Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anyval::diag::{Diagnostic, DiagnosticMask, DiagnosticSink};
use std::format;
use std::string::String;

/// A `DiagnosticSink` that emits Tracy messages via `tracy-client`.
///
/// Diagnostics reach Tracy only while a client is running. With `tracy-client`'s default
/// features the client starts with the process, so delivery is the common case; builds using
/// `manual-lifetime` drop diagnostics until the client is started.
#[derive(Debug, Default)]
pub struct TracyDiagnosticSink {
    mask: Option<DiagnosticMask>,
    emitted: u64,
}

impl TracyDiagnosticSink {
    /// Create a sink that accepts every diagnostic.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink that only accepts diagnostics in `mask`.
    #[must_use]
    pub fn with_mask(mask: DiagnosticMask) -> Self {
        Self {
            mask: Some(mask),
            emitted: 0,
        }
    }

    /// Number of diagnostics delivered to a running client.
    #[must_use]
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    fn message(diagnostic: &Diagnostic) -> String {
        format!("anyval: {diagnostic}")
    }
}

impl DiagnosticSink for TracyDiagnosticSink {
    fn mask(&self) -> DiagnosticMask {
        self.mask.unwrap_or(DiagnosticMask::ALL)
    }

    fn emit(&mut self, diagnostic: &Diagnostic) {
        let Some(client) = tracy_client::Client::running() else {
            return;
        };
        client.message(&Self::message(diagnostic), 0);
        self.emitted += 1;
    }
}
