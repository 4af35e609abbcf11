// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Synchronous yes/no gate in front of destructive builder operations.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Answers yes to everything; the default for headless use.
pub struct AcceptAll;

impl Confirm for AcceptAll {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}
