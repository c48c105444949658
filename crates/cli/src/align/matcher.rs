// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The match predicate the alignment engine is generic over.

/// Decides whether a suppression accepts a line of analysis output.
///
/// The engine treats implementations as opaque. It does require that
/// `matches` is deterministic: the table builder and the backtrace both
/// evaluate the predicate and must see the same answer.
pub trait Matcher {
    fn matches(&self, text: &str) -> bool;
}

impl<F> Matcher for F
where
    F: Fn(&str) -> bool,
{
    fn matches(&self, text: &str) -> bool {
        self(text)
    }
}
