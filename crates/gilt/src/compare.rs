// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Value comparison.

use crate::error::{Error, Result};
use crate::subject::{dynamic_message, Subject};
use gilt_proto::text;
use similar::TextDiff;
use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Decides whether two values are equal or equivalent.
pub trait Comparer {
    /// `Ok(())` when equal, otherwise an error describing the difference.
    fn equal<T: Subject>(&self, want: &T, got: &T) -> Result<()>;
}

impl<P: Comparer> Comparer for &P {
    fn equal<T: Subject>(&self, want: &T, got: &T) -> Result<()> {
        (**self).equal(want, got)
    }
}

type Predicate = dyn Fn(&dyn Any, &dyn Any) -> Option<bool> + Send + Sync;

#[derive(Clone)]
enum Rule {
    MessageTransform,
    Custom(Arc<Predicate>),
}

/// One comparison rule for [`Cmp`].
///
/// Rules apply to the top-level values. A rule either decides equality or
/// defers to the next one.
#[derive(Clone)]
pub struct CmpOption(Rule);

impl CmpOption {
    /// Compare values of type `T` with `f`. Other types are deferred.
    pub fn comparer<T, F>(f: F) -> Self
    where
        T: 'static,
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        CmpOption(Rule::Custom(Arc::new(move |want: &dyn Any, got: &dyn Any| {
            match (want.downcast_ref::<T>(), got.downcast_ref::<T>()) {
                (Some(want), Some(got)) => Some(f(want, got)),
                _ => None,
            }
        })))
    }

    /// Compare structured messages by their canonical field sets, so
    /// equivalent encodings of the same message compare equal.
    pub fn message_transform() -> Self {
        CmpOption(Rule::MessageTransform)
    }

    fn decide<T: Subject>(&self, want: &T, got: &T) -> Option<bool> {
        match &self.0 {
            Rule::MessageTransform => {
                let want = dynamic_message(want)?;
                let got = dynamic_message(got)?;
                Some(want == got)
            }
            Rule::Custom(f) => f(want as &dyn Any, got as &dyn Any),
        }
    }
}

impl fmt::Debug for CmpOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Rule::MessageTransform => f.write_str("MessageTransform"),
            Rule::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// The default comparer: options first, then `PartialEq`.
///
/// When either value is a structured message, [`CmpOption::message_transform`]
/// is put in front of the configured options. A panic raised while comparing
/// is returned as an error.
#[derive(Debug, Clone, Default)]
pub struct Cmp {
    pub options: Vec<CmpOption>,
}

impl Cmp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Vec<CmpOption>) -> Self {
        Self { options }
    }

    /// Append a rule.
    pub fn option(mut self, option: CmpOption) -> Self {
        self.options.push(option);
        self
    }

    fn is_equal<T: Subject>(&self, want: &T, got: &T) -> bool {
        let transform = CmpOption::message_transform();
        let messages = dynamic_message(want).is_some() || dynamic_message(got).is_some();
        let prepended = messages.then_some(&transform);

        prepended
            .into_iter()
            .chain(&self.options)
            .find_map(|option| option.decide(want, got))
            .unwrap_or_else(|| want == got)
    }
}

impl Comparer for Cmp {
    fn equal<T: Subject>(&self, want: &T, got: &T) -> Result<()> {
        // Rendering the diff runs user Debug impls too, so it stays inside the guard.
        catch_unwind(AssertUnwindSafe(|| {
            if self.is_equal(want, got) {
                return Ok(());
            }
            Err(Error::ValueDifference {
                diff: diff(want, got),
            })
        }))
        .map_err(Error::from_panic)?
    }
}

/// Unified diff of the two values' renderings.
///
/// Messages render as formatted text; everything else as pretty `Debug`.
pub fn diff<T: Subject>(want: &T, got: &T) -> String {
    let want = render(want);
    let got = render(got);
    let diff = TextDiff::from_lines(&want, &got)
        .unified_diff()
        .context_radius(3)
        .header("want", "got")
        .to_string();
    diff
}

fn render<T: Subject>(value: &T) -> String {
    let pretty = dynamic_message(value).and_then(|m| text::to_string_pretty(&m).ok());
    let mut out = pretty.unwrap_or_else(|| format!("{value:#?}"));
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
