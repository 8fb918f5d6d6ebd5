//! Snippet rendering with deferred, coalesced updates.
//!
//! A [`SnippetRenderer`] owns one [`OutputRegion`] between `mount` and
//! `unmount`. `update` only records the newest input; `flush` is the deferred
//! tick that highlights and swaps the region content. Several updates before
//! a flush collapse into the last one.
//!
//! ```text
//! Unmounted --mount--> Mounted --(update | flush)*--> Mounted --unmount--> Released
//! ```

mod region;

pub use region::{MemoryRegion, OutputRegion};

use serde::Serialize;

use crate::catalog::{ExampleSet, Snippet};
use crate::highlight::{Highlighter, RenderOutput};

/// Misuse of the renderer lifecycle by the calling view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    #[error("renderer is not mounted")]
    NotMounted,
    #[error("renderer is already mounted")]
    AlreadyMounted,
    #[error("renderer was used after its region was released")]
    UseAfterRelease,
}

/// The three inputs that drive a render, treated as one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetInput {
    pub code: String,
    pub language: String,
    pub highlight: Option<String>,
}

impl SnippetInput {
    pub fn new(
        code: impl Into<String>,
        language: impl Into<String>,
        highlight: Option<impl Into<String>>,
    ) -> Self {
        Self {
            code: code.into(),
            language: language.into(),
            highlight: highlight.map(Into::into),
        }
    }

    pub fn from_snippet(snippet: &Snippet) -> Self {
        Self {
            code: snippet.code.clone(),
            language: snippet.language().to_string(),
            highlight: snippet.highlight.clone(),
        }
    }
}

#[derive(Debug)]
struct Pending {
    version: u64,
    input: SnippetInput,
}

#[derive(Debug)]
struct Mounted<R> {
    region: R,
    pending: Option<Pending>,
    applied: Option<SnippetInput>,
}

#[derive(Debug)]
enum State<R> {
    Unmounted,
    Mounted(Mounted<R>),
    Released,
}

/// Binds one snippet to one output region.
#[derive(Debug)]
pub struct SnippetRenderer<'h, R> {
    highlighter: &'h Highlighter,
    state: State<R>,
    version: u64,
}

impl<'h, R: OutputRegion> SnippetRenderer<'h, R> {
    pub const fn new(highlighter: &'h Highlighter) -> Self {
        Self {
            highlighter,
            state: State::Unmounted,
            version: 0,
        }
    }

    /// Take exclusive ownership of `region` until [`Self::unmount`].
    ///
    /// # Errors
    /// Fails if already mounted or already released.
    pub fn mount(&mut self, region: R) -> Result<(), LifecycleError> {
        match self.state {
            State::Unmounted => {
                self.state = State::Mounted(Mounted {
                    region,
                    pending: None,
                    applied: None,
                });
                Ok(())
            }
            State::Mounted(_) => Err(LifecycleError::AlreadyMounted),
            State::Released => Err(LifecycleError::UseAfterRelease),
        }
    }

    /// Record `input` as the next content. Replaces any input still waiting
    /// for a flush. Returns the version assigned to `input`.
    ///
    /// # Errors
    /// Fails if the renderer is not mounted.
    pub fn update(&mut self, input: SnippetInput) -> Result<u64, LifecycleError> {
        let mounted = self.mounted_mut()?;
        let superseded = mounted.pending.take().map(|pending| pending.version);
        self.version += 1;
        let version = self.version;
        if let Some(superseded) = superseded {
            tracing::trace!(superseded, version, "coalescing pending update");
            crate::perf::log_event(
                "renderer.coalesce",
                format!("dropped={superseded} kept={version}"),
            );
        }
        self.mounted_mut()?.pending = Some(Pending { version, input });
        Ok(version)
    }

    /// Apply the newest pending input, if any. Returns true if the region
    /// content was replaced.
    ///
    /// Input identical to what is already shown is not highlighted again.
    ///
    /// # Errors
    /// Fails if the renderer is not mounted.
    pub fn flush(&mut self) -> Result<bool, LifecycleError> {
        let highlighter = self.highlighter;
        let mounted = self.mounted_mut()?;
        let Some(Pending { version, input }) = mounted.pending.take() else {
            return Ok(false);
        };
        if mounted.applied.as_ref() == Some(&input) {
            tracing::trace!(version, "input unchanged, keeping region content");
            return Ok(false);
        }

        let output = {
            let _scope = crate::perf::scope("renderer.highlight");
            highlighter.highlight(&input.code, &input.language, input.highlight.as_deref())
        };
        crate::perf::log_event(
            "renderer.apply",
            format!(
                "version={version} language={} lines={}",
                output.applied_language, output.line_count
            ),
        );
        mounted.region.replace(output);
        mounted.applied = Some(input);
        Ok(true)
    }

    /// `update` followed by `flush`, for callers without a deferred tick.
    ///
    /// # Errors
    /// Fails if the renderer is not mounted.
    pub fn render(&mut self, input: SnippetInput) -> Result<bool, LifecycleError> {
        self.update(input)?;
        self.flush()
    }

    /// Release the region. Pending input is discarded; the renderer cannot
    /// be used again.
    ///
    /// # Errors
    /// Fails if the renderer was never mounted or is already released.
    pub fn unmount(&mut self) -> Result<R, LifecycleError> {
        match std::mem::replace(&mut self.state, State::Released) {
            State::Mounted(mounted) => {
                if let Some(pending) = mounted.pending {
                    crate::perf::log_event(
                        "renderer.cancel",
                        format!("dropped={}", pending.version),
                    );
                }
                Ok(mounted.region)
            }
            State::Unmounted => {
                self.state = State::Unmounted;
                Err(LifecycleError::NotMounted)
            }
            State::Released => Err(LifecycleError::UseAfterRelease),
        }
    }

    pub const fn is_mounted(&self) -> bool {
        matches!(self.state, State::Mounted(_))
    }

    pub const fn has_pending(&self) -> bool {
        matches!(
            self.state,
            State::Mounted(Mounted {
                pending: Some(_),
                ..
            })
        )
    }

    pub const fn region(&self) -> Option<&R> {
        match &self.state {
            State::Mounted(mounted) => Some(&mounted.region),
            State::Unmounted | State::Released => None,
        }
    }

    fn mounted_mut(&mut self) -> Result<&mut Mounted<R>, LifecycleError> {
        match &mut self.state {
            State::Mounted(mounted) => Ok(mounted),
            State::Unmounted => Err(LifecycleError::NotMounted),
            State::Released => Err(LifecycleError::UseAfterRelease),
        }
    }
}

/// One settled snippet of an example page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSnippet<'a> {
    pub snippet: &'a Snippet,
    pub output: RenderOutput,
}

/// Render every snippet of `example` in display order.
///
/// # Errors
/// Only fails on an internal lifecycle bug.
pub fn render_example<'a>(
    highlighter: &Highlighter,
    example: &'a ExampleSet,
) -> Result<Vec<RenderedSnippet<'a>>, LifecycleError> {
    example
        .code_snippets
        .iter()
        .map(|snippet| -> Result<RenderedSnippet<'a>, LifecycleError> {
            let mut renderer = SnippetRenderer::new(highlighter);
            renderer.mount(MemoryRegion::new())?;
            renderer.render(SnippetInput::from_snippet(snippet))?;
            let region = renderer.unmount()?;
            Ok(RenderedSnippet {
                snippet,
                output: region.into_current(),
            })
        })
        .collect()
}
