//! Copy-page button
//!
//! One delegated click listener watches the whole document. A click on (or
//! inside) the copy button fetches the page source named by the button's
//! `data-url`, writes it to the clipboard, and flashes a checkmark on the
//! button icon. If the fetch fails the icon flashes an "x" instead. Either way
//! the icon goes back to what it showed before the click once the feedback
//! delay has passed.
//!
//! The browser pieces (DOM, fetch, clipboard, timers) sit behind the traits
//! below so the click cycle can be driven on the host.
//!
//! Cycles are not serialized. Each click snapshots whatever the icon shows at
//! that moment and schedules its own revert, so a click landing during another
//! cycle's feedback window snapshots the glyph, and the last revert to fire
//! decides what the icon rests on.

use async_trait::async_trait;

use crate::errors::CopyPageError;
use crate::stores::settings_store::HandlerSettings;

/// The `svg` inside the copy button
pub trait IconSlot {
    fn markup(&self) -> String;
    fn set_markup(&self, markup: &str);
}

/// An element matched as the copy button
pub trait CopyButton {
    type Icon: IconSlot;

    /// The single icon child, if the button has one
    fn icon(&self) -> Option<Self::Icon>;

    /// Value of the button's `data-url`
    fn source_url(&self) -> Option<String>;
}

/// Where a click landed
pub trait ClickTarget {
    type Button: CopyButton;

    /// Nearest inclusive ancestor matching `selector`
    fn closest_button(&self, selector: &str) -> Option<Self::Button>;
}

#[async_trait(?Send)]
pub trait PageSource {
    async fn fetch_text(&self, url: &str) -> Result<String, CopyPageError>;
}

/// Write-only clipboard. Writes are fire-and-forget.
pub trait ClipboardSink {
    fn write_text(&self, text: String);
}

#[async_trait(?Send)]
pub trait FeedbackTimer {
    async fn sleep(&self, millis: u32);
}

/// How a click cycle ended
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// Text was handed to the clipboard and the success glyph shown
    Copied { bytes: usize },
    /// The failure glyph was shown
    Failed(CopyPageError),
}

impl CycleOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, CycleOutcome::Copied { .. })
    }
}

/// State captured synchronously when a click matches the copy button
pub struct CopyCycle<I> {
    icon: I,
    original: String,
    source_url: Option<String>,
}

pub struct CopyPageHandler<S, C, T> {
    settings: HandlerSettings,
    source: S,
    clipboard: C,
    timer: T,
}

impl<S, C, T> CopyPageHandler<S, C, T>
where
    S: PageSource,
    C: ClipboardSink,
    T: FeedbackTimer,
{
    pub fn new(settings: HandlerSettings, source: S, clipboard: C, timer: T) -> Self {
        Self {
            settings,
            source,
            clipboard,
            timer,
        }
    }

    pub fn settings(&self) -> &HandlerSettings {
        &self.settings
    }

    /// Match a click against the copy button and snapshot the icon
    ///
    /// Returns `None` when the click is not on the button, or the button has
    /// no icon to give feedback with. Nothing is mutated in that case.
    pub fn begin_cycle<E>(&self, target: &E) -> Option<CopyCycle<<E::Button as CopyButton>::Icon>>
    where
        E: ClickTarget,
    {
        let button = target.closest_button(&self.settings.selector)?;

        let Some(icon) = button.icon() else {
            log::warn!("Copy button {} has no icon, ignoring click", self.settings.selector);
            return None;
        };

        let original = icon.markup();
        let source_url = button
            .source_url()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        log::debug!("Copy page clicked, source {:?}", source_url);

        Some(CopyCycle {
            icon,
            original,
            source_url,
        })
    }

    /// Fetch, copy, show feedback, then restore the snapshot
    pub async fn run_cycle<I: IconSlot>(&self, cycle: CopyCycle<I>) -> CycleOutcome {
        let CopyCycle {
            icon,
            original,
            source_url,
        } = cycle;

        let fetched = match source_url.as_deref() {
            Some(url) => self.source.fetch_text(url).await,
            None => Err(CopyPageError::MissingSourceUrl),
        };

        let outcome = match fetched {
            Ok(text) => {
                let bytes = text.len();
                self.clipboard.write_text(text);
                icon.set_markup(&self.settings.success_glyph);
                log::info!("Copied {} bytes of page source", bytes);
                CycleOutcome::Copied { bytes }
            }
            Err(e) => {
                if e.is_fetch_failure() {
                    log::warn!("Copy page failed: {}", e);
                } else {
                    log::error!("Copy page failed unexpectedly: {}", e);
                }
                icon.set_markup(&self.settings.failure_glyph);
                CycleOutcome::Failed(e)
            }
        };

        self.timer.sleep(self.settings.feedback_ms).await;
        icon.set_markup(&original);

        outcome
    }
}
