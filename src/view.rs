//! Content views and the registry a host selects them from.
//!
//! A content view turns an intercepted message body into readable text.
//! The host keeps a [`ViewRegistry`], asks every view for its priority on a
//! given message, and renders with the highest-priority one. When that
//! view fails the host falls back to the raw body instead of showing an
//! error.

use serde_json::Value;
use tracing::debug;

use crate::core::applicability::{self, ContentMetadata, PRIORITY_DISABLED};
use crate::core::envelope;
use crate::display::json_printer::{self, DisplayLine};
use crate::error::JoseViewError;

/// A pluggable body renderer.
pub trait ContentView: Send + Sync {
    /// Unique name of the view.
    fn name(&self) -> &str;

    /// Render `body` as text.
    ///
    /// # Errors
    ///
    /// Returns an error when the body cannot be rendered by this view.
    fn prettify(&self, body: &[u8], metadata: &ContentMetadata) -> Result<String, JoseViewError>;

    /// How strongly this view wants to render the message; `0.0` disables it.
    fn render_priority(&self, body: &[u8], metadata: &ContentMetadata) -> f64;

    /// Render `body` as classified display lines.
    ///
    /// # Errors
    ///
    /// Returns an error when the body cannot be rendered by this view.
    fn render_lines(
        &self,
        body: &[u8],
        metadata: &ContentMetadata,
    ) -> Result<Vec<DisplayLine>, JoseViewError>;
}

/// Renders `application/jose+json` bodies with `protected` and `payload`
/// decoded in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct JoseJsonView;

impl JoseJsonView {
    pub const NAME: &'static str = "JOSE-JSON";
}

impl ContentView for JoseJsonView {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn prettify(&self, body: &[u8], _metadata: &ContentMetadata) -> Result<String, JoseViewError> {
        json_printer::render_to_text(&envelope::decode_body(body)?)
    }

    fn render_priority(&self, _body: &[u8], metadata: &ContentMetadata) -> f64 {
        applicability::jose_json_priority(metadata)
    }

    fn render_lines(
        &self,
        body: &[u8],
        _metadata: &ContentMetadata,
    ) -> Result<Vec<DisplayLine>, JoseViewError> {
        Ok(json_printer::render(&envelope::decode_body(body)?))
    }
}

/// Renders any JSON body without decoding anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericJsonView;

impl GenericJsonView {
    pub const NAME: &'static str = "JSON";

    fn parse(body: &[u8]) -> Result<Value, JoseViewError> {
        serde_json::from_slice(body).map_err(|e| JoseViewError::InvalidBody {
            reason: e.to_string(),
        })
    }
}

impl ContentView for GenericJsonView {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn prettify(&self, body: &[u8], _metadata: &ContentMetadata) -> Result<String, JoseViewError> {
        json_printer::render_to_text(&Self::parse(body)?)
    }

    fn render_priority(&self, _body: &[u8], metadata: &ContentMetadata) -> f64 {
        applicability::generic_json_priority(metadata)
    }

    fn render_lines(
        &self,
        body: &[u8],
        _metadata: &ContentMetadata,
    ) -> Result<Vec<DisplayLine>, JoseViewError> {
        Ok(json_printer::render(&Self::parse(body)?))
    }
}

/// Decode a JWS envelope body and render it as indented, sorted-key text.
///
/// # Errors
///
/// Returns an error if the body is not UTF-8 JSON or lacks the `protected`
/// and `payload` members.
pub fn prettify(body: &[u8], metadata: &ContentMetadata) -> Result<String, JoseViewError> {
    JoseJsonView.prettify(body, metadata)
}

/// Priority of the JWS view for a message.
pub fn render_priority(body: &[u8], metadata: &ContentMetadata) -> f64 {
    JoseJsonView.render_priority(body, metadata)
}

/// Name of the pseudo-view used when no registered view renders a body.
pub const RAW_VIEW_NAME: &str = "Raw";

/// Output of [`ViewRegistry::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Name of the view that produced the lines.
    pub view: String,
    pub lines: Vec<DisplayLine>,
}

impl Rendered {
    pub fn text(&self) -> String {
        json_printer::lines_to_text(&self.lines)
    }
}

/// Views available to a host, in registration order.
#[derive(Default)]
pub struct ViewRegistry {
    views: Vec<Box<dyn ContentView>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the generic JSON view, as a host starts out.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.add(Box::new(GenericJsonView));
        registry
    }

    /// Register a view. A view with the same name is replaced.
    pub fn add(&mut self, view: Box<dyn ContentView>) {
        self.remove(view.name());
        self.views.push(view);
    }

    /// Deregister a view by name. Returns whether it was registered.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.views.len();
        self.views.retain(|view| view.name() != name);
        self.views.len() != before
    }

    pub fn views(&self) -> impl Iterator<Item = &dyn ContentView> {
        self.views.iter().map(|view| view.as_ref())
    }

    /// The view with the highest positive priority for a message.
    ///
    /// Ties go to the view registered first.
    pub fn select(&self, body: &[u8], metadata: &ContentMetadata) -> Option<&dyn ContentView> {
        let mut best: Option<(&dyn ContentView, f64)> = None;
        for view in self.views() {
            let priority = view.render_priority(body, metadata);
            if priority <= PRIORITY_DISABLED {
                continue;
            }
            if best.is_none_or(|(_, top)| priority > top) {
                best = Some((view, priority));
            }
        }
        best.map(|(view, _)| view)
    }

    /// Render a message with the selected view, falling back to the raw
    /// body when no view applies or the selected view fails.
    pub fn render(&self, body: &[u8], metadata: &ContentMetadata) -> Rendered {
        if let Some(view) = self.select(body, metadata) {
            match view.render_lines(body, metadata) {
                Ok(lines) => {
                    return Rendered {
                        view: view.name().to_string(),
                        lines,
                    };
                }
                Err(err) => {
                    debug!(view = view.name(), error = %err, "view failed, rendering raw body");
                }
            }
        }

        Rendered {
            view: RAW_VIEW_NAME.to_string(),
            lines: raw_lines(body),
        }
    }
}

fn raw_lines(body: &[u8]) -> Vec<DisplayLine> {
    String::from_utf8_lossy(body)
        .split('\n')
        .map(|line| vec![json_printer::Fragment::new(line, json_printer::Category::Text)])
        .collect()
}

/// Register the JWS view with a host registry.
pub fn start(registry: &mut ViewRegistry) {
    registry.add(Box::new(JoseJsonView));
}

/// Deregister the JWS view from a host registry.
pub fn stop(registry: &mut ViewRegistry) {
    registry.remove(JoseJsonView::NAME);
}
