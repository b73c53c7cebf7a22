use panel::{Html, LINK_ATTRIBUTE, Location, RouteContext, escape};

/// Class added to a link whose route is current.
pub const ACTIVE_CLASS: &str = "active";

/// An anchor that navigates through the router instead of reloading the page.
///
/// The rendered `<a>` carries the link attribute the client router listens
/// for, so a primary click becomes a navigation to its `href`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterLink {
    to: Location,
    content: Html,
    class: String,
}

impl RouterLink {
    /// Link to `to` showing `text`, escaped.
    pub fn new(to: impl Into<Location>, text: &str) -> Self {
        Self {
            to: to.into(),
            content: Html::text(text),
            class: String::new(),
        }
    }

    /// Link to `to` wrapping already rendered `content`.
    pub fn with_content(to: impl Into<Location>, content: Html) -> Self {
        Self {
            to: to.into(),
            content,
            class: String::new(),
        }
    }

    /// Classes always present on the anchor.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// The navigation target.
    pub fn to(&self) -> &Location {
        &self.to
    }

    /// Render against the router's current state.
    pub fn render(&self, context: &RouteContext<'_>) -> Html {
        let (href, active) = match context.table().resolve(&self.to) {
            Ok(matched) => {
                let active = context.is_active(&matched.name);
                (matched.path, active)
            }
            Err(error) => match &self.to {
                Location::Path(path) => (path.clone(), false),
                Location::Named { .. } => {
                    tracing::warn!(%error, target_location = %self.to, "link to unknown route");
                    (String::from("#"), false)
                }
            },
        };

        let class = match (self.class.is_empty(), active) {
            (true, false) => String::new(),
            (true, true) => ACTIVE_CLASS.to_owned(),
            (false, false) => self.class.clone(),
            (false, true) => format!("{} {ACTIVE_CLASS}", self.class),
        };

        let class_attribute = if class.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, escape(&class))
        };

        Html::new(format!(
            r#"<a href="{}" {LINK_ATTRIBUTE}=""{class_attribute}>{}</a>"#,
            escape(&href),
            self.content
        ))
    }
}
