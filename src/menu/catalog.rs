//! The list of entries shown by the launcher

use std::sync::Arc;

use thiserror::Error;

use super::lifecycle::{Factory, LaunchError, Launchable};
use crate::games::{self, ConnectFour, Othello, TicTacToe};

/// Rejected catalog configurations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("entry '{name}' at position {index} is enabled but has no factory")]
    EnabledWithoutFactory { index: usize, name: String },
}

/// One selectable destination in the launcher
#[derive(Clone)]
pub struct GameEntry {
    name: String,
    factory: Option<Factory>,
    icon: Option<String>,
    enabled: bool,
    subtitle: Option<String>,
}

impl GameEntry {
    /// An enabled entry that launches whatever `factory` builds
    pub fn new<F>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Result<Box<dyn Launchable>, LaunchError> + Send + Sync + 'static,
    {
        Self::from_factory(name, Arc::new(factory))
    }

    /// An enabled entry around an existing factory
    pub fn from_factory(name: impl Into<String>, factory: Factory) -> Self {
        Self {
            name: name.into(),
            factory: Some(factory),
            icon: None,
            enabled: true,
            subtitle: None,
        }
    }

    /// A disabled entry with nothing to launch
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            factory: None,
            icon: None,
            enabled: false,
            subtitle: None,
        }
    }

    /// Sets the icon image name
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the line shown under the label of a disabled entry
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Overrides the enabled flag
    ///
    /// Enabling an entry without a factory is caught by [`Catalog::new`].
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn factory(&self) -> Option<&Factory> {
        self.factory.as_ref()
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }
}

impl std::fmt::Debug for GameEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEntry")
            .field("name", &self.name)
            .field("has_factory", &self.factory.is_some())
            .field("icon", &self.icon)
            .field("enabled", &self.enabled)
            .field("subtitle", &self.subtitle)
            .finish()
    }
}

/// Ordered, read-only list of entries; order is grid order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Arc<GameEntry>>,
}

impl Catalog {
    /// Validates and freezes `entries`
    pub fn new(entries: impl IntoIterator<Item = GameEntry>) -> Result<Self, CatalogError> {
        let entries = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                if entry.enabled && entry.factory.is_none() {
                    Err(CatalogError::EnabledWithoutFactory {
                        index,
                        name: entry.name,
                    })
                } else {
                    Ok(Arc::new(entry))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    /// The catalog shipped with the portal: three board games and two
    /// placeholders
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new([
            GameEntry::from_factory("Tic Tac Toe", games::factory::<TicTacToe>())
                .with_icon("icon_tictactoe.png"),
            GameEntry::from_factory("Othello", games::factory::<Othello>())
                .with_icon("icon_othello.png"),
            GameEntry::from_factory("Connect Four", games::factory::<ConnectFour>())
                .with_icon("icon_connectfour.png"),
            GameEntry::placeholder("Game 4").with_subtitle("Coming Soon"),
            GameEntry::placeholder("Game 5").with_subtitle("Coming Soon"),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<GameEntry>> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<GameEntry>> {
        self.entries.iter()
    }
}
