//! Application state and composition.

use std::sync::Arc;

use tomeforge_domain::{Encounter, Npc, Shop, SpellCard, Theme};

use crate::infrastructure::{
    app_settings::AppSettings,
    clock::{SystemClock, SystemRandom},
    in_memory::{FreeModeAuth, InMemoryContentRepo},
    ports::{AuthPort, ClockPort, ContentRepo, RandomPort},
};
use crate::use_cases::{ManageContent, RollAbilityScores};

/// Identity plus one repository per content kind.
///
/// Cloud integrations build one of these and hand it to [`App::configure`].
#[derive(Clone)]
pub struct Backend {
    pub auth: Arc<dyn AuthPort>,
    pub shops: Arc<dyn ContentRepo<Shop>>,
    pub npcs: Arc<dyn ContentRepo<Npc>>,
    pub encounters: Arc<dyn ContentRepo<Encounter>>,
    pub spell_cards: Arc<dyn ContentRepo<SpellCard>>,
}

impl Backend {
    /// Ephemeral in-memory storage with nobody signed in.
    pub fn free_mode(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            auth: Arc::new(FreeModeAuth),
            shops: Arc::new(InMemoryContentRepo::new(clock.clone())),
            npcs: Arc::new(InMemoryContentRepo::new(clock.clone())),
            encounters: Arc::new(InMemoryContentRepo::new(clock.clone())),
            spell_cards: Arc::new(InMemoryContentRepo::new(clock)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Free,
    Cloud,
}

/// Main application state.
///
/// Starts in free mode. [`App::configure`] swaps in an injected backend and
/// [`App::dispose`] drops it again.
pub struct App {
    settings: AppSettings,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
    backend: Backend,
    mode: Mode,
}

impl App {
    pub fn new(settings: AppSettings) -> Self {
        Self::with_ports(settings, Arc::new(SystemClock::new()), Arc::new(SystemRandom::new()))
    }

    /// Create an App with explicit clock and random sources.
    pub fn with_ports(
        settings: AppSettings,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        if settings.is_cloud_mode() {
            tracing::info!("Cloud settings found; running in free mode until a backend is configured");
        }
        Self {
            settings,
            backend: Backend::free_mode(clock.clone()),
            clock,
            random,
            mode: Mode::Free,
        }
    }

    /// Switches to the given cloud backend.
    pub fn configure(&mut self, backend: Backend) {
        self.backend = backend;
        self.mode = Mode::Cloud;
        tracing::info!("Cloud backend configured");
    }

    /// Drops the cloud backend and returns to a fresh free-mode store.
    pub fn dispose(&mut self) {
        if self.mode == Mode::Cloud {
            tracing::info!("Cloud backend disposed");
        }
        self.backend = Backend::free_mode(self.clock.clone());
        self.mode = Mode::Free;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn default_theme(&self) -> Theme {
        self.settings.default_theme
    }

    pub fn shops(&self) -> ManageContent<Shop> {
        ManageContent::new(self.backend.shops.clone(), self.backend.auth.clone())
    }

    pub fn npcs(&self) -> ManageContent<Npc> {
        ManageContent::new(self.backend.npcs.clone(), self.backend.auth.clone())
    }

    pub fn encounters(&self) -> ManageContent<Encounter> {
        ManageContent::new(self.backend.encounters.clone(), self.backend.auth.clone())
    }

    pub fn spell_cards(&self) -> ManageContent<SpellCard> {
        ManageContent::new(self.backend.spell_cards.clone(), self.backend.auth.clone())
    }

    pub fn roll_ability_scores(&self) -> RollAbilityScores {
        RollAbilityScores::new(self.random.clone())
    }
}
