//! Per-host session records.
//!
//! A host that shows the converter in several places (windows, screens)
//! keeps one [`Session`] per place. The registry is owned by the host, so a
//! session lives exactly as long as the host keeps it attached.

use std::{collections::HashMap, hash::Hash};

use crate::{
    chain::ConverterSession, config::Config, navigator::MatchNavigator, scan::TextScanner,
};

/// Everything the engine remembers between user actions.
#[derive(Debug, Clone, Default)]
pub struct Session {
    converter: ConverterSession,
    navigator: MatchNavigator,
}

impl Session {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            converter: ConverterSession::new(config.convert.chain),
            navigator: MatchNavigator::new(TextScanner::new(config.search.scan_options())),
        }
    }

    #[must_use]
    pub fn converter(&self) -> &ConverterSession {
        &self.converter
    }

    pub fn converter_mut(&mut self) -> &mut ConverterSession {
        &mut self.converter
    }

    #[must_use]
    pub fn navigator(&self) -> &MatchNavigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut MatchNavigator {
        &mut self.navigator
    }
}

/// A session handed out by [`SessionRegistry::attach`].
#[derive(Debug)]
pub struct Attached<'a> {
    session: &'a mut Session,
    created: bool,
}

impl Attached<'_> {
    /// True if this key had no session before this call.
    #[must_use]
    pub fn created(&self) -> bool {
        self.created
    }

    pub fn session(&mut self) -> &mut Session {
        self.session
    }
}

/// Sessions keyed by the host place they belong to.
#[derive(Debug)]
pub struct SessionRegistry<K> {
    config: Config,
    sessions: HashMap<K, Session>,
}

impl<K> SessionRegistry<K>
where
    K: Eq + Hash,
{
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sessions: HashMap::new(),
        }
    }

    /// Returns the session for `key`, creating it on first use.
    pub fn attach(&mut self, key: K) -> Attached<'_> {
        let mut created = false;
        let config = &self.config;
        let session = self.sessions.entry(key).or_insert_with(|| {
            created = true;
            Session::new(config)
        });
        Attached { session, created }
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut Session> {
        self.sessions.get_mut(key)
    }

    #[must_use]
    pub fn is_attached(&self, key: &K) -> bool {
        self.sessions.contains_key(key)
    }

    /// Drops the session for `key`, returning it if there was one.
    pub fn detach(&mut self, key: &K) -> Option<Session> {
        self.sessions.remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
