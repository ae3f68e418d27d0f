//! View-state store and the values derived from it.
//!
//! All changes go through [`ViewState::apply`]; the snapshot itself is
//! behind an `Arc` and replaced whole, so a [`DerivedView`] always reads
//! every field from one snapshot.

use std::sync::Arc;

use crate::{
    air_quality::{AirQualityLevel, classify_pm25},
    icon::{IconCategory, select_icon},
    model::WeatherSnapshot,
    theme::{ThemeId, theme_for},
    units::{DisplayTemperatures, DisplayUnit},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub snapshot: Option<Arc<WeatherSnapshot>>,
    pub loading: bool,
    pub unit: DisplayUnit,
    /// Last submitted query, trimmed.
    pub query: String,
}

/// Discrete transitions on [`ViewState`].
#[derive(Debug, Clone)]
pub enum ViewAction {
    SetQuery(String),
    SetLoading(bool),
    ReplaceSnapshot(Arc<WeatherSnapshot>),
    SetUnit(DisplayUnit),
    ToggleUnit,
}

impl ViewState {
    pub fn with_unit(unit: DisplayUnit) -> Self {
        Self { unit, ..Self::default() }
    }

    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::SetQuery(query) => self.query = query,
            ViewAction::SetLoading(loading) => self.loading = loading,
            ViewAction::ReplaceSnapshot(snapshot) => self.snapshot = Some(snapshot),
            ViewAction::SetUnit(unit) => self.unit = unit,
            ViewAction::ToggleUnit => self.unit = self.unit.toggle(),
        }
    }

    pub fn derive(&self) -> DerivedView {
        DerivedView {
            theme: theme_for(self.snapshot.as_deref()),
            unit: self.unit,
            loading: self.loading,
            query: self.query.clone(),
            current: self.snapshot.as_ref().map(|snap| CurrentView::new(Arc::clone(snap), self.unit)),
        }
    }
}

/// Everything a renderer needs, computed from one [`ViewState`] read.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    pub theme: ThemeId,
    pub unit: DisplayUnit,
    pub loading: bool,
    pub query: String,
    pub current: Option<CurrentView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentView {
    pub snapshot: Arc<WeatherSnapshot>,
    pub icon: IconCategory,
    pub temperatures: DisplayTemperatures,
    pub air_quality: AirQualityLevel,
}

impl CurrentView {
    fn new(snapshot: Arc<WeatherSnapshot>, unit: DisplayUnit) -> Self {
        let icon = select_icon(&snapshot.current.condition.text);
        let temperatures = DisplayTemperatures::of(&snapshot, unit);
        let air_quality = classify_pm25(snapshot.current.air_quality.pm2_5);

        Self { snapshot, icon, temperatures, air_quality }
    }
}
