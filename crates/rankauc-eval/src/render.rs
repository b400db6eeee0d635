// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::result::RankingAucResult;
use rankauc_core::RankAucError;
use std::path::PathBuf;

/// One of the three curves a ranking evaluation produces.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Ranked,
    ExpectedCase,
    WorstCase,
}

impl CurveKind {
    pub const ALL: [Self; 3] = [Self::Ranked, Self::ExpectedCase, Self::WorstCase];

    /// Short legend name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ranked => "ranked",
            Self::ExpectedCase => "random",
            Self::WorstCase => "worst",
        }
    }
}

/// Borrowed curves and AUCs handed to a [`CurveRenderer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankingCurves<'a> {
    pub x: &'a [usize],
    pub y: &'a [f64],
    pub y_expected_case: &'a [f64],
    pub y_worst_case: &'a [f64],
    pub auc: f64,
    pub auc_expected_case: f64,
    pub auc_worst_case: f64,
}

impl<'a> RankingCurves<'a> {
    /// The y-values and normalized AUC of one curve.
    pub fn series(&self, kind: CurveKind) -> (&'a [f64], f64) {
        match kind {
            CurveKind::Ranked => (self.y, self.auc),
            CurveKind::ExpectedCase => (self.y_expected_case, self.auc_expected_case),
            CurveKind::WorstCase => (self.y_worst_case, self.auc_worst_case),
        }
    }

    /// All three curves in drawing order.
    pub fn iter_series(&self) -> impl Iterator<Item = (CurveKind, &'a [f64], f64)> {
        let curves = *self;
        CurveKind::ALL.into_iter().map(move |kind| {
            let (y, auc) = curves.series(kind);
            (kind, y, auc)
        })
    }
}

/// Where a rendered figure should be written.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveTarget {
    pub dir: PathBuf,
    pub name: String,
    pub ext: String,
}

impl SaveTarget {
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>, ext: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
            ext: ext.into(),
        }
    }

    /// `dir/name.ext`. Pure path composition; nothing is created.
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.{}", self.name, self.ext))
    }

    pub fn validate(&self) -> Result<(), RankAucError> {
        if self.dir.as_os_str().is_empty() {
            return Err(RankAucError::invalid_input(
                "save target requires a directory",
            ));
        }
        if self.name.is_empty() {
            return Err(RankAucError::invalid_input("save target requires a name"));
        }
        if self.ext.is_empty() || self.ext.starts_with('.') {
            return Err(RankAucError::invalid_input(format!(
                "save target requires an extension without a leading dot; got ext='{}'",
                self.ext
            )));
        }
        Ok(())
    }
}

/// Figure settings for a [`CurveRenderer`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, PartialEq)]
pub struct PlotConfig {
    pub title: Option<String>,
    pub xlabel: String,
    pub ylabel: String,
    /// Width and height in inches.
    pub figure_size: (f64, f64),
    pub dpi: u32,
    pub y_limits: (f64, f64),
    pub show: bool,
    pub save: Option<SaveTarget>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: None,
            xlabel: "top-n ranked samples".to_string(),
            ylabel: "ranking score".to_string(),
            figure_size: (5.0, 2.5),
            dpi: 300,
            y_limits: (-0.05, 1.05),
            show: false,
            save: None,
        }
    }
}

impl PlotConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    pub fn with_save(mut self, save: SaveTarget) -> Self {
        self.save = Some(save);
        self
    }

    pub fn validate(&self) -> Result<(), RankAucError> {
        let (width, height) = self.figure_size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(RankAucError::invalid_input(format!(
                "figure_size must be finite and > 0; got ({width}, {height})"
            )));
        }
        if self.dpi == 0 {
            return Err(RankAucError::invalid_input("dpi must be >= 1"));
        }
        let (lower, upper) = self.y_limits;
        if !(lower.is_finite() && upper.is_finite() && lower < upper) {
            return Err(RankAucError::invalid_input(format!(
                "y_limits must be finite with lower < upper; got ({lower}, {upper})"
            )));
        }
        if let Some(save) = &self.save {
            save.validate()?;
        }
        Ok(())
    }
}

/// Drawing backend for ranking curves.
pub trait CurveRenderer {
    type Error: From<RankAucError>;

    fn render(
        &mut self,
        curves: &RankingCurves<'_>,
        config: &PlotConfig,
    ) -> Result<(), Self::Error>;
}

/// Validates `config` and hands the result's curves to `renderer`.
pub fn render_ranking_curves<R: CurveRenderer>(
    renderer: &mut R,
    result: &RankingAucResult,
    config: &PlotConfig,
) -> Result<(), R::Error> {
    config.validate()?;
    renderer.render(&result.curves(), config)
}
