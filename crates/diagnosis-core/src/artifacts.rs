use std::path::{Path, PathBuf};

use tracing::{info, info_span, warn};

use diagnosis_ingest::{
    ArtifactPaths, ChartEntry, ChartSpec, HoldoutSet, load_holdout, load_manifest, probe_charts,
};

use crate::bundle::ModelBundle;
use crate::error::ArtifactError;
use crate::predictor::Predictor;
use crate::sample::SampleProvider;

/// Everything loaded from the artifact directory. Built once at startup and
/// only read afterwards.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub bundle: ModelBundle,
    pub holdout: HoldoutSet,
    chart_root: PathBuf,
    charts: Vec<ChartSpec>,
}

impl Artifacts {
    pub fn new(bundle: ModelBundle, holdout: HoldoutSet) -> Self {
        Self {
            bundle,
            holdout,
            chart_root: PathBuf::new(),
            charts: Vec::new(),
        }
    }

    pub fn with_charts(mut self, root: &Path, charts: Vec<ChartSpec>) -> Self {
        self.chart_root = root.to_path_buf();
        self.charts = charts;
        self
    }

    /// Load the bundle and held-out tables from `root`.
    pub fn load(root: &Path) -> Result<Self, ArtifactError> {
        let span = info_span!("load_artifacts", root = %root.display());
        let _guard = span.enter();
        let ArtifactPaths {
            root,
            model,
            features,
            labels,
            charts,
        } = load_manifest(root)?;
        let bundle = ModelBundle::load(&model)?;
        let holdout = load_holdout(&features, &labels)?;
        if holdout.width() != bundle.n_features_in() {
            warn!(
                expected = bundle.n_features_in(),
                actual = holdout.width(),
                "held-out table width differs from the scaler; sample draws will fail"
            );
        }
        info!(rows = holdout.len(), charts = charts.len(), "artifacts ready");
        Ok(Self::new(bundle, holdout).with_charts(&root, charts))
    }

    pub fn predictor(&self) -> Predictor<'_> {
        Predictor::new(&self.bundle)
    }

    pub fn sample_provider(&self) -> SampleProvider<'_> {
        SampleProvider::new(&self.bundle.scaler, &self.holdout)
    }

    /// Check the chart files on disk. Missing charts become placeholders.
    pub fn chart_gallery(&self) -> Vec<ChartEntry> {
        probe_charts(&self.chart_root, &self.charts)
    }
}
