use crate::config::Config;
use crate::stats::{Sample, StatsReport};
use anyhow::{Context, Result, bail};
use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::BufWriter,
    path::Path,
};

/// Dataset analyzer.
///
/// Accumulates one [`StatsReport`] per named sample read from dataset
/// files and writes the collected reports to a JSON results file.
pub struct Analyzer {
    cfg: Config,
    reports: BTreeMap<String, StatsReport>,
}

impl Analyzer {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            reports: BTreeMap::new(),
        }
    }

    pub fn add_file<P: AsRef<Path>>(&mut self, file: P) -> Result<()> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        let samples: BTreeMap<String, Vec<toml::Value>> =
            toml::from_str(&contents).with_context(|| format!("failed to parse {file:?}"))?;

        for (name, vals) in samples {
            if self.reports.contains_key(&name) {
                bail!("duplicate sample {name:?}");
            }

            let n_vals = vals.len();
            let max_vals = self.cfg.input.max_vals;
            if n_vals > max_vals {
                bail!("sample {name:?} has {n_vals} values, but at most {max_vals} are allowed");
            }

            let sample =
                Sample::from_values(&vals).with_context(|| format!("invalid sample {name:?}"))?;

            self.reports.insert(name, sample.report());
        }

        Ok(())
    }

    pub fn save_results<P: AsRef<Path>>(&self, file: P) -> Result<()> {
        let file = file.as_ref();
        let file = File::create(file).with_context(|| format!("failed to create {file:?}"))?;
        let writer = BufWriter::new(file);

        if self.cfg.output.pretty {
            serde_json::to_writer_pretty(writer, &self.reports)?;
        } else {
            serde_json::to_writer(writer, &self.reports)?;
        }
        Ok(())
    }
}
