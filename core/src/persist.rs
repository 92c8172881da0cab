//! Comma-separated storage for the weight tables.
//!
//! `idf.csv` has a header of term names after an empty index cell and a single
//! record `0,<idf>...`. `tf-idf.csv` has a header of document ids and one record
//! per term. Both are written to temporary files and renamed into place, and the
//! existing TF-IDF table is removed first, so an interrupted write never leaves a
//! pair that passes [`IndexPaths::weights_exist`].

use crate::config::{IDF_FILE, TF_IDF_FILE};
use crate::error::{Error, ResourceKind, Result};
use crate::index::{DocId, IdfTable, SparseRow, TfIdfMatrix, TermId, Vocabulary, WeightMatrix};
use std::collections::HashSet;
use std::fs::{self, create_dir_all, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct IndexPaths {
    pub root: PathBuf,
}

impl IndexPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    pub fn tf_idf(&self) -> PathBuf { self.root.join(TF_IDF_FILE) }
    pub fn idf(&self) -> PathBuf { self.root.join(IDF_FILE) }

    /// Both tables are present.
    pub fn weights_exist(&self) -> bool {
        self.tf_idf().is_file() && self.idf().is_file()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    path.with_extension("csv.tmp")
}

pub fn save_weights(paths: &IndexPaths, tf_idf: &TfIdfMatrix, idf: &IdfTable) -> Result<()> {
    create_dir_all(&paths.root)?;
    let tf_idf_tmp = tmp_path(&paths.tf_idf());
    let idf_tmp = tmp_path(&paths.idf());

    let written = save_tf_idf(&tf_idf_tmp, tf_idf).and_then(|_| save_idf(&idf_tmp, idf));
    if let Err(e) = written {
        let _ = fs::remove_file(&tf_idf_tmp);
        let _ = fs::remove_file(&idf_tmp);
        return Err(e);
    }

    if paths.tf_idf().exists() {
        fs::remove_file(paths.tf_idf())?;
    }
    fs::rename(&idf_tmp, paths.idf())?;
    fs::rename(&tf_idf_tmp, paths.tf_idf())?;
    tracing::info!(root = %paths.root.display(), "weights saved");
    Ok(())
}

pub fn save_idf(path: &Path, idf: &IdfTable) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(std::iter::once("").chain(idf.vocabulary().iter().map(|(_, t)| t)))?;
    wtr.write_record(std::iter::once("0".to_string()).chain(idf.weights().iter().map(f64::to_string)))?;
    wtr.flush()?;
    Ok(())
}

pub fn save_tf_idf(path: &Path, matrix: &TfIdfMatrix) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(std::iter::once(String::new()).chain(matrix.doc_ids().iter().map(DocId::to_string)))?;
    let rows: Vec<&SparseRow> = matrix.rows().map(|(_, row)| row).collect();
    for (tid, term) in matrix.vocabulary().iter() {
        let weights = rows.iter().map(|row| row.get(tid).to_string());
        wtr.write_record(std::iter::once(term.to_string()).chain(weights))?;
    }
    wtr.flush()?;
    Ok(())
}

fn open_table(path: &Path, kind: ResourceKind) -> Result<csv::Reader<File>> {
    if !path.is_file() {
        return Err(Error::missing(kind, path));
    }
    let file = File::open(path)?;
    Ok(csv::ReaderBuilder::new().has_headers(true).from_reader(file))
}

fn parse_weight(path: &Path, value: &str) -> Result<f64> {
    match value.parse::<f64>() {
        Ok(w) if w.is_finite() && w >= 0.0 => Ok(w),
        _ => Err(Error::malformed(path, format!("invalid weight {value:?}"))),
    }
}

pub fn load_idf(path: &Path) -> Result<IdfTable> {
    let mut rdr = open_table(path, ResourceKind::IdfTable)?;
    let bad = |e: csv::Error| Error::malformed(path, e.to_string());

    let headers = rdr.headers().map_err(bad)?.clone();
    let mut terms = Vec::with_capacity(headers.len().saturating_sub(1));
    for term in headers.iter().skip(1) {
        if term.is_empty() {
            return Err(Error::malformed(path, "empty term name"));
        }
        terms.push(term.to_string());
    }
    let vocabulary = Vocabulary::from_ordered(terms)?;

    let mut records = rdr.records();
    let record = match records.next() {
        Some(r) => r.map_err(bad)?,
        None => return Err(Error::malformed(path, "missing weight record")),
    };
    if records.next().is_some() {
        return Err(Error::malformed(path, "expected a single weight record"));
    }
    let weights = record
        .iter()
        .skip(1)
        .map(|v| parse_weight(path, v))
        .collect::<Result<Vec<f64>>>()?;

    Ok(IdfTable::new(Arc::new(vocabulary), weights))
}

/// Load the TF-IDF table; every term row must belong to `vocabulary`.
pub fn load_tf_idf(path: &Path, vocabulary: &Arc<Vocabulary>) -> Result<TfIdfMatrix> {
    let mut rdr = open_table(path, ResourceKind::TfIdfTable)?;
    let bad = |e: csv::Error| Error::malformed(path, e.to_string());

    let headers = rdr.headers().map_err(bad)?.clone();
    let mut doc_ids: Vec<DocId> = Vec::with_capacity(headers.len().saturating_sub(1));
    let mut seen_docs = HashSet::new();
    for column in headers.iter().skip(1) {
        let doc_id = match column.parse::<DocId>() {
            Ok(id) if id > 0 => id,
            _ => return Err(Error::malformed(path, format!("column {column:?} is not a document id"))),
        };
        if !seen_docs.insert(doc_id) {
            return Err(Error::malformed(path, format!("duplicate document column {doc_id}")));
        }
        doc_ids.push(doc_id);
    }

    let mut columns: Vec<Vec<(TermId, f64)>> = vec![Vec::new(); doc_ids.len()];
    let mut seen_terms = vec![false; vocabulary.len()];
    for record in rdr.records() {
        let record = record.map_err(bad)?;
        let term = record.get(0).unwrap_or_default();
        let tid = vocabulary
            .get(term)
            .ok_or_else(|| Error::malformed(path, format!("term {term:?} missing from IDF table")))?;
        if std::mem::replace(&mut seen_terms[tid as usize], true) {
            return Err(Error::malformed(path, format!("duplicate term row {term:?}")));
        }
        for (col, value) in record.iter().skip(1).enumerate() {
            let w = parse_weight(path, value)?;
            if w != 0.0 {
                columns[col].push((tid, w));
            }
        }
    }

    let rows = doc_ids
        .into_iter()
        .zip(columns)
        .map(|(doc_id, entries)| (doc_id, SparseRow::from_entries(entries)))
        .collect();
    Ok(WeightMatrix::new(Arc::clone(vocabulary), rows))
}

/// Load both persisted tables. The IDF table defines the vocabulary.
pub fn load_weights(paths: &IndexPaths) -> Result<(TfIdfMatrix, IdfTable)> {
    let idf = load_idf(&paths.idf())?;
    let tf_idf = load_tf_idf(&paths.tf_idf(), idf.vocabulary())?;
    tracing::info!(num_docs = tf_idf.num_docs(), num_terms = idf.vocabulary().len(), "weights loaded");
    Ok((tf_idf, idf))
}
