use super::{DocumentError, SceneDocument};
use crate::model::SceneInfo;
use flate2::bufread::GzDecoder;
use log::{debug, info};
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024; // 10 MiB

const STDIN_LABEL: &str = "<stdin>";
const UTF8_BOM: &[u8] = &[0xef, 0xbb, 0xbf];

/// Limits applied when reading documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Upper bound on both the raw and the decompressed size.
    pub max_document_bytes: u64,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}

/// A parsed document plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub document: SceneDocument,
    /// File path, or `None` for stdin
    pub source: Option<PathBuf>,
    pub compressed: bool,
    /// Size of the JSON payload after decompression
    pub size_bytes: u64,
}

impl LoadedDocument {
    pub fn source_label(&self) -> String {
        self.source
            .as_ref()
            .map_or_else(|| STDIN_LABEL.to_string(), |p| p.display().to_string())
    }
}

/// Parses document text.
///
/// A leading `[` selects the collection form, anything else is read as a single
/// scene, so parse errors point at the offending field rather than reporting an
/// untagged mismatch.
pub fn parse_document(text: &str) -> Result<SceneDocument, serde_json::Error> {
    parse_bytes(text.as_bytes())
}

fn parse_bytes(bytes: &[u8]) -> Result<SceneDocument, serde_json::Error> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let first = bytes.iter().copied().find(|b| !b.is_ascii_whitespace());
    if first == Some(b'[') {
        serde_json::from_slice::<Vec<SceneInfo>>(bytes).map(SceneDocument::Collection)
    } else {
        serde_json::from_slice::<SceneInfo>(bytes).map(SceneDocument::Single)
    }
}

/// Reads and parses a document from any reader.
///
/// The returned document has no `source`; [`read_document_file`] fills it in.
///
/// gzip input (magic bytes `1f 8b`) is inflated transparently. The size limit
/// applies to the raw input and again to the inflated payload.
pub fn read_document<R: Read>(
    reader: R,
    source_label: &str,
    options: &ReadOptions,
) -> Result<LoadedDocument, DocumentError> {
    let limit = options.max_document_bytes;
    let raw = read_limited(reader, source_label, limit, |error| DocumentError::Io {
        source_label: source_label.to_string(),
        error,
    })?;

    let compressed = is_gzip(&raw);
    let payload = if compressed {
        debug!("Scene document {} is gzip-compressed", source_label);
        read_limited(GzDecoder::new(&raw[..]), source_label, limit, |error| {
            DocumentError::Decompress {
                source_label: source_label.to_string(),
                error,
            }
        })?
    } else {
        raw
    };

    let document = parse_bytes(&payload).map_err(|error| DocumentError::Parse {
        source_label: source_label.to_string(),
        error,
    })?;

    Ok(LoadedDocument {
        document,
        source: None,
        compressed,
        size_bytes: payload.len() as u64,
    })
}

/// Reads a document from a file, or from stdin when `path` is `-`.
///
/// Files larger than the limit are refused before any bytes are read.
pub fn read_document_file(
    path: &Path,
    options: &ReadOptions,
) -> Result<LoadedDocument, DocumentError> {
    if path == Path::new("-") {
        let loaded = read_document(io::stdin().lock(), STDIN_LABEL, options)?;
        debug!("Read scene document from stdin ({} bytes)", loaded.size_bytes);
        return Ok(loaded);
    }

    let label = path.display().to_string();
    let io_error = |error| DocumentError::Io {
        source_label: label.clone(),
        error,
    };

    let metadata = fs::metadata(path).map_err(io_error)?;
    if metadata.len() > options.max_document_bytes {
        return Err(DocumentError::TooLarge {
            source_label: label.clone(),
            size: metadata.len(),
            limit: options.max_document_bytes,
        });
    }

    let file = File::open(path).map_err(io_error)?;
    let mut loaded = read_document(BufReader::new(file), &label, options)?;
    loaded.source = Some(path.to_path_buf());

    info!(
        "Loaded {} scene(s) from {} ({} bytes, compressed={})",
        loaded.document.scenes().len(),
        label,
        loaded.size_bytes,
        loaded.compressed
    );

    Ok(loaded)
}

fn read_limited<R: Read>(
    reader: R,
    source_label: &str,
    limit: u64,
    on_error: impl FnOnce(io::Error) -> DocumentError,
) -> Result<Vec<u8>, DocumentError> {
    let mut bytes = Vec::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(on_error)?;

    if bytes.len() as u64 > limit {
        return Err(DocumentError::LimitExceeded {
            source_label: source_label.to_string(),
            limit,
        });
    }
    Ok(bytes)
}

fn is_gzip(bytes: &[u8]) -> bool {
    bytes.len() > 2 && bytes[0] == 0x1f && bytes[1] == 0x8b
}
