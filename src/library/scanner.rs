//! Document folder scanner
//!
//! Walks the docs directory for folders following the fixed layout
//! `docs/<folder>/documento.pdf`, and pairs each folder with its optional
//! logo at `logos/<folder_lowercase>.png`.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Fixed document file name inside each folder.
pub const DOCUMENT_FILE: &str = "documento.pdf";

/// One scannable document found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    /// Folder name; doubles as the public identifier in URLs.
    pub name: String,
    pub document_path: PathBuf,
    /// Logo matched by naming convention; `None` is the normal case.
    pub logo_path: Option<PathBuf>,
}

/// Scanner for the fixed `docs/<folder>/documento.pdf` layout.
pub struct DocumentScanner {
    docs_dir: PathBuf,
    logos_dir: PathBuf,
}

impl DocumentScanner {
    pub fn new(docs_dir: PathBuf, logos_dir: PathBuf) -> Self {
        Self {
            docs_dir,
            logos_dir,
        }
    }

    /// Scan the docs directory and return all documents, sorted by name.
    ///
    /// A missing docs directory yields an empty list rather than an error, so
    /// a fresh deployment starts cleanly.
    pub fn scan(&self) -> io::Result<Vec<DocumentEntry>> {
        if !self.docs_dir.exists() {
            tracing::warn!(
                "Docs directory {} does not exist, skipping scan",
                self.docs_dir.display()
            );
            return Ok(Vec::new());
        }

        tracing::info!("Scanning {} for documents...", self.docs_dir.display());

        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(&self.docs_dir)? {
            let dir_entry = dir_entry?;
            let folder_path = dir_entry.path();
            if !folder_path.is_dir() {
                continue;
            }

            let name = match dir_entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    tracing::warn!("Skipping folder with non-UTF-8 name: {:?}", raw);
                    continue;
                }
            };

            let document_path = folder_path.join(DOCUMENT_FILE);
            if !document_path.exists() {
                tracing::debug!("Skipping {}: no {}", name, DOCUMENT_FILE);
                continue;
            }

            let logo_path = self.find_logo(&name);
            entries.push(DocumentEntry {
                name,
                document_path,
                logo_path,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::info!("Found {} documents", entries.len());
        Ok(entries)
    }

    /// Logo lookup by naming convention: `<folder_lowercase>.png`.
    fn find_logo(&self, name: &str) -> Option<PathBuf> {
        let candidate = self.logos_dir.join(format!("{}.png", name.to_lowercase()));
        candidate.exists().then_some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_document(docs: &std::path::Path, name: &str) {
        let folder = docs.join(name);
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join(DOCUMENT_FILE), b"%PDF-1.4").unwrap();
    }

    #[test]
    fn finds_folders_with_documents_sorted() {
        let tmp = TempDir::new().unwrap();
        let docs = tmp.path().join("docs");
        make_document(&docs, "zeta");
        make_document(&docs, "alpha");

        let scanner = DocumentScanner::new(docs, tmp.path().join("logos"));
        let entries = scanner.scan().unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn skips_folders_without_document_file() {
        let tmp = TempDir::new().unwrap();
        let docs = tmp.path().join("docs");
        make_document(&docs, "good");
        fs::create_dir_all(docs.join("empty")).unwrap();
        // Stray file at the top level is ignored too.
        fs::write(docs.join("readme.txt"), b"hi").unwrap();

        let scanner = DocumentScanner::new(docs, tmp.path().join("logos"));
        let entries = scanner.scan().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "good");
    }

    #[test]
    fn matches_logo_by_lowercased_folder_name() {
        let tmp = TempDir::new().unwrap();
        let docs = tmp.path().join("docs");
        let logos = tmp.path().join("logos");
        make_document(&docs, "Acme");
        make_document(&docs, "other");
        fs::create_dir_all(&logos).unwrap();
        fs::write(logos.join("acme.png"), b"png").unwrap();

        let scanner = DocumentScanner::new(docs, logos.clone());
        let entries = scanner.scan().unwrap();
        assert_eq!(entries[0].logo_path, Some(logos.join("acme.png")));
        assert_eq!(entries[1].logo_path, None);
    }

    #[test]
    fn missing_docs_dir_yields_empty_list() {
        let tmp = TempDir::new().unwrap();
        let scanner = DocumentScanner::new(
            tmp.path().join("nonexistent"),
            tmp.path().join("logos"),
        );
        assert!(scanner.scan().unwrap().is_empty());
    }
}
