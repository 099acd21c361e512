//! Normalization configuration.
//!
//! Rules that need tables (default ports, directory index names) take them
//! from a [`Config`] value. The builtin tables are compiled in; custom ones
//! can be loaded from files.
//!
//! # Examples
//!
//! ```
//! use urlnorm::config::{Config, SchemePorts};
//!
//! let ports = SchemePorts::from_reader("http,8080\ngopher,70\n".as_bytes())?;
//! assert!(ports.is_scheme_port("HTTP", 8080));
//!
//! let config = Config::builtin().with_scheme_ports(ports);
//! assert!(!config.scheme_ports().is_scheme_port("http", 80));
//! assert!(config.directory_indexes().contains("index.html"));
//! # Ok::<_, urlnorm::Error>(())
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use indexmap::{IndexMap, IndexSet};

use crate::error::Error;

/// Source name used in errors for readers without a path.
const READER_SOURCE: &str = "<reader>";

/// Builtin default ports.
const BUILTIN_SCHEME_PORTS: &[(&str, u16)] = &[
    ("ftp", 21),
    ("ssh", 22),
    ("sftp", 22),
    ("telnet", 23),
    ("smtp", 25),
    ("gopher", 70),
    ("http", 80),
    ("ws", 80),
    ("pop", 110),
    ("nntp", 119),
    ("imap", 143),
    ("snmp", 161),
    ("ldap", 389),
    ("https", 443),
    ("wss", 443),
    ("rtsp", 554),
    ("ldaps", 636),
    ("git", 9418),
];

/// Builtin directory index file names.
const BUILTIN_DIRECTORY_INDEXES: &[&str] = &[
    "index.html",
    "index.htm",
    "index.php",
    "index.asp",
    "index.aspx",
    "index.jsp",
    "index.shtml",
    "index.cgi",
    "default.htm",
    "default.html",
    "default.asp",
    "default.aspx",
];

/// Table from lowercase scheme names to their default ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemePorts(IndexMap<String, u16>);

impl SchemePorts {
    /// Returns the builtin table.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN_SCHEME_PORTS.iter().copied().collect()
    }

    /// Loads a table from `scheme,port` records, one per line.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::Config`][`crate::ErrorKind::Config`] if the
    /// source can't be read or a record is malformed.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, Error> {
        Self::load(reader, Path::new(READER_SOURCE))
    }

    /// Loads a table from a file of `scheme,port` records.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::Config`][`crate::ErrorKind::Config`] if the
    /// file can't be read or a record is malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        Self::load(BufReader::new(file), path)
    }

    /// Parses the records.
    fn load(reader: impl BufRead, source: &Path) -> Result<Self, Error> {
        let mut ports = IndexMap::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::io(source, e))?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split(',');
            let scheme = fields.next().unwrap_or("").trim();
            let port = fields
                .next()
                .ok_or_else(|| Error::malformed_record(source, index + 1, "missing port"))?
                .trim()
                .parse::<u16>()
                .map_err(|_| Error::malformed_record(source, index + 1, "invalid port number"))?;
            ports.insert(scheme.to_ascii_lowercase(), port);
        }
        tracing::debug!(source = %source.display(), count = ports.len(), "loaded scheme ports");
        Ok(Self(ports))
    }

    /// Returns `true` if `port` is the default port of `scheme`.
    ///
    /// Schemes are compared case-insensitively.
    #[must_use]
    pub fn is_scheme_port(&self, scheme: &str, port: u16) -> bool {
        self.port(scheme) == Some(port)
    }

    /// Returns the default port of the scheme.
    #[must_use]
    pub fn port(&self, scheme: &str) -> Option<u16> {
        self.0.get(scheme.to_ascii_lowercase().as_str()).copied()
    }

    /// Returns the number of schemes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the table is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SchemePorts {
    #[inline]
    fn default() -> Self {
        Self::builtin()
    }
}

impl<K: Into<String>> FromIterator<(K, u16)> for SchemePorts {
    fn from_iter<I: IntoIterator<Item = (K, u16)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(scheme, port)| (scheme.into().to_ascii_lowercase(), port))
                .collect(),
        )
    }
}

/// Directory index file names, such as `index.html`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryIndexes(IndexSet<String>);

impl DirectoryIndexes {
    /// Returns the builtin list.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN_DIRECTORY_INDEXES.iter().copied().collect()
    }

    /// Loads newline-delimited names.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::Config`][`crate::ErrorKind::Config`] if the
    /// source can't be read or has no names.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, Error> {
        Self::load(reader, Path::new(READER_SOURCE))
    }

    /// Loads newline-delimited names from a file.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::Config`][`crate::ErrorKind::Config`] if the
    /// file can't be read or has no names.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        Self::load(BufReader::new(file), path)
    }

    /// Parses the names.
    fn load(reader: impl BufRead, source: &Path) -> Result<Self, Error> {
        let mut names = IndexSet::new();
        for line in reader.lines() {
            let line = line.map_err(|e| Error::io(source, e))?;
            let name = line.trim();
            if !name.is_empty() {
                names.insert(name.to_owned());
            }
        }
        if names.is_empty() {
            return Err(Error::empty_index_list(source));
        }
        tracing::debug!(source = %source.display(), count = names.len(), "loaded directory indexes");
        Ok(Self(names))
    }

    /// Returns `true` if the name is a directory index.
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Returns an iterator over the names.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for DirectoryIndexes {
    #[inline]
    fn default() -> Self {
        Self::builtin()
    }
}

impl<S: Into<String>> FromIterator<S> for DirectoryIndexes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Tables used by the normalization rules.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Default ports.
    scheme_ports: SchemePorts,
    /// Directory index names.
    directory_indexes: DirectoryIndexes,
}

impl Config {
    /// Creates a configuration from its tables.
    #[inline]
    #[must_use]
    pub fn new(scheme_ports: SchemePorts, directory_indexes: DirectoryIndexes) -> Self {
        Self {
            scheme_ports,
            directory_indexes,
        }
    }

    /// Returns the builtin configuration.
    #[inline]
    #[must_use]
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Loads both tables from files.
    ///
    /// # Errors
    ///
    /// Fails if either file can't be loaded.
    pub fn from_files(
        scheme_ports: impl AsRef<Path>,
        directory_indexes: impl AsRef<Path>,
    ) -> Result<Self, Error> {
        Ok(Self::new(
            SchemePorts::from_file(scheme_ports)?,
            DirectoryIndexes::from_file(directory_indexes)?,
        ))
    }

    /// Replaces the default ports.
    #[inline]
    #[must_use]
    pub fn with_scheme_ports(mut self, scheme_ports: SchemePorts) -> Self {
        self.scheme_ports = scheme_ports;
        self
    }

    /// Replaces the directory index names.
    #[inline]
    #[must_use]
    pub fn with_directory_indexes(mut self, directory_indexes: DirectoryIndexes) -> Self {
        self.directory_indexes = directory_indexes;
        self
    }

    /// Returns the default ports.
    #[inline]
    #[must_use]
    pub fn scheme_ports(&self) -> &SchemePorts {
        &self.scheme_ports
    }

    /// Returns the directory index names.
    #[inline]
    #[must_use]
    pub fn directory_indexes(&self) -> &DirectoryIndexes {
        &self.directory_indexes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    use assert_fs::prelude::*;

    #[test]
    fn builtin_ports() {
        let ports = SchemePorts::builtin();
        assert!(ports.is_scheme_port("http", 80));
        assert!(ports.is_scheme_port("HTTPS", 443));
        assert!(ports.is_scheme_port("Ftp", 21));
        assert!(!ports.is_scheme_port("http", 443));
        assert!(!ports.is_scheme_port("unknown", 80));
        assert!(!ports.is_scheme_port("", 0));
    }

    #[test]
    fn ports_from_reader() {
        let ports = SchemePorts::from_reader("HTTP, 8080\n\nmy-scheme,1234\n".as_bytes()).unwrap();
        assert_eq!(ports.len(), 2);
        assert_eq!(ports.port("http"), Some(8080));
        assert_eq!(ports.port("MY-SCHEME"), Some(1234));
    }

    #[test]
    fn malformed_ports() {
        let err = SchemePorts::from_reader("http,80\nhttps\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert_eq!(err.to_string(), "invalid record at line 2 of <reader>: missing port");

        let err = SchemePorts::from_reader("http,eighty\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn ports_from_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("schemes.csv");
        file.write_str("http,80\nhttps,443\n").unwrap();
        let ports = SchemePorts::from_file(file.path()).unwrap();
        assert!(ports.is_scheme_port("https", 443));

        let err = SchemePorts::from_file(temp.child("missing.csv").path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        temp.close().unwrap();
    }

    #[test]
    fn indexes() {
        let indexes = DirectoryIndexes::builtin();
        assert!(indexes.contains("index.php"));
        assert!(!indexes.contains("main.php"));

        let indexes = DirectoryIndexes::from_reader("main.php\n\n  home.html \n".as_bytes()).unwrap();
        assert_eq!(indexes.iter().collect::<Vec<_>>(), ["main.php", "home.html"]);

        let err = DirectoryIndexes::from_reader("\n\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn config_from_files() {
        let temp = assert_fs::TempDir::new().unwrap();
        let ports = temp.child("schemes.csv");
        ports.write_str("http,8000\n").unwrap();
        let indexes = temp.child("indexes.txt");
        indexes.write_str("home.html\n").unwrap();

        let config = Config::from_files(ports.path(), indexes.path()).unwrap();
        assert!(config.scheme_ports().is_scheme_port("http", 8000));
        assert!(config.directory_indexes().contains("home.html"));
        assert!(!config.directory_indexes().contains("index.html"));

        let err = Config::from_files(ports.path(), temp.child("nope").path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        temp.close().unwrap();
    }
}
