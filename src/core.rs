use std::fs;
use std::io::{self, Read};
use std::path::Path;

use thiserror::Error;

use crate::env::{self, EnvConfig, EnvVar};
use crate::microdata::{Microdata, MicrodataDocument, TypeNames};
use crate::parsers::html::{get_base_url, html_to_dom};

/// Represents errors that can occur during microdata extraction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MicrodataError {
    /// Item discovery received something that is neither a string nor a list of strings
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A reader asked for a microdata attribute the model does not define
    #[error("Undefined microdata attribute: {0}")]
    UndefinedAttribute(String),

    /// Positional access beyond the end of a property collection or node list
    #[error("Index {index} is out of range for a list of length {length}")]
    OutOfRange { index: usize, length: usize },

    /// Keyed access with something other than a property name or a position
    #[error("Expected a property name or an index, got {0}")]
    UnsupportedKey(String),

    /// Property collections and node lists are read-only views
    #[error("Property collections and node lists cannot be modified")]
    ImmutableMutation,

    #[error("Failed to parse document: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Environment variable '{variable}': {message}")]
    Config { variable: String, message: String },
}

impl From<io::Error> for MicrodataError {
    fn from(error: io::Error) -> Self {
        MicrodataError::Io(error.to_string())
    }
}

impl From<serde_json::Error> for MicrodataError {
    fn from(error: serde_json::Error) -> Self {
        MicrodataError::Serialization(error.to_string())
    }
}

pub type MicrodataResult<T> = Result<T, MicrodataError>;

/// Configuration options for microdata extraction
#[derive(Clone, Debug)]
pub struct MicrodataOptions {
    /// Base URL used to resolve relative URL property values
    pub base_url: Option<String>,
    /// Character encoding label of the input (defaults to UTF-8)
    pub encoding: Option<String>,
    /// Only report top-level items carrying all of these types
    pub types: Vec<String>,
    pub pretty: bool,
    /// Fall back to `<base href>` when no base URL was given
    pub use_base_element: bool,
}

impl Default for MicrodataOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            encoding: None,
            types: Vec::new(),
            pretty: false,
            use_base_element: true,
        }
    }
}

impl From<&EnvConfig> for MicrodataOptions {
    fn from(config: &EnvConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            ..Self::default()
        }
    }
}

impl MicrodataOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options seeded from the environment; invalid variables are reported
    pub fn from_env() -> MicrodataResult<Self> {
        Ok(Self::from(&EnvConfig::from_env()?))
    }
}

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";
const DEFAULT_ENCODING: &str = "utf-8";

/// Extracts microdata items from raw HTML data
///
/// # Arguments
///
/// * `input_data` - Raw HTML data as bytes
/// * `options` - Base URL, encoding and type filter to apply
///
/// # Returns
///
/// The `{ items: [...] }` structure, or an error if the document could not be parsed.
///
/// # Examples
///
/// ```
/// use microdata::core::{extract_microdata, MicrodataOptions};
///
/// let html = br#"<div itemscope><span itemprop="name">Elizabeth</span></div>"#;
/// let microdata = extract_microdata(html, &MicrodataOptions::new()).unwrap();
///
/// assert_eq!(microdata.items.len(), 1);
/// ```
pub fn extract_microdata(
    input_data: &[u8],
    options: &MicrodataOptions,
) -> MicrodataResult<Microdata> {
    let encoding = options.encoding.as_deref().unwrap_or(DEFAULT_ENCODING);
    let dom = html_to_dom(input_data, encoding)?;

    let base_url = match &options.base_url {
        Some(base_url) => Some(base_url.clone()),
        None if options.use_base_element => get_base_url(&dom.document),
        None => None,
    };
    if let Some(base_url) = &base_url {
        tracing::debug!("Resolving relative URLs against {base_url}");
    }

    let document = MicrodataDocument::new(dom, base_url);
    let items = document.get_items(TypeNames::List(options.types.clone()));
    tracing::info!("Found {} top-level microdata item(s)", items.len());

    Ok(Microdata::from_items(&items))
}

/// Reads the document to process from a file path, or from stdin for `-`/`None`
pub fn read_input(target: Option<&str>) -> MicrodataResult<Vec<u8>> {
    match target {
        None | Some("-") => {
            let mut data = Vec::new();
            io::stdin().read_to_end(&mut data)?;
            Ok(data)
        }
        Some(target) => {
            let path = Path::new(target);
            if !path.exists() {
                return Err(MicrodataError::Io(format!("File not found: {target}")));
            }
            Ok(fs::read(path)?)
        }
    }
}

/// Reads `target` and extracts its microdata items
pub fn extract_microdata_from_target(
    target: Option<&str>,
    options: &MicrodataOptions,
) -> MicrodataResult<Microdata> {
    let input_data = read_input(target)?;
    extract_microdata(&input_data, options)
}

/// Prints an error message to stderr
pub fn print_error_message(msg: &str) {
    if env::core::NoColor::get_or_default(false) {
        eprintln!("{msg}");
    } else {
        eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
    }
}

/// Prints an info message to stdout
pub fn print_info_message(msg: &str) {
    println!("{msg}");
}
