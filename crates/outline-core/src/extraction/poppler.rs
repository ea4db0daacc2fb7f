use crate::error::OutlineError;
use crate::extraction::pdftohtml::parse_layout_xml;
use crate::extraction::{tool_error, LayoutDocument, LayoutExtractor, PageContent};
use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

/// Layout extraction backend built on poppler-utils.
///
/// Uses `pdfinfo` for page count and metadata title, `pdftotext` for plain
/// page text and `pdftohtml -xml` for per-line font size and weight.
pub struct PopplerExtractor;

impl PopplerExtractor {
    pub fn new() -> Self {
        PopplerExtractor
    }

    /// Check if the poppler tools are available on the system.
    pub fn is_available() -> bool {
        ["pdfinfo", "pdftotext", "pdftohtml"].iter().all(|tool| {
            Command::new(tool)
                .arg("-v")
                .output()
                .map(|o| o.status.success() || !o.stderr.is_empty())
                .unwrap_or(false)
        })
    }
}

impl Default for PopplerExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutExtractor for PopplerExtractor {
    fn open(&self, path: &Path) -> Result<LayoutDocument, OutlineError> {
        let info = run_tool(
            "pdfinfo",
            [OsStr::new("-enc"), OsStr::new("UTF-8"), path.as_os_str()],
        )?;
        let info = parse_pdfinfo(&info);
        log::debug!(
            "pdfinfo {}: {} page(s), title {:?}",
            path.display(),
            info.pages,
            info.title
        );

        if info.pages == 0 {
            return Ok(LayoutDocument {
                pages: Vec::new(),
                metadata_title: info.title,
            });
        }

        // Plain text, one form feed after each page
        let text = run_tool(
            "pdftotext",
            [
                OsStr::new("-enc"),
                OsStr::new("UTF-8"),
                path.as_os_str(),
                OsStr::new("-"),
            ],
        )?;
        let page_texts = split_pages(&text, info.pages);

        let xml = run_tool("pdftohtml", pdftohtml_args(path))?;
        let mut layout = parse_layout_xml(&xml)?;

        let pages = page_texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| PageContent {
                page_number: i + 1,
                lines: layout.remove(&(i + 1)).unwrap_or_default(),
                text,
            })
            .collect();

        Ok(LayoutDocument {
            pages,
            metadata_title: info.title,
        })
    }

    fn backend_name(&self) -> &str {
        "poppler"
    }
}

/// Arguments for the XML layout dump of `path`.
///
/// `-nodrm` is needed for copy-restricted PDFs, which pdftohtml otherwise
/// refuses even though their text is readable.
fn pdftohtml_args(path: &Path) -> [&OsStr; 6] {
    [
        OsStr::new("-xml"),
        OsStr::new("-i"),
        OsStr::new("-q"),
        OsStr::new("-nodrm"),
        OsStr::new("-stdout"),
        path.as_os_str(),
    ]
}

/// Run a poppler tool and return its stdout as (lossy) UTF-8.
fn run_tool<I, S>(tool: &str, args: I) -> Result<String, OutlineError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::new(tool)
        .args(args)
        .output()
        .map_err(|e| tool_error(tool, e))?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(OutlineError::ToolFailed {
            tool: tool.to_string(),
            code,
            stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[derive(Debug, Clone, Default, PartialEq)]
struct PdfInfo {
    pages: usize,
    title: Option<String>,
}

fn parse_pdfinfo(output: &str) -> PdfInfo {
    let mut info = PdfInfo::default();

    for line in output.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "Pages" => info.pages = value.parse().unwrap_or(0),
            "Title" if !value.is_empty() => info.title = Some(value.to_string()),
            _ => {}
        }
    }

    info
}

/// Split pdftotext output into exactly `pages` page texts.
///
/// pdftotext terminates every page with a form feed; missing trailing pages
/// come back empty.
fn split_pages(text: &str, pages: usize) -> Vec<String> {
    let mut out: Vec<String> = text
        .split('\x0c')
        .take(pages)
        .map(|p| p.to_string())
        .collect();
    out.resize(pages, String::new());
    out
}
