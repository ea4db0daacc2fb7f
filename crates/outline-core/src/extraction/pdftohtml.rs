use crate::error::OutlineError;
use crate::model::Line;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::{BTreeMap, HashMap};

/// Parse `pdftohtml -xml` output into layout lines keyed by page number.
///
/// Each `<text>` element is one run of text in a single font. Consecutive
/// runs whose boxes share most of their vertical extent form one line; the
/// line's size is the largest run size and it is bold if any run is.
pub fn parse_layout_xml(xml: &str) -> Result<BTreeMap<usize, Vec<Line>>, OutlineError> {
    let mut reader = Reader::from_str(xml);

    let mut fonts: HashMap<String, FontSpec> = HashMap::new();
    let mut pages: BTreeMap<usize, Vec<Line>> = BTreeMap::new();
    let mut page_number: Option<usize> = None;
    let mut runs: Vec<TextRun> = Vec::new();
    let mut current: Option<TextRun> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            OutlineError::Extraction(format!(
                "pdftohtml XML error at byte {}: {}",
                reader.buffer_position(),
                e
            ))
        })?;

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let is_empty = matches!(event, Event::Empty(_));
                match e.name().as_ref() {
                    b"page" => {
                        page_number = attr(e, "number").and_then(|n| n.parse().ok());
                        runs.clear();
                    }
                    b"fontspec" => {
                        if let Some(id) = attr(e, "id") {
                            fonts.insert(id, FontSpec::from_tag(e));
                        }
                    }
                    b"text" if !is_empty => {
                        let font = attr(e, "font").and_then(|id| fonts.get(&id));
                        current = Some(TextRun {
                            top: attr_f32(e, "top").unwrap_or(0.0),
                            height: attr_f32(e, "height").unwrap_or(0.0),
                            size: font.map(|f| f.size).unwrap_or(0.0),
                            bold: font.map(|f| f.bold).unwrap_or(false),
                            text: String::new(),
                        });
                    }
                    b"b" => {
                        if let Some(run) = current.as_mut() {
                            run.bold = true;
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(t) => {
                if let Some(run) = current.as_mut() {
                    match t.unescape() {
                        Ok(s) => run.text.push_str(&s),
                        Err(_) => run.text.push_str(&String::from_utf8_lossy(&t)),
                    }
                }
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"text" => {
                    if let Some(run) = current.take() {
                        if !run.text.trim().is_empty() {
                            runs.push(run);
                        }
                    }
                }
                b"page" => {
                    if let Some(page) = page_number.take() {
                        pages.insert(page, group_lines(&runs, page));
                    }
                    runs.clear();
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(pages)
}

#[derive(Debug, Clone, Copy)]
struct FontSpec {
    size: f32,
    bold: bool,
}

impl FontSpec {
    fn from_tag(e: &BytesStart<'_>) -> Self {
        let family = attr(e, "family").unwrap_or_default().to_lowercase();
        FontSpec {
            size: attr_f32(e, "size").unwrap_or(0.0),
            bold: family.contains("bold") || family.contains("black") || family.contains("heavy"),
        }
    }
}

#[derive(Debug, Clone)]
struct TextRun {
    top: f32,
    height: f32,
    size: f32,
    bold: bool,
    text: String,
}

impl TextRun {
    /// Runs share a line when their vertical overlap covers at least half
    /// of the shorter run.
    fn same_line(&self, other: &TextRun) -> bool {
        let overlap = (self.top + self.height).min(other.top + other.height)
            - self.top.max(other.top);
        let shorter = self.height.min(other.height);
        if shorter <= 0.0 {
            return self.top == other.top;
        }
        overlap >= shorter / 2.0
    }
}

fn group_lines(runs: &[TextRun], page: usize) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    let mut last: Option<&TextRun> = None;

    for run in runs {
        let continues = last.is_some_and(|prev| prev.same_line(run));
        last = Some(run);

        if continues {
            if let Some(line) = lines.last_mut() {
                line.text.push(' ');
                line.text.push_str(&run.text);
                line.size = line.size.max(run.size);
                line.bold |= run.bold;
                continue;
            }
        }
        lines.push(Line::new(run.text.clone(), run.size, run.bold, page));
    }

    lines
}

fn attr(e: &BytesStart<'_>, name: &str) -> Option<String> {
    e.try_get_attribute(name)
        .ok()
        .flatten()
        .and_then(|a| a.unescape_value().ok())
        .map(|v| v.into_owned())
}

fn attr_f32(e: &BytesStart<'_>, name: &str) -> Option<f32> {
    attr(e, name)?.trim().parse().ok()
}
