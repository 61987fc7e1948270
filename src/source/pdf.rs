//! [`TextSource`] backed by `lopdf`.
//!
//! Both capabilities come from one walk over the page content stream that
//! tracks the text matrix and the current font, producing one run per
//! text-showing operator. Plain text joins those runs, starting a new line
//! whenever the baseline moves.

use std::collections::BTreeMap;
use std::path::Path;

use lopdf::{Dictionary, Document as LopdfDocument, Encoding, Object, ObjectId, Stream};

use super::{StyledRun, TextSource};
use crate::detect::sniff_pdf_version;
use crate::error::{Error, Result};

/// TJ adjustments beyond this many thousandths of an em read as a word gap.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// Font size assumed until the first `Tf` operator.
const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Baseline shift, in user space units, that starts a new line of text.
const LINE_TOLERANCE: f32 = 0.5;

/// A styled run with the baseline it was drawn on.
#[derive(Debug, Clone)]
struct PlacedRun {
    run: StyledRun,
    baseline: f32,
}

/// A PDF document loaded with lopdf.
pub struct LopdfSource {
    doc: LopdfDocument,
    pages: BTreeMap<u32, ObjectId>,
}

impl LopdfSource {
    /// Open a PDF file, checking its header first.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let version = sniff_pdf_version(path)?;
        log::debug!("Opening {} (PDF {})", path.display(), version);

        let doc = LopdfDocument::load(path)?;
        Self::from_document(doc)
    }

    /// Load a PDF from an in-memory byte slice.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data)?;
        Self::from_document(doc)
    }

    fn from_document(doc: LopdfDocument) -> Result<Self> {
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }
        let pages = doc.get_pages();
        Ok(Self { doc, pages })
    }

    fn page_id(&self, page: u32) -> Result<ObjectId> {
        self.pages
            .get(&page)
            .copied()
            .ok_or(Error::PageOutOfRange(page, self.page_count()))
    }

    /// Raw (decompressed) content stream bytes for a page.
    fn page_content(&self, page_id: ObjectId) -> Result<Vec<u8>> {
        let page_dict = self
            .doc
            .get_dictionary(page_id)
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        let contents = match page_dict.get(b"Contents") {
            Ok(contents) => contents,
            // A page without content is blank, not broken.
            Err(_) => return Ok(Vec::new()),
        };

        match contents {
            Object::Reference(r) => match self.doc.get_object(*r) {
                Ok(Object::Stream(s)) => Ok(stream_bytes(s)),
                _ => Err(Error::PdfParse("Invalid content stream".to_string())),
            },
            Object::Array(arr) => {
                let mut content = Vec::new();
                for obj in arr {
                    if let Object::Reference(r) = obj {
                        if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                            content.extend_from_slice(&stream_bytes(s));
                            content.push(b' ');
                        }
                    }
                }
                Ok(content)
            }
            _ => Err(Error::PdfParse("Invalid content stream".to_string())),
        }
    }

    /// Runs of a page with their baselines, in content stream order.
    fn placed_runs(&self, page: u32) -> Result<Vec<PlacedRun>> {
        let page_id = self.page_id(page)?;
        let fonts = self
            .doc
            .get_page_fonts(page_id)
            .map_err(|e| Error::PdfParse(e.to_string()))?;
        let content = self.page_content(page_id)?;
        self.collect_runs(&content, &fonts)
    }

    /// Walk a content stream and collect one run per text-showing operator.
    fn collect_runs(
        &self,
        content: &[u8],
        fonts: &BTreeMap<Vec<u8>, &Dictionary>,
    ) -> Result<Vec<PlacedRun>> {
        let content =
            lopdf::content::Content::decode(content).map_err(|e| Error::PdfParse(e.to_string()))?;

        let mut runs = Vec::new();
        let mut encoding: Option<Encoding> = None;
        let mut font_size = DEFAULT_FONT_SIZE;
        let mut matrix = TextMatrix::default();
        let mut in_text_block = false;

        for op in &content.operations {
            let shown = match op.operator.as_str() {
                "BT" => {
                    in_text_block = true;
                    matrix = TextMatrix::default();
                    None
                }
                "ET" => {
                    in_text_block = false;
                    None
                }
                "Tf" => {
                    if let [Object::Name(name), size, ..] = op.operands.as_slice() {
                        encoding = fonts
                            .get(name)
                            .and_then(|font| font.get_font_encoding(&self.doc).ok());
                        font_size = get_number(size).unwrap_or(DEFAULT_FONT_SIZE);
                    }
                    None
                }
                "TL" => {
                    if let Some(leading) = op.operands.first().and_then(get_number) {
                        matrix.leading = leading;
                    }
                    None
                }
                "Td" | "TD" => {
                    if let [tx, ty, ..] = op.operands.as_slice() {
                        let ty = get_number(ty).unwrap_or(0.0);
                        if op.operator == "TD" {
                            matrix.leading = -ty;
                        }
                        matrix.translate(get_number(tx).unwrap_or(0.0), ty);
                    }
                    None
                }
                "Tm" => {
                    if op.operands.len() >= 6 {
                        let n: Vec<f32> = op
                            .operands
                            .iter()
                            .take(6)
                            .map(|o| get_number(o).unwrap_or(0.0))
                            .collect();
                        matrix.set(n[0], n[1], n[2], n[3], n[4], n[5]);
                    }
                    None
                }
                "T*" => {
                    matrix.next_line();
                    None
                }
                "Tj" => match op.operands.first() {
                    Some(Object::String(bytes, _)) => Some(decode(encoding.as_ref(), bytes)),
                    _ => None,
                },
                "TJ" => match op.operands.first() {
                    Some(Object::Array(items)) => Some(decode_tj_array(encoding.as_ref(), items)),
                    _ => None,
                },
                "'" | "\"" => {
                    matrix.next_line();
                    let idx = if op.operator == "\"" { 2 } else { 0 };
                    match op.operands.get(idx) {
                        Some(Object::String(bytes, _)) => Some(decode(encoding.as_ref(), bytes)),
                        _ => None,
                    }
                }
                _ => None,
            };

            if let Some(text) = shown {
                if in_text_block && !text.trim().is_empty() {
                    runs.push(PlacedRun {
                        run: StyledRun::new(text, font_size * matrix.vertical_scale()),
                        baseline: matrix.f,
                    });
                }
            }
        }

        Ok(runs)
    }
}

impl TextSource for LopdfSource {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_text(&self, page: u32) -> Result<String> {
        self.page_id(page)?;
        let runs = self
            .placed_runs(page)
            .map_err(|e| Error::TextExtract(format!("Page {}: {}", page, e)))?;
        Ok(join_lines(&runs))
    }

    fn styled_runs(&self, page: u32) -> Result<Vec<StyledRun>> {
        Ok(self
            .placed_runs(page)?
            .into_iter()
            .map(|placed| placed.run)
            .collect())
    }
}

/// Stream bytes, decompressed when the stream declares a filter.
fn stream_bytes(stream: &Stream) -> Vec<u8> {
    stream
        .decompressed_content()
        .unwrap_or_else(|_| stream.content.clone())
}

/// Join runs into plain text: runs on one baseline are concatenated, a
/// baseline change starts a new line.
fn join_lines(runs: &[PlacedRun]) -> String {
    let mut text = String::new();
    let mut baseline: Option<f32> = None;

    for placed in runs {
        if let Some(previous) = baseline {
            if (placed.baseline - previous).abs() > LINE_TOLERANCE {
                text.push('\n');
            }
        }
        text.push_str(&placed.run.text);
        baseline = Some(placed.baseline);
    }

    text
}

/// Decode a string operand with the font encoding, falling back to a
/// byte-level guess when the font has none.
fn decode(encoding: Option<&Encoding>, bytes: &[u8]) -> String {
    match encoding {
        Some(enc) => LopdfDocument::decode_text(enc, bytes).unwrap_or_default(),
        None => decode_text_simple(bytes),
    }
}

/// Decode a TJ array, turning large negative adjustments into spaces.
fn decode_tj_array(encoding: Option<&Encoding>, items: &[Object]) -> String {
    let mut combined = String::new();
    for item in items {
        match item {
            Object::String(bytes, _) => combined.push_str(&decode(encoding, bytes)),
            other => {
                let adjustment = -get_number(other).unwrap_or(0.0);
                if adjustment > TJ_SPACE_THRESHOLD
                    && !combined.is_empty()
                    && !combined.ends_with(' ')
                    && !combined.ends_with('\u{00A0}')
                {
                    combined.push(' ');
                }
            }
        }
    }
    combined
}

/// Simple text decoding fallback when no encoding is available.
fn decode_text_simple(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        // Latin-1
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

fn get_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Text matrix state between `BT` and `ET`.
#[derive(Debug, Clone, Copy)]
struct TextMatrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
    leading: f32,
}

impl Default for TextMatrix {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
            leading: 0.0,
        }
    }
}

impl TextMatrix {
    fn set(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        self.a = a;
        self.b = b;
        self.c = c;
        self.d = d;
        self.e = e;
        self.f = f;
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.e += tx * self.a + ty * self.c;
        self.f += tx * self.b + ty * self.d;
    }

    fn next_line(&mut self) {
        let leading = self.leading;
        self.translate(0.0, -leading);
    }

    /// Length of the text-space y axis, i.e. how much the font size is scaled.
    fn vertical_scale(&self) -> f32 {
        let scale = (self.c * self.c + self.d * self.d).sqrt();
        if scale > 0.0 {
            scale
        } else {
            1.0
        }
    }
}
