// PDF rendering of lookup reports
//
// Layout units are points; the cursor runs top-down and is flipped into PDF
// space when an operation is emitted.

use crate::error::ReportError;
use crate::model::{IpInfo, PhoneInfo};
use crate::report::{self, DISCLAIMER, MAP_NOTE, Section, TOOL_NAME};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

const PAGE_WIDTH: f32 = 595.28;
const PAGE_HEIGHT: f32 = 841.89;
const MM: f32 = 72.0 / 25.4;
const SIDE_MARGIN: f32 = 10.0 * MM;
const TOP_MARGIN: f32 = 10.0 * MM;
const BOTTOM_MARGIN: f32 = 15.0 * MM;

const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";
const FONT_ITALIC: &str = "F3";
const WATERMARK_STATE: &str = "GS1";
const WATERMARK_OPACITY: f32 = 0.35;
const WATERMARK_SIZE: f32 = 24.0;

/// Rough Helvetica advance per point of font size, good enough for alignment
const AVERAGE_GLYPH_WIDTH: f32 = 0.52;

#[derive(Clone, Copy, PartialEq)]
enum Align {
    Left,
    Center,
    Right,
}

struct PdfBuilder {
    pages: Vec<Vec<Operation>>,
    cursor: f32,
    watermark: String,
}

impl PdfBuilder {
    fn new(watermark: &str) -> Self {
        let mut builder = Self {
            pages: Vec::new(),
            cursor: TOP_MARGIN,
            watermark: watermark.to_string(),
        };
        builder.add_page();
        builder
    }

    fn add_page(&mut self) {
        self.pages.push(watermark_operations(&self.watermark));
        self.cursor = TOP_MARGIN;
    }

    fn ensure_space(&mut self, height: f32) {
        if self.cursor + height > PAGE_HEIGHT - BOTTOM_MARGIN {
            self.add_page();
        }
    }

    fn ops(&mut self) -> &mut Vec<Operation> {
        // add_page runs in new(), so there is always a current page
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn ln(&mut self, height: f32) {
        self.cursor += height;
    }

    /// Full-width cell, optionally shaded and boxed, then move below it
    fn cell(&mut self, text: &str, font: &str, size: f32, height: f32, align: Align, shaded: bool) {
        self.ensure_space(height);
        let top = self.cursor;
        let width = PAGE_WIDTH - 2.0 * SIDE_MARGIN;

        if shaded {
            let y = PAGE_HEIGHT - top - height;
            let ops = self.ops();
            ops.push(Operation::new("q", vec![]));
            ops.push(Operation::new("g", vec![(240.0f32 / 255.0).into()]));
            ops.push(Operation::new("G", vec![0.0f32.into()]));
            ops.push(Operation::new(
                "re",
                vec![SIDE_MARGIN.into(), y.into(), width.into(), height.into()],
            ));
            ops.push(Operation::new("B", vec![]));
            ops.push(Operation::new("Q", vec![]));
        }

        let text_width = estimate_width(text, size);
        let x = match align {
            Align::Left => SIDE_MARGIN + 2.0,
            Align::Center => SIDE_MARGIN + (width - text_width) / 2.0,
            Align::Right => SIDE_MARGIN + width - text_width - 2.0,
        };
        let baseline = PAGE_HEIGHT - top - height / 2.0 - size * 0.35;

        let ops = self.ops();
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
        ops.push(Operation::new("Td", vec![x.into(), baseline.into()]));
        ops.push(Operation::new("Tj", vec![pdf_string(text)]));
        ops.push(Operation::new("ET", vec![]));

        self.cursor += height;
    }

    fn title(&mut self, title: &str, timestamp: &str) {
        self.cell(title, FONT_BOLD, 20.0, 10.0 * MM, Align::Center, false);
        self.ln(5.0 * MM);
        self.cell(
            &format!("Generated on: {}", timestamp),
            FONT_ITALIC,
            10.0,
            10.0 * MM,
            Align::Right,
            false,
        );
        self.ln(10.0 * MM);
    }

    fn section(&mut self, title: &str, lines: &[String]) {
        // keep a header together with at least its first line
        self.ensure_space(10.0 * MM + 5.0 * MM + 8.0 * MM);
        self.cell(title, FONT_BOLD, 14.0, 10.0 * MM, Align::Left, true);
        self.ln(5.0 * MM);
        for line in lines {
            self.cell(line, FONT_REGULAR, 12.0, 8.0 * MM, Align::Left, false);
        }
        self.ln(10.0 * MM);
    }

    fn finish(self) -> Result<Vec<u8>, ReportError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(font_dictionary("Helvetica"));
        let bold_id = doc.add_object(font_dictionary("Helvetica-Bold"));
        let italic_id = doc.add_object(font_dictionary("Helvetica-Oblique"));
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                FONT_REGULAR => regular_id,
                FONT_BOLD => bold_id,
                FONT_ITALIC => italic_id,
            },
            "ExtGState" => dictionary! {
                WATERMARK_STATE => dictionary! {
                    "Type" => "ExtGState",
                    "ca" => WATERMARK_OPACITY,
                    "CA" => WATERMARK_OPACITY,
                },
            },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for operations in self.pages {
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let media_box: Vec<Object> = vec![
            0.0f32.into(),
            0.0f32.into(),
            PAGE_WIDTH.into(),
            PAGE_HEIGHT.into(),
        ];
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => media_box,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        Ok(buffer)
    }
}

fn font_dictionary(base_font: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

/// Diagonal light-gray stamp across the middle of the page
fn watermark_operations(text: &str) -> Vec<Operation> {
    let (sin, cos) = std::f32::consts::FRAC_PI_4.sin_cos();
    let half_width = estimate_width(text, WATERMARK_SIZE) / 2.0;
    vec![
        Operation::new("q", vec![]),
        Operation::new("gs", vec![WATERMARK_STATE.into()]),
        Operation::new("g", vec![(200.0f32 / 255.0).into()]),
        Operation::new(
            "cm",
            vec![
                cos.into(),
                sin.into(),
                (-sin).into(),
                cos.into(),
                (PAGE_WIDTH / 2.0).into(),
                (PAGE_HEIGHT / 2.0).into(),
            ],
        ),
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![FONT_BOLD.into(), WATERMARK_SIZE.into()]),
        Operation::new("Td", vec![(-half_width).into(), 0.0f32.into()]),
        Operation::new("Tj", vec![pdf_string(text)]),
        Operation::new("ET", vec![]),
        Operation::new("Q", vec![]),
    ]
}

fn estimate_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVERAGE_GLYPH_WIDTH
}

/// WinAnsi bytes for a literal string; characters outside Latin-1 become `?`
fn pdf_string(text: &str) -> Object {
    let bytes = text
        .chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect();
    Object::String(bytes, StringFormat::Literal)
}

fn render(
    title: &str,
    timestamp: &str,
    sections: &[Section],
    notes: &[String],
) -> Result<Vec<u8>, ReportError> {
    let mut builder = PdfBuilder::new(&format!("{} | Lookup Report", TOOL_NAME));
    builder.title(title, timestamp);

    for section in sections {
        builder.section(&section.title, &section.lines);
    }

    // disclaimer always opens its own page
    builder.add_page();
    let mut closing: Vec<String> = Vec::new();
    let mut notes = notes.iter();
    if let Some(first) = notes.next() {
        closing.push(first.clone());
        closing.push(String::new());
    }
    closing.extend(notes.map(|n| format!("* {}", n)));
    closing.push(format!("* {}", MAP_NOTE));
    closing.push(String::new());
    closing.push(DISCLAIMER.to_string());
    builder.section(
        &format!("{}. Additional Information", sections.len() + 1),
        &closing,
    );

    builder.finish()
}

pub fn phone_pdf_report(info: &PhoneInfo, timestamp: &str) -> Result<Vec<u8>, ReportError> {
    render(
        "Phone Number Analysis Report",
        timestamp,
        &report::phone_sections(info),
        &report::phone_notes(),
    )
}

pub fn ip_pdf_report(info: &IpInfo, timestamp: &str) -> Result<Vec<u8>, ReportError> {
    render(
        "IP Address Analysis Report",
        timestamp,
        &report::ip_sections(info),
        &report::ip_notes(),
    )
}
