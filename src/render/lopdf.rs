// src/render/lopdf.rs
use super::{DocumentRenderer, RenderError};
use crate::layout::fonts::{StandardFont, to_win_ansi};
use crate::layout::geom::{Color, Point, Rect, Size};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};
use std::io::Write;

/// Bézier control-point factor for approximating a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// An in-memory PDF renderer using the `lopdf` library.
/// It builds the document's object graph and writes it out in [`finish`](Self::finish).
pub struct LopdfDocumentRenderer {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    page: Option<PageContext>,
}

impl LopdfDocumentRenderer {
    pub fn new() -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();

        let mut font_dict = Dictionary::new();
        for font in StandardFont::ALL {
            let font_id = document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(font.resource_name(), font_id);
        }
        // One resources dictionary shared by every page.
        let resources_id = document.add_object(dictionary! { "Font" => font_dict });

        Self {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            page: None,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    fn page_mut(&mut self) -> Result<&mut PageContext, RenderError> {
        self.page
            .as_mut()
            .ok_or_else(|| RenderError::Other("No page started".into()))
    }

    /// Writes the page tree, catalog and trailer, then the whole document.
    /// Consumes the renderer so a document is finalized exactly once.
    pub fn finish<W: Write>(mut self, mut writer: W) -> Result<W, RenderError> {
        if self.page.is_some() {
            return Err(RenderError::Other("Page was never ended".into()));
        }

        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::Reference(*id)).collect();
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.page_ids.len() as i64,
        };
        self.document
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self
            .document
            .add_object(dictionary! { "Type" => "Catalog", "Pages" => self.pages_id });
        self.document.trailer.set("Root", catalog_id);

        self.document.save_to(&mut writer)?;
        writer.flush()?;
        Ok(writer)
    }
}

impl Default for LopdfDocumentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for LopdfDocumentRenderer {
    fn begin_page(&mut self, size: Size) -> Result<(), RenderError> {
        if self.page.is_some() {
            return Err(RenderError::Other("Previous page was never ended".into()));
        }
        self.page = Some(PageContext::new(size));
        Ok(())
    }

    fn set_stroke(&mut self, color: Color, width: f32) -> Result<(), RenderError> {
        self.page_mut()?.set_stroke(color, width);
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point) -> Result<(), RenderError> {
        let page = self.page_mut()?;
        page.push("m", vec![from.x.into(), from.y.into()]);
        page.push("l", vec![to.x.into(), to.y.into()]);
        page.push("S", vec![]);
        Ok(())
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32) -> Result<(), RenderError> {
        let page = self.page_mut()?;
        let max_radius = (rect.width.min(rect.height) / 2.0).max(0.0);
        let r = radius.clamp(0.0, max_radius);
        if r == 0.0 {
            page.push("re", vec![rect.x.into(), rect.y.into(), rect.width.into(), rect.height.into()]);
            page.push("S", vec![]);
            return Ok(());
        }

        let (x0, y0, x1, y1) = (rect.x, rect.y, rect.right(), rect.top());
        let k = r * KAPPA;
        page.push("m", vec![(x0 + r).into(), y0.into()]);
        page.push("l", vec![(x1 - r).into(), y0.into()]);
        page.curve(x1 - r + k, y0, x1, y0 + r - k, x1, y0 + r);
        page.push("l", vec![x1.into(), (y1 - r).into()]);
        page.curve(x1, y1 - r + k, x1 - r + k, y1, x1 - r, y1);
        page.push("l", vec![(x0 + r).into(), y1.into()]);
        page.curve(x0 + r - k, y1, x0, y1 - r + k, x0, y1 - r);
        page.push("l", vec![x0.into(), (y0 + r).into()]);
        page.curve(x0, y0 + r - k, x0 + r - k, y0, x0 + r, y0);
        page.push("h", vec![]);
        page.push("S", vec![]);
        Ok(())
    }

    fn draw_text(
        &mut self,
        font: StandardFont,
        size: f32,
        origin: Point,
        text: &str,
    ) -> Result<(), RenderError> {
        if text.is_empty() {
            return Ok(());
        }
        let page = self.page_mut()?;
        page.set_fill(Color::BLACK);
        page.push("BT", vec![]);
        page.push(
            "Tf",
            vec![Object::Name(font.resource_name().as_bytes().to_vec()), size.into()],
        );
        page.push("Td", vec![origin.x.into(), origin.y.into()]);
        page.push(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        page.push("ET", vec![]);
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        let page = self
            .page
            .take()
            .ok_or_else(|| RenderError::Other("No page started".into()))?;
        let size = page.size;
        let content = page.content.encode()?;
        let content_id = self.document.add_object(Stream::new(dictionary! {}, content));

        let media_box: Vec<Object> = vec![0.into(), 0.into(), size.width.into(), size.height.into()];
        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => media_box,
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.page_ids.push(page_id);
        log::debug!("Wrote page {}", self.page_ids.len());
        Ok(())
    }
}

/// Operations for the page being drawn, plus the graphics state already set
/// so redundant operators are not emitted.
struct PageContext {
    size: Size,
    content: Content,
    stroke: Option<(Color, f32)>,
    fill: Option<Color>,
}

impl PageContext {
    fn new(size: Size) -> Self {
        Self {
            size,
            content: Content { operations: vec![] },
            stroke: None,
            fill: None,
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn curve(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
        self.push(
            "c",
            vec![x1.into(), y1.into(), x2.into(), y2.into(), x3.into(), y3.into()],
        );
    }

    fn set_stroke(&mut self, color: Color, width: f32) {
        if self.stroke == Some((color, width)) {
            return;
        }
        let [r, g, b] = color.to_unit();
        self.push("w", vec![width.into()]);
        self.push("RG", vec![r.into(), g.into(), b.into()]);
        self.stroke = Some((color, width));
    }

    fn set_fill(&mut self, color: Color) {
        if self.fill == Some(color) {
            return;
        }
        let [r, g, b] = color.to_unit();
        self.push("rg", vec![r.into(), g.into(), b.into()]);
        self.fill = Some(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter() -> Size {
        Size::new(612.0, 792.0)
    }

    #[test]
    fn drawing_without_a_page_fails() {
        let mut renderer = LopdfDocumentRenderer::new();
        let err = renderer
            .stroke_line(Point::new(0.0, 0.0), Point::new(1.0, 1.0))
            .unwrap_err();
        assert!(err.to_string().contains("No page started"));
    }

    #[test]
    fn finish_rejects_an_open_page() {
        let mut renderer = LopdfDocumentRenderer::new();
        renderer.begin_page(letter()).unwrap();
        assert!(renderer.finish(Vec::new()).is_err());
    }

    #[test]
    fn finished_document_round_trips_through_lopdf() {
        let mut renderer = LopdfDocumentRenderer::new();
        for _ in 0..2 {
            renderer.begin_page(letter()).unwrap();
            renderer.set_stroke(Color::BLACK, 1.0).unwrap();
            renderer
                .stroke_rounded_rect(Rect::new(20.0, 20.0, 100.0, 60.0), 10.0)
                .unwrap();
            renderer
                .draw_text(StandardFont::HelveticaBold, 12.0, Point::new(30.0, 60.0), "Loot:")
                .unwrap();
            renderer.end_page().unwrap();
        }
        assert_eq!(renderer.page_count(), 2);

        let bytes = renderer.finish(Vec::new()).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    fn path_ops(renderer: &LopdfDocumentRenderer) -> Vec<Operation> {
        renderer.page.as_ref().unwrap().content.operations.clone()
    }

    fn coords(op: &Operation) -> Vec<f32> {
        op.operands.iter().map(|o| o.as_float().unwrap()).collect()
    }

    #[test]
    fn oversized_corner_radius_is_clamped_inside_the_box() {
        let rect = Rect::new(20.0, 20.0, 100.0, 60.0);
        let mut renderer = LopdfDocumentRenderer::new();
        renderer.begin_page(letter()).unwrap();
        renderer.stroke_rounded_rect(rect, 500.0).unwrap();

        let ops = path_ops(&renderer);
        assert_eq!(ops.iter().filter(|op| op.operator == "c").count(), 4);
        // Radius 30 is half the height, so the path starts 30pt in from the left.
        assert_eq!(ops[0].operator, "m");
        assert_eq!(coords(&ops[0]), vec![50.0, 20.0]);
        for op in ops.iter().filter(|op| matches!(op.operator.as_str(), "m" | "l" | "c")) {
            for xy in coords(op).chunks(2) {
                assert!((rect.x..=rect.right()).contains(&xy[0]), "{:?}", op);
                assert!((rect.y..=rect.top()).contains(&xy[1]), "{:?}", op);
            }
        }
    }

    #[test]
    fn zero_radius_draws_a_plain_rectangle() {
        let mut renderer = LopdfDocumentRenderer::new();
        renderer.begin_page(letter()).unwrap();
        renderer.stroke_rounded_rect(Rect::new(20.0, 20.0, 100.0, 60.0), 0.0).unwrap();
        renderer.stroke_rounded_rect(Rect::new(20.0, 20.0, 100.0, 60.0), -4.0).unwrap();

        let ops: Vec<String> = path_ops(&renderer).into_iter().map(|op| op.operator).collect();
        assert_eq!(ops, ["re", "S", "re", "S"]);
    }

    #[test]
    fn stroke_state_is_not_repeated() {
        let mut page = PageContext::new(letter());
        page.set_stroke(Color::GREY, 0.5);
        page.set_stroke(Color::GREY, 0.5);
        page.set_stroke(Color::BLACK, 0.5);
        let ops: Vec<&str> = page.content.operations.iter().map(|op| op.operator.as_str()).collect();
        assert_eq!(ops, ["w", "RG", "w", "RG"]);
    }
}
