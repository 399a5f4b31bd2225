use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

/// Small table-oriented PDF writer (A4, Helvetica).
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Page being drawn, with the current vertical cursor.
struct PageCursor {
    content: Content,
    y: f32,
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // hand-managed ids
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_font_id).base_font(Name(b"Helvetica-Bold"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 25.0,
            row_h: 14.0,

            next_id,
            font_id,
            bold_font_id,

            font_size: 8.0,
            header_font_size: 8.0,
            title_font_size: 12.0,
        }
    }

    /// Allocate a fresh object id
    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Start a new page and its content stream
    fn new_page(&mut self) -> PageCursor {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(content_id);

            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(Name(b"F1"), self.font_id);
            fonts.pair(Name(b"F2"), self.bold_font_id);
        }

        self.current_content_id = Some(content_id);

        PageCursor {
            content: Content::new(),
            y: self.page_h - self.margin,
        }
    }

    /// Write the stream of the current page
    fn finalize_page(&mut self, cursor: PageCursor) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &cursor.content.finish());
        }
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, bold: bool, text: &str) {
        content.begin_text();
        content.set_font(Name(if bold { b"F2" } else { b"F1" }), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    /// Rough Helvetica width estimate, good enough for centering.
    fn text_width(text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.55
    }

    fn draw_centered(&self, content: &mut Content, y: f32, size: f32, text: &str) {
        let x = ((self.page_w - Self::text_width(text, size)) / 2.0).max(self.margin);
        self.draw_text(content, x, y, size, true, text);
    }

    fn fill_band(&self, content: &mut Content, x: f32, y: f32, w: f32, rgb: (f32, f32, f32)) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(x, y, w, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.0, 0.0, 0.0);
        content.set_line_width(0.5);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        x_start: f32,
        row: &[String],
        font_size: f32,
        bold: bool,
    ) {
        let mut x = x_start;

        for (i, w) in col_widths.iter().enumerate() {
            let text = row.get(i).map(String::as_str).unwrap_or("");
            self.draw_text(content, x + 3.0, y + 4.0, font_size, bold, text);
            self.draw_cell_borders(content, x, y, *w, self.row_h);
            x += w;
        }
    }

    /// Column widths from header + content, scaled down to fit the page
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.len() as f32 * 5.2 + 8.0)
            .collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = (cell.chars().count() as f32 * 4.8 + 8.0).max(widths[i]);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn table_x(&self, col_widths: &[f32]) -> f32 {
        let total: f32 = col_widths.iter().sum();
        ((self.page_w - total) / 2.0).max(self.margin)
    }

    fn draw_header_row(&self, cursor: &mut PageCursor, col_widths: &[f32], headers: &[&str]) {
        let x = self.table_x(col_widths);
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        cursor.y -= self.row_h;
        self.fill_band(
            &mut cursor.content,
            x,
            cursor.y,
            col_widths.iter().sum(),
            (0.68, 0.85, 0.90),
        );
        self.draw_row(
            &mut cursor.content,
            cursor.y,
            col_widths,
            x,
            &header_row,
            self.header_font_size,
            true,
        );
    }

    /// Titled, multi-page table followed by an optional one-row summary
    /// table. The header row repeats on every page.
    pub fn write_report(
        &mut self,
        title_lines: &[String],
        headers: &[&str],
        rows: &[Vec<String>],
        summary: Option<(&[&str], Vec<String>)>,
    ) {
        let col_widths = self.compute_col_widths(headers, rows);
        let x = self.table_x(&col_widths);

        let mut cursor = self.new_page();
        for line in title_lines {
            cursor.y -= self.title_font_size + 4.0;
            self.draw_centered(&mut cursor.content, cursor.y, self.title_font_size, line);
        }
        cursor.y -= 10.0;
        self.draw_header_row(&mut cursor, &col_widths, headers);

        for row in rows {
            if cursor.y - self.row_h < self.margin {
                self.finalize_page(cursor);
                cursor = self.new_page();
                self.draw_header_row(&mut cursor, &col_widths, headers);
            }
            cursor.y -= self.row_h;
            self.draw_row(
                &mut cursor.content,
                cursor.y,
                &col_widths,
                x,
                row,
                self.font_size,
                false,
            );
        }

        if let Some((sum_headers, sum_row)) = summary {
            let sum_widths = self.compute_col_widths(sum_headers, std::slice::from_ref(&sum_row));
            if cursor.y - 12.0 - 2.0 * self.row_h < self.margin {
                self.finalize_page(cursor);
                cursor = self.new_page();
            }
            cursor.y -= 12.0;
            self.draw_header_row(&mut cursor, &sum_widths, sum_headers);
            cursor.y -= self.row_h;
            let sx = self.table_x(&sum_widths);
            self.draw_row(
                &mut cursor.content,
                cursor.y,
                &sum_widths,
                sx,
                &sum_row,
                self.font_size + 1.0,
                false,
            );
        }

        self.finalize_page(cursor);
    }

    /// Close the document and return its bytes
    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let count = self.page_refs.len() as i32;
        self.pdf
            .pages(self.pages_id)
            .count(count)
            .kids(self.page_refs.iter().copied());
        self.pdf.finish()
    }
}
