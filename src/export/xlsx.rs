// src/export/xlsx.rs

use crate::core::aggregator::MonthlyRecap;
use crate::errors::AppResult;
use crate::export::model::{recap_headers, recap_rows};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Fixed leading columns before the day columns.
const LEADING_COLUMNS: usize = 4;

/// Monthly recap as XLSX with a styled header, frozen panes, banded rows
/// and auto-sized columns.
pub fn write_recap_xlsx(recap: &MonthlyRecap, path: &Path, marker: &str) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(recap.file_stamp())?;

    let headers = recap_headers(recap);
    let rows = recap_rows(recap, marker);

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, header.as_str(), &header_format)?;
    }

    worksheet.set_freeze_panes(1, LEADING_COLUMNS as u16)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);
    let last_col = headers.len().saturating_sub(1);

    for (row_index, values) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        let text_fmt = Format::new()
            .set_background_color(band)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);
        let center_fmt = text_fmt.clone().set_align(FormatAlign::Center);

        for (col, value) in values.iter().enumerate() {
            let c = col as u16;
            if col == last_col {
                let total: f64 = value.parse().unwrap_or(0.0);
                worksheet.write_with_format(row, c, total, &center_fmt)?;
            } else if col >= LEADING_COLUMNS {
                worksheet.write_with_format(row, c, value.as_str(), &center_fmt)?;
            } else {
                worksheet.write_with_format(row, c, value.as_str(), &text_fmt)?;
            }
            col_widths[col] = col_widths[col].max(value.width());
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    workbook.save(path)?;
    Ok(())
}
