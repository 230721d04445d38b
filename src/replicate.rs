use log::{debug, warn};
use umya_spreadsheet::Worksheet;
use umya_spreadsheet::helper::coordinate::string_from_column_index;

use crate::bundle::StyleBundle;
use crate::error::Result;
use crate::rows::RowSpan;

/// 一次样式套用的统计结果。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplicationReport {
    pub columns: u32,
    pub rows: usize,
    pub copied: usize,
    pub skipped: usize,
}

/// 把模板行（`source_row`）的样式复制到 `targets` 中的每一行。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleReplicator {
    source_row: u32,
    targets: RowSpan,
}

impl StyleReplicator {
    pub fn new(source_row: u32, targets: RowSpan) -> Self {
        Self {
            source_row,
            targets,
        }
    }

    pub fn source_row(&self) -> u32 {
        self.source_row
    }

    pub fn targets(&self) -> RowSpan {
        self.targets
    }

    /// 只处理 1..=max_column 列。来源单元格没有显式样式时，目标单元格保持原样。
    pub fn apply(&self, sheet: &mut Worksheet) -> ReplicationReport {
        let max_column = sheet.get_highest_column();
        if self.targets.contains(self.source_row) {
            warn!(
                "模板行 {} 位于目标范围 {} 之内",
                self.source_row, self.targets
            );
        }

        // 模板行在整个循环中不变，先逐列取出副本
        let templates: Vec<StyleBundle> = (1..=max_column)
            .map(|col| StyleBundle::of_cell(sheet, col, self.source_row))
            .collect();

        let mut report = ReplicationReport {
            columns: max_column,
            rows: self.targets.rows().count(),
            ..Default::default()
        };

        for row in self.targets.rows() {
            for (col, bundle) in (1..=max_column).zip(&templates) {
                if !bundle.has_style() {
                    report.skipped += 1;
                    continue;
                }
                bundle.apply_to(sheet.get_cell_mut((col, row)));
                report.copied += 1;
            }
        }

        debug!(
            "A{} -> {}{}: 复制 {} 个单元格样式，跳过 {} 个",
            self.source_row,
            string_from_column_index(&max_column.max(1)),
            self.targets.end(),
            report.copied,
            report.skipped
        );
        report
    }
}

/// 参数形式与脚本用法一致：`apply(sheet, 5, 6, 15)`。
pub fn apply(
    sheet: &mut Worksheet,
    source_row: u32,
    target_row_start: u32,
    target_row_end: u32,
) -> Result<ReplicationReport> {
    let targets = RowSpan::new(target_row_start, target_row_end)?;
    Ok(StyleReplicator::new(source_row, targets).apply(sheet))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use umya_spreadsheet::Style;
    use umya_spreadsheet::structs::PatternValues;

    fn bold_red() -> Style {
        let mut style = Style::default();
        style.get_font_mut().set_bold(true);
        style
            .get_fill_mut()
            .get_pattern_fill_mut()
            .set_pattern_type(PatternValues::Solid);
        style
            .get_fill_mut()
            .get_pattern_fill_mut()
            .get_foreground_color_mut()
            .set_argb("ffff0000");
        style
    }

    fn percent() -> Style {
        let mut style = Style::default();
        style.get_number_format_mut().set_format_code("0.00%");
        style.get_alignment_mut().set_wrap_text(true);
        style
    }

    fn italic() -> Style {
        let mut style = Style::default();
        style.get_font_mut().set_italic(true);
        style
    }

    /// 8 列：A5 粗体红底，C5 百分比格式，H5 只有值没有样式。
    fn template_sheet() -> umya_spreadsheet::Spreadsheet {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_sheet_mut(&0).unwrap();
        for col in 1..=8 {
            sheet
                .get_cell_mut((col, 4))
                .set_value(format!("header{col}"));
        }
        sheet.get_cell_mut((1, 5)).set_value("REQ-004");
        sheet.get_cell_mut((1, 5)).set_style(bold_red());
        sheet.get_cell_mut((3, 5)).set_style(percent());
        sheet.get_cell_mut((8, 5)).set_value("plain");
        book
    }

    #[test]
    fn copies_template_row_to_every_target_row() {
        let mut book = template_sheet();
        let sheet = book.get_sheet_mut(&0).unwrap();
        let report = apply(sheet, 5, 6, 15).unwrap();

        assert_eq!(report.columns, 8);
        assert_eq!(report.rows, 10);
        assert_eq!(report.copied, 20);
        assert_eq!(report.skipped, 60);

        for row in 6..=15 {
            for col in 1..=8 {
                let source = StyleBundle::of_cell(sheet, col, 5);
                if source.has_style() {
                    assert_eq!(StyleBundle::of_cell(sheet, col, row), source);
                }
            }
        }
        let expected_font = StyleBundle::from_style(&bold_red()).font;
        assert_eq!(StyleBundle::of_cell(sheet, 1, 6).font, expected_font);
        assert_eq!(StyleBundle::of_cell(sheet, 1, 15).font, expected_font);
        assert!(!StyleBundle::of_cell(sheet, 8, 6).has_style());
    }

    #[test]
    fn unstyled_template_cell_leaves_target_untouched() {
        let mut book = template_sheet();
        let sheet = book.get_sheet_mut(&0).unwrap();
        sheet.get_cell_mut((8, 9)).set_style(italic());
        let before = StyleBundle::of_cell(sheet, 8, 9);

        apply(sheet, 5, 6, 15).unwrap();

        assert_eq!(StyleBundle::of_cell(sheet, 8, 9), before);
    }

    #[test]
    fn styled_template_cell_replaces_existing_target_style() {
        let mut book = template_sheet();
        let sheet = book.get_sheet_mut(&0).unwrap();
        sheet.get_cell_mut((3, 7)).set_style(italic());

        apply(sheet, 5, 6, 15).unwrap();

        assert_eq!(
            StyleBundle::of_cell(sheet, 3, 7),
            StyleBundle::from_style(&percent())
        );
    }

    #[test]
    fn targets_do_not_follow_later_template_changes() {
        let mut book = template_sheet();
        let sheet = book.get_sheet_mut(&0).unwrap();
        apply(sheet, 5, 6, 15).unwrap();
        let copied = StyleBundle::of_cell(sheet, 1, 6);

        let mut changed = sheet.get_cell((1, 5)).unwrap().get_style().clone();
        changed.get_font_mut().set_italic(true);
        sheet.get_cell_mut((1, 5)).set_style(changed);

        assert_ne!(StyleBundle::of_cell(sheet, 1, 5), copied);
        for row in 6..=15 {
            assert_eq!(StyleBundle::of_cell(sheet, 1, row), copied);
        }
    }

    #[test]
    fn cell_values_are_preserved() {
        let mut book = template_sheet();
        let sheet = book.get_sheet_mut(&0).unwrap();
        sheet.get_cell_mut((1, 6)).set_value("REQ-005");
        sheet.get_cell_mut((3, 12)).set_value_number(0.25);

        apply(sheet, 5, 6, 15).unwrap();

        assert_eq!(sheet.get_cell((1, 5)).unwrap().get_value(), "REQ-004");
        assert_eq!(sheet.get_cell((1, 6)).unwrap().get_value(), "REQ-005");
        assert_eq!(sheet.get_cell((3, 12)).unwrap().get_value(), "0.25");
        assert_eq!(sheet.get_cell((2, 10)).map(|c| c.get_value().to_string()), None);
    }

    #[test]
    fn applying_twice_matches_applying_once() {
        let mut once = template_sheet();
        let mut twice = template_sheet();
        apply(once.get_sheet_mut(&0).unwrap(), 5, 6, 15).unwrap();
        let sheet = twice.get_sheet_mut(&0).unwrap();
        apply(sheet, 5, 6, 15).unwrap();
        apply(sheet, 5, 6, 15).unwrap();

        let once = once.get_sheet(&0).unwrap();
        let twice = twice.get_sheet(&0).unwrap();
        for row in 5..=15 {
            for col in 1..=8 {
                assert_eq!(
                    StyleBundle::of_cell(once, col, row),
                    StyleBundle::of_cell(twice, col, row)
                );
            }
        }
    }

    #[test]
    fn unstyled_template_row_changes_nothing() {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_sheet_mut(&0).unwrap();
        for col in 1..=4 {
            sheet.get_cell_mut((col, 5)).set_value("x");
        }
        sheet.get_cell_mut((2, 6)).set_style(italic());

        let report = apply(sheet, 5, 6, 15).unwrap();

        assert_eq!(report.copied, 0);
        assert_eq!(report.skipped, 40);
        assert_eq!(
            StyleBundle::of_cell(sheet, 2, 6),
            StyleBundle::from_style(&italic())
        );
    }

    #[test]
    fn empty_sheet_does_no_work() {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_sheet_mut(&0).unwrap();
        let report = apply(sheet, 5, 6, 15).unwrap();
        assert_eq!(report.columns, 0);
        assert_eq!(report.copied + report.skipped, 0);
    }

    #[test]
    fn template_row_inside_targets_is_left_as_is() {
        let mut book = template_sheet();
        let sheet = book.get_sheet_mut(&0).unwrap();
        let before = StyleBundle::of_cell(sheet, 1, 5);

        apply(sheet, 5, 5, 6).unwrap();

        assert_eq!(StyleBundle::of_cell(sheet, 1, 5), before);
        assert_eq!(StyleBundle::of_cell(sheet, 1, 6), before);
    }

    #[test]
    fn reversed_range_is_rejected() {
        let mut book = template_sheet();
        let sheet = book.get_sheet_mut(&0).unwrap();
        assert!(matches!(
            apply(sheet, 5, 15, 6),
            Err(Error::InvalidRowSpan(_))
        ));
    }
}
