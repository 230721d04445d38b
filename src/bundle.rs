//! 单元格样式的独立副本。
//!
//! umya 的 `Style` 内部用 `Box` 持有各项属性，这里逐项 `clone`，
//! 得到的副本与来源单元格不共享任何数据。

use umya_spreadsheet::{
    Alignment, Cell, Fill, Font, NumberingFormat, Protection, Style, Worksheet,
};

/// 字体、边框、填充、数字格式、保护、对齐六项样式属性。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleBundle {
    pub font: Option<Font>,
    /// umya 不公开 `Borders` 类型，边框放在一个只设置了边框的 `Style` 里
    pub borders: Option<Style>,
    pub fill: Option<Fill>,
    pub number_format: Option<NumberingFormat>,
    pub protection: Option<Protection>,
    pub alignment: Option<Alignment>,
}

impl StyleBundle {
    pub fn from_style(style: &Style) -> Self {
        Self {
            font: style.get_font().cloned(),
            borders: style.get_borders().map(|borders| {
                let mut holder = Style::default();
                holder.set_borders(borders.clone());
                holder
            }),
            fill: style.get_fill().cloned(),
            number_format: style.get_number_format().cloned(),
            protection: style.get_protection().cloned(),
            alignment: style.get_alignment().cloned(),
        }
    }

    /// 不存在的单元格视为没有显式样式。
    pub fn of_cell(sheet: &Worksheet, col: u32, row: u32) -> Self {
        sheet
            .get_cell((col, row))
            .map(|cell| Self::from_style(cell.get_style()))
            .unwrap_or_default()
    }

    pub fn has_style(&self) -> bool {
        self.font.is_some()
            || self.borders.is_some()
            || self.fill.is_some()
            || self.number_format.is_some()
            || self.protection.is_some()
            || self.alignment.is_some()
    }

    pub fn to_style(&self) -> Style {
        let mut style = Style::default();
        if let Some(font) = &self.font {
            style.set_font(font.clone());
        }
        if let Some(borders) = self.borders.as_ref().and_then(|h| h.get_borders()) {
            style.set_borders(borders.clone());
        }
        if let Some(fill) = &self.fill {
            style.set_fill(fill.clone());
        }
        if let Some(number_format) = &self.number_format {
            style.set_number_format(number_format.clone());
        }
        if let Some(protection) = &self.protection {
            style.set_protection(protection.clone());
        }
        if let Some(alignment) = &self.alignment {
            style.set_alignment(alignment.clone());
        }
        style
    }

    /// 用本副本替换目标单元格的样式；单元格的值保持不变。
    pub fn apply_to(&self, cell: &mut Cell) {
        cell.set_style(self.to_style());
    }
}
