use serde::{Deserialize, Serialize};

/// Presentation attributes for one style key. All optional.
///
/// Lengths are in logical pixels; colours are CSS colour strings. Unknown
/// attribute names are ignored when deserialising.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_left_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<String>,
}

impl StyleAttrs {
    pub fn is_empty(&self) -> bool {
        *self == StyleAttrs::default()
    }

    /// Returns `self` with every attribute set in `top` replaced.
    pub fn overlay(mut self, top: &StyleAttrs) -> StyleAttrs {
        fn take<T: Clone>(slot: &mut Option<T>, top: &Option<T>) {
            if top.is_some() {
                slot.clone_from(top);
            }
        }
        take(&mut self.color, &top.color);
        take(&mut self.background, &top.background);
        take(&mut self.border_color, &top.border_color);
        take(&mut self.border_bottom_width, &top.border_bottom_width);
        take(&mut self.border_left_width, &top.border_left_width);
        take(&mut self.border_radius, &top.border_radius);
        take(&mut self.padding, &top.padding);
        take(&mut self.padding_bottom, &top.padding_bottom);
        take(&mut self.margin_top, &top.margin_top);
        take(&mut self.margin_bottom, &top.margin_bottom);
        take(&mut self.font_family, &top.font_family);
        take(&mut self.font_size, &top.font_size);
        take(&mut self.font_weight, &top.font_weight);
        take(&mut self.font_style, &top.font_style);
        take(&mut self.text_decoration, &top.text_decoration);
        self
    }
}
