//! Item model
//!
//! An [`ItemTemplate`] describes a kind of item (size, image, optional label
//! and background). An [`Item`] is one placed instance; its pose lives on
//! the scene node that owns it, its styling lives here.
//!
//! # Sub-shapes
//!
//! Background and label are optional. Updates addressed to a missing
//! sub-shape are skipped and reported back, while the other sub-updates in
//! the same call still apply.

use planorama_core::constants::{
    BACKGROUND_CORNER_RADIUS, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_LABEL_ALIGNMENT,
    ITEM_ID_PREFIX,
};
use planorama_core::{
    BackgroundProps, DesignerError, DesignerResult, ItemProps, LabelProps, Point, Scale,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Label configuration declared by a template
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelTemplate {
    /// Text used when no explicit text is given; the item id otherwise
    pub default_text: Option<String>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub fill_color: Option<String>,
    pub vertical_alignment: Option<f64>,
    pub horizontal_alignment: Option<f64>,
}

/// Background configuration declared by a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackgroundTemplate {
    pub background_color: String,
    pub stroke_color: String,
    pub stroke_width: f64,
}

impl Default for BackgroundTemplate {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            stroke_color: "#000000".to_string(),
            stroke_width: 1.0,
        }
    }
}

/// Item template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTemplate {
    /// Template name, stored as the item `type`
    pub name: String,
    pub width: f64,
    pub height: f64,
    /// Image source drawn inside the item
    #[serde(default)]
    pub src: Option<String>,
    /// Scale applied to the image only
    #[serde(default)]
    pub scale: Scale,
    #[serde(default)]
    pub label: Option<LabelTemplate>,
    #[serde(default)]
    pub background: Option<BackgroundTemplate>,
}

impl ItemTemplate {
    /// Create a plain template with no label or background
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        debug_assert!(width.is_finite() && height.is_finite());
        Self {
            name: name.into(),
            width,
            height,
            src: None,
            scale: Scale::default(),
            label: None,
            background: None,
        }
    }

    pub fn with_label(mut self, label: LabelTemplate) -> Self {
        self.label = Some(label);
        self
    }

    pub fn with_background(mut self, background: BackgroundTemplate) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    /// Check that the template can produce a visible item
    pub fn validate(&self) -> DesignerResult<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(DesignerError::InvalidTemplate {
                template: self.name.clone(),
                reason: format!("width must be > 0, got {}", self.width),
            });
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(DesignerError::InvalidTemplate {
                template: self.name.clone(),
                reason: format!("height must be > 0, got {}", self.height),
            });
        }
        Ok(())
    }
}

/// Generate a fresh item id
pub fn new_item_id() -> String {
    format!("{}{}", ITEM_ID_PREFIX, Uuid::new_v4())
}

/// Background rectangle of an item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemBackground {
    pub background_color: String,
    pub stroke_color: String,
    pub stroke_width: f64,
    pub corner_radius: f64,
}

impl ItemBackground {
    fn from_template(template: &BackgroundTemplate) -> Self {
        Self {
            background_color: template.background_color.clone(),
            stroke_color: template.stroke_color.clone(),
            stroke_width: template.stroke_width,
            corner_radius: BACKGROUND_CORNER_RADIUS,
        }
    }

    fn apply(&mut self, props: &BackgroundProps) {
        if let Some(color) = &props.background_color {
            self.background_color = color.clone();
        }
        if let Some(color) = &props.stroke_color {
            self.stroke_color = color.clone();
        }
        if let Some(width) = props.stroke_width {
            self.stroke_width = width;
        }
    }

    fn props(&self) -> BackgroundProps {
        BackgroundProps {
            background_color: Some(self.background_color.clone()),
            stroke_color: Some(self.stroke_color.clone()),
            stroke_width: Some(self.stroke_width),
        }
    }
}

/// Text label of an item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemLabel {
    pub text: String,
    pub font_size: f64,
    pub font_family: String,
    pub fill_color: String,
    /// Percent of item height, from the top
    pub vertical_alignment: f64,
    /// Percent of item width, from the left
    pub horizontal_alignment: f64,
    /// Anchor of the centered text in item-local coordinates
    pub position: Point,
}

impl ItemLabel {
    /// Build the label declared by `template` for the item `item_id`.
    ///
    /// Fails when the template declares no label.
    pub fn from_template(template: &ItemTemplate, item_id: &str) -> DesignerResult<Self> {
        let config = template
            .label
            .as_ref()
            .ok_or_else(|| DesignerError::MissingLabelConfig {
                template: template.name.clone(),
            })?;

        let mut label = Self {
            text: config
                .default_text
                .clone()
                .unwrap_or_else(|| item_id.to_string()),
            font_size: config.font_size.unwrap_or(DEFAULT_FONT_SIZE),
            font_family: config
                .font_family
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
            fill_color: config
                .fill_color
                .clone()
                .unwrap_or_else(|| "#000000".to_string()),
            vertical_alignment: config.vertical_alignment.unwrap_or(DEFAULT_LABEL_ALIGNMENT),
            horizontal_alignment: config
                .horizontal_alignment
                .unwrap_or(DEFAULT_LABEL_ALIGNMENT),
            position: Point::zero(),
        };
        label.reposition(template.width, template.height);
        Ok(label)
    }

    fn reposition(&mut self, width: f64, height: f64) {
        self.position = Point::new(
            width * self.horizontal_alignment / 100.0,
            height * self.vertical_alignment / 100.0,
        );
    }

    fn apply(&mut self, props: &LabelProps, width: f64, height: f64) {
        if let Some(text) = &props.text {
            self.text = text.clone();
        }
        if let Some(size) = props.font_size {
            self.font_size = size;
        }
        if let Some(family) = &props.font_family {
            self.font_family = family.clone();
        }
        if let Some(fill) = &props.fill_color {
            self.fill_color = fill.clone();
        }
        let mut moved = false;
        if let Some(v) = props.vertical_alignment {
            self.vertical_alignment = v;
            moved = true;
        }
        if let Some(h) = props.horizontal_alignment {
            self.horizontal_alignment = h;
            moved = true;
        }
        if moved {
            self.reposition(width, height);
        }
    }

    fn props(&self) -> LabelProps {
        LabelProps {
            text: Some(self.text.clone()),
            font_size: Some(self.font_size),
            font_family: Some(self.font_family.clone()),
            fill_color: Some(self.fill_color.clone()),
            vertical_alignment: Some(self.vertical_alignment),
            horizontal_alignment: Some(self.horizontal_alignment),
        }
    }
}

/// Sub-shape an update could not reach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkippedPart {
    Background,
    Label,
}

impl std::fmt::Display for SkippedPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkippedPart::Background => write!(f, "background"),
            SkippedPart::Label => write!(f, "label"),
        }
    }
}

/// A placed item
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    /// Template name
    pub item_type: String,
    pub width: f64,
    pub height: f64,
    pub src: Option<String>,
    pub image_scale: Scale,
    pub background: Option<ItemBackground>,
    pub label: Option<ItemLabel>,
}

impl Item {
    /// Instantiate `template` under the given id
    pub fn from_template(template: &ItemTemplate, id: impl Into<String>) -> DesignerResult<Self> {
        template.validate()?;
        let id = id.into();
        let label = match template.label {
            Some(_) => Some(ItemLabel::from_template(template, &id)?),
            None => None,
        };

        Ok(Self {
            item_type: template.name.clone(),
            width: template.width,
            height: template.height,
            src: template.src.clone(),
            image_scale: template.scale,
            background: template.background.as_ref().map(ItemBackground::from_template),
            label,
            id,
        })
    }

    /// Apply a partial update, returning the sub-shapes that were missing
    pub fn apply_props(&mut self, props: &ItemProps) -> Vec<SkippedPart> {
        let mut skipped = Vec::new();

        if let Some(background) = &props.background {
            match self.background.as_mut() {
                Some(bg) => bg.apply(background),
                None => skipped.push(SkippedPart::Background),
            }
        }

        if let Some(label_props) = &props.label {
            let (width, height) = (self.width, self.height);
            match self.label.as_mut() {
                Some(label) => label.apply(label_props, width, height),
                None => skipped.push(SkippedPart::Label),
            }
        }

        skipped
    }

    /// Full property snapshot
    pub fn props(&self) -> ItemProps {
        ItemProps {
            background: self.background.as_ref().map(ItemBackground::props),
            label: self.label.as_ref().map(ItemLabel::props),
        }
    }

    /// Copy with a different id; a label showing the old id follows the new one
    pub fn clone_with_id(&self, id: impl Into<String>) -> Self {
        let id = id.into();
        let mut copy = self.clone();
        if let Some(label) = copy.label.as_mut() {
            if label.text == self.id {
                label.text = id.clone();
            }
        }
        copy.id = id;
        copy
    }
}

/// Registered templates plus the one the placement tool uses
#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    templates: HashMap<String, ItemTemplate>,
    active: Option<String>,
}

impl TemplateLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a template
    pub fn register(&mut self, template: ItemTemplate) -> DesignerResult<()> {
        template.validate()?;
        self.templates.insert(template.name.clone(), template);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ItemTemplate> {
        self.templates.get(name)
    }

    /// Make `name` the active template; `None` clears it.
    ///
    /// Returns false for an unregistered name, leaving the active one as is.
    pub fn set_active(&mut self, name: Option<&str>) -> bool {
        match name {
            None => {
                self.active = None;
                true
            }
            Some(name) if self.templates.contains_key(name) => {
                self.active = Some(name.to_string());
                true
            }
            Some(_) => false,
        }
    }

    pub fn active(&self) -> Option<&ItemTemplate> {
        self.active.as_deref().and_then(|name| self.templates.get(name))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
